//! Sliding timestamp window.

use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Grant timestamps that fall within a trailing duration, oldest first.
#[derive(Debug)]
pub(crate) struct SlidingWindow {
    length: Duration,
    entries: VecDeque<Instant>,
}

impl SlidingWindow {
    pub(crate) fn new(length: Duration) -> Self {
        Self {
            length,
            entries: VecDeque::new(),
        }
    }

    /// Drops every entry older than the window length, measured from `now`.
    pub(crate) fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.entries.front() {
            if now.saturating_duration_since(oldest) > self.length {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }

    pub(crate) fn record(&mut self, at: Instant) {
        self.entries.push_back(at);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn oldest(&self) -> Option<Instant> {
        self.entries.front().copied()
    }

    pub(crate) fn length(&self) -> Duration {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_keeps_entries_at_exact_window_edge() {
        let start = Instant::now();
        let mut window = SlidingWindow::new(Duration::from_secs(60));
        window.record(start);

        window.prune(start + Duration::from_secs(60));
        assert_eq!(window.len(), 1);

        window.prune(start + Duration::from_secs(61));
        assert_eq!(window.len(), 0);
    }

    #[test]
    fn prune_stops_at_first_live_entry() {
        let start = Instant::now();
        let mut window = SlidingWindow::new(Duration::from_secs(10));
        window.record(start);
        window.record(start + Duration::from_secs(5));
        window.record(start + Duration::from_secs(9));

        window.prune(start + Duration::from_secs(16));

        assert_eq!(window.len(), 1);
        assert_eq!(window.oldest(), Some(start + Duration::from_secs(9)));
    }
}
