//! Request-rate governor for quota-constrained APIs.
//!
//! Tracks granted permits in two sliding windows (one minute, one day).
//! The per-minute cap is enforced by waiting for the window to slide; the
//! per-day cap is enforced by failing immediately with
//! [`GovernorError::QuotaExhausted`].
//!
//! Acquirers are serialised by an async admission gate held for the whole
//! prune-check-wait-record sequence. The windows sit behind a separate lock
//! that is never held across an `.await`, so [`RateGovernor::quota_snapshot`]
//! stays available while an acquirer is waiting.

mod error;
mod snapshot;
mod window;

pub use error::GovernorError;
pub use snapshot::QuotaSnapshot;

use std::num::NonZeroU32;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use window::SlidingWindow;

/// Length of the per-minute window.
pub const MINUTE: Duration = Duration::from_secs(60);

/// Length of the per-day window.
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Added to minute waits so the oldest entry has expired on wake-up.
const WAIT_BUFFER: Duration = Duration::from_secs(1);

#[derive(Debug)]
struct Windows {
    minute: SlidingWindow,
    day: SlidingWindow,
}

impl Windows {
    fn prune(&mut self, now: Instant) {
        self.minute.prune(now);
        self.day.prune(now);
    }
}

/// Outcome of a single admission attempt.
enum Admission {
    Granted,
    Wait(Duration),
}

/// Admission control for outbound calls against per-minute and per-day caps.
#[derive(Debug)]
pub struct RateGovernor {
    requests_per_minute: NonZeroU32,
    requests_per_day: NonZeroU32,
    admission: tokio::sync::Mutex<()>,
    windows: Mutex<Windows>,
}

impl RateGovernor {
    /// Creates a governor with empty windows.
    #[must_use]
    pub fn new(requests_per_minute: NonZeroU32, requests_per_day: NonZeroU32) -> Self {
        Self {
            requests_per_minute,
            requests_per_day,
            admission: tokio::sync::Mutex::new(()),
            windows: Mutex::new(Windows {
                minute: SlidingWindow::new(MINUTE),
                day: SlidingWindow::new(DAY),
            }),
        }
    }

    /// Returns the per-minute cap.
    pub fn requests_per_minute(&self) -> u32 {
        self.requests_per_minute.get()
    }

    /// Returns the per-day cap.
    pub fn requests_per_day(&self) -> u32 {
        self.requests_per_day.get()
    }

    /// Waits until a call may be issued and records it.
    ///
    /// Blocks while the trailing minute is full. Never blocks on the daily
    /// cap: once it is reached every call fails until old entries age out.
    ///
    /// # Errors
    ///
    /// Returns [`GovernorError::QuotaExhausted`] when the daily cap is reached.
    pub async fn acquire_permit(&self) -> Result<(), GovernorError> {
        let _gate = self.admission.lock().await;

        loop {
            match self.try_admit(Instant::now())? {
                Admission::Granted => return Ok(()),
                Admission::Wait(wait) => {
                    info!(
                        wait_ms = wait.as_millis() as u64,
                        limit = self.requests_per_minute.get(),
                        "Per-minute quota reached, waiting for window to slide"
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }

    /// Returns current usage of both windows after pruning expired entries.
    pub fn quota_snapshot(&self) -> QuotaSnapshot {
        let mut windows = self.lock_windows();
        windows.prune(Instant::now());
        QuotaSnapshot::new(
            windows.minute.len() as u32,
            self.requests_per_minute.get(),
            windows.day.len() as u32,
            self.requests_per_day.get(),
        )
    }

    fn try_admit(&self, now: Instant) -> Result<Admission, GovernorError> {
        let mut windows = self.lock_windows();
        windows.prune(now);

        let daily_limit = self.requests_per_day.get();
        if windows.day.len() >= daily_limit as usize {
            warn!(limit = daily_limit, "Daily request quota exhausted");
            return Err(GovernorError::QuotaExhausted { limit: daily_limit });
        }

        if windows.minute.len() >= self.requests_per_minute.get() as usize {
            if let Some(oldest) = windows.minute.oldest() {
                let ready_at = oldest + windows.minute.length() + WAIT_BUFFER;
                if ready_at > now {
                    return Ok(Admission::Wait(ready_at - now));
                }
            }
        }

        windows.minute.record(now);
        windows.day.record(now);
        debug!(
            minute_used = windows.minute.len(),
            daily_used = windows.day.len(),
            "Permit granted"
        );
        Ok(Admission::Granted)
    }

    fn lock_windows(&self) -> MutexGuard<'_, Windows> {
        self.windows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
