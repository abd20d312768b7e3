//! Quota snapshot.

use serde::Serialize;

/// Point-in-time view of both quota windows.
///
/// Derived from the governor's windows on request; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaSnapshot {
    /// Permits granted within the trailing minute.
    pub minute_used: u32,

    /// Permits still available within the trailing minute.
    pub minute_remaining: u32,

    /// Permits granted within the trailing day.
    pub daily_used: u32,

    /// Permits still available within the trailing day.
    pub daily_remaining: u32,
}

impl QuotaSnapshot {
    pub(crate) fn new(minute_used: u32, minute_limit: u32, daily_used: u32, daily_limit: u32) -> Self {
        Self {
            minute_used,
            minute_remaining: minute_limit.saturating_sub(minute_used),
            daily_used,
            daily_remaining: daily_limit.saturating_sub(daily_used),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_is_derived_from_limits() {
        let snapshot = QuotaSnapshot::new(3, 30, 12, 1000);

        assert_eq!(snapshot.minute_remaining, 27);
        assert_eq!(snapshot.daily_remaining, 988);
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let snapshot = QuotaSnapshot::new(5, 2, 0, 10);
        assert_eq!(snapshot.minute_remaining, 0);
    }
}
