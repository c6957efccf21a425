//! Launch countdown readout.
//!
//! Computes the `{days, hours, minutes, seconds}` remaining until the
//! launch instant. The breakdown floors toward zero and clamps at zero, so
//! the readout never shows a negative unit; the host refreshes it from a
//! one-second [`Ticker`](crate::Ticker).

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Refresh period of the countdown readout.
pub const TICK_MS: u64 = 1_000;

/// Days until launch for a newly created countdown.
const DEFAULT_LAUNCH_DAYS: i64 = 30;

// ============================================================================
// TimeRemaining
// ============================================================================

/// A zero-clamped countdown breakdown.
///
/// Field order matches display order, and the derived ordering is
/// lexicographic over `(days, hours, minutes, seconds)`, so later readouts
/// compare strictly less than earlier ones until launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// True once every field has reached zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Two-digit zero-padded rendering used by each unit of the readout.
pub fn two_digits(value: u64) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

// ============================================================================
// Countdown
// ============================================================================

/// Countdown toward a fixed launch instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use luminx_customizer::Countdown;
///
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
/// let countdown = Countdown::days_from(now, 30);
///
/// let left = countdown.remaining(now);
/// assert_eq!(left.days, 30);
/// assert_eq!(left.seconds, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    /// Counts down to the given instant.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Counts down to `days` whole days after `now` — the launch window the
    /// site advertises.
    pub fn days_from(now: DateTime<Utc>, days: i64) -> Self {
        Self::new(now + Duration::days(days))
    }

    /// The default launch countdown, 30 days out.
    pub fn launch(now: DateTime<Utc>) -> Self {
        Self::days_from(now, DEFAULT_LAUNCH_DAYS)
    }

    /// The launch instant.
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// True at and after the launch instant.
    pub fn is_complete(&self, now: DateTime<Utc>) -> bool {
        now >= self.target
    }

    /// The time left at `now`, floored to whole seconds and clamped at
    /// zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeRemaining {
        let seconds = (self.target - now).num_seconds();
        if seconds <= 0 {
            return TimeRemaining::ZERO;
        }

        let seconds = seconds as u64;
        TimeRemaining {
            days: seconds / 86_400,
            hours: (seconds / 3_600) % 24,
            minutes: (seconds / 60) % 60,
            seconds: seconds % 60,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
