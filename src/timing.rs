//! Host-driven periodic ticking.
//!
//! The engine runs on one thread inside the host's event loop, so it never
//! owns a timer; the host polls a [`Ticker`] with its own clock and acts on
//! the ticks that came due. Dropping the ticker is the teardown: nothing
//! else holds timing state, so no tick can fire after the owning view is
//! gone.

/// Number of missed periods a single poll will report at most. A host
/// suspended longer than that resumes with a bounded burst, matching how
/// browsers coalesce interval timers in background tabs.
const MAX_CATCHUP: u32 = 8;

/// A fixed-period tick source driven by the host's clock.
///
/// # Example
///
/// ```
/// use luminx_customizer::Ticker;
///
/// let mut ticker = Ticker::new(1_000);
/// assert_eq!(ticker.poll(0), 0); // first poll arms the ticker
/// assert_eq!(ticker.poll(999), 0);
/// assert_eq!(ticker.poll(1_000), 1);
/// assert_eq!(ticker.poll(3_500), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u64,
    armed_at: Option<u64>,
    fired: u64,
}

impl Ticker {
    /// Creates a ticker with the given period. Zero periods are treated
    /// as one millisecond.
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            armed_at: None,
            fired: 0,
        }
    }

    /// The configured period in milliseconds.
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Reports how many ticks came due at `now_ms`, capped at a small
    /// catch-up burst.
    ///
    /// The first poll arms the ticker and reports zero. A clock that moves
    /// backwards reports zero rather than panicking.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let Some(armed_at) = self.armed_at else {
            self.armed_at = Some(now_ms);
            return 0;
        };

        let elapsed = now_ms.saturating_sub(armed_at);
        let total_due = elapsed / self.period_ms;
        let pending = total_due.saturating_sub(self.fired);
        let reported = pending.min(MAX_CATCHUP as u64) as u32;
        // Skipped ticks beyond the burst are forfeited, not queued.
        self.fired = total_due;
        reported
    }

    /// Restarts the period from the next poll.
    pub fn reset(&mut self) {
        self.armed_at = None;
        self.fired = 0;
    }
}

// ============================================================================
// Tests
// ============================================================================
