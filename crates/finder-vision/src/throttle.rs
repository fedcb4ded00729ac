/// Minimum time between two processed frames of one analyzer.
pub const ANALYSIS_INTERVAL_MS: u64 = 1000;

/// Admits at most one unit of work per interval.
///
/// The first request is always admitted. A request whose time lies before the
/// last admitted one is refused and leaves the state alone, so the recorded
/// time never decreases.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(ANALYSIS_INTERVAL_MS)
    }
}

impl RateLimiter {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Decide whether work may happen at `now_ms`, and record it if so.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        let admitted = match self.last_ms {
            None => true,
            Some(last) => now_ms
                .checked_sub(last)
                .is_some_and(|elapsed| elapsed >= self.interval_ms),
        };
        if admitted {
            self.last_ms = Some(now_ms);
        }
        admitted
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Time of the last admitted request.
    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }
}
