use crate::{ANALYSIS_INTERVAL_MS, Clock, RateLimiter};
use finder_camera::{Frame, Rotation};
use std::sync::Arc;

/// Per-frame processing step.
///
/// `process` runs on the dispatcher's worker task and must not block; slow
/// work is spawned.
pub trait FrameAnalyzer: Send {
    fn name(&self) -> &str;

    fn process(&mut self, frame: &Frame, rotation: Rotation);
}

impl<A: FrameAnalyzer + ?Sized> FrameAnalyzer for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn process(&mut self, frame: &Frame, rotation: Rotation) {
        (**self).process(frame, rotation)
    }
}

/// An analyzer behind its own rate limiter.
pub struct Throttled<A> {
    analyzer: A,
    limiter: RateLimiter,
    clock: Arc<dyn Clock>,
}

impl<A: FrameAnalyzer> Throttled<A> {
    pub fn new(analyzer: A, clock: Arc<dyn Clock>) -> Self {
        Self::with_interval_ms(analyzer, clock, ANALYSIS_INTERVAL_MS)
    }

    pub fn with_interval_ms(analyzer: A, clock: Arc<dyn Clock>, interval_ms: u64) -> Self {
        Self {
            analyzer,
            limiter: RateLimiter::new(interval_ms),
            clock,
        }
    }

    /// Run the analyzer on `frame` if its interval has elapsed.
    ///
    /// The limiter is updated before the analyzer runs. Returns whether work
    /// was done.
    pub fn analyze(&mut self, frame: &Frame, rotation_degrees: i32) -> bool {
        if !self.limiter.try_acquire(self.clock.now_ms()) {
            return false;
        }
        self.analyzer
            .process(frame, Rotation::from_degrees(rotation_degrees));
        true
    }

    pub fn name(&self) -> &str {
        self.analyzer.name()
    }

    pub fn inner(&self) -> &A {
        &self.analyzer
    }

    /// Time of the last processed frame.
    pub fn last_work_ms(&self) -> Option<u64> {
        self.limiter.last_ms()
    }
}

impl<A: FrameAnalyzer> std::fmt::Debug for Throttled<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttled")
            .field("analyzer", &self.analyzer.name())
            .field("limiter", &self.limiter)
            .finish()
    }
}
