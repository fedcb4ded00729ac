use crate::{ANALYSIS_INTERVAL_MS, Clock, FrameAnalyzer, Throttled};
use finder_camera::{Frame, FrameSubscriber};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Fans every frame out to the registered analyzers, in registration order.
pub struct Dispatcher {
    analyzers: Vec<Throttled<Box<dyn FrameAnalyzer>>>,
    clock: Arc<dyn Clock>,
    interval_ms: u64,
}

impl Dispatcher {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            analyzers: Vec::new(),
            clock,
            interval_ms: ANALYSIS_INTERVAL_MS,
        }
    }

    /// Interval for analyzers registered after this call.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Add an analyzer with its own fresh rate limiter.
    pub fn register<A: FrameAnalyzer + 'static>(&mut self, analyzer: A) -> &mut Self {
        log::info!("dispatcher: registered {} analyzer", analyzer.name());
        let analyzer: Box<dyn FrameAnalyzer> = Box::new(analyzer);
        self.analyzers.push(Throttled::with_interval_ms(
            analyzer,
            Arc::clone(&self.clock),
            self.interval_ms,
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Offer `frame` to every analyzer. Returns how many did work.
    pub fn dispatch(&mut self, frame: &Frame, rotation_degrees: i32) -> usize {
        self.analyzers
            .iter_mut()
            .map(|analyzer| analyzer.analyze(frame, rotation_degrees))
            .filter(|&worked| worked)
            .count()
    }

    /// Run the dispatcher on its own task, fed by `frames` until the source
    /// closes.
    pub fn spawn(mut self, mut frames: FrameSubscriber) -> JoinHandle<()> {
        tokio::spawn(async move {
            log::info!("dispatcher: started with {:?}", self.names());
            while let Some(frame) = frames.next().await {
                let worked = self.dispatch(&frame, frame.rotation_degrees());
                if worked > 0 {
                    log::trace!("dispatcher: {worked} analyzer(s) ran on frame {}", frame.timestamp_ms());
                }
            }
            log::info!("dispatcher: frame source closed");
        })
    }
}
