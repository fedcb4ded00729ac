use crate::{PackedFrame, ServiceError};
use finder_base::Rect;
use serde::Deserialize;
use std::{
    future::Future,
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

/// A classification result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Label {
    pub text: String,
    pub confidence: f32,
}

/// Coarse object classes reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Unknown,
    HomeGood,
    FashionGood,
    Food,
    Place,
    Plant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObject {
    /// Stable across frames in stream mode, when the detector tracks.
    pub tracking_id: Option<u32>,
    /// In image coordinates.
    pub bounds: Rect<i32>,
    pub category: Category,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorMode {
    /// Low latency, tracks objects across consecutive frames.
    Stream,
    /// Single images, higher accuracy.
    SingleImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorOptions {
    pub mode: DetectorMode,
    pub classification: bool,
    pub multiple_objects: bool,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            mode: DetectorMode::Stream,
            classification: true,
            multiple_objects: false,
        }
    }
}

/// Image labeling service.
///
/// Labels come back ranked, best first.
pub trait ImageLabeler: Send + Sync + 'static {
    fn label(
        &self,
        frame: PackedFrame,
    ) -> impl Future<Output = Result<Vec<Label>, ServiceError>> + Send;
}

/// Object detection service.
pub trait ObjectDetector: Send + Sync + 'static {
    fn detect(
        &self,
        frame: PackedFrame,
        options: DetectorOptions,
    ) -> impl Future<Output = Result<Vec<DetectedObject>, ServiceError>> + Send;
}

/// Run a service request in the background on the current tokio runtime.
///
/// Without a runtime the request is logged and dropped.
pub(crate) fn spawn_request<F>(analyzer: &str, request: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(request);
        }
        Err(e) => log::warn!("{analyzer}: no runtime for service request, dropped: {e}"),
    }
}

/// Keeps responses of concurrent requests from going back in time.
///
/// Each request takes a ticket when it is sent. A response is shown only if
/// no later ticket has been shown already.
#[derive(Debug, Default)]
pub(crate) struct ResponseOrder {
    issued: AtomicU64,
    shown: Mutex<u64>,
}

impl ResponseOrder {
    pub(crate) fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Run `show` unless a newer response got there first. Returns whether
    /// it ran.
    pub(crate) fn show_if_latest(&self, ticket: u64, show: impl FnOnce()) -> bool {
        let mut shown = self.shown.lock().unwrap_or_else(|e| e.into_inner());
        if ticket < *shown {
            return false;
        }
        *shown = ticket;
        show();
        true
    }
}
