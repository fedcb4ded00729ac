//! Frame analysis for finder.
//!
//! A `Dispatcher` hands every camera frame to a list of analyzers, each
//! throttled to at most one processed frame per `ANALYSIS_INTERVAL_MS`. The
//! analyzers sample luminance or forward packed frames to the ML services
//! and report back to the UI over a channel.

pub mod analyzer;
pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod label;
pub mod luminance;
pub mod object;
pub mod packing;
pub mod replay;
pub mod service;
pub mod throttle;
pub mod viewfinder;

pub use analyzer::{FrameAnalyzer, Throttled};
pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatcher::Dispatcher;
pub use error::{ReplayError, ServiceError};
pub use event::{UiEvent, UiSender, ui_channel};
pub use label::LabelForwarder;
pub use luminance::{LuminanceSampler, average_luminance};
pub use object::ObjectForwarder;
pub use packing::{ImageFormat, ImageMetadata, PackedFrame};
pub use replay::{ReplayDetector, ReplayLabeler};
pub use service::{
    Category, DetectedObject, DetectorMode, DetectorOptions, ImageLabeler, Label, ObjectDetector,
};
pub use throttle::{ANALYSIS_INTERVAL_MS, RateLimiter};
pub use viewfinder::viewfinder_transform;
