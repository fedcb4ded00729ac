use crate::{
    DetectorOptions, FrameAnalyzer, ObjectDetector, PackedFrame, UiEvent, UiSender,
    service::{ResponseOrder, spawn_request},
};
use finder_camera::{Frame, Rotation};
use std::sync::Arc;

/// Sends frames to an object detector, logs what it finds and hands the
/// boxes to the UI.
pub struct ObjectForwarder<D> {
    detector: Arc<D>,
    options: DetectorOptions,
    ui: UiSender,
    order: Arc<ResponseOrder>,
}

impl<D: ObjectDetector> ObjectForwarder<D> {
    /// Stream mode, classification on, single object.
    pub fn new(detector: Arc<D>, ui: UiSender) -> Self {
        Self {
            detector,
            options: DetectorOptions::default(),
            ui,
            order: Arc::default(),
        }
    }

    pub fn options(&self) -> DetectorOptions {
        self.options
    }
}

impl<D: ObjectDetector> FrameAnalyzer for ObjectForwarder<D> {
    fn name(&self) -> &str {
        "object"
    }

    fn process(&mut self, frame: &Frame, rotation: Rotation) {
        let packed = PackedFrame::pack(frame, rotation);
        let detector = Arc::clone(&self.detector);
        let options = self.options;
        let ui = self.ui.clone();
        let order = Arc::clone(&self.order);
        let ticket = order.ticket();

        spawn_request(self.name(), async move {
            match detector.detect(packed, options).await {
                Ok(objects) => {
                    for object in &objects {
                        log::debug!(
                            "objects: id={:?} bounds={:?} category={:?} confidence={:?}",
                            object.tracking_id,
                            object.bounds,
                            object.category,
                            object.confidence
                        );
                    }
                    // boxes from an older frame would jump backwards
                    if !order.show_if_latest(ticket, || {
                        ui.post(UiEvent::Objects(objects));
                    }) {
                        log::debug!("object: dropped stale response {ticket}");
                    }
                }
                // no retry, the next frame is another attempt
                Err(e) => log::warn!("object: detection failed: {e}"),
            }
        });
    }
}
