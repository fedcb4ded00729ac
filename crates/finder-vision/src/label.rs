use crate::{
    FrameAnalyzer, ImageLabeler, Label, PackedFrame, UiEvent, UiSender,
    service::{ResponseOrder, spawn_request},
};
use finder_camera::{Frame, Rotation};
use std::sync::Arc;

/// Sends frames to an image labeler and shows the best label.
///
/// Requests run concurrently; a response that arrives after the response to
/// a later frame is dropped.
pub struct LabelForwarder<L> {
    labeler: Arc<L>,
    ui: UiSender,
    order: Arc<ResponseOrder>,
}

impl<L: ImageLabeler> LabelForwarder<L> {
    pub fn new(labeler: Arc<L>, ui: UiSender) -> Self {
        Self {
            labeler,
            ui,
            order: Arc::default(),
        }
    }
}

/// Text shown for a ranked label list: the top label and its confidence.
pub fn label_text(labels: &[Label]) -> Option<String> {
    labels
        .first()
        .map(|label| format!("{} {}", label.text, label.confidence))
}

impl<L: ImageLabeler> FrameAnalyzer for LabelForwarder<L> {
    fn name(&self) -> &str {
        "label"
    }

    fn process(&mut self, frame: &Frame, rotation: Rotation) {
        let packed = PackedFrame::pack(frame, rotation);
        let labeler = Arc::clone(&self.labeler);
        let ui = self.ui.clone();
        let order = Arc::clone(&self.order);
        let ticket = order.ticket();

        spawn_request(self.name(), async move {
            match labeler.label(packed).await {
                Ok(labels) => {
                    let Some(text) = label_text(&labels) else {
                        return;
                    };
                    if !order.show_if_latest(ticket, || {
                        ui.post(UiEvent::LabelText(text));
                    }) {
                        log::debug!("label: dropped stale response {ticket}");
                    }
                }
                Err(e) => log::warn!("label: labeling failed: {e}"),
            }
        });
    }
}
