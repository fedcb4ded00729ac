use crate::{FrameAnalyzer, UiEvent, UiSender};
use finder_camera::{Frame, Rotation};

/// Mean of `plane` with every byte read as 0..=255. `None` for an empty plane.
pub fn average_luminance(plane: &[u8]) -> Option<f64> {
    if plane.is_empty() {
        return None;
    }
    let sum: u64 = plane.iter().map(|&b| u64::from(b)).sum();
    Some(sum as f64 / plane.len() as f64)
}

/// Logs and reports the average brightness of the luminance plane.
#[derive(Debug, Clone)]
pub struct LuminanceSampler {
    ui: UiSender,
    last: Option<f64>,
}

impl LuminanceSampler {
    pub fn new(ui: UiSender) -> Self {
        Self { ui, last: None }
    }

    /// The most recent sample.
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

impl FrameAnalyzer for LuminanceSampler {
    fn name(&self) -> &str {
        "luminance"
    }

    fn process(&mut self, frame: &Frame, _rotation: Rotation) {
        let Some(luma) = average_luminance(frame.luma_plane()) else {
            return;
        };
        log::debug!("Average luminosity: {luma}");
        self.last = Some(luma);
        self.ui.post(UiEvent::Luminance(luma));
    }
}
