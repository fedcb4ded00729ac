use finder_base::log;
use finder_vision::{DetectedObject, UiEvent};
use std::time::{Duration, Instant};

/// How long a toast stays in the title.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

const APP_NAME: &str = "Finder";

/// What the preview window shows, built from `UiEvent`s.
#[derive(Debug, Default)]
pub struct UiState {
    label: String,
    objects: Vec<DetectedObject>,
    luminance: Option<f64>,
    toast: Option<(String, Instant)>,
    closed: bool,
}

impl UiState {
    pub fn apply(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::LabelText(text) => self.label = text,
            UiEvent::Objects(objects) => self.objects = objects,
            UiEvent::Luminance(luma) => self.luminance = Some(luma),
            UiEvent::Toast(text) => {
                log::info!("toast: {text}");
                self.toast = Some((text, now + TOAST_DURATION));
            }
            UiEvent::Close => self.closed = true,
        }
    }

    /// Window title: app name, label text and the active toast, if any.
    pub fn title(&self, now: Instant) -> String {
        let mut title = APP_NAME.to_string();
        if !self.label.is_empty() {
            title.push_str(" - ");
            title.push_str(&self.label);
        }
        if let Some(toast) = self.toast(now) {
            title.push_str(" | ");
            title.push_str(toast);
        }
        title
    }

    pub fn toast(&self, now: Instant) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|(_, until)| now < *until)
            .map(|(text, _)| text.as_str())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn objects(&self) -> &[DetectedObject] {
        &self.objects
    }

    pub fn luminance(&self) -> Option<f64> {
        self.luminance
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Closed, and the last toast has had its time on screen.
    pub fn should_exit(&self, now: Instant) -> bool {
        self.closed && self.toast(now).is_none()
    }
}
