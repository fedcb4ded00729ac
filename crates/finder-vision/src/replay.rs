//! Recorded ML service responses.
//!
//! A replay file is a JSON array of responses, served in order and then
//! from the start again:
//!
//! ```json
//! [
//!   {"labels": [{"text": "Cup", "confidence": 0.92}]},
//!   {"error": "model not ready"}
//! ]
//! ```
//!
//! Detector files use `{"objects": [...]}` entries, where each object is
//! `{"tracking_id": 3, "bounds": [x, y, width, height], "category": "food",
//! "confidence": 0.7}` and every field but `bounds` may be left out. A box
//! with a negative size or a far corner past `i32::MAX` fails the load.

use crate::{
    Category, DetectedObject, DetectorOptions, ImageLabeler, Label, ObjectDetector, PackedFrame,
    ReplayError, ServiceError,
};
use finder_base::{Rect, Vec2};
use serde::Deserialize;
use std::{
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LabelEntry {
    Labels { labels: Vec<Label> },
    Error { error: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ObjectEntry {
    Objects { objects: Vec<ReplayObject> },
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct ReplayObject {
    #[serde(default)]
    tracking_id: Option<u32>,
    bounds: [i32; 4],
    #[serde(default)]
    category: Category,
    #[serde(default)]
    confidence: Option<f32>,
}

impl TryFrom<ReplayObject> for DetectedObject {
    type Error = ReplayError;

    fn try_from(object: ReplayObject) -> Result<Self, ReplayError> {
        let [x, y, width, height] = object.bounds;
        // the far corner has to be representable
        if width < 0
            || height < 0
            || x.checked_add(width).is_none()
            || y.checked_add(height).is_none()
        {
            return Err(ReplayError::InvalidBox(object.bounds));
        }
        Ok(DetectedObject {
            tracking_id: object.tracking_id,
            bounds: Rect::new(Vec2::new(x, y), Vec2::new(width, height)),
            category: object.category,
            confidence: object.confidence,
        })
    }
}

/// Cycles through a fixed list of responses.
#[derive(Debug)]
struct Script<T> {
    responses: Vec<Result<T, String>>,
    cursor: AtomicUsize,
}

impl<T: Clone> Script<T> {
    fn new(responses: Vec<Result<T, String>>) -> Result<Self, ReplayError> {
        if responses.is_empty() {
            return Err(ReplayError::Empty);
        }
        Ok(Self {
            responses,
            cursor: AtomicUsize::new(0),
        })
    }

    fn next(&self) -> Result<T, ServiceError> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.responses.len();
        self.responses[index].clone().map_err(ServiceError::Failed)
    }

    fn len(&self) -> usize {
        self.responses.len()
    }
}

/// Image labeler answering from a replay file.
#[derive(Debug)]
pub struct ReplayLabeler {
    script: Script<Vec<Label>>,
}

impl ReplayLabeler {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let entries: Vec<LabelEntry> = serde_json::from_str(json)?;
        let responses = entries
            .into_iter()
            .map(|entry| match entry {
                LabelEntry::Labels { labels } => Ok(labels),
                LabelEntry::Error { error } => Err(error),
            })
            .collect();
        Ok(Self {
            script: Script::new(responses)?,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Number of recorded responses in one cycle.
    pub fn response_count(&self) -> usize {
        self.script.len()
    }
}

impl ImageLabeler for ReplayLabeler {
    async fn label(&self, _frame: PackedFrame) -> Result<Vec<Label>, ServiceError> {
        self.script.next()
    }
}

/// Object detector answering from a replay file.
#[derive(Debug)]
pub struct ReplayDetector {
    script: Script<Vec<DetectedObject>>,
}

impl ReplayDetector {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let entries: Vec<ObjectEntry> = serde_json::from_str(json)?;
        let mut responses = Vec::with_capacity(entries.len());
        for entry in entries {
            responses.push(match entry {
                ObjectEntry::Objects { objects } => Ok(objects
                    .into_iter()
                    .map(DetectedObject::try_from)
                    .collect::<Result<Vec<_>, _>>()?),
                ObjectEntry::Error { error } => Err(error),
            });
        }
        Ok(Self {
            script: Script::new(responses)?,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Number of recorded responses in one cycle.
    pub fn response_count(&self) -> usize {
        self.script.len()
    }
}

impl ObjectDetector for ReplayDetector {
    async fn detect(
        &self,
        _frame: PackedFrame,
        _options: DetectorOptions,
    ) -> Result<Vec<DetectedObject>, ServiceError> {
        self.script.next()
    }
}
