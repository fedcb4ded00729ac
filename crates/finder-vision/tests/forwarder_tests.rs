use finder_base::{Rect, Vec2};
use finder_camera::{Frame, Rotation};
use finder_vision::{
    Category, DetectedObject, DetectorMode, DetectorOptions, FrameAnalyzer, ImageLabeler, Label,
    LabelForwarder, ManualClock, ObjectDetector, ObjectForwarder, PackedFrame, ServiceError,
    Throttled, UiEvent, label::label_text, ui_channel,
};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use tokio::sync::{mpsc, oneshot};

fn frame() -> Frame {
    Frame::nv21(Vec2::new(4, 2), vec![50; 8], vec![128; 4]).unwrap()
}

struct FixedLabeler {
    result: Result<Vec<Label>, ServiceError>,
    seen: Mutex<Vec<PackedFrame>>,
}

impl ImageLabeler for FixedLabeler {
    async fn label(&self, frame: PackedFrame) -> Result<Vec<Label>, ServiceError> {
        self.seen.lock().unwrap().push(frame);
        self.result.clone()
    }
}

// Fails every other call, starting with the first.
struct FlakyDetector {
    calls: AtomicUsize,
    options: Mutex<Option<DetectorOptions>>,
}

impl ObjectDetector for FlakyDetector {
    async fn detect(
        &self,
        _frame: PackedFrame,
        options: DetectorOptions,
    ) -> Result<Vec<DetectedObject>, ServiceError> {
        *self.options.lock().unwrap() = Some(options);
        if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
            return Err(ServiceError::Failed("simulated".to_string()));
        }
        Ok(vec![DetectedObject {
            tracking_id: Some(7),
            bounds: Rect::new(Vec2::new(1, 2), Vec2::new(30, 40)),
            category: Category::Food,
            confidence: Some(0.5),
        }])
    }
}

// Answers each frame, keyed by its first luma byte, when the test says so.
struct GatedLabeler {
    answers: Mutex<HashMap<u8, oneshot::Receiver<Vec<Label>>>>,
}

impl ImageLabeler for GatedLabeler {
    async fn label(&self, frame: PackedFrame) -> Result<Vec<Label>, ServiceError> {
        let answer = self.answers.lock().unwrap().remove(&frame.data[0]);
        let answer = answer.ok_or_else(|| ServiceError::Failed("no answer".to_string()))?;
        answer
            .await
            .map_err(|_| ServiceError::Failed("gate dropped".to_string()))
    }
}

fn luma_frame(luma: u8) -> Frame {
    Frame::nv21(Vec2::new(4, 2), vec![luma; 8], vec![128; 4]).unwrap()
}

fn label(text: &str) -> Vec<Label> {
    vec![Label {
        text: text.to_string(),
        confidence: 0.5,
    }]
}

async fn next_event(events: &mut mpsc::Receiver<UiEvent>) -> Option<UiEvent> {
    tokio::time::timeout(Duration::from_millis(500), events.recv())
        .await
        .ok()
        .flatten()
}

#[test]
fn test_label_text_uses_top_label() {
    let labels = vec![
        Label {
            text: "Cup".to_string(),
            confidence: 0.75,
        },
        Label {
            text: "Table".to_string(),
            confidence: 0.5,
        },
    ];
    assert_eq!(label_text(&labels).as_deref(), Some("Cup 0.75"));
    assert_eq!(label_text(&[]), None);
}

#[tokio::test]
async fn test_label_forwarder_posts_text() {
    let (ui, mut events) = ui_channel(8);
    let labeler = Arc::new(FixedLabeler {
        result: Ok(vec![Label {
            text: "Plant".to_string(),
            confidence: 0.5,
        }]),
        seen: Mutex::new(Vec::new()),
    });
    let mut forwarder = LabelForwarder::new(Arc::clone(&labeler), ui);

    forwarder.process(&frame(), Rotation::Deg90);

    assert_eq!(
        next_event(&mut events).await,
        Some(UiEvent::LabelText("Plant 0.5".to_string()))
    );
    let seen = labeler.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].metadata.rotation, Rotation::Deg90);
    assert_eq!(seen[0].data.len(), 12);
}

#[tokio::test]
async fn test_label_forwarder_ignores_empty_and_failed() {
    let (ui, mut events) = ui_channel(8);
    for result in [Ok(vec![]), Err(ServiceError::Unavailable("offline".to_string()))] {
        let labeler = Arc::new(FixedLabeler {
            result,
            seen: Mutex::new(Vec::new()),
        });
        let mut forwarder = LabelForwarder::new(labeler, ui.clone());
        forwarder.process(&frame(), Rotation::Deg0);
    }
    assert_eq!(next_event(&mut events).await, None);
}

#[tokio::test]
async fn test_label_forwarder_drops_response_older_than_shown() {
    let (ui, mut events) = ui_channel(8);
    let (older_tx, older_rx) = oneshot::channel();
    let (newer_tx, newer_rx) = oneshot::channel();
    let labeler = Arc::new(GatedLabeler {
        answers: Mutex::new(HashMap::from([(1, older_rx), (2, newer_rx)])),
    });
    let mut forwarder = LabelForwarder::new(labeler, ui);

    forwarder.process(&luma_frame(1), Rotation::Deg0);
    forwarder.process(&luma_frame(2), Rotation::Deg0);

    // the later frame answers first
    newer_tx.send(label("Lamp")).unwrap();
    assert_eq!(
        next_event(&mut events).await,
        Some(UiEvent::LabelText("Lamp 0.5".to_string()))
    );

    // the earlier frame's answer must not overwrite it
    older_tx.send(label("Chair")).unwrap();
    assert_eq!(next_event(&mut events).await, None);
}

#[tokio::test]
async fn test_label_forwarder_keeps_in_order_responses() {
    let (ui, mut events) = ui_channel(8);
    let (first_tx, first_rx) = oneshot::channel();
    let (second_tx, second_rx) = oneshot::channel();
    let labeler = Arc::new(GatedLabeler {
        answers: Mutex::new(HashMap::from([(1, first_rx), (2, second_rx)])),
    });
    let mut forwarder = LabelForwarder::new(labeler, ui);

    forwarder.process(&luma_frame(1), Rotation::Deg0);
    forwarder.process(&luma_frame(2), Rotation::Deg0);

    first_tx.send(label("Chair")).unwrap();
    assert_eq!(
        next_event(&mut events).await,
        Some(UiEvent::LabelText("Chair 0.5".to_string()))
    );
    second_tx.send(label("Lamp")).unwrap();
    assert_eq!(
        next_event(&mut events).await,
        Some(UiEvent::LabelText("Lamp 0.5".to_string()))
    );
}

#[tokio::test]
async fn test_object_forwarder_survives_failure() {
    let (ui, mut events) = ui_channel(8);
    let detector = Arc::new(FlakyDetector {
        calls: AtomicUsize::new(0),
        options: Mutex::new(None),
    });
    let clock = ManualClock::new(0);
    let mut throttled = Throttled::new(
        ObjectForwarder::new(Arc::clone(&detector), ui),
        Arc::new(clock.clone()),
    );

    // first eligible frame fails, nothing reaches the UI
    assert!(throttled.analyze(&frame(), 0));
    assert_eq!(next_event(&mut events).await, None);

    // next eligible frame still does work
    clock.set(1000);
    assert!(throttled.analyze(&frame(), 0));
    match next_event(&mut events).await {
        Some(UiEvent::Objects(objects)) => {
            assert_eq!(objects.len(), 1);
            assert_eq!(objects[0].tracking_id, Some(7));
            assert_eq!(objects[0].category, Category::Food);
        }
        other => panic!("expected objects, got {other:?}"),
    }
    assert_eq!(detector.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_object_forwarder_uses_stream_options() {
    let (ui, _events) = ui_channel(8);
    let detector = Arc::new(FlakyDetector {
        calls: AtomicUsize::new(0),
        options: Mutex::new(None),
    });
    let mut forwarder = ObjectForwarder::new(Arc::clone(&detector), ui);
    forwarder.process(&frame(), Rotation::Deg0);

    for _ in 0..50 {
        if detector.options.lock().unwrap().is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let options = detector.options.lock().unwrap().unwrap();
    assert_eq!(options.mode, DetectorMode::Stream);
    assert!(options.classification);
    assert!(!options.multiple_objects);
}

#[test]
fn test_forwarder_without_runtime_drops_request() {
    let (ui, mut events) = ui_channel(8);
    let detector = Arc::new(FlakyDetector {
        calls: AtomicUsize::new(1),
        options: Mutex::new(None),
    });
    let mut forwarder = ObjectForwarder::new(Arc::clone(&detector), ui);
    forwarder.process(&frame(), Rotation::Deg0);

    assert!(events.try_recv().is_err());
    assert_eq!(detector.calls.load(Ordering::SeqCst), 1);
}
