use finder::{AppConfig, SourceConfig, build_dispatcher, start_camera};
use finder_camera::latest_frame;
use finder_vision::{ManualClock, ReplayError, UiEvent, ui_channel};
use std::{path::PathBuf, sync::Arc, time::Duration};

fn write_temp(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("finder_app_{name}_{}.json", std::process::id()));
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_luminance_only_without_replays() {
    let (ui, _events) = ui_channel(4);
    let dispatcher =
        build_dispatcher(&AppConfig::default(), Arc::new(ManualClock::new(0)), &ui).unwrap();
    assert_eq!(dispatcher.names(), vec!["luminance"]);
}

#[test]
fn test_all_three_analyzers_with_replays() {
    let labels = write_temp("labels", r#"[{"labels": [{"text": "Cup", "confidence": 0.5}]}]"#);
    let objects = write_temp("objects", r#"[{"objects": []}]"#);
    let config = AppConfig {
        label_replay: Some(labels.clone()),
        object_replay: Some(objects.clone()),
        ..AppConfig::default()
    };

    let (ui, _events) = ui_channel(4);
    let dispatcher = build_dispatcher(&config, Arc::new(ManualClock::new(0)), &ui).unwrap();
    assert_eq!(dispatcher.names(), vec!["luminance", "label", "object"]);

    let _ = std::fs::remove_file(labels);
    let _ = std::fs::remove_file(objects);
}

#[test]
fn test_bad_replay_file_fails() {
    let labels = write_temp("empty", "[]");
    let config = AppConfig {
        label_replay: Some(labels.clone()),
        ..AppConfig::default()
    };
    let (ui, _events) = ui_channel(4);
    assert!(matches!(
        build_dispatcher(&config, Arc::new(ManualClock::new(0)), &ui),
        Err(ReplayError::Empty)
    ));
    let _ = std::fs::remove_file(labels);
}

#[tokio::test]
async fn test_pattern_pipeline_reaches_ui() {
    let config = AppConfig {
        width: 16,
        height: 8,
        fps: 50,
        ..AppConfig::default()
    };
    let (ui, mut events) = ui_channel(16);
    let (publisher, frames) = latest_frame();

    start_camera(&config, publisher).unwrap();
    build_dispatcher(&config, Arc::new(ManualClock::new(0)), &ui)
        .unwrap()
        .spawn(frames);

    let event = tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .unwrap();
    assert!(matches!(event, Some(UiEvent::Luminance(_))));
}

#[cfg(not(feature = "v4l2"))]
#[tokio::test]
async fn test_v4l2_source_needs_feature() {
    let config = AppConfig {
        source: SourceConfig::V4l2 {
            device: "/dev/video0".to_string(),
        },
        ..AppConfig::default()
    };
    let (publisher, _frames) = latest_frame();
    assert!(start_camera(&config, publisher).is_err());
}
