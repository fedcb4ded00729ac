use finder::{AppConfig, ConfigError, SourceConfig};
use finder_base::log::LevelFilter;
use finder_camera::Rotation;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = AppConfig::load(None).unwrap();
    assert_eq!(config.source, SourceConfig::Pattern);
    assert_eq!((config.width, config.height, config.fps), (640, 480, 30));
    assert_eq!(config.analysis_interval_ms, 1000);
    assert_eq!(config.display_rotation(), Some(Rotation::Deg0));
    assert_eq!(config.media_dir, PathBuf::from("media"));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = AppConfig::from_json(
        r#"{"source": {"kind": "v4l2", "device": "/dev/video2"}, "sensor_rotation": 90, "display_rotation": 1}"#,
    )
    .unwrap();
    assert_eq!(
        config.source,
        SourceConfig::V4l2 {
            device: "/dev/video2".to_string()
        }
    );
    assert_eq!(config.width, 640);
    assert_eq!(config.display_rotation(), Some(Rotation::Deg90));

    let camera = config.camera_config();
    assert_eq!(camera.device(), "/dev/video2");
    assert_eq!(camera.rotation_degrees(), 90);
}

#[test]
fn test_unknown_display_code() {
    let config = AppConfig::from_json(r#"{"display_rotation": 7}"#).unwrap();
    assert_eq!(config.display_rotation(), None);
}

#[test]
fn test_empty_size_rejected() {
    assert!(matches!(
        AppConfig::from_json(r#"{"width": 0}"#),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_bad_json_rejected() {
    assert!(matches!(
        AppConfig::from_json("{"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_log_config() {
    let config = AppConfig::from_json(r#"{"log_level": "warn", "log_dir": "/tmp/finder-logs"}"#)
        .unwrap();
    let log = config.log_config().unwrap();
    assert_eq!(log.level(), LevelFilter::Warn);
    assert_eq!(log.dir(), Some(&PathBuf::from("/tmp/finder-logs")));

    let config = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
    assert!(matches!(config.log_config(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join(format!("finder_config_missing_{}.json", std::process::id()));
    assert!(matches!(AppConfig::load(Some(path.as_path())), Err(ConfigError::Io(_))));
}
