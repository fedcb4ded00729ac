use crate::{AppConfig, SourceConfig};
use finder_base::log;
use finder_camera::{CameraError, FramePublisher, PatternCamera, spawn_pump};
use finder_vision::{
    Clock, Dispatcher, LabelForwarder, LuminanceSampler, ObjectForwarder, ReplayDetector,
    ReplayError, ReplayLabeler, UiSender,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Open the configured frame source and pump it into `publisher`.
pub fn start_camera(
    config: &AppConfig,
    publisher: FramePublisher,
) -> Result<JoinHandle<()>, CameraError> {
    let camera_config = config.camera_config();
    match &config.source {
        SourceConfig::Pattern => {
            log::info!("using synthetic pattern source");
            Ok(spawn_pump(PatternCamera::new(camera_config), publisher))
        }
        #[cfg(feature = "v4l2")]
        SourceConfig::V4l2 { .. } => {
            let camera = finder_camera::V4l2Camera::new(camera_config)?;
            Ok(spawn_pump(camera, publisher))
        }
        #[cfg(not(feature = "v4l2"))]
        SourceConfig::V4l2 { device } => Err(CameraError::Device(format!(
            "{device}: built without v4l2 support"
        ))),
    }
}

/// Luminance sampler, then label and object forwarders for whichever replay
/// files are configured.
pub fn build_dispatcher(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
    ui: &UiSender,
) -> Result<Dispatcher, ReplayError> {
    let mut dispatcher = Dispatcher::new(clock).with_interval_ms(config.analysis_interval_ms);
    dispatcher.register(LuminanceSampler::new(ui.clone()));

    if let Some(path) = &config.label_replay {
        let labeler = ReplayLabeler::from_file(path)?;
        log::info!("labeling from {} ({} responses)", path.display(), labeler.response_count());
        dispatcher.register(LabelForwarder::new(Arc::new(labeler), ui.clone()));
    }
    if let Some(path) = &config.object_replay {
        let detector = ReplayDetector::from_file(path)?;
        log::info!("detecting from {} ({} responses)", path.display(), detector.response_count());
        dispatcher.register(ObjectForwarder::new(Arc::new(detector), ui.clone()));
    }

    Ok(dispatcher)
}
