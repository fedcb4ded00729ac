use {
    finder::*,
    finder_base::{Vec2, init_logging, log},
    finder_camera::{JpegCapture, latest_frame},
    finder_vision::{SystemClock, ui_channel, viewfinder_transform},
    minifb::{Key, KeyRepeat, Window, WindowOptions},
    std::{path::PathBuf, sync::Arc, time::Instant},
};

const TARGET_FPS: usize = 30;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    init_logging(&config.log_config()?)?;
    log::info!("finder starting with {config:?}");

    let (ui, mut events) = ui_channel(config.ui_channel_capacity);
    let (publisher, frames) = latest_frame();

    let granted = check_permission(&*permission_for(&config.source), &ui);
    if granted {
        start_camera(&config, publisher)?;
        build_dispatcher(&config, Arc::new(SystemClock), &ui)?.spawn(frames.clone());
    }

    let capture = JpegCapture::new(&config.media_dir).with_quality(config.jpeg_quality);
    let mut display_rotation = config.display_rotation();

    let mut window = Window::new(
        "Finder",
        config.width as usize,
        config.height as usize,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(TARGET_FPS);

    let mut state = UiState::default();
    let mut view = Vec2::new(0usize, 0usize);
    let mut transform = viewfinder_transform(display_rotation, view.to_f32());
    let mut buffer = Vec::new();

    log::info!("controls: Space/C capture, R rotate display, Escape exit");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = Instant::now();
        while let Ok(event) = events.try_recv() {
            state.apply(event, now);
        }
        if state.should_exit(now) {
            log::info!("closing preview");
            break;
        }

        if !state.is_closed()
            && (window.is_key_pressed(Key::Space, KeyRepeat::No)
                || window.is_key_pressed(Key::C, KeyRepeat::No))
        {
            spawn_picture(capture.clone(), frames.current(), ui.clone());
        }

        let mut layout_changed = false;
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            display_rotation = Some(display_rotation.unwrap_or_default().next());
            log::info!("display rotation now {:?}", display_rotation);
            layout_changed = true;
        }
        let (width, height) = window.get_size();
        if (width, height) != (view.x, view.y) {
            view = Vec2::new(width, height);
            layout_changed = true;
        }
        if layout_changed {
            transform = viewfinder_transform(display_rotation, view.to_f32());
        }
        if view.area() == 0 {
            // minimized
            window.update();
            continue;
        }

        if let Some(frame) = frames.current() {
            buffer = render_preview(&frame, transform, view, state.objects());
        } else {
            buffer.resize(view.area(), 0);
        }

        window.set_title(&state.title(now));
        window.update_with_buffer(&buffer, view.x, view.y)?;
    }

    log::info!("finder exiting");
    Ok(())
}
