use finder::{TOAST_DURATION, UiState};
use finder_base::{Rect, Vec2};
use finder_vision::{Category, DetectedObject, UiEvent};
use std::time::{Duration, Instant};

#[test]
fn test_title_shows_label() {
    let now = Instant::now();
    let mut state = UiState::default();
    assert_eq!(state.title(now), "Finder");

    state.apply(UiEvent::LabelText("Cup 0.9".to_string()), now);
    assert_eq!(state.title(now), "Finder - Cup 0.9");
    assert_eq!(state.label(), "Cup 0.9");
}

#[test]
fn test_toast_expires() {
    let now = Instant::now();
    let mut state = UiState::default();
    state.apply(UiEvent::Toast("saved".to_string()), now);

    assert_eq!(state.title(now), "Finder | saved");
    assert_eq!(state.toast(now + Duration::from_millis(1999)), Some("saved"));
    assert_eq!(state.toast(now + TOAST_DURATION), None);
    assert_eq!(state.title(now + TOAST_DURATION), "Finder");
}

#[test]
fn test_objects_and_luminance_replace_previous() {
    let now = Instant::now();
    let mut state = UiState::default();
    let object = DetectedObject {
        tracking_id: None,
        bounds: Rect::new(Vec2::new(0, 0), Vec2::new(1, 1)),
        category: Category::Plant,
        confidence: None,
    };
    state.apply(UiEvent::Objects(vec![object.clone(), object]), now);
    state.apply(UiEvent::Objects(vec![]), now);
    state.apply(UiEvent::Luminance(42.5), now);

    assert!(state.objects().is_empty());
    assert_eq!(state.luminance(), Some(42.5));
    assert!(!state.is_closed());

    state.apply(UiEvent::Close, now);
    assert!(state.is_closed());
}

#[test]
fn test_close_waits_for_toast() {
    let now = Instant::now();
    let mut state = UiState::default();
    assert!(!state.should_exit(now));

    state.apply(UiEvent::Toast("Permissions not granted by the user.".to_string()), now);
    state.apply(UiEvent::Close, now);

    assert!(state.is_closed());
    assert!(!state.should_exit(now));
    assert!(!state.should_exit(now + Duration::from_millis(1999)));
    assert_eq!(state.title(now), "Finder | Permissions not granted by the user.");
    assert!(state.should_exit(now + TOAST_DURATION));
}

#[test]
fn test_close_without_toast_exits() {
    let now = Instant::now();
    let mut state = UiState::default();
    state.apply(UiEvent::Toast("old".to_string()), now);
    state.apply(UiEvent::Close, now + TOAST_DURATION);
    assert!(state.should_exit(now + TOAST_DURATION));
}
