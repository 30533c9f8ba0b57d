use glam::Vec2;
use levelgrid::input::*;

fn defaults() -> ActionMap<MenuAction> {
    ActionMap::menu_defaults()
}

#[test]
fn press_is_edge_triggered() {
    let mut input = InputState::new();
    input.press_key(KeyCode::ArrowRight);
    assert!(input.is_key_pressed(KeyCode::ArrowRight));
    assert!(input.is_key_held(KeyCode::ArrowRight));

    input.clear_frame_state();
    // OS key repeat while still held must not produce a new edge.
    input.press_key(KeyCode::ArrowRight);
    assert!(!input.is_key_pressed(KeyCode::ArrowRight));
    assert!(input.is_key_held(KeyCode::ArrowRight));
}

#[test]
fn release_then_press_is_a_new_edge() {
    let mut input = InputState::new();
    input.press_key(KeyCode::Enter);
    input.clear_frame_state();
    input.release_key(KeyCode::Enter);
    assert!(input.is_key_released(KeyCode::Enter));
    assert!(!input.is_key_held(KeyCode::Enter));
    input.clear_frame_state();
    input.press_key(KeyCode::Enter);
    assert!(input.is_key_pressed(KeyCode::Enter));
}

#[test]
fn capture_maps_arrows_and_wasd() {
    let map = defaults();
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyA);
    input.press_key(KeyCode::ArrowDown);
    let frame = FrameInput::capture(&input, &map);
    assert!(frame.left);
    assert!(frame.down);
    assert!(!frame.right);
    assert!(!frame.up);
    assert!(!frame.confirm);
}

#[test]
fn capture_confirm_from_enter_or_space() {
    let map = defaults();
    for key in [KeyCode::Enter, KeyCode::Space] {
        let mut input = InputState::new();
        input.press_key(key);
        assert!(FrameInput::capture(&input, &map).confirm, "{key:?} should confirm");
    }
}

#[test]
fn capture_directions_only_on_press_frame() {
    let map = defaults();
    let mut input = InputState::new();
    input.press_key(KeyCode::ArrowUp);
    assert!(FrameInput::capture(&input, &map).up);
    input.clear_frame_state();
    assert!(!FrameInput::capture(&input, &map).up);
}

#[test]
fn capture_click_is_held_not_edge() {
    let map = defaults();
    let mut input = InputState::new();
    input.press_mouse(MouseButton::Left);
    assert!(FrameInput::capture(&input, &map).click);
    input.clear_frame_state();
    assert!(FrameInput::capture(&input, &map).click, "click stays true while held");
    input.release_mouse(MouseButton::Left);
    assert!(!FrameInput::capture(&input, &map).click);
}

#[test]
fn capture_pointer_position() {
    let map = defaults();
    let mut input = InputState::new();
    input.move_cursor(321.5, 99.0);
    assert_eq!(FrameInput::capture(&input, &map).pointer, Vec2::new(321.5, 99.0));
}

#[test]
fn unbound_action_never_fires() {
    let map: ActionMap<MenuAction> = ActionMap::new();
    let mut input = InputState::new();
    input.press_key(KeyCode::Enter);
    assert!(!map.is_pressed(MenuAction::Confirm, &input));
    assert!(!map.is_held(MenuAction::Confirm, &input));
}

#[test]
fn custom_binding() {
    let mut map = ActionMap::new();
    map.bind(MenuAction::Confirm, InputSource::Key(KeyCode::KeyE));
    let mut input = InputState::new();
    input.press_key(KeyCode::KeyE);
    assert!(FrameInput::capture(&input, &map).confirm);
}
