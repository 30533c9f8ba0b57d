use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use glam::Vec2;
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Represents a raw input source that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Raw hardware state for a single frame.
///
/// The host feeds window events in through `press_key` / `release_key` /
/// `press_mouse` / `release_mouse` / `move_cursor`, runs one screen update,
/// then calls `clear_frame_state` so edges only last a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,

    pub mouse_pos: [f32; 2],
    pub mouse_held: HashSet<MouseButton>,
    pub mouse_pressed: HashSet<MouseButton>,
    pub mouse_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    // ── Event feed ─────────────────────────────────────────────────────────

    /// Record a key going down. OS key-repeat does not produce a second edge.
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        if self.mouse_held.insert(button) {
            self.mouse_pressed.insert(button);
        }
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_held.remove(&button);
        self.mouse_released.insert(button);
    }

    pub fn move_cursor(&mut self, x: f32, y: f32) {
        self.mouse_pos = [x, y];
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool { self.mouse_pressed.contains(&button) }
    pub fn is_mouse_released(&self, button: MouseButton) -> bool { self.mouse_released.contains(&button) }
}

/// Maps logical actions (defined by the game) to one or more physical inputs.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<InputSource>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, source: InputSource) {
        self.bindings.entry(action).or_default().push(source);
    }

    /// Returns true if the action was triggered this frame (pressed).
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_pressed(*k),
                InputSource::Mouse(b) => input.is_mouse_pressed(*b),
            })
        })
    }

    /// Returns true if the action is currently being held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_held(*k),
                InputSource::Mouse(b) => input.is_mouse_held(*b),
            })
        })
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

// ── Menu actions ────────────────────────────────────────────────────────────

/// Logical inputs understood by the level-select screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Click,
}

impl ActionMap<MenuAction> {
    /// Arrows and WASD navigate, Enter/Space confirm, left mouse clicks.
    pub fn menu_defaults() -> Self {
        use InputSource::{Key, Mouse};
        let mut map = Self::new();
        map.bind(MenuAction::Left, Key(KeyCode::ArrowLeft));
        map.bind(MenuAction::Left, Key(KeyCode::KeyA));
        map.bind(MenuAction::Right, Key(KeyCode::ArrowRight));
        map.bind(MenuAction::Right, Key(KeyCode::KeyD));
        map.bind(MenuAction::Up, Key(KeyCode::ArrowUp));
        map.bind(MenuAction::Up, Key(KeyCode::KeyW));
        map.bind(MenuAction::Down, Key(KeyCode::ArrowDown));
        map.bind(MenuAction::Down, Key(KeyCode::KeyS));
        map.bind(MenuAction::Confirm, Key(KeyCode::Enter));
        map.bind(MenuAction::Confirm, Key(KeyCode::Space));
        map.bind(MenuAction::Click, Mouse(MouseButton::Left));
        map
    }
}

/// One frame of menu input, already resolved through an `ActionMap`.
///
/// Directions and `confirm` are edge-triggered (true only on the frame the
/// press began); `click` is level-triggered (true while the button is held).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
    pub click: bool,
    pub pointer: Vec2,
}

impl FrameInput {
    pub fn capture(input: &InputState, actions: &ActionMap<MenuAction>) -> Self {
        let [px, py] = input.mouse_pos;
        Self {
            left: actions.is_pressed(MenuAction::Left, input),
            right: actions.is_pressed(MenuAction::Right, input),
            up: actions.is_pressed(MenuAction::Up, input),
            down: actions.is_pressed(MenuAction::Down, input),
            confirm: actions.is_pressed(MenuAction::Confirm, input),
            click: actions.is_held(MenuAction::Click, input),
            pointer: Vec2::new(px, py),
        }
    }

    /// No keys, no click, pointer parked at `pointer`.
    pub fn idle_at(x: f32, y: f32) -> Self {
        Self { pointer: Vec2::new(x, y), ..Self::default() }
    }
}
