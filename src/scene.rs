use crate::audio::FeedbackCues;
use crate::camera::Camera;
use crate::input::FrameInput;
use crate::render::Surface;
use crate::transition::TransitionEffect;

/// Screens this crate asks the host to switch to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    Game,
}

/// Swaps the active screen. Fire-and-forget.
pub trait SceneSwitcher {
    fn request_scene(&mut self, scene: SceneId);
}

/// Prepares a level for play. Synchronous and infallible from the caller's side.
pub trait LevelLoader {
    fn load(&mut self, level_index: usize);
}

/// Everything a transition completion callback may touch.
pub trait SceneHost: SceneSwitcher + LevelLoader {}

impl<T: SceneSwitcher + LevelLoader> SceneHost for T {}

/// Collaborators a screen borrows for the duration of one lifecycle call.
pub struct ScreenContext<'a> {
    pub camera: &'a mut Camera,
    pub transitions: &'a mut dyn TransitionEffect,
    pub cues: &'a mut dyn FeedbackCues,
}

/// Lifecycle driven by the host frame loop: `init` once on entry, then one
/// `update` and one `render` per frame.
pub trait Screen {
    fn init(&mut self, ctx: &mut ScreenContext<'_>);
    fn update(&mut self, ctx: &mut ScreenContext<'_>, input: &FrameInput, dt: f32);
    /// Must not mutate screen state.
    fn render(&self, surface: &mut dyn Surface);
}
