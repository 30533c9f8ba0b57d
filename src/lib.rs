pub mod animation;
pub mod audio;
pub mod backdrop;
pub mod camera;
pub mod catalog;
pub mod color;
pub mod config;
pub mod geometry;
pub mod input;
pub mod level_select;
pub mod particles;
pub mod render;
pub mod scene;
pub mod selection;
pub mod transition;

pub use color::Color;
pub use config::{ConfigError, ScreenConfig};
pub use level_select::{LevelSelectScreen, Phase};
pub use scene::{Screen, ScreenContext, SceneId};
