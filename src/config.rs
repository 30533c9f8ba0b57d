use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{column_count, Rect};

// ── ConfigError ───────────────────────────────────────────────────────────────

/// Why a `ScreenConfig` could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON was malformed or had fields of the wrong type.
    Parse(serde_json::Error),
    /// The JSON parsed but a value is unusable.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "failed to parse screen config: {e}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid screen config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// ── ScreenConfig ──────────────────────────────────────────────────────────────

/// Layout, animation and effect constants for the level-select screen.
///
/// Every field has a default, so a JSON file only needs to list the values it
/// overrides:
///
/// ```json
/// { "viewport_width": 1920, "tile_size": 160 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Logical render width in pixels.
    pub viewport_width: f32,
    /// Logical render height in pixels.
    pub viewport_height: f32,
    /// Side length of an unscaled tile.
    pub tile_size: f32,
    /// Gap between tiles, also the margin subtracted on both sides when
    /// computing the column count.
    pub padding: f32,
    /// Top-left corner of tile 0.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Scale of every tile that is not selected.
    pub rest_scale: f32,
    /// Scale the selected tile eases toward.
    pub hover_scale: f32,
    /// Fraction of the remaining distance covered per frame.
    pub smoothing: f32,
    pub particle_size: f32,
    pub particle_count: usize,
    /// Seconds for a full transition wipe.
    pub transition_duration: f32,
    pub backdrop_cell: f32,
    /// Backdrop scroll speed in pixels per second.
    pub backdrop_speed: f32,
    /// Top-left corner of the panel behind the tiles.
    pub panel_x: f32,
    pub panel_y: f32,
    /// Gap between the panel and the right / bottom edge of the viewport.
    pub panel_margin_right: f32,
    pub panel_margin_bottom: f32,
    pub panel_radius: f32,
    pub tile_radius: f32,
    pub label_size: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            tile_size: 200.0,
            padding: 50.0,
            origin_x: 120.0,
            origin_y: 150.0,
            rest_scale: 1.0,
            hover_scale: 1.1,
            smoothing: 0.15,
            particle_size: 16.0,
            particle_count: 32,
            transition_duration: 0.6,
            backdrop_cell: 64.0,
            backdrop_speed: 30.0,
            panel_x: 80.0,
            panel_y: 100.0,
            panel_margin_right: 50.0,
            panel_margin_bottom: 100.0,
            panel_radius: 25.0,
            tile_radius: 8.0,
            label_size: 24.0,
        }
    }
}

impl ScreenConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScreenConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the layout or easing meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason: reason.into() })
        }

        if !(self.tile_size > 0.0) {
            return invalid("tile_size", format!("must be positive, got {}", self.tile_size));
        }
        if !(self.padding >= 0.0) {
            return invalid("padding", format!("must not be negative, got {}", self.padding));
        }
        if column_count(self.viewport_width, self.tile_size, self.padding) == 0 {
            return invalid(
                "viewport_width",
                format!(
                    "{} px leaves no room for a {} px tile with {} px padding",
                    self.viewport_width, self.tile_size, self.padding
                ),
            );
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return invalid("smoothing", format!("must be in (0, 1], got {}", self.smoothing));
        }
        if self.hover_scale < self.rest_scale {
            return invalid(
                "hover_scale",
                format!("{} is smaller than rest_scale {}", self.hover_scale, self.rest_scale),
            );
        }
        if !(self.transition_duration > 0.0) {
            return invalid(
                "transition_duration",
                format!("must be positive, got {}", self.transition_duration),
            );
        }
        Ok(())
    }

    /// Background panel behind the tiles.
    pub fn panel_rect(&self) -> Rect {
        Rect::new(
            self.panel_x,
            self.panel_y,
            self.viewport_width - self.panel_x - self.panel_margin_right,
            self.viewport_height - self.panel_y - self.panel_margin_bottom,
        )
    }
}
