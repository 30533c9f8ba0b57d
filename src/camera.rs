use glam::Vec2;

/// 2D camera for menu screens: a world-space offset of the top-left corner.
///
/// Tiles live in world space. Pointer positions go through `screen_to_world`
/// before hit-testing and tiles go through `world_to_screen` when drawn, so
/// the tile under the cursor is always the one that gets picked. Screens
/// reset the camera on entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// World-space pixel position shown at the top-left of the screen.
    pub offset: Vec2,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self { offset: Vec2::new(x, y) }
    }

    /// Snap back to the world origin.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Convert screen-pixel coordinates to world-space pixel coordinates.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.offset
    }

    /// Convert world-space pixel coordinates to screen-pixel coordinates.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}
