// =============================================================================
// GEOMETRY.RS — Grid layout for the level tiles
//
// Everything here is pure: a level index maps to a pixel rectangle and a
// pointer position maps back to at most one index.
// - Rect + half-open containment test
// - GridLayout: column count, index → rect, point → index
// =============================================================================

use glam::Vec2;

use crate::config::ScreenConfig;

/// Returns `true` if pixel point `(px, py)` falls inside the rectangle
/// defined by origin `(rx, ry)` and size `(rw, rh)` using half-open intervals.
#[inline]
pub fn rect_contains(rx: f32, ry: f32, rw: f32, rh: f32, px: f32, py: f32) -> bool {
    px >= rx && px < rx + rw && py >= ry && py < ry + rh
}

/// Axis-aligned rectangle in pixels, origin at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        rect_contains(self.x, self.y, self.w, self.h, p.x, p.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Same size, moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self { x: self.x + delta.x, y: self.y + delta.y, ..*self }
    }

    /// Scale the rectangle about its centre.
    ///
    /// A factor of `1.1` grows a 200 px tile to 220 px while keeping it centred
    /// on the same grid cell.
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        let w = self.w * factor;
        let h = self.h * factor;
        Self {
            x: self.x - (w - self.w) * 0.5,
            y: self.y - (h - self.h) * 0.5,
            w,
            h,
        }
    }
}

// =============================================================================
// GRID LAYOUT
// =============================================================================

/// Fixed row/column layout of `level_count` square tiles.
///
/// ```text
/// origin ┌────┐ pad ┌────┐ pad ┌────┐
///        │ 0  │     │ 1  │     │ 2  │
///        └────┘     └────┘     └────┘
///          pad
///        ┌────┐     ┌────┐
///        │ 3  │     │ 4  │ ...
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub origin: Vec2,
    pub tile_size: f32,
    pub padding: f32,
    columns: usize,
    level_count: usize,
}

impl GridLayout {
    /// Build a layout for `level_count` tiles inside a viewport `viewport_width`
    /// pixels wide.
    ///
    /// The column count is `floor((viewport_width - 2·padding) / (tile_size + padding))`,
    /// never less than one so that index arithmetic stays well-defined even for
    /// a degenerate viewport.
    pub fn new(
        viewport_width: f32,
        origin: Vec2,
        tile_size: f32,
        padding: f32,
        level_count: usize,
    ) -> Self {
        let columns = column_count(viewport_width, tile_size, padding).max(1);
        Self { origin, tile_size, padding, columns, level_count }
    }

    pub fn from_config(config: &ScreenConfig, level_count: usize) -> Self {
        Self::new(
            config.viewport_width,
            Vec2::new(config.origin_x, config.origin_y),
            config.tile_size,
            config.padding,
            level_count,
        )
    }

    pub fn column_count(&self) -> usize { self.columns }
    pub fn level_count(&self) -> usize { self.level_count }

    /// Number of occupied rows (zero for an empty catalog).
    pub fn row_count(&self) -> usize {
        self.level_count.div_ceil(self.columns)
    }

    /// Distance between the top-left corners of neighbouring tiles.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.tile_size + self.padding
    }

    /// Pixel rectangle of tile `index`.
    ///
    /// Defined for any index, including ones past the end of the catalog;
    /// callers iterate `0..level_count()`.
    pub fn rect_for(&self, index: usize) -> Rect {
        let col = index % self.columns;
        let row = index / self.columns;
        Rect::new(
            self.origin.x + col as f32 * self.stride(),
            self.origin.y + row as f32 * self.stride(),
            self.tile_size,
            self.tile_size,
        )
    }

    /// First tile (in index order) whose rectangle contains `(x, y)`.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let p = Vec2::new(x, y);
        (0..self.level_count).find(|&i| self.rect_for(i).contains(p))
    }
}

/// Columns that fit in `viewport_width`, leaving `padding` on both sides.
///
/// Returns `0` when not even one tile fits.
pub fn column_count(viewport_width: f32, tile_size: f32, padding: f32) -> usize {
    let stride = tile_size + padding;
    if stride <= 0.0 {
        return 0;
    }
    let usable = viewport_width - padding * 2.0;
    if usable <= 0.0 {
        return 0;
    }
    (usable / stride).floor() as usize
}
