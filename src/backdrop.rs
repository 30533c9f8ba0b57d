use crate::color::Color;
use crate::geometry::Rect;
use crate::render::Surface;

/// Diagonally scrolling checkerboard drawn behind menu screens.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollingBackdrop {
    pub width: f32,
    pub height: f32,
    pub cell: f32,
    /// Pixels per second along both axes.
    pub speed: f32,
    pub base: Color,
    pub check: Color,
    offset: f32,
}

impl ScrollingBackdrop {
    pub fn new(width: f32, height: f32, cell: f32, speed: f32) -> Self {
        Self {
            width,
            height,
            cell,
            speed,
            base: Color::DEEP_BLUE,
            check: Color::DARK_BLUE,
            offset: 0.0,
        }
    }

    /// Scroll position within one period, always in `[0, 2·cell)`.
    pub fn offset(&self) -> f32 { self.offset }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        let period = self.cell * 2.0;
        if period <= 0.0 {
            return;
        }
        self.offset = (self.offset + self.speed * dt).rem_euclid(period);
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(Rect::new(0.0, 0.0, self.width, self.height), self.base);
        if self.cell <= 0.0 {
            return;
        }

        // Start one period up-left so the scrolled pattern always covers the edges.
        let start = self.offset - self.cell * 2.0;
        let cols = (self.width / self.cell).ceil() as i32 + 3;
        let rows = (self.height / self.cell).ceil() as i32 + 3;
        for row in 0..rows {
            for col in 0..cols {
                if (row + col) % 2 != 0 {
                    continue;
                }
                let x = start + col as f32 * self.cell;
                let y = start + row as f32 * self.cell;
                if x >= self.width || y >= self.height || x + self.cell <= 0.0 || y + self.cell <= 0.0 {
                    continue;
                }
                surface.fill_rect(Rect::new(x, y, self.cell, self.cell), self.check);
            }
        }
    }
}
