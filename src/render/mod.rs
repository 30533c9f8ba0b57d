// ── Draw surface ─────────────────────────────────────────────────────────────
//
// Screens never talk to the GPU directly. They describe a frame through the
// `Surface` trait; `DrawList` records those calls as plain data so a backend
// can batch them later and tests can inspect exactly what a frame drew.

use glam::Vec2;

use crate::color::Color;
use crate::geometry::Rect;

/// Immediate-mode 2D drawing target.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color);
    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Text horizontally centred on `pos`, with `pos.y` as the baseline.
    fn fill_text(&mut self, pos: Vec2, text: &str, size: f32, color: Color);
}

/// One recorded `Surface` call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    RoundRect { rect: Rect, radius: f32, color: Color },
    RoundRectStroke { rect: Rect, radius: f32, width: f32, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { pos: Vec2, text: String, size: f32, color: Color },
}

/// A `Surface` that records every call in order.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands. Call once per frame before drawing.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// All text strings drawn this frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundRect { rect, radius, color });
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::RoundRectStroke { rect, radius, width, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text { pos, text: text.to_string(), size, color });
    }
}
