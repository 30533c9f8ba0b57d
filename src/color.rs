// ── Color ──────────────────────────────────────────────────────────────────

/// Linear RGBA colour, components in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);

    // Menu palette.
    pub const BLUE: Self = Self([0.26, 0.45, 0.85, 1.0]);
    pub const DARK_BLUE: Self = Self([0.12, 0.22, 0.52, 1.0]);
    /// Deepest blue; transition wipes and the backdrop base.
    pub const DEEP_BLUE: Self = Self([0.05, 0.08, 0.24, 1.0]);
    pub const DARK_PURPLE: Self = Self([0.20, 0.10, 0.32, 1.0]);
    pub const LIGHT_GREEN: Self = Self([0.56, 0.93, 0.56, 1.0]);

    /// Same colour with alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        let [r, g, b, _] = self.0;
        Self([r, g, b, a])
    }
}
