// ── Tile scale easing ───────────────────────────────────────────────────────

/// Move `from` toward `to` by fraction `t` of the remaining distance.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Per-level hover scale, eased every frame toward `hover` for the selected
/// tile and `rest` for all others.
///
/// With `smoothing` in `(0, 1]` each step covers a fixed fraction of the
/// remaining distance, so values approach their target monotonically and
/// stay inside `[rest, hover]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleAnimator {
    scales: Vec<f32>,
    rest: f32,
    hover: f32,
    smoothing: f32,
}

impl ScaleAnimator {
    pub fn new(level_count: usize, rest: f32, hover: f32, smoothing: f32) -> Self {
        Self { scales: vec![rest; level_count], rest, hover, smoothing }
    }

    /// Put every tile back at rest scale.
    pub fn reset(&mut self) {
        self.scales.fill(self.rest);
    }

    pub fn target_for(&self, index: usize, selected: usize) -> f32 {
        if index == selected { self.hover } else { self.rest }
    }

    /// Advance one frame. Runs for every tile whether or not the selection
    /// changed.
    pub fn tick(&mut self, selected: usize) {
        let (rest, hover, k) = (self.rest, self.hover, self.smoothing);
        for (i, scale) in self.scales.iter_mut().enumerate() {
            let target = if i == selected { hover } else { rest };
            *scale = lerp(*scale, target, k);
        }
    }

    /// Current scale of tile `index`, or rest scale for an unknown index.
    pub fn scale(&self, index: usize) -> f32 {
        self.scales.get(index).copied().unwrap_or(self.rest)
    }

    pub fn scales(&self) -> &[f32] { &self.scales }
    pub fn len(&self) -> usize { self.scales.len() }
    pub fn is_empty(&self) -> bool { self.scales.is_empty() }
}
