// ── Celebration particles ───────────────────────────────────────────────────
//
// A fixed-capacity pool of square motes. Bursts spawn radially from a point,
// slow down under drag, fall a little, and shrink out as they age.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;

use crate::color::Color;
use crate::geometry::Rect;
use crate::render::Surface;

const DRAG: f32 = 3.0;
const GRAVITY: f32 = 240.0;
const MIN_SPEED: f32 = 120.0;
const SPEED_RANGE: f32 = 260.0;
const MIN_LIFE: f32 = 0.45;
const LIFE_RANGE: f32 = 0.5;

/// Cheap deterministic hash → `[0, 1)`; no RNG state to thread around.
pub fn pseudo_rand(seed: u64) -> f32 {
    let x = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    // Top 24 bits: exactly representable, so the result never rounds up to 1.0.
    (x >> 40) as f32 / (1u64 << 24) as f32
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub lifetime: f32,
    pub max_lifetime: f32,
}

impl Particle {
    /// Remaining life as a fraction, `1.0` at birth.
    pub fn life_fraction(&self) -> f32 {
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct ParticleSystem {
    size: f32,
    capacity: usize,
    particles: VecDeque<Particle>,
    seed: u64,
}

impl ParticleSystem {
    /// Empty pool holding at most `count` particles drawn `size` pixels wide.
    pub fn create(size: f32, count: usize) -> Self {
        Self {
            size,
            capacity: count,
            particles: VecDeque::with_capacity(count),
            seed: 0,
        }
    }

    pub fn size(&self) -> f32 { self.size }
    pub fn capacity(&self) -> usize { self.capacity }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item = &Particle> { self.particles.iter() }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawn `n` particles at `(x, y)`. When the pool is full the oldest
    /// particle is recycled.
    pub fn emit(&mut self, x: f32, y: f32, n: usize) {
        if self.capacity == 0 {
            return;
        }
        for _ in 0..n {
            self.seed = self.seed.wrapping_add(1);
            let base = self.seed.wrapping_mul(97);
            let angle = pseudo_rand(base) * TAU;
            let speed = MIN_SPEED + pseudo_rand(base.wrapping_add(3)) * SPEED_RANGE;
            let life = MIN_LIFE + pseudo_rand(base.wrapping_add(7)) * LIFE_RANGE;

            if self.particles.len() == self.capacity {
                self.particles.pop_front();
            }
            self.particles.push_back(Particle {
                pos: Vec2::new(x, y),
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                lifetime: life,
                max_lifetime: life,
            });
        }
    }

    /// Integrate motion by `dt` seconds and cull expired particles.
    pub fn advance(&mut self, dt: f32) {
        let drag = (1.0 - DRAG * dt).max(0.0);
        for p in self.particles.iter_mut() {
            p.pos += p.velocity * dt;
            p.velocity *= drag;
            p.velocity.y += GRAVITY * dt;
            p.lifetime -= dt;
        }
        self.particles.retain(|p| p.lifetime > 0.0);
    }

    /// One square per live particle, shrinking with remaining life.
    pub fn draw(&self, surface: &mut dyn Surface, color: Color) {
        for p in &self.particles {
            let t = p.life_fraction();
            let s = self.size * t;
            if s <= 0.0 {
                continue;
            }
            surface.fill_rect(
                Rect::new(p.pos.x - s * 0.5, p.pos.y - s * 0.5, s, s),
                color.with_alpha(color.0[3] * t),
            );
        }
    }
}
