//! Full-screen transition wipes.
//!
//! A screen hands a `TransitionRequest` to whatever implements
//! `TransitionEffect`. The request may carry a one-shot `OnComplete`
//! continuation; the effect owns it from then on and runs it exactly once
//! when the wipe finishes, passing in the host so the continuation can load
//! levels and switch scenes.

use std::fmt;

use glam::Vec2;
use log::{debug, warn};

use crate::color::Color;
use crate::config::ScreenConfig;
use crate::render::Surface;
use crate::scene::SceneHost;

/// Continuation run once when a transition finishes.
pub type OnComplete = Box<dyn FnOnce(&mut dyn SceneHost)>;

pub struct TransitionRequest {
    pub center: Vec2,
    /// `true` for the reveal played when a screen opens, `false` for the
    /// cover played when leaving it.
    pub entry: bool,
    pub color: Color,
    pub on_complete: Option<OnComplete>,
}

impl TransitionRequest {
    pub fn entry(center: Vec2, color: Color) -> Self {
        Self { center, entry: true, color, on_complete: None }
    }

    pub fn exit(center: Vec2, color: Color, on_complete: OnComplete) -> Self {
        Self { center, entry: false, color, on_complete: Some(on_complete) }
    }
}

impl fmt::Debug for TransitionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRequest")
            .field("center", &self.center)
            .field("entry", &self.entry)
            .field("color", &self.color)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

pub trait TransitionEffect {
    /// Begin playing `request`, replacing any transition in flight.
    fn start(&mut self, request: TransitionRequest);
    fn is_active(&self) -> bool;
}

// ── CircleWipe ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
struct ActiveWipe {
    center: Vec2,
    entry: bool,
    color: Color,
    progress: f32,
}

/// A disc that grows out of (exit) or shrinks into (entry) a centre point.
pub struct CircleWipe {
    pub duration: f32,
    pub width: f32,
    pub height: f32,
    active: Option<ActiveWipe>,
    pending: Option<OnComplete>,
}

impl CircleWipe {
    pub fn new(width: f32, height: f32, duration: f32) -> Self {
        Self { duration, width, height, active: None, pending: None }
    }

    /// Wipe covering the configured viewport over `transition_duration` seconds.
    pub fn from_config(config: &ScreenConfig) -> Self {
        Self::new(config.viewport_width, config.viewport_height, config.transition_duration)
    }

    /// Progress of the wipe in flight, `0.0..=1.0`.
    pub fn progress(&self) -> Option<f32> {
        self.active.map(|w| w.progress)
    }

    /// Advance by `dt` seconds. When the wipe finishes its continuation runs
    /// against `host` and the effect goes idle.
    pub fn tick(&mut self, dt: f32, host: &mut dyn SceneHost) {
        let Some(wipe) = self.active.as_mut() else { return };

        wipe.progress = if self.duration > 0.0 {
            (wipe.progress + dt / self.duration).min(1.0)
        } else {
            1.0
        };
        if wipe.progress < 1.0 {
            return;
        }

        debug!("transition finished (entry: {})", wipe.entry);
        self.active = None;
        if let Some(on_complete) = self.pending.take() {
            on_complete(host);
        }
    }

    /// Radius that reaches the farthest screen corner from `center`.
    fn cover_radius(&self, center: Vec2) -> f32 {
        let dx = center.x.max(self.width - center.x);
        let dy = center.y.max(self.height - center.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Current disc radius, if a wipe is in flight.
    pub fn radius(&self) -> Option<f32> {
        self.active.map(|w| {
            let full = self.cover_radius(w.center);
            if w.entry { full * (1.0 - w.progress) } else { full * w.progress }
        })
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let (Some(wipe), Some(radius)) = (self.active, self.radius()) else { return };
        if radius > 0.0 {
            surface.fill_circle(wipe.center, radius, wipe.color);
        }
    }
}

impl TransitionEffect for CircleWipe {
    fn start(&mut self, request: TransitionRequest) {
        if self.pending.is_some() {
            warn!("transition replaced before completion; dropping its callback");
        }
        debug!("transition started at {:?} (entry: {})", request.center, request.entry);
        self.active = Some(ActiveWipe {
            center: request.center,
            entry: request.entry,
            color: request.color,
            progress: 0.0,
        });
        self.pending = request.on_complete;
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
