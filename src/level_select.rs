//! Level-select screen.
//!
//! Per frame, in order:
//! 1. backdrop and particles advance;
//! 2. while `Idle`: keyboard steps, then pointer hover, then confirmation
//!    (key confirms the selection, click confirms the tile under the pointer).
//!    The hover cue fires once if the frame ended on a different tile;
//! 3. every tile scale eases toward its target.
//!
//! Tiles are laid out in world space and drawn through the camera captured
//! on the last `init`/`update`, the same one used to map the pointer.
//!
//! Confirming latches the index, fires a particle burst and starts an exit
//! transition whose continuation loads the level and switches to the game
//! scene. From then on the screen only animates.

use glam::Vec2;
use log::debug;

use crate::animation::ScaleAnimator;
use crate::backdrop::ScrollingBackdrop;
use crate::camera::Camera;
use crate::catalog::LevelCatalog;
use crate::color::Color;
use crate::config::{ConfigError, ScreenConfig};
use crate::geometry::{GridLayout, Rect};
use crate::input::FrameInput;
use crate::particles::ParticleSystem;
use crate::render::Surface;
use crate::scene::{SceneHost, SceneId, Screen, ScreenContext};
use crate::selection::{Direction, SelectionState};
use crate::transition::TransitionRequest;

/// Particles spawned on confirmation.
const CONFIRM_BURST: usize = 24;
/// Label baseline sits this far below the tile centre.
const LABEL_BASELINE_OFFSET: f32 = 8.0;
const TILE_BORDER_WIDTH: f32 = 2.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Browsing: navigation and confirmation are live.
    Idle,
    /// A level-start transition is in flight for `latched`. Input is ignored.
    Transitioning { latched: usize },
}

pub struct LevelSelectScreen {
    config: ScreenConfig,
    layout: GridLayout,
    selection: SelectionState,
    scales: ScaleAnimator,
    particles: ParticleSystem,
    backdrop: ScrollingBackdrop,
    view: Camera,
    phase: Phase,
}

impl LevelSelectScreen {
    /// Fails if `config` does not pass `ScreenConfig::validate`.
    pub fn new<C: LevelCatalog + ?Sized>(
        config: ScreenConfig,
        catalog: &C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let level_count = catalog.level_count();
        Ok(Self {
            layout: GridLayout::from_config(&config, level_count),
            selection: SelectionState::new(level_count),
            scales: ScaleAnimator::new(level_count, config.rest_scale, config.hover_scale, config.smoothing),
            particles: ParticleSystem::create(config.particle_size, config.particle_count),
            backdrop: ScrollingBackdrop::new(
                config.viewport_width,
                config.viewport_height,
                config.backdrop_cell,
                config.backdrop_speed,
            ),
            view: Camera::default(),
            phase: Phase::Idle,
            config,
        })
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &ScreenConfig { &self.config }
    pub fn layout(&self) -> &GridLayout { &self.layout }
    pub fn selected(&self) -> usize { self.selection.selected() }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn scales(&self) -> &ScaleAnimator { &self.scales }
    pub fn particles(&self) -> &ParticleSystem { &self.particles }
    pub fn backdrop(&self) -> &ScrollingBackdrop { &self.backdrop }

    /// Index latched by the confirmation in flight, if any.
    pub fn latched(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { latched } => Some(latched),
        }
    }

    /// Tile `index` as drawn this frame: scaled, then moved through the camera.
    pub fn tile_on_screen(&self, index: usize) -> Rect {
        self.layout
            .rect_for(index)
            .scaled_about_center(self.scales.scale(index))
            .translated(self.view.world_to_screen(Vec2::ZERO))
    }

    fn screen_center(&self) -> Vec2 {
        Vec2::new(self.config.viewport_width * 0.5, self.config.viewport_height * 0.5)
    }

    // ── Reducers ───────────────────────────────────────────────────────────

    fn apply_keyboard(&mut self, input: &FrameInput) {
        let columns = self.layout.column_count();
        let pressed = [input.left, input.right, input.up, input.down];
        for (direction, _) in Direction::ALL.into_iter().zip(pressed).filter(|(_, p)| *p) {
            self.selection.step(direction, columns);
        }
    }

    fn apply_hover(&mut self, hovered: Option<usize>) {
        if let Some(index) = hovered {
            if self.selection.hover(index) {
                debug!("hover -> level {index}");
            }
        }
    }

    fn confirm(&mut self, ctx: &mut ScreenContext<'_>, index: usize) {
        if self.phase != Phase::Idle {
            return;
        }
        debug!("confirmed level {index}");
        self.phase = Phase::Transitioning { latched: index };
        ctx.cues.on_confirmed();

        let burst_at = self.view.world_to_screen(self.layout.rect_for(index).center());
        self.particles.emit(burst_at.x, burst_at.y, CONFIRM_BURST);

        ctx.transitions.start(TransitionRequest::exit(
            self.screen_center(),
            Color::DEEP_BLUE,
            Box::new(move |host: &mut dyn SceneHost| {
                debug!("loading level {index}");
                host.load(index);
                host.request_scene(SceneId::Game);
            }),
        ));
    }
}

impl Screen for LevelSelectScreen {
    fn init(&mut self, ctx: &mut ScreenContext<'_>) {
        self.selection.reset();
        self.scales.reset();
        self.particles.clear();
        self.backdrop.reset();
        self.phase = Phase::Idle;
        ctx.camera.reset();
        self.view = ctx.camera.clone();
        ctx.transitions.start(TransitionRequest::entry(self.screen_center(), Color::DEEP_BLUE));
    }

    fn update(&mut self, ctx: &mut ScreenContext<'_>, input: &FrameInput, dt: f32) {
        self.backdrop.advance(dt);
        self.particles.advance(dt);
        self.view = ctx.camera.clone();

        if self.phase == Phase::Idle && self.layout.level_count() > 0 {
            let pointer = self.view.screen_to_world(input.pointer);
            let hovered = self.layout.hit_test(pointer.x, pointer.y);

            let before = self.selection.selected();
            self.apply_keyboard(input);
            self.apply_hover(hovered);
            if self.selection.selected() != before {
                ctx.cues.on_hover_changed();
            }

            if input.confirm {
                let selected = self.selection.selected();
                self.confirm(ctx, selected);
            }
            if input.click {
                if let Some(index) = hovered {
                    self.confirm(ctx, index);
                }
            }
        }

        self.scales.tick(self.selection.selected());
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.backdrop.draw(surface);

        let shift = self.view.world_to_screen(Vec2::ZERO);
        surface.fill_round_rect(
            self.config.panel_rect().translated(shift),
            self.config.panel_radius,
            Color::DARK_PURPLE,
        );

        let radius = self.config.tile_radius;
        for i in 0..self.layout.level_count() {
            let tile = self.tile_on_screen(i);
            surface.fill_round_rect(tile, radius, Color::BLUE);
            surface.stroke_round_rect(tile, radius, TILE_BORDER_WIDTH, Color::DARK_BLUE);

            let center = tile.center();
            surface.fill_text(
                Vec2::new(center.x, center.y + LABEL_BASELINE_OFFSET),
                &(i + 1).to_string(),
                self.config.label_size,
                Color::WHITE,
            );
        }

        self.particles.draw(surface, Color::LIGHT_GREEN);
    }
}
