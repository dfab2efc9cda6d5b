//! The animation engine: one `tick` advances the whole scene.
//!
//! The engine owns the rings, the particle field, the scroll timeline, the
//! camera and the viewport. It has no clock of its own: callers pass `now`
//! in seconds, so the windowed runner feeds wall time and tests feed a
//! synthetic sequence.
//!
//! # Composition order
//!
//! Each tick runs five steps in a fixed order:
//!
//! 1. scroll bindings write their channels for the current viewport,
//! 2. procedural ring motion (constant spin, sine float on y),
//! 3. particle field advance,
//! 4. camera sway,
//! 5. reveal smoothing toward the scroll-derived targets.
//!
//! Step 2 runs after step 1, so the float owns `position.y` on both rings
//! every frame while the bindings keep x, z-rotation and scale. Scroll
//! bindings that target y stay registered and simply never win the frame.
//!
//! ```ignore
//! let mut engine = Engine::new().with_seed(7).with_page(&page);
//! choreography::install(engine.timeline_mut(), &page);
//!
//! engine.scroll_by(240.0);
//! engine.tick(now_secs);
//! ```

use glam::Vec3;

use crate::camera::Camera;
use crate::field::ParticleField;
use crate::page::Page;
use crate::scene::{Particle, Ring};
use crate::scroll::Viewport;
use crate::spawn::SpawnContext;
use crate::timeline::ScrollTimeline;

/// Particle count the original scene ships with.
pub const DEFAULT_PARTICLE_COUNT: usize = 80;

/// Per-tick ring spin, radians.
const RING_SPIN_X: f32 = 0.001;
const RING_SPIN_Y: f32 = 0.002;
/// Amplitude of the ring float on y.
const FLOAT_AMPLITUDE: f32 = 0.1;

/// Camera sway rates (rad/s) and amplitudes.
const SWAY_X_RATE: f32 = 0.3;
const SWAY_Y_RATE: f32 = 0.2;
const SWAY_X_AMPLITUDE: f32 = 0.5;
const SWAY_Y_AMPLITUDE: f32 = 0.3;
const CAMERA_DISTANCE: f32 = 8.0;

/// Owns and advances the scene. See the module docs for the tick order.
pub struct Engine {
    seed: u64,
    particle_count: usize,
    rings: [Ring; 2],
    field: ParticleField,
    timeline: ScrollTimeline,
    camera: Camera,
    viewport: Viewport,
    max_scroll: f32,
    last_now: Option<f32>,
}

impl Engine {
    /// Engine with the default particle count, seed 0 and a one-viewport
    /// page (no scrolling until [`with_page`](Self::with_page) is called).
    pub fn new() -> Self {
        let mut ctx = SpawnContext::seeded(0);
        Self {
            seed: 0,
            particle_count: DEFAULT_PARTICLE_COUNT,
            rings: ctx.spawn_rings(),
            field: ParticleField::new(ctx.spawn_particles(DEFAULT_PARTICLE_COUNT)),
            timeline: ScrollTimeline::new(),
            camera: Camera::new(),
            viewport: Viewport::new(0.0, 1000.0),
            max_scroll: 0.0,
            last_now: None,
        }
    }

    /// Reseed and respawn the scene.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.respawn();
        self
    }

    /// Change the particle count and respawn the scene.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self.respawn();
        self
    }

    /// Adopt the page's viewport height and scroll range.
    ///
    /// Regions and choreography are registered separately on the timeline;
    /// this only sizes the scrollable space.
    pub fn with_page(mut self, page: &Page) -> Self {
        self.viewport = Viewport::new(0.0, page.viewport_height());
        self.max_scroll = page.max_scroll();
        self
    }

    fn respawn(&mut self) {
        let mut ctx = SpawnContext::seeded(self.seed);
        self.rings = ctx.spawn_rings();
        self.field = ParticleField::new(ctx.spawn_particles(self.particle_count));
        log::debug!(
            "respawned scene: seed={} particles={}",
            self.seed,
            self.particle_count
        );
    }

    /// Advance the scene to `now_secs`.
    pub fn tick(&mut self, now_secs: f32) {
        let dt = self
            .last_now
            .map(|t| (now_secs - t).max(0.0))
            .unwrap_or(0.0);
        self.last_now = Some(now_secs);

        // 1. Scroll writers first.
        self.timeline.apply(&self.viewport, &mut self.rings);

        // 2. Procedural ring motion. Spin accumulates; the float overwrites
        //    y after the bindings, phase-shifted per ring.
        for ring in &mut self.rings {
            ring.transform.rotation.x += RING_SPIN_X;
            ring.transform.rotation.y += RING_SPIN_Y;
            ring.transform.position.y = (now_secs + ring.index as f32).sin() * FLOAT_AMPLITUDE;
        }

        // 3. Particle drift and wrap.
        self.field.tick();

        // 4. Camera sway around the fixed viewing distance.
        self.camera.eye = Vec3::new(
            (now_secs * SWAY_X_RATE).sin() * SWAY_X_AMPLITUDE,
            (now_secs * SWAY_Y_RATE).cos() * SWAY_Y_AMPLITUDE,
            CAMERA_DISTANCE,
        );
        self.camera.target = Vec3::ZERO;

        // 5. Reveal poses ease toward their scroll targets.
        self.timeline.update_reveals(&self.viewport, dt);
    }

    /// Set the scroll offset, clamped to the page's scrollable range.
    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.viewport.scroll_y = scroll_y.clamp(0.0, self.max_scroll);
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&mut self, delta: f32) {
        self.set_scroll(self.viewport.scroll_y + delta);
    }

    #[inline]
    pub fn scroll_y(&self) -> f32 {
        self.viewport.scroll_y
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn rings(&self) -> &[Ring; 2] {
        &self.rings
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn timeline(&self) -> &ScrollTimeline {
        &self.timeline
    }

    #[inline]
    pub fn timeline_mut(&mut self) -> &mut ScrollTimeline {
        &mut self.timeline
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn page() -> Page {
        Page::standard()
    }

    fn engine_with_choreography() -> Engine {
        let page = page();
        let mut engine = Engine::new().with_seed(1).with_page(&page);
        crate::choreography::install(engine.timeline_mut(), &page);
        engine
    }

    #[test]
    fn test_spin_is_strict_per_tick() {
        let mut engine = engine_with_choreography();
        let rx0 = engine.rings()[0].transform.rotation.x;
        engine.tick(0.0);
        engine.tick(1.0 / 60.0);
        let rx = engine.rings()[0].transform.rotation.x;
        assert!((rx - rx0 - 2.0 * 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_float_owns_y() {
        let mut engine = engine_with_choreography();
        // Deep in the story section, whose bindings target y.
        engine.set_scroll(2500.0);
        let now = 3.7;
        engine.tick(now);
        for ring in engine.rings() {
            let expected = (now + ring.index as f32).sin() * 0.1;
            assert!((ring.transform.position.y - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_scroll_clamped_to_page() {
        let mut engine = engine_with_choreography();
        engine.set_scroll(-100.0);
        assert_eq!(engine.scroll_y(), 0.0);
        engine.set_scroll(1e9);
        assert_eq!(engine.scroll_y(), 7000.0);
    }

    #[test]
    fn test_camera_sway_bounded() {
        let mut engine = engine_with_choreography();
        for i in 0..200 {
            engine.tick(i as f32 * 0.1);
            let eye = engine.camera().eye;
            assert!(eye.x.abs() <= 0.5 + 1e-6);
            assert!(eye.y.abs() <= 0.3 + 1e-6);
            assert_eq!(eye.z, 8.0);
        }
    }

    #[test]
    fn test_reveals_present_for_page_items() {
        let engine = engine_with_choreography();
        let items = page().items().len();
        assert_eq!(engine.timeline().reveals().len(), items);
        assert!(items > 0);
    }
}
