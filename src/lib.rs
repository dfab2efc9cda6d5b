//! # ringlet
//!
//! Scroll-choreographed ambient 3D scenes: two rotating gold rings and a
//! field of drifting heart particles behind a scrolling page.
//!
//! The crate splits cleanly in two. The numeric core (engine, timeline,
//! particle field, page model) is pure and deterministic: it takes a clock
//! value and a scroll offset and produces transforms. The visual layer
//! (window, GPU) feeds it wall time and mouse wheel input and draws the
//! result with wgpu.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ringlet::prelude::*;
//!
//! fn main() {
//!     let page = Page::standard();
//!     let mut engine = Engine::new().with_seed(42).with_page(&page);
//!     choreography::install(engine.timeline_mut(), &page);
//!
//!     // Drive it yourself...
//!     engine.scroll_by(240.0);
//!     engine.tick(0.016);
//!
//!     // ...or hand it to the windowed runner.
//!     let countdown = Countdown::new(1_769_875_200_000);
//!     ringlet::window::run(engine, countdown).unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Page
//!
//! A [`Page`](page::Page) is the scroll model: stacked sections measured in
//! viewport heights, each holding reveal items. [`Page::standard`](page::Page::standard)
//! builds the seven-section wedding layout the crate ships with.
//!
//! ### Timeline
//!
//! A [`ScrollTimeline`](timeline::ScrollTimeline) maps scroll progress
//! through named trigger regions onto transform channels (position,
//! rotation, scale) and eased reveal poses. [`choreography::install`]
//! registers the stock bindings.
//!
//! ### Engine
//!
//! The [`Engine`](engine::Engine) owns the scene and advances it one `tick`
//! at a time. It has no clock of its own, so tests can feed it synthetic
//! time and get bit-identical runs from the same seed.

pub mod camera;
pub mod choreography;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod field;
pub mod gpu;
pub mod page;
pub mod scene;
pub mod scroll;
pub mod spawn;
pub mod time;
pub mod timeline;
pub mod visuals;
pub mod window;

pub use glam::{Vec2, Vec3};

pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::choreography;
    pub use crate::countdown::{Countdown, CountdownDisplay};
    pub use crate::engine::Engine;
    pub use crate::error::{EngineError, GpuError};
    pub use crate::field::ParticleField;
    pub use crate::page::{ItemClass, Page};
    pub use crate::scene::{ObjectId, Particle, Ring, Tone, Transform};
    pub use crate::scroll::{Band, Edge, TriggerRegion, Viewport};
    pub use crate::timeline::{Binding, Channel, RevealSpec, ScrollTimeline};
    pub use glam::{Vec2, Vec3};
}
