//! Scroll-driven timeline: bindings and reveals.
//!
//! A [`Binding`] pins one transform channel of a ring to a scroll band:
//! every apply recomputes progress from the current viewport and writes
//! `lerp(from, to, p)` straight into the channel. No easing state is kept,
//! so scrolling backward retraces the exact same values.
//!
//! A [`RevealItem`] is the page-element counterpart: a hidden pose that eases
//! toward its scroll-derived target each tick instead of jumping, still fully
//! reversible. The host reads the smoothed values back to style its UI.
//!
//! Bindings fail open: a binding whose region was never registered simply
//! does nothing, independent of every other binding.

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use crate::scene::{ObjectId, Ring, Transform};
use crate::scroll::{Band, TriggerRegion, Viewport};

/// Transform channel a binding writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    /// Writes the same value to all three scale axes.
    ScaleUniform,
}

impl Channel {
    /// Write `value` into the channel of `transform`.
    pub fn write(self, transform: &mut Transform, value: f32) {
        match self {
            Channel::PositionX => transform.position.x = value,
            Channel::PositionY => transform.position.y = value,
            Channel::PositionZ => transform.position.z = value,
            Channel::RotationX => transform.rotation.x = value,
            Channel::RotationY => transform.rotation.y = value,
            Channel::RotationZ => transform.rotation.z = value,
            Channel::ScaleUniform => transform.scale = Vec3::splat(value),
        }
    }
}

/// One scroll-scrubbed channel animation on a scene object.
///
/// Read-only after registration; there is no unregister.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Name of the trigger region driving this binding.
    pub region: String,
    pub target: ObjectId,
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
    pub band: Band,
}

/// Hidden starting pose of a reveal, relative to the element's rest pose.
///
/// Rest is fully visible and unmoved: opacity 1, zero offset, zero rotation,
/// unit scale. Progress 0 shows this pose, progress 1 the rest pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub opacity: f32,
    /// Pixel offset from rest, +y down (page coordinates).
    pub offset: Vec2,
    /// Degrees.
    pub rotation: f32,
    pub scale: f32,
}

impl RevealSpec {
    /// A pose that is already at rest (reveals nothing).
    pub const REST: Self = Self {
        opacity: 1.0,
        offset: Vec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    /// Pose at the given progress: the hidden pose blended toward rest.
    pub fn at(&self, p: f32) -> RevealState {
        let p = p.clamp(0.0, 1.0);
        RevealState {
            opacity: self.opacity + (1.0 - self.opacity) * p,
            offset: self.offset * (1.0 - p),
            rotation: self.rotation * (1.0 - p),
            scale: self.scale + (1.0 - self.scale) * p,
        }
    }
}

/// Current displayed pose of a reveal element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    pub opacity: f32,
    pub offset: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

impl RevealState {
    fn approach(&mut self, target: &RevealState, alpha: f32) {
        self.opacity += (target.opacity - self.opacity) * alpha;
        self.offset += (target.offset - self.offset) * alpha;
        self.rotation += (target.rotation - self.rotation) * alpha;
        self.scale += (target.scale - self.scale) * alpha;
    }
}

/// A page element whose pose eases toward its scroll-derived target.
#[derive(Debug, Clone)]
pub struct RevealItem {
    /// Name of the trigger region driving this item (usually its own box).
    pub region: String,
    pub band: Band,
    pub spec: RevealSpec,
    /// Lag time constant in seconds. Zero snaps to the target.
    pub smoothing: f32,
    state: RevealState,
}

impl RevealItem {
    pub fn new(region: impl Into<String>, band: Band, spec: RevealSpec, smoothing: f32) -> Self {
        Self {
            region: region.into(),
            band,
            spec,
            smoothing,
            // The page starts unscrolled, elements start hidden.
            state: spec.at(0.0),
        }
    }

    /// The currently displayed pose.
    #[inline]
    pub fn state(&self) -> RevealState {
        self.state
    }
}

/// Registry of trigger regions, ring bindings and reveal items.
#[derive(Debug, Default)]
pub struct ScrollTimeline {
    regions: HashMap<String, TriggerRegion>,
    bindings: Vec<Binding>,
    reveals: Vec<RevealItem>,
}

impl ScrollTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger region; a region re-registered under the same name
    /// replaces the old geometry.
    pub fn add_region(&mut self, region: TriggerRegion) {
        self.regions.insert(region.name.clone(), region);
    }

    /// Register a binding. Bindings are applied in registration order.
    pub fn register(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    pub fn add_reveal(&mut self, item: RevealItem) {
        self.reveals.push(item);
    }

    #[inline]
    pub fn region(&self, name: &str) -> Option<&TriggerRegion> {
        self.regions.get(name)
    }

    #[inline]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[inline]
    pub fn reveals(&self) -> &[RevealItem] {
        &self.reveals
    }

    /// Recompute every ring binding from the current viewport and write the
    /// results into `rings`.
    ///
    /// Bindings with a missing region or an out-of-range target are skipped.
    /// Calling this twice with the same viewport writes the same values.
    pub fn apply(&self, viewport: &Viewport, rings: &mut [Ring]) {
        for binding in &self.bindings {
            let Some(region) = self.regions.get(&binding.region) else {
                continue;
            };
            let ObjectId::Ring(index) = binding.target else {
                continue;
            };
            let Some(ring) = rings.get_mut(index) else {
                continue;
            };

            let p = binding.band.progress(region, viewport);
            let value = binding.from + (binding.to - binding.from) * p;
            binding.channel.write(&mut ring.transform, value);
        }
    }

    /// Advance every reveal's displayed pose toward its scroll target.
    ///
    /// The target is recomputed from the viewport each call; the displayed
    /// pose approaches it exponentially with the item's smoothing time
    /// constant, so a direction change mid-tween just retargets the approach.
    pub fn update_reveals(&mut self, viewport: &Viewport, dt: f32) {
        for item in &mut self.reveals {
            let Some(region) = self.regions.get(&item.region) else {
                continue;
            };

            let p = item.band.progress(region, viewport);
            let target = item.spec.at(p);

            if item.smoothing <= 0.0 {
                item.state = target;
            } else if dt > 0.0 {
                let alpha = 1.0 - (-dt / item.smoothing).exp();
                item.state.approach(&target, alpha);
            }
        }
    }
}
