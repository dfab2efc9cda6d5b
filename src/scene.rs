//! Scene objects and transforms.
//!
//! The scene is tiny and fixed for the lifetime of the process: two metallic
//! rings plus a field of drifting heart particles. Objects are never created
//! or destroyed after spawn, only mutated in place each tick.

use crate::visuals::RingMaterial;
use glam::{EulerRot, Mat4, Vec3};

/// Position, Euler rotation (radians) and per-axis scale of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Transform at the given position with no rotation and unit scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Model matrix: translate, then rotate (XYZ Euler), then scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
            * Mat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Identity of a scene object, used to target timeline bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    /// One of the two rings (0 or 1).
    Ring(usize),
    /// A heart particle by field index.
    Particle(usize),
}

/// A metallic ring.
///
/// `radius` and `tube` are fixed at spawn; the transform is rewritten every
/// tick by the scroll timeline and the procedural spin/float.
#[derive(Debug, Clone)]
pub struct Ring {
    pub transform: Transform,
    /// Distance from ring center to tube center.
    pub radius: f32,
    /// Tube cross-section radius.
    pub tube: f32,
    pub material: RingMaterial,
    /// 0 or 1; phases the float motion and picks sign conventions in the
    /// choreography.
    pub index: usize,
}

/// Color family of a heart particle, drawn once at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Sage leaf green.
    Leaf,
    /// Lighter leaf green.
    LightLeaf,
    /// Pale off-white green.
    Pale,
}

impl Tone {
    /// Linear RGB color of the tone.
    pub fn color(self) -> Vec3 {
        match self {
            Tone::Leaf => Vec3::new(0.529, 0.663, 0.420),
            Tone::LightLeaf => Vec3::new(0.659, 0.753, 0.565),
            Tone::Pale => Vec3::new(0.910, 0.941, 0.894),
        }
    }
}

/// Alpha shared by all heart particles.
pub const PARTICLE_OPACITY: f32 = 0.7;

/// A drifting heart particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub transform: Transform,
    /// Per-tick position step, fixed at spawn. Not time-scaled.
    pub velocity: Vec3,
    pub tone: Tone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        let m = Transform::IDENTITY.matrix();
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_matrix_translates() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let p = t.matrix().transform_point3(Vec3::ZERO);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }

    #[test]
    fn test_matrix_scales_before_translate() {
        let t = Transform {
            position: Vec3::new(1.0, 0.0, 0.0),
            rotation: Vec3::ZERO,
            scale: Vec3::splat(2.0),
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_tone_colors_distinct() {
        assert_ne!(Tone::Leaf.color(), Tone::LightLeaf.color());
        assert_ne!(Tone::LightLeaf.color(), Tone::Pale.color());
    }
}
