//! The drifting heart particle field.
//!
//! Particles advance by a fixed per-tick step and wrap at the field box with
//! exact resets, so the field never thins out: a particle leaving one face
//! reappears at the opposite face, mid-field state untouched.

use crate::scene::Particle;
use crate::spawn::{FIELD_HALF_X, FIELD_HALF_Y, FIELD_HALF_Z};

/// Per-tick cosmetic tumble applied to each particle's x and y rotation.
const SPIN_STEP: f32 = 0.01;

/// Owns the particle vector and advances it each tick.
#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle one step and wrap it back into the field box.
    ///
    /// Wrapping is an exact reset to the opposite face, never a modulo or a
    /// clamp. y only wraps at the top (particles always rise); x and z wrap
    /// both ways. Rotation tumbles by a fixed step, independent of position.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.transform.position += p.velocity;

            let pos = &mut p.transform.position;
            if pos.y > FIELD_HALF_Y {
                pos.y = -FIELD_HALF_Y;
            }
            if pos.x > FIELD_HALF_X {
                pos.x = -FIELD_HALF_X;
            } else if pos.x < -FIELD_HALF_X {
                pos.x = FIELD_HALF_X;
            }
            if pos.z > FIELD_HALF_Z {
                pos.z = -FIELD_HALF_Z;
            } else if pos.z < -FIELD_HALF_Z {
                pos.z = FIELD_HALF_Z;
            }

            p.transform.rotation.x += SPIN_STEP;
            p.transform.rotation.y += SPIN_STEP;
        }
    }
}
