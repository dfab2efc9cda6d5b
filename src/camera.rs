//! Perspective camera.

use glam::{Mat4, Vec3};

/// Right-handed perspective camera aimed at a target point.
///
/// The engine sways the eye a little each tick; the window recomputes
/// `aspect` synchronously on resize before the next frame renders.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 8.0),
            target: Vec3::ZERO,
            fovy: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_down_negative_z() {
        let camera = Camera::new();
        // A point in front of the default camera projects near clip center.
        let clip = camera.view_projection().project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5);
        assert!(clip.y.abs() < 1e-5);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn test_aspect_stretches_x() {
        let mut camera = Camera::new();
        camera.set_aspect(1.0);
        let square = camera.view_projection().project_point3(Vec3::new(1.0, 0.0, 0.0));
        camera.set_aspect(2.0);
        let wide = camera.view_projection().project_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((square.x - 2.0 * wide.x).abs() < 1e-5);
    }
}
