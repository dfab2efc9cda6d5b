//! Fixed geometry and materials for the scene's two object kinds.
//!
//! Everything here is pure data generation: torus meshes for the rings and a
//! flattened heart outline for the particles. No GPU types, no side effects.

use glam::{Vec2, Vec3};

/// CPU-side triangle mesh: positions, per-vertex normals, triangle indices.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of triangle indices.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Cosmetic surface parameters for a ring. No behavioral contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMaterial {
    /// Base RGB color.
    pub color: Vec3,
    /// 0 = dielectric, 1 = fully metallic.
    pub metalness: f32,
    /// 0 = mirror, 1 = fully diffuse.
    pub roughness: f32,
    /// Self-illumination strength applied to the base color.
    pub emissive_intensity: f32,
}

impl RingMaterial {
    /// Polished gold, the look both rings share.
    pub fn gold(color: Vec3) -> Self {
        Self {
            color,
            metalness: 0.98,
            roughness: 0.15,
            emissive_intensity: 0.1,
        }
    }
}

/// Classic gold (ring 0).
pub const GOLD: Vec3 = Vec3::new(1.0, 0.843, 0.0);
/// Warmer, slightly muted gold (ring 1).
pub const WARM_GOLD: Vec3 = Vec3::new(0.957, 0.816, 0.247);

/// Generate a torus in the XY plane, tube wrapping around Z.
///
/// `radius` is the distance from torus center to tube center, `tube` the
/// cross-section radius. Vertex grid is `(radial_segments + 1) x
/// (tubular_segments + 1)` with the seam duplicated so normals stay smooth
/// across it.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    use std::f32::consts::TAU;

    let mut positions = Vec::new();
    let mut normals = Vec::new();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;

            let x = (radius + tube * v.cos()) * u.cos();
            let y = (radius + tube * v.cos()) * u.sin();
            let z = tube * v.sin();

            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (Vec3::new(x, y, z) - center).normalize();

            positions.push([x, y, z]);
            normals.push([normal.x, normal.y, normal.z]);
        }
    }

    let mut indices = Vec::new();
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = (tubular_segments + 1) * j + i - 1;
            let b = (tubular_segments + 1) * (j - 1) + i - 1;
            let c = (tubular_segments + 1) * (j - 1) + i;
            let d = (tubular_segments + 1) * j + i;

            indices.extend_from_slice(&[a, b, d]);
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    Mesh {
        positions,
        normals,
        indices,
    }
}

/// One cubic Bezier segment of the heart outline.
struct Cubic {
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
}

impl Cubic {
    fn at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }
}

/// Flatten the heart outline into a closed 2D polyline.
///
/// The outline starts at the notch (0, 0.25), sweeps the left lobe down to
/// the tip (0, -0.75), mirrors up the right lobe and closes back at the
/// notch. Each of the four cubics contributes `segments_per_curve` points;
/// shared joints are not duplicated.
pub fn heart_outline(segments_per_curve: u32) -> Vec<Vec2> {
    let curves = [
        Cubic {
            p0: Vec2::new(0.0, 0.25),
            p1: Vec2::new(0.0, 0.25),
            p2: Vec2::new(-0.25, 0.5),
            p3: Vec2::new(-0.25, 0.0),
        },
        Cubic {
            p0: Vec2::new(-0.25, 0.0),
            p1: Vec2::new(-0.25, -0.25),
            p2: Vec2::new(0.0, -0.5),
            p3: Vec2::new(0.0, -0.75),
        },
        Cubic {
            p0: Vec2::new(0.0, -0.75),
            p1: Vec2::new(0.0, -0.5),
            p2: Vec2::new(0.25, -0.25),
            p3: Vec2::new(0.25, 0.0),
        },
        Cubic {
            p0: Vec2::new(0.25, 0.0),
            p1: Vec2::new(0.25, 0.5),
            p2: Vec2::new(0.0, 0.25),
            p3: Vec2::new(0.0, 0.25),
        },
    ];

    let mut points = Vec::with_capacity((segments_per_curve * 4) as usize);
    for curve in &curves {
        // Skip t=1 on every curve; the next curve starts there (and the last
        // curve ends where the first began).
        for s in 0..segments_per_curve {
            let t = s as f32 / segments_per_curve as f32;
            points.push(curve.at(t));
        }
    }
    points
}

/// Triangulate the heart outline as a fan around its centroid.
///
/// The outline is star-shaped with respect to its centroid, so a plain fan
/// produces no flipped triangles. Z is 0 for every vertex; normals face +Z.
pub fn heart_mesh(segments_per_curve: u32) -> Mesh {
    let outline = heart_outline(segments_per_curve);
    let n = outline.len() as u32;

    let centroid = outline.iter().copied().sum::<Vec2>() / n as f32;

    let mut positions = Vec::with_capacity(outline.len() + 1);
    positions.push([centroid.x, centroid.y, 0.0]);
    for p in &outline {
        positions.push([p.x, p.y, 0.0]);
    }

    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];

    let mut indices = Vec::with_capacity(outline.len() * 3);
    for i in 0..n {
        let next = (i + 1) % n;
        indices.extend_from_slice(&[0, 1 + i, 1 + next]);
    }

    Mesh {
        positions,
        normals,
        indices,
    }
}
