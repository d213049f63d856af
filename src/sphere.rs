use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Floats per vertex: position, normal, uv, tangent.
pub const FLOATS_PER_VERTEX: usize = 11;

/// GPU-ready UV-sphere buffers.
///
/// Vertices are interleaved as `position.xyz normal.xyz uv tangent.xyz`;
/// the tangent follows increasing longitude so normal maps line up with
/// the equirectangular textures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SphereMesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }
}

/// Generates a UV sphere of the given radius.
///
/// `sectors` is the longitudinal resolution, `stacks` the latitudinal one;
/// both are clamped to a sane minimum.
pub fn generate(radius: f32, sectors: u32, stacks: u32) -> SphereMesh {
    let sectors = sectors.max(3);
    let stacks = stacks.max(2);

    let mut vertices =
        Vec::with_capacity(((sectors + 1) * (stacks + 1)) as usize * FLOATS_PER_VERTEX);
    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let phi = PI / 2.0 - PI * v;
        let (y, ring) = (phi.sin(), phi.cos());
        for j in 0..=sectors {
            let u = j as f32 / sectors as f32;
            let theta = 2.0 * PI * u;
            let normal = Vec3::new(ring * theta.cos(), y, ring * theta.sin());
            let position = normal * radius;
            let tangent = Vec3::new(-theta.sin(), 0.0, theta.cos());
            vertices.extend_from_slice(&[
                position.x, position.y, position.z, normal.x, normal.y, normal.z, u, v, tangent.x,
                tangent.y, tangent.z,
            ]);
        }
    }

    let mut indices = Vec::new();
    for i in 0..stacks {
        for j in 0..sectors {
            let k1 = i * (sectors + 1) + j;
            let k2 = k1 + sectors + 1;
            // Skip the degenerate triangles touching each pole.
            if i != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_is_complete() {
        let mesh = generate(1.0, 8, 6);
        assert_eq!(mesh.vertices.len() % FLOATS_PER_VERTEX, 0);
        assert_eq!(mesh.vertex_count(), (8 + 1) * (6 + 1));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn positions_sit_on_the_radius() {
        let mesh = generate(12.0, 16, 12);
        for chunk in mesh.vertices.chunks_exact(FLOATS_PER_VERTEX) {
            let p = Vec3::new(chunk[0], chunk[1], chunk[2]);
            assert!((p.length() - 12.0).abs() < 1e-4);
        }
    }

    #[test]
    fn normals_are_unit_and_radial() {
        let mesh = generate(3.0, 12, 8);
        for chunk in mesh.vertices.chunks_exact(FLOATS_PER_VERTEX) {
            let p = Vec3::new(chunk[0], chunk[1], chunk[2]);
            let n = Vec3::new(chunk[3], chunk[4], chunk[5]);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((p.normalize() - n).length() < 1e-5);
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        let mesh = generate(0.25, 24, 24);
        let count = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn tangents_are_orthogonal_to_normals_off_the_poles() {
        let mesh = generate(1.0, 16, 12);
        for chunk in mesh.vertices.chunks_exact(FLOATS_PER_VERTEX) {
            let n = Vec3::new(chunk[3], chunk[4], chunk[5]);
            let t = Vec3::new(chunk[8], chunk[9], chunk[10]);
            assert!(n.dot(t).abs() < 1e-4);
        }
    }

    #[test]
    fn tiny_resolutions_are_clamped() {
        let mesh = generate(1.0, 0, 0);
        assert!(mesh.vertex_count() >= 12);
        assert!(!mesh.indices.is_empty());
    }
}
