//! Extrude a flat contour into a beveled solid.
//!
//! Layers are stacked along +Z: `bevel_segments` rings growing out to the full
//! bevel on the back face, `steps + 1` rings through the body, then the front
//! bevel shrinking back in. Lids close the first and last ring. The result is
//! a non-indexed triangle list with flat per-face normals.

use crate::error::GeometryError;
use crate::triangulate::triangulate;
use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = f32::EPSILON;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub steps: usize,
    pub bevel_enabled: bool,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_offset: f32,
    pub bevel_segments: usize,
}

impl Default for ExtrudeSettings {
    fn default() -> Self {
        Self {
            depth: 1.0,
            steps: 1,
            bevel_enabled: true,
            bevel_thickness: 0.2,
            bevel_size: 0.1,
            bevel_offset: 0.0,
            bevel_segments: 3,
        }
    }
}

/// Triangle soup with flat normals.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(lo, hi), v| {
                let p = Vec3::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    /// Translate so the bounding box is centered on the origin.
    pub fn center(&mut self) -> &mut Self {
        if self.vertices.is_empty() {
            return self;
        }
        let (lo, hi) = self.bounding_box();
        let offset = -(lo + hi) * 0.5;
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) + offset).to_array();
        }
        self
    }

    /// Uniform scale; normals are unaffected by a positive uniform factor.
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) * factor).to_array();
        }
        self
    }

    fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
        for p in [a, b, c] {
            self.vertices.push(Vertex {
                position: p.to_array(),
                normal,
            });
        }
    }
}

/// Direction to move `pt` so both adjacent edges shift one unit to their left.
///
/// For a clockwise contour "left" is outward. The result is capped so sharp
/// corners do not shoot the bevel far past the outline.
fn bevel_vec(pt: Vec2, prev: Vec2, next: Vec2) -> Vec2 {
    let v_prev = pt - prev;
    let v_next = next - pt;
    let prev_len_sq = v_prev.length_squared();
    let turn = v_prev.perp_dot(v_next);

    let (trans, shrink_by) = if turn.abs() > EPSILON {
        let prev_len = prev_len_sq.sqrt();
        let next_len = v_next.length();
        let prev_shift = prev + v_prev.perp() / prev_len;
        let next_shift = next + v_next.perp() / next_len;
        let sf = (next_shift - prev_shift).perp_dot(v_next) / turn;
        let trans = prev_shift + v_prev * sf - pt;
        let trans_len_sq = trans.length_squared();
        if trans_len_sq <= 2.0 {
            return trans;
        }
        (trans, (trans_len_sq / 2.0).sqrt())
    } else {
        let same_direction = if v_prev.x > EPSILON {
            v_next.x > EPSILON
        } else if v_prev.x < -EPSILON {
            v_next.x < -EPSILON
        } else {
            v_prev.y.signum() == v_next.y.signum()
        };
        if same_direction {
            (v_prev.perp(), prev_len_sq.sqrt())
        } else {
            (v_prev, (prev_len_sq / 2.0).sqrt())
        }
    };
    trans / shrink_by
}

/// Extrude a clockwise, duplicate-free contour.
pub fn extrude(contour: &[Vec2], settings: &ExtrudeSettings) -> Result<MeshData, GeometryError> {
    let n = contour.len();
    if n < 3 {
        return Err(GeometryError::DegenerateOutline(n));
    }
    let lid = triangulate(contour)?;

    let (bevel_segments, thickness, size, offset) = if settings.bevel_enabled {
        (
            settings.bevel_segments,
            settings.bevel_thickness,
            settings.bevel_size,
            settings.bevel_offset,
        )
    } else {
        (0, 0.0, 0.0, 0.0)
    };
    let steps = settings.steps.max(1);

    let movements: Vec<Vec2> = (0..n)
        .map(|i| bevel_vec(contour[i], contour[(i + n - 1) % n], contour[(i + 1) % n]))
        .collect();
    let ring = |bs: f32, z: f32| -> Vec<Vec3> {
        contour
            .iter()
            .zip(&movements)
            .map(|(p, m)| (*p + *m * bs).extend(z))
            .collect()
    };

    let mut layers: Vec<Vec<Vec3>> = Vec::with_capacity(bevel_segments * 2 + steps + 1);
    for b in 0..bevel_segments {
        let t = b as f32 / bevel_segments as f32;
        let z = thickness * (t * FRAC_PI_2).cos();
        let bs = size * (t * FRAC_PI_2).sin() + offset;
        layers.push(ring(bs, -z));
    }
    let full = size + offset;
    layers.push(ring(full, 0.0));
    for s in 1..=steps {
        layers.push(ring(full, settings.depth / steps as f32 * s as f32));
    }
    for b in (0..bevel_segments).rev() {
        let t = b as f32 / bevel_segments as f32;
        let z = thickness * (t * FRAC_PI_2).cos();
        let bs = size * (t * FRAC_PI_2).sin() + offset;
        layers.push(ring(bs, settings.depth + z));
    }

    let mut mesh = MeshData::default();
    let bottom = &layers[0];
    let top = &layers[layers.len() - 1];
    for [a, b, c] in &lid {
        mesh.push_triangle(bottom[*c], bottom[*b], bottom[*a]);
    }
    for [a, b, c] in &lid {
        mesh.push_triangle(top[*a], top[*b], top[*c]);
    }

    for j in 0..n {
        let k = (j + n - 1) % n;
        for pair in layers.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            let (a, b, c, d) = (lo[j], lo[k], hi[k], hi[j]);
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }

    if mesh.vertices.is_empty() {
        return Err(GeometryError::EmptyMesh);
    }
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_cw() -> Vec<Vec2> {
        vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, -1.0),
        ]
    }

    #[test]
    fn bevel_vec_points_outward_on_square_corner() {
        let c = unit_square_cw();
        let v = bevel_vec(c[1], c[0], c[2]);
        assert!(v.x < 0.0 && v.y > 0.0);
        assert!((v.x.abs() - 1.0).abs() < 1e-5 && (v.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn bevel_vec_on_straight_run_is_unit_normal() {
        let v = bevel_vec(Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0));
        assert!((v - Vec2::new(-1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn flat_box_without_bevel_spans_depth() {
        let settings = ExtrudeSettings {
            depth: 2.0,
            bevel_enabled: false,
            ..Default::default()
        };
        let mesh = extrude(&unit_square_cw(), &settings).unwrap();
        let (lo, hi) = mesh.bounding_box();
        assert!((lo - Vec3::new(-1.0, -1.0, 0.0)).length() < 1e-6);
        assert!((hi - Vec3::new(1.0, 1.0, 2.0)).length() < 1e-6);
        // two lids of two triangles, four walls of two triangles
        assert_eq!(mesh.triangle_count(), 4 + 8);
    }

    #[test]
    fn box_normals_point_away_from_center() {
        let settings = ExtrudeSettings {
            depth: 2.0,
            bevel_enabled: false,
            ..Default::default()
        };
        let mesh = extrude(&unit_square_cw(), &settings).unwrap();
        let center = Vec3::new(0.0, 0.0, 1.0);
        for tri in mesh.vertices.chunks(3) {
            let centroid = tri
                .iter()
                .map(|v| Vec3::from(v.position))
                .sum::<Vec3>()
                / 3.0;
            let n = Vec3::from(tri[0].normal);
            assert!(n.dot(centroid - center) > 0.0, "inward face at {centroid:?}");
        }
    }

    #[test]
    fn bevel_widens_the_middle_and_thickens_the_ends() {
        let settings = ExtrudeSettings {
            depth: 2.0,
            bevel_thickness: 0.5,
            bevel_size: 0.25,
            bevel_segments: 4,
            ..Default::default()
        };
        let mesh = extrude(&unit_square_cw(), &settings).unwrap();
        let (lo, hi) = mesh.bounding_box();
        assert!((lo.z + 0.5).abs() < 1e-6 && (hi.z - 2.5).abs() < 1e-6);
        assert!((hi.x - 1.25).abs() < 1e-5);
    }

    #[test]
    fn center_and_scale() {
        let mut mesh = extrude(&unit_square_cw(), &ExtrudeSettings::default()).unwrap();
        mesh.center().scale(0.5);
        let (lo, hi) = mesh.bounding_box();
        assert!(((lo + hi) * 0.5).length() < 1e-6);
    }
}
