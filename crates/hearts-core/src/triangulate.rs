//! Ear clipping for simple polygons without holes.

use crate::error::GeometryError;
use crate::shape::signed_area;
use glam::Vec2;

const AREA_EPS: f32 = 1e-9;

#[inline]
fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

fn strictly_inside(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    cross(a, b, p) > 0.0 && cross(b, c, p) > 0.0 && cross(c, a, p) > 0.0
}

fn is_ear(points: &[Vec2], ring: &[usize], ia: usize, ib: usize, ic: usize) -> bool {
    let (a, b, c) = (points[ia], points[ib], points[ic]);
    if cross(a, b, c) <= AREA_EPS {
        return false;
    }
    ring.iter()
        .filter(|&&k| k != ia && k != ib && k != ic)
        .map(|&k| points[k])
        .filter(|p| *p != a && *p != b && *p != c)
        .all(|p| !strictly_inside(p, a, b, c))
}

/// Triangulate a ring of points into index triples.
///
/// Output triangles are counter-clockwise regardless of the input winding.
pub fn triangulate(points: &[Vec2]) -> Result<Vec<[usize; 3]>, GeometryError> {
    let n = points.len();
    if n < 3 {
        return Err(GeometryError::DegenerateOutline(n));
    }
    let mut ring: Vec<usize> = (0..n).collect();
    if signed_area(points) < 0.0 {
        ring.reverse();
    }

    let mut tris = Vec::with_capacity(n - 2);
    let mut i = 0usize;
    let mut misses = 0usize;
    while ring.len() > 3 {
        let m = ring.len();
        let ia = ring[(i + m - 1) % m];
        let ib = ring[i % m];
        let ic = ring[(i + 1) % m];

        // collinear corner contributes no area; drop it without emitting
        if cross(points[ia], points[ib], points[ic]).abs() <= AREA_EPS {
            ring.remove(i % m);
            i %= m - 1;
            misses = 0;
            continue;
        }
        if is_ear(points, &ring, ia, ib, ic) {
            tris.push([ia, ib, ic]);
            ring.remove(i % m);
            i %= m - 1;
            misses = 0;
            continue;
        }

        i = (i + 1) % m;
        misses += 1;
        if misses > m {
            return Err(GeometryError::Triangulation { remaining: m });
        }
    }
    let (a, b, c) = (ring[0], ring[1], ring[2]);
    if cross(points[a], points[b], points[c]).abs() > AREA_EPS {
        tris.push([a, b, c]);
    }
    Ok(tris)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::heart_outline;

    fn area_of(points: &[Vec2], tris: &[[usize; 3]]) -> f32 {
        tris.iter()
            .map(|t| 0.5 * cross(points[t[0]], points[t[1]], points[t[2]]))
            .sum()
    }

    #[test]
    fn square_becomes_two_ccw_triangles() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ];
        let tris = triangulate(&pts).unwrap();
        assert_eq!(tris.len(), 2);
        for t in &tris {
            assert!(cross(pts[t[0]], pts[t[1]], pts[t[2]]) > 0.0);
        }
        assert!((area_of(&pts, &tris) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn concave_heart_area_is_preserved() {
        let pts = heart_outline().extract_points(12);
        let tris = triangulate(&pts).unwrap();
        let expected = signed_area(&pts).abs();
        assert!((area_of(&pts, &tris) - expected).abs() < 1e-3 * expected);
        assert!(tris.len() <= pts.len() - 2);
    }

    #[test]
    fn collinear_points_are_skipped() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let tris = triangulate(&pts).unwrap();
        assert!((area_of(&pts, &tris) - 4.0).abs() < 1e-5);
    }
}
