//! 2D outlines built from cubic bezier segments.

use crate::error::GeometryError;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub from: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

impl CubicBezier {
    pub fn point_at(&self, t: f32) -> Vec2 {
        let u = 1.0 - t;
        self.from * (u * u * u)
            + self.c1 * (3.0 * u * u * t)
            + self.c2 * (3.0 * u * t * t)
            + self.to * (t * t * t)
    }
}

/// Closed outline made of consecutive cubic segments.
#[derive(Clone, Debug)]
pub struct Shape {
    start: Vec2,
    cursor: Vec2,
    segments: SmallVec<[CubicBezier; 4]>,
}

impl Shape {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            cursor: start,
            segments: SmallVec::new(),
        }
    }

    pub fn bezier_curve_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) -> &mut Self {
        self.segments.push(CubicBezier {
            from: self.cursor,
            c1,
            c2,
            to,
        });
        self.cursor = to;
        self
    }

    pub fn segments(&self) -> &[CubicBezier] {
        &self.segments
    }

    /// Sample the outline with `divisions` steps per segment.
    ///
    /// Consecutive duplicates and a closing point equal to the first are
    /// dropped, so the result is a ring with no repeated vertices.
    pub fn extract_points(&self, divisions: usize) -> Vec<Vec2> {
        let divisions = divisions.max(1);
        let mut points: Vec<Vec2> = vec![self.start];
        for seg in &self.segments {
            for i in 0..=divisions {
                let p = seg.point_at(i as f32 / divisions as f32);
                if points.last().is_some_and(|last| last.abs_diff_eq(p, 1e-6)) {
                    continue;
                }
                points.push(p);
            }
        }
        while points.len() > 1 && points[0].abs_diff_eq(points[points.len() - 1], 1e-6) {
            points.pop();
        }
        points
    }

    /// Sampled outline forced to clockwise winding, ready for extrusion.
    pub fn clockwise_contour(&self, divisions: usize) -> Result<Vec<Vec2>, GeometryError> {
        let mut points = self.extract_points(divisions);
        if points.len() < 3 {
            return Err(GeometryError::DegenerateOutline(points.len()));
        }
        if !is_clockwise(&points) {
            points.reverse();
        }
        Ok(points)
    }
}

/// Shoelace area; positive for counter-clockwise rings.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[(i + n - 1) % n];
        let q = points[i];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}

#[inline]
pub fn is_clockwise(points: &[Vec2]) -> bool {
    signed_area(points) < 0.0
}

/// The heart silhouette: two lobes meeting at the origin, tip at `(0, -7)`.
pub fn heart_outline() -> Shape {
    let mut shape = Shape::new(Vec2::ZERO);
    shape
        .bezier_curve_to(Vec2::new(0.0, 3.0), Vec2::new(-5.0, 3.0), Vec2::new(-5.0, 0.0))
        .bezier_curve_to(Vec2::new(-5.0, -3.0), Vec2::new(-2.5, -5.0), Vec2::new(0.0, -7.0))
        .bezier_curve_to(Vec2::new(2.5, -5.0), Vec2::new(5.0, -3.0), Vec2::new(5.0, 0.0))
        .bezier_curve_to(Vec2::new(5.0, 3.0), Vec2::new(0.0, 3.0), Vec2::ZERO);
    shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_has_four_segments_and_closes() {
        let shape = heart_outline();
        assert_eq!(shape.segments().len(), 4);
        assert_eq!(shape.segments()[3].to, Vec2::ZERO);
    }

    #[test]
    fn sampled_heart_drops_closing_duplicate() {
        let pts = heart_outline().extract_points(12);
        assert_eq!(pts.len(), 48);
        assert_eq!(pts[0], Vec2::ZERO);
    }

    #[test]
    fn authored_heart_is_counter_clockwise_and_gets_flipped() {
        let shape = heart_outline();
        assert!(!is_clockwise(&shape.extract_points(12)));
        let contour = shape.clockwise_contour(12).unwrap();
        assert!(is_clockwise(&contour));
    }

    #[test]
    fn bezier_hits_endpoints() {
        let seg = heart_outline().segments()[1];
        assert!(seg.point_at(0.0).abs_diff_eq(Vec2::new(-5.0, 0.0), 1e-6));
        assert!(seg.point_at(1.0).abs_diff_eq(Vec2::new(0.0, -7.0), 1e-6));
    }

    #[test]
    fn too_few_points_is_an_error() {
        let shape = Shape::new(Vec2::ZERO);
        assert_eq!(
            shape.clockwise_contour(12).unwrap_err(),
            GeometryError::DegenerateOutline(1)
        );
    }
}
