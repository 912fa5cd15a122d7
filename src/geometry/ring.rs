use geo::{Coord, LineString, Polygon};

use crate::math::polygon_2d::{dedup_consecutive, has_self_intersection, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::Aabb;

/// A closed planar polygon boundary.
///
/// Once [`corrected`](Ring::correct), the last vertex repeats the first and
/// the vertices wind counter-clockwise, so [`area`](Ring::area) is positive.
/// Self-intersecting rings may exist transiently but must be filtered
/// before they become physics shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    points: Vec<Point2>,
}

/// The ordered, possibly empty, result of a boolean operation.
pub type RingCollection = Vec<Ring>;

impl Ring {
    /// Wraps a raw vertex list without normalizing it.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Wraps a vertex list and normalizes closure and winding.
    #[must_use]
    pub fn corrected(points: Vec<Point2>) -> Self {
        let mut ring = Self::new(points);
        ring.correct();
        ring
    }

    /// Closes the ring and makes it wind counter-clockwise.
    pub fn correct(&mut self) {
        if self.points.is_empty() {
            return;
        }
        if !self.is_closed() {
            let first = self.points[0];
            self.points.push(first);
        }
        if signed_area_2d(&self.points) < 0.0 {
            self.points.reverse();
        }
    }

    /// The vertices, including the closing vertex once corrected.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Number of stored vertices (the closing vertex included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the last vertex repeats the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                (first - last).norm_squared() < TOLERANCE * TOLERANCE
            }
            _ => false,
        }
    }

    /// Signed enclosed area; positive for a corrected ring.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Returns `true` if the boundary crosses or touches itself.
    #[must_use]
    pub fn is_self_intersecting(&self) -> bool {
        has_self_intersection(&self.points)
    }

    /// Returns `true` if the ring encloses no usable area: fewer than three
    /// distinct vertices or an area within [`TOLERANCE`] of zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let mut distinct = dedup_consecutive(&self.points);
        if self.is_closed() {
            distinct.pop();
        }
        distinct.len() < 3 || self.area().abs() < TOLERANCE
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector2) {
        for pt in &mut self.points {
            *pt += offset;
        }
    }

    /// Bounding box of the vertices.
    #[must_use]
    pub fn aabb(&self) -> Option<Aabb> {
        Aabb::from_points(&self.points)
    }

    /// Converts to a hole-free `geo` polygon for the boolean backend.
    pub(crate) fn to_geo_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.to_geo_line_string(), Vec::new())
    }

    pub(crate) fn to_geo_line_string(&self) -> LineString<f64> {
        self.points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect()
    }

    /// Builds a corrected ring from a `geo` boundary.
    pub(crate) fn from_geo_line_string(line: &LineString<f64>) -> Self {
        Self::corrected(line.coords().map(|c| Point2::new(c.x, c.y)).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cw_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
        ]
    }

    #[test]
    fn correct_closes_and_reorients() {
        let ring = Ring::corrected(cw_square());
        assert_eq!(ring.len(), 5);
        assert!(ring.is_closed());
        assert!((ring.area() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn correct_is_idempotent() {
        let once = Ring::corrected(cw_square());
        let mut twice = once.clone();
        twice.correct();
        assert_eq!(once, twice);
    }

    #[test]
    fn uncorrected_ring_keeps_orientation() {
        let ring = Ring::new(cw_square());
        assert!(!ring.is_closed());
        assert!((ring.area() + 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn degenerate_detection() {
        let line = Ring::corrected(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(line.is_degenerate());
        assert!(Ring::corrected(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).is_degenerate());
        assert!(!Ring::corrected(cw_square()).is_degenerate());
    }

    #[test]
    fn translate_moves_area_preserving() {
        let mut ring = Ring::corrected(cw_square());
        ring.translate(Vector2::new(10.0, -3.0));
        let aabb = ring.aabb().unwrap();
        assert!((aabb.min.x - 10.0).abs() < TOLERANCE);
        assert!((aabb.min.y + 3.0).abs() < TOLERANCE);
        assert!((ring.area() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn geo_round_trip_preserves_area() {
        let ring = Ring::corrected(cw_square());
        let back = Ring::from_geo_line_string(ring.to_geo_polygon().exterior());
        assert!((back.area() - ring.area()).abs() < TOLERANCE);
        assert!(back.is_closed());
    }
}
