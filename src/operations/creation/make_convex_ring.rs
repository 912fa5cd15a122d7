use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::math::{Point2, TOLERANCE};

/// Default vertex count of a convex ring.
pub const DEFAULT_RING_VERTICES: usize = 8;

/// Creates a regular convex polygon approximating a disc.
///
/// Vertices are generated by repeatedly rotating the radius vector with a
/// fixed cosine/sine pair, starting at angle zero.
pub struct MakeConvexRing {
    center: Point2,
    radius: f64,
    vertices: usize,
}

impl MakeConvexRing {
    /// Creates a new `MakeConvexRing` operation with
    /// [`DEFAULT_RING_VERTICES`] vertices.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            vertices: DEFAULT_RING_VERTICES,
        }
    }

    /// Sets the number of vertices.
    #[must_use]
    pub fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Executes the operation, returning a corrected ring.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive and finite, the center
    /// is not finite, or fewer than three vertices are requested.
    pub fn execute(&self) -> Result<Ring> {
        if !(self.radius.is_finite() && self.radius >= TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "ring radius must be positive and finite, got {}",
                self.radius
            ))
            .into());
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(OperationError::InvalidInput("ring center must be finite".into()).into());
        }
        if self.vertices < 3 {
            return Err(OperationError::InvalidInput(format!(
                "convex ring needs at least 3 vertices, got {}",
                self.vertices
            ))
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let theta = TAU / self.vertices as f64;
        let (s, c) = theta.sin_cos();

        let mut points = Vec::with_capacity(self.vertices + 1);
        let mut x = self.radius;
        let mut y = 0.0;
        for _ in 0..self.vertices {
            points.push(Point2::new(self.center.x + x, self.center.y + y));
            let t = x;
            x = c * x - s * y;
            y = s * t + c * y;
        }

        Ok(Ring::corrected(points))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn regular_area(n: usize, r: f64) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = n as f64;
        0.5 * n * r * r * (TAU / n).sin()
    }

    #[test]
    fn default_has_eight_vertices() {
        let ring = MakeConvexRing::new(Point2::origin(), 1.0).execute().unwrap();
        assert_eq!(ring.len(), DEFAULT_RING_VERTICES + 1);
        assert!(ring.is_closed());
    }

    #[test]
    fn sixteen_vertex_ring_area() {
        let ring = MakeConvexRing::new(Point2::new(3.0, -2.0), 2.0)
            .with_vertices(16)
            .execute()
            .unwrap();
        assert_eq!(ring.len(), 17);
        assert_relative_eq!(ring.area(), regular_area(16, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn vertices_lie_on_circle() {
        let center = Point2::new(1.0, 1.0);
        let ring = MakeConvexRing::new(center, 5.0)
            .with_vertices(32)
            .execute()
            .unwrap();
        for pt in ring.points() {
            assert_relative_eq!((pt - center).norm(), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ring_is_simple_and_ccw() {
        let ring = MakeConvexRing::new(Point2::origin(), 1.0)
            .with_vertices(16)
            .execute()
            .unwrap();
        assert!(ring.area() > 0.0);
        assert!(!ring.is_self_intersecting());
    }

    #[test]
    fn invalid_parameters_fail() {
        assert!(MakeConvexRing::new(Point2::origin(), 0.0).execute().is_err());
        assert!(MakeConvexRing::new(Point2::origin(), f64::NAN).execute().is_err());
        assert!(MakeConvexRing::new(Point2::origin(), f64::INFINITY)
            .execute()
            .is_err());
        assert!(MakeConvexRing::new(Point2::new(f64::INFINITY, 0.0), 1.0)
            .execute()
            .is_err());
        assert!(MakeConvexRing::new(Point2::origin(), 1.0)
            .with_vertices(2)
            .execute()
            .is_err());
    }
}
