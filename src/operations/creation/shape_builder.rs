use geo::{ConvexHull, MultiPoint};

use crate::error::{GeometryError, Result};
use crate::geometry::{ChainShape, CircleShape, PolygonShape, Shape};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, Rotation2, Vector2};

/// Largest vertex count a solid polygon shape may have.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// Builds collision shapes from display-space points, scaling them into
/// physics units.
///
/// The scratch buffer is cleared and refilled on every call; it carries
/// nothing from one shape to the next.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    scale: f64,
    buffer: Vec<Point2>,
}

impl Default for ShapeBuilder {
    fn default() -> Self {
        Self {
            scale: 1.0 / 30.0,
            buffer: Vec::new(),
        }
    }
}

impl ShapeBuilder {
    /// Creates a builder for a display with `pixels_per_unit` pixels per
    /// physics unit.
    #[must_use]
    pub fn new(pixels_per_unit: f64) -> Self {
        Self {
            scale: 1.0 / pixels_per_unit,
            buffer: Vec::new(),
        }
    }

    /// Multiplier applied to display coordinates.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Builds a polyline boundary. Closed chains become loops.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if a loop has fewer than 3 points
    /// or an open chain fewer than 2.
    pub fn chain(&mut self, points: &[Point2], closed: bool) -> Result<Shape> {
        let min = if closed { 3 } else { 2 };
        if points.len() < min {
            return Err(GeometryError::Degenerate(format!(
                "chain needs at least {min} points, got {}",
                points.len()
            ))
            .into());
        }
        self.copy_scaled(points);
        let vertices = self.buffer.clone();
        let chain = if closed {
            ChainShape::new_loop(vertices)
        } else {
            ChainShape::new_chain(vertices)
        };
        Ok(Shape::Chain(chain))
    }

    /// Builds a solid convex polygon from the convex hull of `points`,
    /// wound counter-clockwise. Reflex and collinear points are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for fewer than 3 or more than
    /// [`MAX_POLYGON_VERTICES`] points, or if the hull has zero area.
    pub fn polygon(&mut self, points: &[Point2]) -> Result<Shape> {
        if points.len() < 3 || points.len() > MAX_POLYGON_VERTICES {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs 3..={MAX_POLYGON_VERTICES} points, got {}",
                points.len()
            ))
            .into());
        }
        self.copy_scaled(points);
        let hull = MultiPoint::from(
            self.buffer
                .iter()
                .map(|p| (p.x, p.y))
                .collect::<Vec<_>>(),
        )
        .convex_hull();

        let mut vertices: Vec<Point2> = hull
            .exterior()
            .coords()
            .map(|c| Point2::new(c.x, c.y))
            .collect();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        let area = signed_area_2d(&vertices);
        if vertices.len() < 3 || area.abs() < f64::EPSILON {
            return Err(GeometryError::Degenerate("polygon hull has zero area".into()).into());
        }
        if area < 0.0 {
            vertices.reverse();
        }
        Ok(Shape::Polygon(PolygonShape { vertices }))
    }

    /// Builds an oriented box of the given display size centered at
    /// `center`, rotated by `angle` radians.
    #[must_use]
    pub fn polygon_rect(&self, center: Point2, width: f64, height: f64, angle: f64) -> Shape {
        let hx = self.scale * width * 0.5;
        let hy = self.scale * height * 0.5;
        let c = center * self.scale;
        let rot = Rotation2::new(angle);
        let vertices = [
            Vector2::new(-hx, -hy),
            Vector2::new(hx, -hy),
            Vector2::new(hx, hy),
            Vector2::new(-hx, hy),
        ]
        .iter()
        .map(|&v| c + rot * v)
        .collect();
        Shape::Polygon(PolygonShape { vertices })
    }

    /// Builds a circle from a display-space center and radius.
    #[must_use]
    pub fn circle(&self, center: Point2, radius: f64) -> Shape {
        Shape::Circle(CircleShape {
            center: center * self.scale,
            radius: radius * self.scale,
        })
    }

    fn copy_scaled(&mut self, points: &[Point2]) {
        self.buffer.clear();
        self.buffer.extend(points.iter().map(|&p| p * self.scale));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn chain_loop_is_scaled_and_closed() {
        let mut builder = ShapeBuilder::new(10.0);
        let shape = builder
            .chain(
                &[
                    Point2::new(0.0, 0.0),
                    Point2::new(10.0, 0.0),
                    Point2::new(10.0, 20.0),
                ],
                true,
            )
            .unwrap();
        let chain = shape.as_chain().unwrap();
        assert!(chain.looped);
        assert_eq!(chain.vertices.len(), 4);
        assert_relative_eq!(chain.vertices[2].y, 2.0, epsilon = 1e-12);
        assert_eq!(chain.vertices[0], chain.vertices[3]);
    }

    #[test]
    fn open_chain_keeps_count() {
        let mut builder = ShapeBuilder::default();
        let shape = builder
            .chain(&[Point2::new(0.0, 0.0), Point2::new(30.0, 0.0)], false)
            .unwrap();
        let chain = shape.as_chain().unwrap();
        assert!(!chain.looped);
        assert_eq!(chain.vertices.len(), 2);
        assert_relative_eq!(chain.vertices[1].x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn buffer_is_not_carried_between_calls() {
        let mut builder = ShapeBuilder::new(1.0);
        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        builder.chain(&tri, false).unwrap();
        let second = builder.chain(&tri[..2], false).unwrap();
        assert_eq!(second.as_chain().unwrap().vertices.len(), 2);
    }

    #[test]
    fn degenerate_chains_rejected() {
        let mut builder = ShapeBuilder::default();
        assert!(builder
            .chain(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], true)
            .is_err());
        assert!(builder.chain(&[Point2::new(0.0, 0.0)], false).is_err());
    }

    #[test]
    fn polygon_is_reoriented_ccw() {
        let mut builder = ShapeBuilder::new(1.0);
        let shape = builder
            .polygon(&[
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                Point2::new(1.0, 1.0),
                Point2::new(1.0, 0.0),
            ])
            .unwrap();
        let Shape::Polygon(poly) = shape else {
            panic!("expected polygon");
        };
        assert!(signed_area_2d(&poly.vertices) > 0.0);
    }

    #[test]
    fn concave_polygon_becomes_its_hull() {
        let mut builder = ShapeBuilder::new(1.0);
        // (1, 0.5) lies inside the square and is dropped.
        let shape = builder
            .polygon(&[
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
                Point2::new(1.0, 0.5),
            ])
            .unwrap();
        let Shape::Polygon(poly) = shape else {
            panic!("expected polygon");
        };
        assert_eq!(poly.vertices.len(), 4);
        assert!(!poly.vertices.contains(&Point2::new(1.0, 0.5)));
        assert_relative_eq!(signed_area_2d(&poly.vertices), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_vertex_limits() {
        let mut builder = ShapeBuilder::new(1.0);
        assert!(builder
            .polygon(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)])
            .is_err());
        let many: Vec<Point2> = (0..9)
            .map(|i| {
                let a = f64::from(i) * std::f64::consts::TAU / 9.0;
                Point2::new(a.cos(), a.sin())
            })
            .collect();
        assert!(builder.polygon(&many).is_err());
        assert!(builder
            .polygon(&[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(2.0, 0.0)
            ])
            .is_err());
    }

    #[test]
    fn rect_is_scaled_and_rotated() {
        let builder = ShapeBuilder::new(10.0);
        let shape = builder.polygon_rect(
            Point2::new(100.0, 50.0),
            40.0,
            20.0,
            std::f64::consts::FRAC_PI_2,
        );
        let Shape::Polygon(poly) = shape else {
            panic!("expected polygon");
        };
        assert_eq!(poly.vertices.len(), 4);
        // Half extents (2, 1) rotated by 90 degrees become (1, 2).
        let aabb = crate::geometry::Aabb::from_points(&poly.vertices).unwrap();
        assert_relative_eq!(aabb.min.x, 9.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.min.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(aabb.max.y, 7.0, epsilon = 1e-12);
        assert_relative_eq!(signed_area_2d(&poly.vertices), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn circle_is_scaled() {
        let builder = ShapeBuilder::new(30.0);
        let Shape::Circle(circle) = builder.circle(Point2::new(60.0, 90.0), 15.0) else {
            panic!("expected circle");
        };
        assert_relative_eq!(circle.center.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(circle.center.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(circle.radius, 0.5, epsilon = 1e-12);
    }
}
