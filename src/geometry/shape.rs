use crate::math::Point2;

use super::Aabb;

/// Discriminant of [`Shape`], used by query filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Solid convex polygon.
    Polygon,
    /// Open or looped polyline boundary.
    Chain,
    /// Solid circle.
    Circle,
}

impl ShapeKind {
    /// Lowercase name for diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::Chain => "chain",
            Self::Circle => "circle",
        }
    }
}

/// A solid convex polygon in body-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub vertices: Vec<Point2>,
}

/// A polyline boundary in body-local coordinates.
///
/// Loops store the closing vertex explicitly, so `vertices` always
/// describes every segment of the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainShape {
    pub vertices: Vec<Point2>,
    pub looped: bool,
}

impl ChainShape {
    /// Creates a closed loop, appending the first vertex at the end.
    #[must_use]
    pub fn new_loop(mut vertices: Vec<Point2>) -> Self {
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
        Self {
            vertices,
            looped: true,
        }
    }

    /// Creates an open chain with the vertices as given.
    #[must_use]
    pub fn new_chain(vertices: Vec<Point2>) -> Self {
        Self {
            vertices,
            looped: false,
        }
    }

    /// Number of segments in the boundary.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// A solid circle in body-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub center: Point2,
    pub radius: f64,
}

/// Collision shape attached to a fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(PolygonShape),
    Chain(ChainShape),
    Circle(CircleShape),
}

impl Shape {
    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Chain(_) => ShapeKind::Chain,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Returns the chain data if this is a chain shape.
    #[must_use]
    pub fn as_chain(&self) -> Option<&ChainShape> {
        match self {
            Self::Chain(chain) => Some(chain),
            _ => None,
        }
    }

    /// World-space bounds for a shape anchored at `position`.
    #[must_use]
    pub fn aabb(&self, position: Point2) -> Option<Aabb> {
        let offset = position.coords;
        match self {
            Self::Polygon(poly) => Aabb::from_points(&poly.vertices).map(|b| b.translated(offset)),
            Self::Chain(chain) => Aabb::from_points(&chain.vertices).map(|b| b.translated(offset)),
            Self::Circle(circle) => Some(Aabb::around(circle.center + offset, circle.radius)),
        }
    }
}
