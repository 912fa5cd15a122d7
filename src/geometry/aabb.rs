use crate::math::{Point2, Vector2};

/// Axis-aligned bounding box in physics units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Lower-left corner.
    pub min: Point2,
    /// Upper-right corner.
    pub max: Point2,
}

impl Aabb {
    /// Creates a box from its two corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Creates a square box centered at `center` with the given half extent.
    #[must_use]
    pub fn around(center: Point2, half_extent: f64) -> Self {
        let h = Vector2::new(half_extent, half_extent);
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Smallest box containing all `points`, or `None` when empty.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self::new(first, first);
        for pt in iter {
            aabb.min.x = aabb.min.x.min(pt.x);
            aabb.min.y = aabb.min.y.min(pt.y);
            aabb.max.x = aabb.max.x.max(pt.x);
            aabb.max.y = aabb.max.y.max(pt.y);
        }
        Some(aabb)
    }

    /// Returns this box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns `true` if the boxes share any point (touching counts).
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
