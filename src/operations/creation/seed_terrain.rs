use crate::error::Result;
use crate::math::Point2;
use crate::world::{BodyDef, BodyId, Category, Filter, FixtureDef, World};

use super::ShapeBuilder;

/// Bodies created by [`SeedTerrain`].
#[derive(Debug, Clone, Copy)]
pub struct SeededTerrain {
    /// Indestructible enclosure along the screen edges.
    pub boundary: BodyId,
    /// The initial destructible polygon.
    pub destructible: BodyId,
}

/// Loads the starting terrain for a screen of the given display size.
pub struct SeedTerrain {
    width: f64,
    height: f64,
}

impl SeedTerrain {
    /// Creates a new `SeedTerrain` operation.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Executes the operation, creating both static bodies in `world`.
    ///
    /// # Errors
    ///
    /// Returns an error if a boundary shape cannot be built.
    pub fn execute(&self, world: &mut World, builder: &mut ShapeBuilder) -> Result<SeededTerrain> {
        let (w, h) = (self.width, self.height);

        let edges = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, h),
            Point2::new(w, h),
            Point2::new(w, 0.0),
        ];
        let boundary = Self::add_static(world, builder, &edges, Category::NORMAL)?;

        let polygon = [
            Point2::new(w * 0.1, h * 0.4),
            Point2::new(w * 0.1, h * 0.95),
            Point2::new(w * 0.9, h * 0.95),
            Point2::new(w * 0.9, h * 0.7),
            Point2::new(w * 0.4, h * 0.4),
        ];
        let destructible = Self::add_static(world, builder, &polygon, Category::DESTRUCTIBLE)?;

        tracing::debug!(?boundary, ?destructible, "seeded terrain");
        Ok(SeededTerrain {
            boundary,
            destructible,
        })
    }

    fn add_static(
        world: &mut World,
        builder: &mut ShapeBuilder,
        points: &[Point2],
        category: Category,
    ) -> Result<BodyId> {
        let shape = builder.chain(points, true)?;
        let body = world.create_body(&BodyDef::default());
        world.create_fixture(
            body,
            FixtureDef::new(shape).with_filter(Filter::with_category(category)),
        )?;
        Ok(body)
    }
}
