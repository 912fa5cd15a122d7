mod make_convex_ring;
mod seed_terrain;
mod shape_builder;

pub use make_convex_ring::{MakeConvexRing, DEFAULT_RING_VERTICES};
pub use seed_terrain::{SeedTerrain, SeededTerrain};
pub use shape_builder::{ShapeBuilder, MAX_POLYGON_VERTICES};
