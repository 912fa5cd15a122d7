pub mod aabb;
pub mod ring;
pub mod shape;

pub use aabb::Aabb;
pub use ring::{Ring, RingCollection};
pub use shape::{ChainShape, CircleShape, PolygonShape, Shape, ShapeKind};
