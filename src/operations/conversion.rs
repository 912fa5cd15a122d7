//! Mapping between boundary bodies and rings.

use crate::error::{GeometryError, Result, WorldError};
use crate::geometry::{ChainShape, Ring, ShapeKind};
use crate::math::Point2;
use crate::world::{BodyId, World};

/// Converts a chain anchored at `position` into a corrected world-space ring.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the chain has fewer than three
/// vertices.
pub fn to_ring(position: Point2, shape: &ChainShape) -> Result<Ring> {
    if shape.vertices.len() < 3 {
        return Err(GeometryError::Degenerate(format!(
            "boundary needs at least 3 vertices, got {}",
            shape.vertices.len()
        ))
        .into());
    }
    let offset = position.coords;
    Ok(Ring::corrected(
        shape.vertices.iter().map(|&v| v + offset).collect(),
    ))
}

/// Reads the boundary ring of a body whose first fixture is a chain.
///
/// # Errors
///
/// Returns an error if the body does not exist, has no fixture, its
/// fixture is not a chain, or the chain is degenerate.
pub fn body_ring(world: &World, body: BodyId) -> Result<Ring> {
    let data = world.body(body)?;
    let fixture = data.fixture().ok_or(WorldError::NoFixture)?;
    let chain = fixture
        .shape()
        .as_chain()
        .ok_or(GeometryError::ShapeKindMismatch {
            expected: ShapeKind::Chain.name(),
            found: fixture.shape().kind().name(),
        })?;
    to_ring(data.position(), chain)
}

/// Builds one open chain per ring, keeping vertex order.
#[must_use]
pub fn rings_to_chain_shapes(rings: &[Ring]) -> Vec<ChainShape> {
    rings
        .iter()
        .map(|ring| ChainShape::new_chain(ring.points().to_vec()))
        .collect()
}
