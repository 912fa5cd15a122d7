//! Minimal rigid-body world that owns every body by generational handle.
//!
//! Only what the terrain pipeline and its frame loop need is modelled:
//! body/fixture bookkeeping, a bounding-box query and gravity integration
//! of dynamic bodies. Contact resolution is left to a full physics engine.

pub mod filter;
pub mod query;
pub mod step;

pub use filter::{Category, Filter};
pub use query::{QueryCallback, ShapeCategoryQuery};
pub use step::FixedStepper;

use slotmap::SlotMap;

use crate::config::WorldConfig;
use crate::error::WorldError;
use crate::geometry::{Aabb, Shape};
use crate::math::{Point2, Vector2};

slotmap::new_key_type! {
    /// Unique identifier for a body in the world.
    pub struct BodyId;
}

/// How a body takes part in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Never moves; terrain.
    #[default]
    Static,
    /// Integrated every step.
    Dynamic,
}

/// Parameters for creating a body.
#[derive(Debug, Clone, Copy)]
pub struct BodyDef {
    pub body_type: BodyType,
    /// World anchor; fixture shapes are relative to it.
    pub position: Point2,
    pub linear_velocity: Vector2,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            body_type: BodyType::Static,
            position: Point2::origin(),
            linear_velocity: Vector2::zeros(),
        }
    }
}

impl BodyDef {
    /// A dynamic body at `position`.
    #[must_use]
    pub fn dynamic(position: Point2) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position,
            linear_velocity: Vector2::zeros(),
        }
    }
}

/// Parameters for attaching a fixture to a body.
#[derive(Debug, Clone)]
pub struct FixtureDef {
    pub shape: Shape,
    pub filter: Filter,
    pub density: f64,
}

impl FixtureDef {
    /// A fixture with default filter and zero density.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            filter: Filter::default(),
            density: 0.0,
        }
    }

    /// Sets the collision filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }
}

/// A shape attached to a body together with its filter data.
#[derive(Debug, Clone)]
pub struct Fixture {
    shape: Shape,
    filter: Filter,
    density: f64,
}

impl Fixture {
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    #[must_use]
    pub fn density(&self) -> f64 {
        self.density
    }
}

/// Data associated with a body.
#[derive(Debug, Clone)]
pub struct BodyData {
    body_type: BodyType,
    position: Point2,
    linear_velocity: Vector2,
    fixtures: Vec<Fixture>,
}

impl BodyData {
    #[must_use]
    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// World anchor of the body.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    #[must_use]
    pub fn linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    #[must_use]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// The first attached fixture, if any.
    #[must_use]
    pub fn fixture(&self) -> Option<&Fixture> {
        self.fixtures.first()
    }
}

/// Central arena that owns all bodies.
///
/// Bodies reference nothing but their own fixtures; everything else holds
/// a [`BodyId`], which goes stale once the body is destroyed.
#[derive(Debug)]
pub struct World {
    bodies: SlotMap<BodyId, BodyData>,
    gravity: Vector2,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new(config: WorldConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            gravity: config.gravity,
        }
    }

    /// Acceleration applied to dynamic bodies on every step.
    #[must_use]
    pub fn gravity(&self) -> Vector2 {
        self.gravity
    }

    /// Inserts a body without fixtures and returns its ID.
    pub fn create_body(&mut self, def: &BodyDef) -> BodyId {
        self.bodies.insert(BodyData {
            body_type: def.body_type,
            position: def.position,
            linear_velocity: def.linear_velocity,
            fixtures: Vec::new(),
        })
    }

    /// Removes a body and all its fixtures, returning its last state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BodyNotFound`] if the handle is stale.
    pub fn destroy_body(&mut self, id: BodyId) -> Result<BodyData, WorldError> {
        self.bodies.remove(id).ok_or(WorldError::BodyNotFound)
    }

    /// Attaches a fixture to an existing body.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BodyNotFound`] if the handle is stale.
    pub fn create_fixture(&mut self, id: BodyId, def: FixtureDef) -> Result<(), WorldError> {
        let body = self.bodies.get_mut(id).ok_or(WorldError::BodyNotFound)?;
        body.fixtures.push(Fixture {
            shape: def.shape,
            filter: def.filter,
            density: def.density,
        });
        Ok(())
    }

    /// Returns a reference to the body data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::BodyNotFound`] if the handle is stale.
    pub fn body(&self, id: BodyId) -> Result<&BodyData, WorldError> {
        self.bodies.get(id).ok_or(WorldError::BodyNotFound)
    }

    #[must_use]
    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(id)
    }

    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Iterates over every live body.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &BodyData)> {
        self.bodies.iter()
    }

    /// Reports every fixture whose bounds overlap `aabb` to `callback`.
    ///
    /// The scan stops early only if the callback returns `false`.
    pub fn query_aabb(&self, aabb: &Aabb, callback: &mut dyn QueryCallback) {
        for (id, body) in &self.bodies {
            for fixture in &body.fixtures {
                let Some(bounds) = fixture.shape.aabb(body.position) else {
                    continue;
                };
                if bounds.overlaps(aabb) && !callback.report_fixture(id, fixture) {
                    return;
                }
            }
        }
    }

    /// Advances dynamic bodies by `dt` seconds (semi-implicit Euler).
    pub fn step(&mut self, dt: f64) {
        let gravity = self.gravity;
        for body in self.bodies.values_mut() {
            if body.body_type == BodyType::Dynamic {
                body.linear_velocity += gravity * dt;
                body.position += body.linear_velocity * dt;
            }
        }
    }
}
