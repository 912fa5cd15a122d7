//! One "removal" interaction against the destructible terrain.

use std::collections::HashSet;

use crate::config::CarveParams;
use crate::error::{OperationError, Result};
use crate::geometry::{Aabb, ChainShape, Ring, Shape, ShapeKind};
use crate::math::{Point2, TOLERANCE};
use crate::operations::boolean::{Simplify, Subtract};
use crate::operations::conversion::{body_ring, rings_to_chain_shapes};
use crate::operations::creation::MakeConvexRing;
use crate::world::{BodyDef, BodyId, Category, Filter, FixtureDef, ShapeCategoryQuery, World};

/// Outcome of a carving pass.
#[derive(Debug, Clone, Default)]
pub struct CarveReport {
    /// Number of destructible bodies found near the removal point.
    pub candidates: usize,
    /// Bodies destroyed because their area was negligible.
    pub culled: Vec<BodyId>,
    /// Bodies destroyed because the cutter covered them entirely.
    pub consumed: Vec<BodyId>,
    /// Bodies destroyed and superseded by fragments.
    pub replaced: Vec<BodyId>,
    /// Fragment bodies created by this pass.
    pub created: Vec<BodyId>,
}

impl CarveReport {
    /// Returns `true` if the pass left the world untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.culled.is_empty()
            && self.consumed.is_empty()
            && self.replaced.is_empty()
            && self.created.is_empty()
    }

    /// Total number of bodies destroyed.
    #[must_use]
    pub fn destroyed(&self) -> usize {
        self.culled.len() + self.consumed.len() + self.replaced.len()
    }
}

/// A candidate body paired with its boundary at the start of the pass.
struct Match {
    body: BodyId,
    ring: Ring,
    filter: Filter,
}

/// A rebuilt boundary waiting to be committed.
struct Fragment {
    shape: ChainShape,
    filter: Filter,
}

/// Carves a disc out of every destructible boundary body it touches.
///
/// The pass reads the world first, decides every destroy and rebuild, and
/// only then mutates the world in one batch. Fragments inherit the filter of
/// the body they replace. Geometric trouble never fails the pass: bad
/// simplifications are rejected and failed subtractions keep the source.
pub struct CarveTerrain {
    center: Point2,
    radius: f64,
    simplify: bool,
    params: CarveParams,
}

impl CarveTerrain {
    /// Creates a new `CarveTerrain` operation in physics units, with
    /// simplification disabled and default parameters.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            simplify: false,
            params: CarveParams::default(),
        }
    }

    /// Enables or disables fragment simplification.
    #[must_use]
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Sets custom pass parameters.
    #[must_use]
    pub fn with_params(mut self, params: CarveParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the pass against `world`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive and finite, the center
    /// is not finite, or the cutter vertex count is below three. Nothing is
    /// modified in that case.
    pub fn execute(&self, world: &mut World) -> Result<CarveReport> {
        if !(self.radius.is_finite() && self.radius >= TOLERANCE) {
            return Err(OperationError::InvalidInput(format!(
                "removal radius must be positive and finite, got {}",
                self.radius
            ))
            .into());
        }
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "removal center must be finite, got ({}, {})",
                self.center.x, self.center.y
            ))
            .into());
        }
        let cutter = MakeConvexRing::new(self.center, self.radius)
            .with_vertices(self.params.cutter_vertices)
            .execute()?;

        let candidates = query_destructible_bodies(world, self.center, self.radius);
        let mut report = CarveReport {
            candidates: candidates.len(),
            ..CarveReport::default()
        };
        if candidates.is_empty() {
            return Ok(report);
        }

        let matches = materialize_matches(world, &candidates);
        let (significant, negligible): (Vec<Match>, Vec<Match>) = matches
            .into_iter()
            .partition(|m| m.ring.area() > self.params.area_epsilon);

        let simplify = Simplify::new(self.params.simplify_tolerance);
        let mut fragments = Vec::new();
        for m in &significant {
            let mut rings = Subtract::new(&m.ring, &cutter).execute();
            if self.simplify {
                simplify.execute(&mut rings);
            }
            tracing::trace!(body = ?m.body, fragments = rings.len(), "subtracted cutter");

            if rings.is_empty() {
                report.consumed.push(m.body);
            } else {
                report.replaced.push(m.body);
            }
            fragments.extend(
                rings_to_chain_shapes(&rings)
                    .into_iter()
                    .map(|shape| Fragment {
                        shape,
                        filter: m.filter,
                    }),
            );
        }
        report.culled = negligible.iter().map(|m| m.body).collect();

        Self::commit(world, &mut report, fragments)?;

        tracing::debug!(
            candidates = report.candidates,
            culled = report.culled.len(),
            consumed = report.consumed.len(),
            replaced = report.replaced.len(),
            created = report.created.len(),
            "carve pass"
        );
        Ok(report)
    }

    fn commit(
        world: &mut World,
        report: &mut CarveReport,
        fragments: Vec<Fragment>,
    ) -> Result<()> {
        for &body in report
            .culled
            .iter()
            .chain(&report.consumed)
            .chain(&report.replaced)
        {
            world.destroy_body(body)?;
        }
        for fragment in fragments {
            let body = world.create_body(&BodyDef::default());
            world.create_fixture(
                body,
                FixtureDef::new(Shape::Chain(fragment.shape)).with_filter(fragment.filter),
            )?;
            report.created.push(body);
        }
        Ok(())
    }
}

/// Finds bodies with a destructible chain fixture near `center`.
///
/// The query box is the square of half extent `radius` around `center`.
#[must_use]
pub fn query_destructible_bodies(world: &World, center: Point2, radius: f64) -> HashSet<BodyId> {
    let mut query = ShapeCategoryQuery::new(ShapeKind::Chain, Category::DESTRUCTIBLE);
    world.query_aabb(&Aabb::around(center, radius), &mut query);
    query.into_found()
}

/// Snapshots the boundary of every candidate. Bodies whose boundary cannot
/// be read are left alone.
fn materialize_matches(world: &World, candidates: &HashSet<BodyId>) -> Vec<Match> {
    let mut matches = Vec::with_capacity(candidates.len());
    for &body in candidates {
        let filter = match world.body(body) {
            Ok(data) => match data.fixture() {
                Some(fixture) => fixture.filter(),
                None => continue,
            },
            Err(_) => continue,
        };
        match body_ring(world, body) {
            Ok(ring) => matches.push(Match { body, ring, filter }),
            Err(err) => tracing::warn!(?body, %err, "skipping unreadable boundary"),
        }
    }
    matches
}
