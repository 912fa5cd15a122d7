use std::collections::HashSet;

use crate::geometry::ShapeKind;

use super::{BodyId, Category, Fixture};

/// Visitor invoked by [`World::query_aabb`](super::World::query_aabb) for
/// every fixture overlapping the query box.
pub trait QueryCallback {
    /// Handles one fixture. Return `false` to stop the scan.
    fn report_fixture(&mut self, body: BodyId, fixture: &Fixture) -> bool;
}

/// Collects the bodies owning fixtures of one shape kind whose category
/// intersects a mask.
///
/// Bodies are deduplicated and the scan is never cut short.
#[derive(Debug)]
pub struct ShapeCategoryQuery {
    shape_kind: ShapeKind,
    category: Category,
    found: HashSet<BodyId>,
}

impl ShapeCategoryQuery {
    /// Creates an empty query for the given filters.
    #[must_use]
    pub fn new(shape_kind: ShapeKind, category: Category) -> Self {
        Self {
            shape_kind,
            category,
            found: HashSet::new(),
        }
    }

    /// Bodies accepted so far.
    #[must_use]
    pub fn found(&self) -> &HashSet<BodyId> {
        &self.found
    }

    /// Consumes the query and returns the accepted bodies.
    #[must_use]
    pub fn into_found(self) -> HashSet<BodyId> {
        self.found
    }
}

impl QueryCallback for ShapeCategoryQuery {
    fn report_fixture(&mut self, body: BodyId, fixture: &Fixture) -> bool {
        if fixture.shape().kind() == self.shape_kind
            && fixture.filter().category.intersects(self.category)
        {
            self.found.insert(body);
        }
        true
    }
}
