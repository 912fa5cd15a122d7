use geo::Simplify as _;

use crate::geometry::{Ring, RingCollection};

/// Default maximum deviation of a simplified ring, in physics units.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.05;

/// Reduces ring vertex counts with Douglas-Peucker simplification.
///
/// A simplified ring replaces its original only if it still encloses area
/// and does not intersect itself; otherwise the original is kept. The
/// collection never changes length.
pub struct Simplify {
    tolerance: f64,
}

impl Default for Simplify {
    fn default() -> Self {
        Self::new(DEFAULT_SIMPLIFY_TOLERANCE)
    }
}

impl Simplify {
    /// Creates a new `Simplify` operation with the given tolerance.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Simplifies every ring in place and returns how many were replaced.
    pub fn execute(&self, rings: &mut RingCollection) -> usize {
        let mut replaced = 0;
        for ring in rings.iter_mut() {
            if let Some(simplified) = self.simplify_ring(ring) {
                *ring = simplified;
                replaced += 1;
            }
        }
        replaced
    }

    fn simplify_ring(&self, ring: &Ring) -> Option<Ring> {
        let line = ring.to_geo_line_string().simplify(&self.tolerance);
        let candidate = Ring::from_geo_line_string(&line);
        if candidate.is_degenerate() || candidate.is_self_intersecting() {
            tracing::debug!(
                before = ring.len(),
                after = candidate.len(),
                "rejected simplification"
            );
            return None;
        }
        Some(candidate)
    }
}
