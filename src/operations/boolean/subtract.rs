use std::panic;

use geo::BooleanOps;

use crate::geometry::{Ring, RingCollection};

use super::holes::split_holes;

/// Computes `source - cutter` for two corrected rings.
///
/// The result holds zero or more disjoint hole-free rings: empty when the
/// cutter covers the source, one ring equal in area to the source when they
/// do not overlap. Pieces that enclose no area are dropped. If the boolean
/// backend fails on degenerate input, the source ring is returned unchanged.
pub struct Subtract<'a> {
    source: &'a Ring,
    cutter: &'a Ring,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (source - cutter).
    #[must_use]
    pub fn new(source: &'a Ring, cutter: &'a Ring) -> Self {
        Self { source, cutter }
    }

    /// Executes the subtraction.
    #[must_use]
    pub fn execute(&self) -> RingCollection {
        let source = self.source.to_geo_polygon();
        let cutter = self.cutter.to_geo_polygon();

        let difference = match panic::catch_unwind(|| source.difference(&cutter)) {
            Ok(difference) => difference,
            Err(_) => {
                tracing::warn!(
                    source_vertices = self.source.len(),
                    cutter_vertices = self.cutter.len(),
                    "polygon difference failed; keeping source ring"
                );
                return vec![self.source.clone()];
            }
        };

        let mut rings = RingCollection::new();
        for polygon in difference.0 {
            for piece in split_holes(polygon) {
                let ring = Ring::from_geo_line_string(piece.exterior());
                if !ring.is_degenerate() {
                    rings.push(ring);
                }
            }
        }
        rings
    }
}
