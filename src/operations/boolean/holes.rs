use std::panic;

use geo::{BooleanOps, BoundingRect, Polygon, Rect};

/// Recursion bound for [`split_holes`]; every level removes at least one hole.
const MAX_SPLIT_DEPTH: usize = 32;

/// Splits a polygon with holes into hole-free pieces covering the same area.
///
/// Each level cuts the polygon with a vertical line through the middle of
/// its first hole, which opens that hole into a notch on both halves.
pub(super) fn split_holes(polygon: Polygon<f64>) -> Vec<Polygon<f64>> {
    split_holes_bounded(polygon, MAX_SPLIT_DEPTH)
}

fn split_holes_bounded(polygon: Polygon<f64>, depth: usize) -> Vec<Polygon<f64>> {
    if polygon.interiors().is_empty() {
        return vec![polygon];
    }
    if depth == 0 {
        tracing::warn!(
            holes = polygon.interiors().len(),
            "hole splitting did not converge; dropping holes"
        );
        return vec![Polygon::new(polygon.exterior().clone(), Vec::new())];
    }

    let (Some(bounds), Some(hole)) = (
        polygon.bounding_rect(),
        polygon.interiors()[0].bounding_rect(),
    ) else {
        return vec![Polygon::new(polygon.exterior().clone(), Vec::new())];
    };

    let cut_x = (hole.min().x + hole.max().x) * 0.5;
    let pad = 1.0;
    let (min, max) = (bounds.min(), bounds.max());
    let halves = [
        Rect::new((min.x - pad, min.y - pad), (cut_x, max.y + pad)).to_polygon(),
        Rect::new((cut_x, min.y - pad), (max.x + pad, max.y + pad)).to_polygon(),
    ];

    let mut pieces = Vec::new();
    for half in &halves {
        match panic::catch_unwind(|| polygon.intersection(half)) {
            Ok(parts) => {
                for part in parts.0 {
                    pieces.extend(split_holes_bounded(part, depth - 1));
                }
            }
            Err(_) => {
                tracing::warn!("hole split failed; dropping holes");
                return vec![Polygon::new(polygon.exterior().clone(), Vec::new())];
            }
        }
    }
    pieces
}
