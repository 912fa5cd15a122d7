use super::intersect_2d::{is_spike_2d, segments_intersect_2d};
use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. A repeated
/// closing vertex contributes nothing, so open and closed vertex lists
/// give the same result.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Drops vertices that coincide with their predecessor.
#[must_use]
pub fn dedup_consecutive(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if out
            .last()
            .is_some_and(|last| (pt - last).norm_squared() < TOLERANCE * TOLERANCE)
        {
            continue;
        }
        out.push(pt);
    }
    out
}

/// Returns `true` if a closed vertex loop crosses or touches itself.
///
/// `points` is the loop with or without the repeated closing vertex.
/// Non-adjacent edges may not share any point; adjacent edges may only
/// share their common vertex (a fold-back spike counts as an intersection).
/// Loops with fewer than three distinct vertices are not considered
/// self-intersecting; callers check degeneracy separately.
#[must_use]
pub fn has_self_intersection(points: &[Point2]) -> bool {
    let mut pts = dedup_consecutive(points);
    if pts.len() > 1 && (pts[0] - pts[pts.len() - 1]).norm_squared() < TOLERANCE * TOLERANCE {
        pts.pop();
    }
    let n = pts.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let prev = &pts[(i + n - 1) % n];
        let next = &pts[(i + 1) % n];
        if is_spike_2d(prev, &pts[i], next) {
            return true;
        }
    }

    for i in 0..n {
        let a0 = &pts[i];
        let a1 = &pts[(i + 1) % n];
        for j in (i + 2)..n {
            // Edge n-1 closes the loop and is adjacent to edge 0.
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &pts[j];
            let b1 = &pts[(j + 1) % n];
            if segments_intersect_2d(a0, a1, b0, b1) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_ignores_closing_vertex() {
        let mut pts = square();
        pts.push(pts[0]);
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn dedup_removes_repeats() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        assert_eq!(dedup_consecutive(&pts).len(), 3);
    }

    #[test]
    fn simple_square_is_not_self_intersecting() {
        assert!(!has_self_intersection(&square()));
        let mut closed = square();
        closed.push(closed[0]);
        assert!(!has_self_intersection(&closed));
    }

    #[test]
    fn bowtie_is_self_intersecting() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(has_self_intersection(&pts));
    }

    #[test]
    fn touching_vertex_is_self_intersecting() {
        // Two triangles sharing the vertex (1, 1).
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        assert!(has_self_intersection(&pts));
    }

    #[test]
    fn spike_is_self_intersecting() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(2.5, 0.0),
            Point2::new(2.0, 1.0),
        ];
        assert!(has_self_intersection(&pts));
    }
}
