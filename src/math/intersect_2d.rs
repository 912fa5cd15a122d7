use super::{Point2, TOLERANCE};

/// Sign of the turn `a -> b -> c`.
///
/// `1` for a left (counter-clockwise) turn, `-1` for a right turn, `0` when
/// the three points are collinear within [`TOLERANCE`].
#[must_use]
pub fn orientation_2d(a: &Point2, b: &Point2, c: &Point2) -> i8 {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross.abs() < TOLERANCE {
        0
    } else if cross > 0.0 {
        1
    } else {
        -1
    }
}

/// Returns `true` if `p` lies within the axis-aligned box spanned by `a` and `b`.
///
/// Only meaningful when `p` is already known to be collinear with `a`-`b`.
fn within_span(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}

/// Closed segment-segment intersection test in 2D.
///
/// Endpoint contact and collinear overlap both count as intersecting.
#[must_use]
pub fn segments_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orientation_2d(b0, b1, a0);
    let d2 = orientation_2d(b0, b1, a1);
    let d3 = orientation_2d(a0, a1, b0);
    let d4 = orientation_2d(a0, a1, b1);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && within_span(b0, b1, a0))
        || (d2 == 0 && within_span(b0, b1, a1))
        || (d3 == 0 && within_span(a0, a1, b0))
        || (d4 == 0 && within_span(a0, a1, b1))
}

/// Returns `true` if the two segments meeting at `shared` fold back onto each
/// other (`prev -> shared -> next` is collinear and reverses direction).
#[must_use]
pub fn is_spike_2d(prev: &Point2, shared: &Point2, next: &Point2) -> bool {
    if orientation_2d(prev, shared, next) != 0 {
        return false;
    }
    let u = prev - shared;
    let v = next - shared;
    u.dot(&v) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn orientation_signs() {
        assert_eq!(orientation_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)), 1);
        assert_eq!(orientation_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)), -1);
        assert_eq!(orientation_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0)), 0);
    }

    #[test]
    fn crossing_segments() {
        assert!(segments_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0)
        ));
    }

    #[test]
    fn disjoint_segments() {
        assert!(!segments_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0)
        ));
    }

    #[test]
    fn touching_endpoint_counts() {
        assert!(segments_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 1.0)
        ));
    }

    #[test]
    fn collinear_overlap_counts() {
        assert!(segments_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0)
        ));
        assert!(!segments_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
            &p(3.0, 0.0)
        ));
    }

    #[test]
    fn spike_detection() {
        assert!(is_spike_2d(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0)));
        assert!(!is_spike_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0)));
        assert!(!is_spike_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)));
    }
}
