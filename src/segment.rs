//! Intersection tests between pairs of line segments.

use crate::geom::{orient, Point};

/// The result of testing two directed segments against one another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segments are disjoint.
    None,
    /// The segments cross at a single point in the interior of both.
    Crossing {
        /// The crossing point is `p0.affine(&p1, alpha)`, with `alpha` in `(0, 1)`.
        alpha: f64,
        /// The crossing point is `q0.affine(&q1, beta)`, with `beta` in `(0, 1)`.
        beta: f64,
    },
    /// The segments meet, but not transversally: an endpoint of one segment
    /// lies on the other. This covers shared endpoints, "T" junctions, and
    /// colinear overlaps. The point is the offending endpoint.
    Touching(Point),
}

fn within_extent(a: Point, b: Point, p: Point, eps: f64) -> bool {
    a.x.min(b.x) - eps <= p.x
        && p.x <= a.x.max(b.x) + eps
        && a.y.min(b.y) - eps <= p.y
        && p.y <= a.y.max(b.y) + eps
}

fn boxes_overlap(p0: Point, p1: Point, q0: Point, q1: Point, eps: f64) -> bool {
    p0.x.min(p1.x) - eps <= q0.x.max(q1.x)
        && q0.x.min(q1.x) - eps <= p0.x.max(p1.x)
        && p0.y.min(p1.y) - eps <= q0.y.max(q1.y)
        && q0.y.min(q1.y) - eps <= p0.y.max(p1.y)
}

fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Tests the segment `p0 -> p1` against the segment `q0 -> q1`.
///
/// An endpoint counts as lying on the other segment if it's within distance
/// `eps` of it. Any such configuration is reported as
/// [`SegmentIntersection::Touching`], even if the segments also "cross"
/// there: deciding what happens to the inside and outside at such a point
/// needs more context than two segments can give.
pub fn intersection(p0: Point, p1: Point, q0: Point, q1: Point, eps: f64) -> SegmentIntersection {
    if !boxes_overlap(p0, p1, q0, q1, eps) {
        return SegmentIntersection::None;
    }

    // The side of q that each endpoint of p is on, and vice versa. These are
    // scaled by the length of the reference segment.
    let p0_side = orient(q0, q1, p0);
    let p1_side = orient(q0, q1, p1);
    let q0_side = orient(p0, p1, q0);
    let q1_side = orient(p0, p1, q1);

    let p_len = p0.distance(&p1);
    let q_len = q0.distance(&q1);
    let endpoints = [
        (p0, p0_side, q_len, q0, q1),
        (p1, p1_side, q_len, q0, q1),
        (q0, q0_side, p_len, p0, p1),
        (q1, q1_side, p_len, p0, p1),
    ];
    for (pt, side, len, a, b) in endpoints {
        if side.abs() <= eps * len && within_extent(a, b, pt, eps) {
            return SegmentIntersection::Touching(pt);
        }
    }

    if !opposite_signs(p0_side, p1_side) || !opposite_signs(q0_side, q1_side) {
        return SegmentIntersection::None;
    }

    // The signed distance to the other segment's line changes linearly along
    // each segment, so its root gives the parameter.
    SegmentIntersection::Crossing {
        alpha: p0_side / (p0_side - p1_side),
        beta: q0_side / (q0_side - q1_side),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::geom::tests::reasonable_point;

    const EPS: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn diagonals_cross_in_the_middle() {
        let res = intersection(p(0.0, 0.0), p(2.0, 2.0), p(0.0, 2.0), p(2.0, 0.0), EPS);
        assert_eq!(
            res,
            SegmentIntersection::Crossing {
                alpha: 0.5,
                beta: 0.5
            }
        );
    }

    #[test]
    fn crossing_parameters() {
        let res = intersection(p(0.0, 0.0), p(4.0, 0.0), p(1.0, -1.0), p(1.0, 3.0), EPS);
        let (alpha, beta) = assert_matches!(res, SegmentIntersection::Crossing { alpha, beta } => (alpha, beta));
        assert!((alpha - 0.25).abs() < 1e-12);
        assert!((beta - 0.25).abs() < 1e-12);

        // Swapping the roles swaps the parameters.
        let res = intersection(p(1.0, -1.0), p(1.0, 3.0), p(0.0, 0.0), p(4.0, 0.0), EPS);
        assert_matches!(res, SegmentIntersection::Crossing { .. });
    }

    #[test]
    fn disjoint() {
        // Parallel.
        assert_eq!(
            intersection(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), EPS),
            SegmentIntersection::None
        );
        // The lines cross, but outside the segments.
        assert_eq!(
            intersection(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 0.0), p(2.0, 1.0), EPS),
            SegmentIntersection::None
        );
        // Colinear, but not overlapping.
        assert_eq!(
            intersection(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), EPS),
            SegmentIntersection::None
        );
    }

    #[test]
    fn t_junction_touches() {
        let res = intersection(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), EPS);
        assert_eq!(res, SegmentIntersection::Touching(p(1.0, 0.0)));
    }

    #[test]
    fn shared_endpoint_touches() {
        let res = intersection(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0), EPS);
        assert_matches!(res, SegmentIntersection::Touching(_));
    }

    #[test]
    fn colinear_overlap_touches() {
        let res = intersection(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0), EPS);
        assert_eq!(res, SegmentIntersection::Touching(p(2.0, 0.0)));
    }

    #[test]
    fn near_miss_is_not_a_touch() {
        let res = intersection(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1e-3), p(1.0, 1.0), EPS);
        assert_eq!(res, SegmentIntersection::None);

        // ...unless the tolerance is big enough.
        let res = intersection(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1e-3), p(1.0, 1.0), 1e-2);
        assert_matches!(res, SegmentIntersection::Touching(_));
    }

    proptest! {
    #[test]
    fn crossing_point_is_on_both_segments(
        p0 in reasonable_point(),
        p1 in reasonable_point(),
        q0 in reasonable_point(),
        q1 in reasonable_point(),
    ) {
        if let SegmentIntersection::Crossing { alpha, beta } = intersection(p0, p1, q0, q1, EPS) {
            prop_assert!((0.0..=1.0).contains(&alpha));
            prop_assert!((0.0..=1.0).contains(&beta));
            let a = p0.affine(&p1, alpha);
            let b = q0.affine(&q1, beta);
            let scale = 1.0 + p0.distance(&p1) + q0.distance(&q1);
            prop_assert!(a.distance(&b) <= 1e-6 * scale, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn symmetric_in_the_two_segments(
        p0 in reasonable_point(),
        p1 in reasonable_point(),
        q0 in reasonable_point(),
        q1 in reasonable_point(),
    ) {
        let forward = intersection(p0, p1, q0, q1, EPS);
        let backward = intersection(q0, q1, p0, p1, EPS);
        match (forward, backward) {
            (SegmentIntersection::None, SegmentIntersection::None) => {}
            (SegmentIntersection::Touching(_), SegmentIntersection::Touching(_)) => {}
            (
                SegmentIntersection::Crossing { alpha, beta },
                SegmentIntersection::Crossing { alpha: alpha2, beta: beta2 },
            ) => {
                prop_assert!((alpha - beta2).abs() <= 1e-9);
                prop_assert!((beta - alpha2).abs() <= 1e-9);
            }
            other => prop_assert!(false, "asymmetric result {other:?}"),
        }
    }
    }
}
