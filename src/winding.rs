//! Point-in-polygon tests by winding number.

use crate::geom::{orient, Point};

/// Computes the winding number of a closed polyline around `p`.
///
/// `edges` must form a closed loop. Each edge that crosses the horizontal
/// line through `p` to the right of `p` contributes `+1` if it's going up and
/// `-1` if it's going down, so a counter-clockwise polygon has winding number
/// `1` around the points it contains.
///
/// Edges are half-open in `y` (they include their lower endpoint but not
/// their upper one), so a vertex lying exactly on the horizontal line is
/// counted once. The result is unspecified if `p` lies on the polyline.
pub fn winding_number(edges: impl IntoIterator<Item = (Point, Point)>, p: Point) -> i32 {
    let mut winding = 0;
    for (a, b) in edges {
        if a.y <= p.y {
            if b.y > p.y && orient(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && orient(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// The even-odd rule: a point is inside if its winding number is odd.
///
/// For simple polygons this agrees with the non-zero rule.
pub fn is_inside(winding: i32) -> bool {
    winding % 2 != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::cyclic_pairs;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn winding(poly: &[Point], q: Point) -> i32 {
        winding_number(cyclic_pairs(poly).map(|(a, b)| (*a, *b)), q)
    }

    #[test]
    fn square() {
        let sq = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_eq!(winding(&sq, p(0.5, 0.5)), 1);
        assert_eq!(winding(&sq, p(1.5, 0.5)), 0);
        assert_eq!(winding(&sq, p(-0.5, 0.5)), 0);
        assert_eq!(winding(&sq, p(0.5, 1.5)), 0);

        let mut cw = sq;
        cw.reverse();
        assert_eq!(winding(&cw, p(0.5, 0.5)), -1);
        assert!(is_inside(-1));
    }

    #[test]
    fn ray_through_a_vertex() {
        // The horizontal line through the query point hits the vertex at (2, 1).
        let diamond = [p(1.0, 0.0), p(2.0, 1.0), p(1.0, 2.0), p(0.0, 1.0)];
        assert_eq!(winding(&diamond, p(1.0, 1.0)), 1);
        assert_eq!(winding(&diamond, p(-1.0, 1.0)), 0);
        assert_eq!(winding(&diamond, p(3.0, 1.0)), 0);
    }

    #[test]
    fn concave() {
        // A "U" shape, open at the top.
        let u = [
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 3.0),
            p(2.0, 3.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 3.0),
            p(0.0, 3.0),
        ];
        assert_eq!(winding(&u, p(0.5, 2.0)), 1);
        assert_eq!(winding(&u, p(2.5, 2.0)), 1);
        assert_eq!(winding(&u, p(1.5, 2.0)), 0);
        assert_eq!(winding(&u, p(1.5, 0.5)), 1);
    }
}
