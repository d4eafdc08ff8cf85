//! Geometric primitives: points and the orientation predicate.

/// A two-dimensional point.
///
/// The documentation assumes the usual mathematical convention that `y`
/// increases upwards, so "counter-clockwise" means a positive shoelace area.
/// Nothing breaks if you use a `y`-down coordinate system, but then all of
/// the orientations described here are mirrored.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite());
        debug_assert!(y.is_finite());
        Point { x, y }
    }

    /// Compute an affine combination between `self` and `other`; that is, `(1 - t) * self + t * other`.
    ///
    /// This is evaluated as `self + t * (other - self)`, so that a coordinate
    /// shared by `self` and `other` is reproduced exactly.
    pub fn affine(&self, other: &Self, t: f64) -> Self {
        Point {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }

    /// The Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Are both coordinates finite?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Convert to a `kurbo` point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Twice the signed area of the triangle `a`, `b`, `c`.
///
/// Positive if `c` is to the left of the directed line from `a` to `b`
/// (i.e. the triangle is counter-clockwise), negative if it's to the right,
/// and zero if the three points are colinear.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Iterates over the edges of a closed polyline, including the closing edge
/// from the last point back to the first.
pub fn cyclic_pairs<T>(xs: &[T]) -> impl Iterator<Item = (&T, &T)> {
    let closing = if xs.len() > 1 {
        xs.last().zip(xs.first())
    } else {
        None
    };
    xs.windows(2).map(|pair| (&pair[0], &pair[1])).chain(closing)
}

/// Twice the signed area enclosed by a closed polyline (the shoelace formula).
pub(crate) fn double_signed_area(points: &[Point]) -> f64 {
    cyclic_pairs(points)
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub fn reasonable_point() -> BoxedStrategy<Point> {
        (-1e3..1e3, -1e3..1e3)
            .prop_map(|(x, y)| Point::new(x, y))
            .boxed()
    }

    #[test]
    fn orientation_signs() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        assert!(orient(a, b, Point::new(0.5, 1.0)) > 0.0);
        assert!(orient(a, b, Point::new(0.5, -1.0)) < 0.0);
        assert_eq!(orient(a, b, Point::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn cyclic_pairs_wraps_around() {
        let xs = [1, 2, 3];
        let pairs: Vec<_> = cyclic_pairs(&xs).map(|(a, b)| (*a, *b)).collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 1)]);

        let single = [1];
        assert_eq!(cyclic_pairs(&single).count(), 0);
    }

    #[test]
    fn shoelace() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert_eq!(double_signed_area(&square), 8.0);

        let mut reversed = square;
        reversed.reverse();
        assert_eq!(double_signed_area(&reversed), -8.0);
    }

    proptest! {
    #[test]
    fn affine_endpoints(p in reasonable_point(), q in reasonable_point()) {
        prop_assert_eq!(p.affine(&q, 0.0), p);
        let end = p.affine(&q, 1.0);
        prop_assert!(end.distance(&q) <= 1e-9);
    }

    #[test]
    fn orientation_is_antisymmetric(a in reasonable_point(), b in reasonable_point(), c in reasonable_point()) {
        let forward = orient(a, b, c);
        let backward = orient(b, a, c);
        prop_assert!((forward + backward).abs() <= 1e-6 * (1.0 + forward.abs()));
    }
    }
}
