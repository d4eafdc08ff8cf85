//! The output type of clipping: simple polygons as lists of points.

use kurbo::{BezPath, PathEl, Rect};

use crate::{
    geom::{cyclic_pairs, double_signed_area, Point},
    winding, Error,
};

/// A simple, closed polygon.
///
/// The polygon is implicitly closed: the last point connects back to the
/// first, and the first point is not repeated at the end. Polygons produced
/// by this crate are always counter-clockwise.
#[derive(Clone, Debug, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Polygon {
    /// The vertices, in order.
    pub points: Vec<Point>,
}

impl Polygon {
    /// Wraps a list of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Are there no vertices at all?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the edges, including the closing edge from the last point to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        cyclic_pairs(&self.points).map(|(p, q)| (*p, *q))
    }

    /// The signed area, computed with the shoelace formula.
    ///
    /// This is positive for counter-clockwise polygons.
    pub fn signed_area(&self) -> f64 {
        double_signed_area(&self.points) / 2.0
    }

    /// The (unsigned) area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Is this polygon oriented counter-clockwise (i.e. does it have positive area)?
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverses the point order if necessary, so that the polygon is counter-clockwise.
    pub fn make_counter_clockwise(&mut self) {
        if self.signed_area() < 0.0 {
            self.points.reverse();
        }
    }

    /// Does this polygon contain `p`?
    ///
    /// The result is unspecified for points on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        winding::is_inside(winding::winding_number(self.edges(), p))
    }

    /// The smallest axis-aligned rectangle containing every vertex.
    pub fn bounding_box(&self) -> Rect {
        let mut pts = self.points.iter().map(|p| p.to_kurbo());
        let Some(first) = pts.next() else {
            return Rect::ZERO;
        };
        pts.fold(Rect::from_points(first, first), |rect, p| rect.union_pt(p))
    }

    /// Is this the same boundary as `other`, up to choosing a different
    /// starting vertex?
    ///
    /// Corresponding points may differ by up to `eps` in each coordinate.
    pub fn same_boundary_as(&self, other: &Polygon, eps: f64) -> bool {
        let n = self.len();
        if n != other.len() {
            return false;
        }
        if n == 0 {
            return true;
        }

        let close = |p: &Point, q: &Point| (p.x - q.x).abs() <= eps && (p.y - q.y).abs() <= eps;
        (0..n).any(|shift| {
            self.points
                .iter()
                .enumerate()
                .all(|(i, p)| close(p, &other.points[(i + shift) % n]))
        })
    }

    /// Converts to a closed `kurbo` path.
    pub fn to_bez_path(&self) -> BezPath {
        let mut ret = BezPath::new();
        let mut pts = self.points.iter();
        if let Some(first) = pts.next() {
            ret.move_to(first.to_kurbo());
            for p in pts {
                ret.line_to(p.to_kurbo());
            }
            ret.close_path();
        }
        ret
    }

    /// Converts a `kurbo` path with a single subpath into a polygon.
    ///
    /// Curves are flattened to within `tolerance`. The path is treated as
    /// closed whether or not it ends with a `ClosePath`, and a final point
    /// repeating the first one is dropped. The result is made counter-clockwise.
    pub fn from_bez_path(path: &BezPath, tolerance: f64) -> Result<Self, Error> {
        let mut points = Vec::<Point>::new();
        let mut subpaths = 0;
        kurbo::flatten(path.elements().iter().cloned(), tolerance, |el| match el {
            PathEl::MoveTo(p) => {
                subpaths += 1;
                points.push(p.into());
            }
            PathEl::LineTo(p) => {
                points.push(p.into());
            }
            PathEl::ClosePath => {}
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => unreachable!(),
        });

        if subpaths > 1 {
            return Err(Error::MultipleSubpaths);
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.is_empty() {
            return Err(Error::EmptyPath);
        }

        let mut ret = Polygon::new(points);
        ret.make_counter_clockwise();
        Ok(ret)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Polygon::new(points)
    }
}

impl<P: Into<Point>> FromIterator<P> for Polygon {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Polygon::new(iter.into_iter().map(Into::into).collect())
    }
}
