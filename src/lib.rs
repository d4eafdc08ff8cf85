#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod clip;
mod geom;
pub mod polygon;
pub mod ring;
pub mod segment;
pub mod winding;

#[cfg(any(test, feature = "generators"))]
pub mod generators;

pub use geom::{orient, Point};
pub use polygon::Polygon;

use kurbo::{BezPath, Rect};
use log::debug;

use crate::ring::Rings;

/// The input polygons were faulty, or arranged in a way we don't support.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// At least one of the inputs was infinite.
    #[error("one of the inputs was infinite")]
    Infinity,
    /// At least one of the inputs was not a number.
    #[error("one of the inputs had a NaN")]
    NaN,
    /// A polygon had fewer than three points.
    #[error("a polygon needs at least three points, but one had {0}")]
    TooFewPoints(usize),
    /// The boundaries of the two polygons touch without crossing.
    ///
    /// This happens when a vertex of one polygon lies on an edge or a vertex
    /// of the other, or when two edges overlap. Perturbing one of the inputs
    /// slightly will usually get rid of it.
    #[error("subject edge {subject_edge} and clip edge {clip_edge} touch at {point:?}")]
    UnsupportedDegeneracy {
        /// The offending edge of the subject. Edge `i` goes from point `i` to point `i + 1`.
        subject_edge: usize,
        /// The offending edge of the clip polygon.
        clip_edge: usize,
        /// Where they touch.
        point: Point,
    },
    /// Walking around the crossings failed to come back to its start.
    ///
    /// This only happens for inputs that aren't simple polygons.
    #[error("failed to close an output contour")]
    UnclosedContour,
    /// The tolerance was negative or infinite.
    #[error("the tolerance must be finite and non-negative, but it was {0}")]
    InvalidTolerance(f64),
    /// A path had more than one subpath.
    #[error("the path had more than one subpath")]
    MultipleSubpaths,
    /// A path had no points.
    #[error("the path was empty")]
    EmptyPath,
}

fn check_polygon(points: &[Point]) -> Result<(), Error> {
    for p in points {
        if p.x.is_nan() || p.y.is_nan() {
            return Err(Error::NaN);
        }
        if !p.is_finite() {
            return Err(Error::Infinity);
        }
    }
    if points.len() < 3 {
        return Err(Error::TooFewPoints(points.len()));
    }
    Ok(())
}

fn bounding_box(points: &[Point]) -> Rect {
    Polygon::new(points.to_vec()).bounding_box()
}

/// The default tolerance for polygons whose coordinates are at most `max_abs` in absolute value.
pub fn default_eps(max_abs: f64) -> f64 {
    max_abs * (f64::EPSILON * 64.0)
}

/// Computes the intersection of two polygons.
///
/// Both inputs must be simple (non-self-intersecting) and counter-clockwise,
/// with at least three points, and they must be implicitly closed (i.e. don't
/// repeat the first point at the end).
///
/// The result is a list of simple, counter-clockwise polygons whose union is
/// the region covered by both inputs. It's empty if the inputs don't overlap.
/// If one input is contained in the other, the result is that input.
///
/// We don't support inputs whose boundaries touch without crossing. If any
/// vertex of one polygon is on the boundary of the other, this returns
/// [`Error::UnsupportedDegeneracy`].
///
/// ```
/// let subject = [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]];
/// let clip = [[2.0, 2.0], [6.0, 2.0], [6.0, 6.0], [2.0, 6.0]];
/// let out = ringclip::intersect(subject, clip).unwrap();
/// assert_eq!(out.len(), 1);
/// assert_eq!(out[0].area(), 4.0);
/// ```
pub fn intersect<P: Into<Point>>(
    subject: impl IntoIterator<Item = P>,
    clip: impl IntoIterator<Item = P>,
) -> Result<Vec<Polygon>, Error> {
    let subject: Vec<Point> = subject.into_iter().map(Into::into).collect();
    let clip: Vec<Point> = clip.into_iter().map(Into::into).collect();
    check_polygon(&subject)?;
    check_polygon(&clip)?;

    let max_abs = subject
        .iter()
        .chain(&clip)
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    intersect_checked(&subject, &clip, default_eps(max_abs))
}

/// Computes the intersection of two polygons, with a custom tolerance.
///
/// This is like [`intersect`], except that you get to choose how close a
/// vertex has to be to the other polygon's boundary to be considered
/// touching it.
///
/// `eps` must be finite and non-negative: a NaN tolerance gives
/// [`Error::NaN`], and any other bad tolerance gives
/// [`Error::InvalidTolerance`].
pub fn intersect_with_eps(
    subject: &[Point],
    clip: &[Point],
    eps: f64,
) -> Result<Vec<Polygon>, Error> {
    if eps.is_nan() {
        return Err(Error::NaN);
    }
    if !eps.is_finite() || eps < 0.0 {
        return Err(Error::InvalidTolerance(eps));
    }
    check_polygon(subject)?;
    check_polygon(clip)?;
    intersect_checked(subject, clip, eps)
}

// The inputs have been validated: they're finite, have at least three points
// each, and `eps` is a finite non-negative number.
fn intersect_checked(subject: &[Point], clip: &[Point], eps: f64) -> Result<Vec<Polygon>, Error> {
    let subject_box = bounding_box(subject);
    let clip_box = bounding_box(clip);
    if subject_box.x1 + eps < clip_box.x0
        || clip_box.x1 + eps < subject_box.x0
        || subject_box.y1 + eps < clip_box.y0
        || clip_box.y1 + eps < subject_box.y0
    {
        debug!("bounding boxes are disjoint");
        return Ok(Vec::new());
    }

    let mut rings = Rings::with_capacity(2 * (subject.len() + clip.len()));
    let (Some(subject_head), Some(clip_head)) = (
        rings.add_ring(subject.iter().copied()),
        rings.add_ring(clip.iter().copied()),
    ) else {
        // `add_ring` only fails on empty input, and both inputs have at least
        // three points.
        return Err(Error::TooFewPoints(0));
    };

    let remaining = clip::find_intersections(&mut rings, subject_head, clip_head, eps)?;
    if remaining.is_empty() {
        // With no crossings (and no touching) every vertex of one polygon is
        // strictly inside or strictly outside the other.
        return Ok(if rings.contains(subject_head, clip[0]) {
            debug!("clip polygon is inside the subject");
            vec![Polygon::new(clip.to_vec())]
        } else if rings.contains(clip_head, subject[0]) {
            debug!("subject polygon is inside the clip polygon");
            vec![Polygon::new(subject.to_vec())]
        } else {
            debug!("polygons are disjoint");
            Vec::new()
        });
    }

    clip::classify(&mut rings, subject_head, clip_head)?;
    clip::classify(&mut rings, clip_head, subject_head)?;
    clip::extract_contours(&rings, remaining)
}

/// Computes the intersection of two polygons given as `kurbo` paths.
///
/// Each path must consist of a single subpath, which is treated as closed.
/// Curves are flattened to within `tolerance`, and clockwise paths are
/// reversed before clipping; see [`Polygon::from_bez_path`].
pub fn intersect_paths(
    subject: &BezPath,
    clip: &BezPath,
    tolerance: f64,
) -> Result<Vec<Polygon>, Error> {
    let subject = Polygon::from_bez_path(subject, tolerance)?;
    let clip = Polygon::from_bez_path(clip, tolerance)?;
    intersect(subject.points, clip.points)
}
