//! The three phases of Greiner-Hormann clipping.
//!
//! 1. [`find_intersections`] inserts a vertex into both rings at every point
//!    where they cross, and links each pair of inserted vertices as neighbors.
//! 2. [`classify`] tags each inserted vertex as an entry into, or an exit
//!    from, the other polygon.
//! 3. [`extract_contours`] walks the tagged rings, switching between them at
//!    every crossing, to produce the output polygons.
//!
//! The caller is responsible for handling the case in which the rings don't
//! cross at all; see [`intersect`](crate::intersect).

use indexmap::IndexSet;
use log::{debug, trace};

use crate::{
    polygon::Polygon,
    ring::{NodeIdx, Rings, Tag},
    segment::{self, SegmentIntersection},
    Error,
};

/// The crossing vertices on the subject ring that haven't been visited by
/// contour extraction yet.
pub type WorkingSet = IndexSet<NodeIdx>;

/// Finds all the crossings between the ring at `subject` and the ring at
/// `clip`, and splices a new vertex into each ring at each of them.
///
/// Returns the new vertices on the subject ring, in ring order. If the rings
/// touch anywhere without crossing (according to the tolerance `eps`), returns
/// [`Error::UnsupportedDegeneracy`] and leaves the rings unmodified.
pub fn find_intersections(
    rings: &mut Rings,
    subject: NodeIdx,
    clip: NodeIdx,
    eps: f64,
) -> Result<WorkingSet, Error> {
    // We scan the original edges and only splice at the end, so that the scan
    // never sees a vertex it inserted itself.
    let subject_edges: Vec<_> = rings.edges(subject).collect();
    let clip_edges: Vec<_> = rings.edges(clip).collect();

    let mut on_subject = vec![Vec::new(); subject_edges.len()];
    let mut on_clip = vec![Vec::new(); clip_edges.len()];
    let mut pairs = Vec::new();
    for (i, &(s0, s1)) in subject_edges.iter().enumerate() {
        let (p0, p1) = (rings.point(s0), rings.point(s1));
        for (j, &(c0, c1)) in clip_edges.iter().enumerate() {
            let (q0, q1) = (rings.point(c0), rings.point(c1));
            match segment::intersection(p0, p1, q0, q1, eps) {
                SegmentIntersection::None => {}
                SegmentIntersection::Crossing { alpha, beta } => {
                    let point = p0.affine(&p1, alpha);
                    trace!("subject edge {i} crosses clip edge {j} at {point:?}");
                    pairs.push((i, alpha, j, beta, point));
                }
                SegmentIntersection::Touching(point) => {
                    debug!("subject edge {i} touches clip edge {j} at {point:?}");
                    return Err(Error::UnsupportedDegeneracy {
                        subject_edge: i,
                        clip_edge: j,
                        point,
                    });
                }
            }
        }
    }

    for (i, alpha, j, beta, point) in pairs {
        let (s, c) = rings.add_crossing_pair(point);
        on_subject[i].push((alpha, s));
        on_clip[j].push((beta, c));
    }
    splice_in_order(rings, &subject_edges, on_subject);
    splice_in_order(rings, &clip_edges, on_clip);

    let working: WorkingSet = rings
        .iter(subject)
        .filter(|&n| rings.is_crossing(n))
        .collect();
    debug!("found {} crossings", working.len());
    Ok(working)
}

// Inserts each edge's new vertices after the edge's start, sorted by their
// position along the edge.
fn splice_in_order(
    rings: &mut Rings,
    edges: &[(NodeIdx, NodeIdx)],
    mut crossings: Vec<Vec<(f64, NodeIdx)>>,
) {
    for (&(start, _), on_edge) in edges.iter().zip(&mut crossings) {
        on_edge.sort_by(|(t1, _), (t2, _)| t1.total_cmp(t2));
        let mut at = start;
        for &(_, node) in on_edge.iter() {
            rings.splice_after(at, node);
            at = node;
        }
    }
}

/// Tags the crossings on the ring at `head` as entries into, or exits from,
/// the ring at `other`.
///
/// The head must be an original vertex (not a crossing) that isn't on the
/// boundary of `other`. If it's inside `other` then the first crossing leaves
/// `other`; after that, the tags alternate.
///
/// Two closed rings always cross an even number of times. If this ring has
/// an odd number of crossings, the tags can't be consistent and this returns
/// [`Error::UnclosedContour`] without tagging anything.
pub fn classify(rings: &mut Rings, head: NodeIdx, other: NodeIdx) -> Result<(), Error> {
    let mut tag = if rings.contains(other, rings.point(head)) {
        Tag::Exit
    } else {
        Tag::Entry
    };

    let crossings: Vec<_> = rings.iter(head).filter(|&n| rings.is_crossing(n)).collect();
    if crossings.len() % 2 != 0 {
        debug!("odd number of crossings ({})", crossings.len());
        return Err(Error::UnclosedContour);
    }

    debug!("tagging {} crossings, starting with {tag:?}", crossings.len());
    for n in &crossings {
        rings.set_tag(*n, tag);
        tag = tag.flipped();
    }
    Ok(())
}

/// Walks the tagged rings and collects the intersection polygons.
///
/// Every walk starts at a crossing from `remaining` and follows its ring
/// forwards from an entry or backwards from an exit, jumping to the other
/// ring at the next crossing, until it gets back to where it started. This
/// repeats until every crossing has been used. Each output polygon is made
/// counter-clockwise.
pub fn extract_contours(rings: &Rings, mut remaining: WorkingSet) -> Result<Vec<Polygon>, Error> {
    let mut ret = Vec::new();

    while let Some(&start) = remaining.first() {
        remaining.swap_remove(&start);

        let mut points = vec![rings.point(start)];
        let mut current = start;
        // Each node gets visited at most once per contour, so if we've taken
        // more steps than there are nodes then the tags are inconsistent.
        let mut steps = 0;
        loop {
            let forward = rings.tag(current) == Some(Tag::Entry);
            let crossing = loop {
                current = if forward {
                    rings.next(current)
                } else {
                    rings.prev(current)
                };
                steps += 1;
                if steps > rings.len() {
                    return Err(Error::UnclosedContour);
                }
                if let Some(crossing) = rings[current].crossing {
                    break crossing;
                }
                points.push(rings.point(current));
            };

            let arrived = current;
            current = crossing.neighbor;
            remaining.swap_remove(&arrived);
            remaining.swap_remove(&current);
            if arrived == start || current == start {
                break;
            }
            points.push(rings.point(current));
        }

        let mut poly = Polygon::new(points);
        poly.make_counter_clockwise();
        trace!(
            "contour with {} points and area {}",
            poly.len(),
            poly.signed_area()
        );
        ret.push(poly);
    }

    debug!("extracted {} contours", ret.len());
    Ok(ret)
}
