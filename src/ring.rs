//! Closed polygons as circular, doubly-linked lists of vertices.
//!
//! All the rings taking part in one clipping operation live in a single
//! arena, [`Rings`], and refer to one another by [`NodeIdx`]. This lets an
//! intersection vertex on one ring point at its twin on the other ring
//! without any shared ownership.

use crate::{geom::Point, winding};

/// An index into a [`Rings`] arena.
///
/// This index is only meaningful for the arena that produced it.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct NodeIdx(usize);

impl std::fmt::Debug for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n_{}", self.0)
    }
}

/// Whether walking forward along a ring through an intersection vertex
/// takes you into, or out of, the other polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Outside before this vertex, inside after it.
    Entry,
    /// Inside before this vertex, outside after it.
    Exit,
}

impl Tag {
    /// The opposite tag.
    pub fn flipped(self) -> Self {
        match self {
            Tag::Entry => Tag::Exit,
            Tag::Exit => Tag::Entry,
        }
    }
}

/// The extra data carried by a vertex where the two rings cross.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    /// The vertex at the same location on the other ring.
    pub neighbor: NodeIdx,
    /// Entry/exit status relative to the other ring.
    ///
    /// Crossings are created as [`Tag::Entry`]; the real value gets filled
    /// in by [`classify`](crate::clip::classify).
    pub tag: Tag,
}

/// A vertex of a ring.
#[derive(Clone, Debug)]
pub struct Node {
    /// Where this vertex is.
    pub point: Point,
    /// The following vertex, in the ring's (counter-clockwise) order.
    pub next: NodeIdx,
    /// The preceding vertex.
    pub prev: NodeIdx,
    /// If this vertex was inserted where two rings cross, the crossing information.
    pub crossing: Option<Crossing>,
}

/// An arena of ring vertices.
///
/// Nodes are indexed by [`NodeIdx`] and can be retrieved by indexing (i.e. with square brackets).
/// A ring is identified by the index of its first vertex (its "head"). Nodes
/// are never removed, so indices stay valid for as long as the arena lives.
#[derive(Clone, Debug, Default)]
pub struct Rings {
    nodes: Vec<Node>,
}

impl Rings {
    /// Creates an empty arena with room for `cap` nodes before reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    /// The number of nodes in this arena, over all rings.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a closed ring with one node per point, in order, and returns its head.
    ///
    /// The ring is implicitly closed: don't repeat the first point at the end.
    /// Returns `None` if there were no points.
    pub fn add_ring<P: Into<Point>>(&mut self, ps: impl IntoIterator<Item = P>) -> Option<NodeIdx> {
        let first = self.nodes.len();
        for p in ps {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                point: p.into(),
                next: NodeIdx(idx + 1),
                prev: NodeIdx(idx.saturating_sub(1)),
                crossing: None,
            });
        }

        let last = self.nodes.len().checked_sub(1).filter(|&l| l >= first)?;
        self.nodes[first].prev = NodeIdx(last);
        self.nodes[last].next = NodeIdx(first);
        Some(NodeIdx(first))
    }

    /// Creates a pair of crossing nodes at `point`, one for each ring, that are
    /// each other's neighbors.
    ///
    /// The new nodes aren't part of any ring yet: use [`Rings::splice_after`] to
    /// put them in place.
    pub fn add_crossing_pair(&mut self, point: Point) -> (NodeIdx, NodeIdx) {
        let a = NodeIdx(self.nodes.len());
        let b = NodeIdx(self.nodes.len() + 1);
        for (me, neighbor) in [(a, b), (b, a)] {
            self.nodes.push(Node {
                point,
                next: me,
                prev: me,
                crossing: Some(Crossing {
                    neighbor,
                    tag: Tag::Entry,
                }),
            });
        }
        (a, b)
    }

    /// Links `node` into a ring, immediately after `at`.
    pub fn splice_after(&mut self, at: NodeIdx, node: NodeIdx) {
        let next = self[at].next;
        self[node].prev = at;
        self[node].next = next;
        self[at].next = node;
        self[next].prev = node;
    }

    /// The vertex after `idx` in its ring.
    pub fn next(&self, idx: NodeIdx) -> NodeIdx {
        self[idx].next
    }

    /// The vertex before `idx` in its ring.
    pub fn prev(&self, idx: NodeIdx) -> NodeIdx {
        self[idx].prev
    }

    /// The location of a vertex.
    pub fn point(&self, idx: NodeIdx) -> Point {
        self[idx].point
    }

    /// Was this vertex inserted at a crossing between two rings?
    pub fn is_crossing(&self, idx: NodeIdx) -> bool {
        self[idx].crossing.is_some()
    }

    /// The twin of a crossing vertex on the other ring.
    pub fn neighbor(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self[idx].crossing.map(|c| c.neighbor)
    }

    /// The entry/exit tag of a crossing vertex.
    pub fn tag(&self, idx: NodeIdx) -> Option<Tag> {
        self[idx].crossing.map(|c| c.tag)
    }

    /// Sets the entry/exit tag of a crossing vertex. Does nothing to other vertices.
    pub fn set_tag(&mut self, idx: NodeIdx, tag: Tag) {
        if let Some(crossing) = self[idx].crossing.as_mut() {
            crossing.tag = tag;
        }
    }

    /// Iterates once around the ring containing `head`, starting at `head`.
    pub fn iter(&self, head: NodeIdx) -> RingIter<'_> {
        RingIter {
            rings: self,
            head,
            cur: Some(head),
        }
    }

    /// Iterates over the points of the ring containing `head`, starting at `head`.
    pub fn points(&self, head: NodeIdx) -> impl Iterator<Item = Point> + '_ {
        self.iter(head).map(|idx| self[idx].point)
    }

    /// Iterates over the edges of the ring containing `head`, as pairs of
    /// (start, end) vertices. The last edge closes the ring.
    pub fn edges(&self, head: NodeIdx) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
        self.iter(head).map(|idx| (idx, self[idx].next))
    }

    /// Does the ring containing `head` enclose `p`?
    ///
    /// The answer is unreliable if `p` is on the ring itself.
    pub fn contains(&self, head: NodeIdx, p: Point) -> bool {
        let edges = self
            .edges(head)
            .map(|(a, b)| (self[a].point, self[b].point));
        winding::is_inside(winding::winding_number(edges, p))
    }
}

impl std::ops::Index<NodeIdx> for Rings {
    type Output = Node;

    fn index(&self, index: NodeIdx) -> &Self::Output {
        &self.nodes[index.0]
    }
}

impl std::ops::IndexMut<NodeIdx> for Rings {
    fn index_mut(&mut self, index: NodeIdx) -> &mut Node {
        &mut self.nodes[index.0]
    }
}

/// An iterator once around a ring. See [`Rings::iter`].
#[derive(Clone, Debug)]
pub struct RingIter<'a> {
    rings: &'a Rings,
    head: NodeIdx,
    cur: Option<NodeIdx>,
}

impl Iterator for RingIter<'_> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        let cur = self.cur?;
        let next = self.rings[cur].next;
        self.cur = (next != self.head).then_some(next);
        Some(cur)
    }
}
