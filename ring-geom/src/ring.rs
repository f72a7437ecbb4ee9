use ring_types::{Point, Rect, Segment};

/// The interface every ring predicate in [`crate::predicates`] is written
/// against.
///
/// Predicate code never has to know whether it's talking to a simple or
/// indexed ring. [`crate::Series`] is the only implementor today, but
/// keeping predicates generic over this trait (rather than inherent
/// methods on `Series`) is what lets indexed and linear representations
/// agree bit-for-bit by construction: there is exactly one code path per
/// predicate, and only `search`'s implementation varies.
pub trait Ring: std::fmt::Debug {
    /// The raw point sequence, as supplied — may or may not carry a
    /// trailing duplicate of the first point.
    fn points(&self) -> &[Point];

    /// Cached bounding box; `None` iff the ring has no points at all.
    fn rect(&self) -> Option<Rect>;

    /// True iff the input already repeated its first point as its last.
    fn closed(&self) -> bool;

    /// True iff the ring is strictly convex and has at least three
    /// distinct vertices.
    fn convex(&self) -> bool;

    /// True iff a spatial index backs `search`.
    fn is_indexed(&self) -> bool;

    /// Number of segments a full traversal yields, including the
    /// synthetic closing edge when the input wasn't explicitly closed.
    fn segment_count(&self) -> usize;

    /// Visits every segment in order `0..segment_count()`. `visit`
    /// returning `false` halts iteration immediately, before the next
    /// segment is produced.
    fn for_each_segment(&self, visit: &mut dyn FnMut(Segment, usize) -> bool);

    /// Visits every segment whose bounding box intersects `window`, in
    /// unspecified order. Must return the same *set* of segments whether
    /// or not a spatial index is present — only the traversal strategy
    /// may differ.
    fn search(&self, window: Rect, visit: &mut dyn FnMut(Segment, usize) -> bool);

    /// Returns a new ring translated by `(dx, dy)`; never mutates `self`.
    fn translate(&self, dx: f64, dy: f64) -> Box<dyn Ring>;

    /// Deep-copies this ring into a fresh boxed trait object. Backs the
    /// `Clone` impl on `Box<dyn Ring>` below, which `Poly`'s `Clone`
    /// derive (and hence `Geometry`'s) relies on: cloning a boxed ring
    /// should deep-copy it, the same as translating one does.
    fn box_clone(&self) -> Box<dyn Ring>;
}

impl Clone for Box<dyn Ring> {
    fn clone(&self) -> Box<dyn Ring> {
        self.box_clone()
    }
}

/// Collects every segment of `ring`, in traversal order. A convenience
/// iterator-shaped entry point for callers that don't need the
/// early-exit visitor.
pub fn segments(ring: &dyn Ring) -> Vec<Segment> {
    let mut out = Vec::with_capacity(ring.segment_count());
    ring.for_each_segment(&mut |seg, _idx| {
        out.push(seg);
        true
    });
    out
}
