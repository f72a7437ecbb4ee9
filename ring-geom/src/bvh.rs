use ring_types::{Rect, Segment};
use rstar::{RTree, RTreeObject, AABB};

/// A bounding-volume hierarchy over a ring's segments, backed by
/// `rstar::RTree` — the same crate `geo-types` offers behind its optional
/// `rstar` feature. Construction is `O(n log n)` (rstar's bulk loader);
/// `search` is a logarithmic-plus-output-size window query.
///
/// The tree is purely an acceleration structure: every leaf is a copy of
/// one of the series' segments plus its index, so a `Bvh::search` and a
/// linear scan filtered by the same window always produce the same
/// segment set.
#[derive(Debug, Clone)]
pub struct Bvh {
    tree: RTree<SegmentLeaf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SegmentLeaf {
    idx: usize,
    seg: Segment,
}

impl RTreeObject for SegmentLeaf {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let r = self.seg.bounding_rect();
        AABB::from_corners([r.min().x(), r.min().y()], [r.max().x(), r.max().y()])
    }
}

impl Bvh {
    /// Builds a tree over `segments`, deterministically given the input
    /// order.
    pub fn build(segments: &[Segment]) -> Self {
        let leaves: Vec<SegmentLeaf> = segments
            .iter()
            .enumerate()
            .map(|(idx, &seg)| SegmentLeaf { idx, seg })
            .collect();
        Bvh {
            tree: RTree::bulk_load(leaves),
        }
    }

    /// Invokes `visit(segment, index)` for every segment whose bounding
    /// box intersects `window`. Honors an early-`false` return from
    /// `visit` before the next leaf is inspected.
    pub fn search(&self, window: Rect, visit: &mut dyn FnMut(Segment, usize) -> bool) {
        let envelope = AABB::from_corners(
            [window.min().x(), window.min().y()],
            [window.max().x(), window.max().y()],
        );
        for leaf in self.tree.locate_in_envelope_intersecting(&envelope) {
            if !visit(leaf.seg, leaf.idx) {
                return;
            }
        }
    }

    /// All leaves, in unspecified order — used by the leaf-completeness
    /// invariant test, which compares this against a linear scan as a
    /// multiset.
    pub fn leaves(&self) -> impl Iterator<Item = (Segment, usize)> + '_ {
        self.tree.iter().map(|l| (l.seg, l.idx))
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
