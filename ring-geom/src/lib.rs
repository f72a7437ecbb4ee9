//! The planar geometry kernel: rings, polygons, the bounding-volume index
//! that accelerates their predicates, and axis-aligned-rectangle clipping.
//!
//! This crate is the `geo`-equivalent half of the `ring-types`/`ring-geom`
//! split: `ring-types` owns `Point`/`Rect`/`Segment`; everything with
//! algorithmic weight — `Series`, the `Ring` trait, `Poly`, the `Bvh`, and
//! `clip` — lives here.
//!
//! Every ring predicate in [`predicates`] is a free function over the
//! [`Ring`] trait object, never a method, so the indexed and linear
//! representations run through the exact same code: the only thing that
//! differs between a [`Series`] with a [`Bvh`] and one without is which
//! segments `Ring::search` hands back, never how those segments are
//! judged.

mod bvh;
pub mod clip;
mod error;
pub mod geometry;
pub mod poly;
pub mod predicates;
mod primitives;
mod ring;
mod series;

pub use bvh::Bvh;
pub use error::RingError;
pub use geometry::Geometry;
pub use poly::Poly;
pub use primitives::{
    orientation, raycast, segments_cross_transversally, segments_intersect, segments_overlap_properly, RaycastResult,
};
pub use ring::Ring;
pub use series::Series;

pub use ring_types::{Orientation, Point, Rect, Segment};
