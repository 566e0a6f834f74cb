//! Geometry primitives
//!
//! Points, segments between room midpoints, and the predicates the
//! triangulation builds on.

mod point;
mod segment;

pub use point::Point2;
pub use segment::{is_between, segments_intersect, LineSegment};
