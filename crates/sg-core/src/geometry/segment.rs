//! Line segments between room midpoints and the crossing predicate

use serde::{Deserialize, Serialize};

use super::point::Point2;
use crate::consts::GEOMETRY_EPSILON;

/// A segment joining the midpoints of two rooms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
    /// Id of the room at `start`
    pub start_room: usize,
    /// Id of the room at `end`
    pub end_room: usize,
}

/// Supporting line of a segment
#[derive(Debug, Clone, Copy, PartialEq)]
enum Line {
    Vertical { x: f64 },
    Sloped { slope: f64, intercept: f64 },
}

impl LineSegment {
    pub fn new(start: Point2, start_room: usize, end: Point2, end_room: usize) -> Self {
        Self {
            start,
            end,
            start_room,
            end_room,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        (self.end.x - self.start.x).abs() < GEOMETRY_EPSILON
            && (self.end.y - self.start.y).abs() < GEOMETRY_EPSILON
    }

    /// Check if both segments touch the same room
    pub fn shares_room(&self, other: &LineSegment) -> bool {
        self.start_room == other.start_room
            || self.start_room == other.end_room
            || self.end_room == other.start_room
            || self.end_room == other.end_room
    }

    /// Check if both segments end on the exact same point
    pub fn shares_endpoint(&self, other: &LineSegment) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    /// Directions differ by less than the tolerance, scaled by both lengths
    fn is_parallel_to(&self, other: &LineSegment) -> bool {
        let d1 = self.end - self.start;
        let d2 = other.end - other.start;
        let cross = d1.x * d2.y - d1.y * d2.x;
        cross.abs() <= GEOMETRY_EPSILON * self.length() * other.length()
    }

    fn line(&self) -> Line {
        let dx = self.end.x - self.start.x;
        if dx.abs() < GEOMETRY_EPSILON {
            return Line::Vertical { x: self.start.x };
        }
        let slope = (self.end.y - self.start.y) / dx;
        Line::Sloped {
            slope,
            intercept: self.start.y - slope * self.start.x,
        }
    }
}

/// Check if `x` lies strictly between `a` and `b`, in either order
pub fn is_between(x: f64, a: f64, b: f64) -> bool {
    (a < x && x < b) || (b < x && x < a)
}

/// Open intervals (a1, a2) and (b1, b2) share more than a point
fn open_ranges_overlap(a1: f64, a2: f64, b1: f64, b2: f64) -> bool {
    a1.min(a2).max(b1.min(b2)) < a1.max(a2).min(b1.max(b2))
}

/// Check if two segments cross
///
/// Touching at an endpoint is not a crossing. Collinear segments cross when
/// their open extents overlap. Zero-length segments never cross anything.
pub fn segments_intersect(a: &LineSegment, b: &LineSegment) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }

    // Rounding in the slope math can put a shared endpoint a hair inside
    // both extents, so segments meeting at an endpoint are settled here.
    if a.shares_endpoint(b) {
        return a.is_parallel_to(b) && collinear_extents_overlap(a, b);
    }

    match (a.line(), b.line()) {
        (
            Line::Sloped {
                slope: m1,
                intercept: b1,
            },
            Line::Sloped {
                slope: m2,
                intercept: b2,
            },
        ) => {
            if (m1 - m2).abs() < GEOMETRY_EPSILON {
                // Parallel: only the same line can overlap
                return (b1 - b2).abs() < GEOMETRY_EPSILON
                    && open_ranges_overlap(a.start.x, a.end.x, b.start.x, b.end.x);
            }
            let x = (b2 - b1) / (m1 - m2);
            is_between(x, a.start.x, a.end.x) && is_between(x, b.start.x, b.end.x)
        }
        (Line::Vertical { x: x1 }, Line::Vertical { x: x2 }) => {
            (x1 - x2).abs() < GEOMETRY_EPSILON
                && open_ranges_overlap(a.start.y, a.end.y, b.start.y, b.end.y)
        }
        (Line::Vertical { x }, Line::Sloped { slope, intercept }) => {
            crosses_vertical(a, x, b, slope, intercept)
        }
        (Line::Sloped { slope, intercept }, Line::Vertical { x }) => {
            crosses_vertical(b, x, a, slope, intercept)
        }
    }
}

/// Open extents of two collinear segments overlap, measured along x or,
/// for vertical segments, along y
fn collinear_extents_overlap(a: &LineSegment, b: &LineSegment) -> bool {
    if matches!(a.line(), Line::Vertical { .. }) {
        open_ranges_overlap(a.start.y, a.end.y, b.start.y, b.end.y)
    } else {
        open_ranges_overlap(a.start.x, a.end.x, b.start.x, b.end.x)
    }
}

fn crosses_vertical(
    vertical: &LineSegment,
    x: f64,
    sloped: &LineSegment,
    slope: f64,
    intercept: f64,
) -> bool {
    is_between(x, sloped.start.x, sloped.end.x)
        && is_between(slope * x + intercept, vertical.start.y, vertical.end.y)
}
