//! Room types and structures
//!
//! A room is an axis-aligned rectangle described by its midpoint and full
//! extents, plus the id it was created with and its classification.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::geometry::Point2;

/// Room classification
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum RoomType {
    /// Filler room, not a connectivity hub
    #[default]
    Ordinary = 0,
    /// Large room selected as a hub for the edge graph
    Major = 1,
}

/// Rectangle representing a room, centered on its midpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Creation index, unique within a generation run
    pub id: usize,
    /// Center of the room
    pub midpoint: Point2,
    /// Full width along x
    pub width: f64,
    /// Full height along y
    pub height: f64,
    /// Type of room
    pub room_type: RoomType,
}

impl Room {
    /// Create a new ordinary room
    pub fn new(id: usize, midpoint: Point2, width: f64, height: f64) -> Self {
        Self {
            id,
            midpoint,
            width,
            height,
            room_type: RoomType::Ordinary,
        }
    }

    /// Get room area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_major(&self) -> bool {
        self.room_type == RoomType::Major
    }

    /// Promote to a major room. Major rooms never go back to ordinary.
    pub fn mark_major(&mut self) {
        self.room_type = RoomType::Major;
    }

    /// Get bounds as (min corner, max corner)
    pub fn bounds(&self) -> (Point2, Point2) {
        let half = Point2::new(self.width / 2.0, self.height / 2.0);
        (self.midpoint - half, self.midpoint + half)
    }

    /// The four corners, counter-clockwise from the top right
    pub fn corners(&self) -> [Point2; 4] {
        let (lo, hi) = self.bounds();
        [
            Point2::new(hi.x, hi.y),
            Point2::new(lo.x, hi.y),
            Point2::new(lo.x, lo.y),
            Point2::new(hi.x, lo.y),
        ]
    }

    /// Check if point is strictly inside room
    pub fn contains(&self, p: Point2) -> bool {
        let (lo, hi) = self.bounds();
        lo.x < p.x && p.x < hi.x && lo.y < p.y && p.y < hi.y
    }

    /// Check if this room overlaps another
    ///
    /// Both the x and the y extents must intersect strictly; rooms that only
    /// share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Room) -> bool {
        let x_overlap = self.midpoint.x - self.width / 2.0 < other.midpoint.x + other.width / 2.0
            && other.midpoint.x - other.width / 2.0 < self.midpoint.x + self.width / 2.0;
        let y_overlap = self.midpoint.y - self.height / 2.0 < other.midpoint.y + other.height / 2.0
            && other.midpoint.y - other.height / 2.0 < self.midpoint.y + self.height / 2.0;
        x_overlap && y_overlap
    }

    /// Area shared with another room (0 when they do not overlap)
    pub fn overlap_area(&self, other: &Room) -> f64 {
        if !self.overlaps(other) {
            return 0.0;
        }
        let (a_lo, a_hi) = self.bounds();
        let (b_lo, b_hi) = other.bounds();
        let w = a_hi.x.min(b_hi.x) - a_lo.x.max(b_lo.x);
        let h = a_hi.y.min(b_hi.y) - a_lo.y.max(b_lo.y);
        w.max(0.0) * h.max(0.0)
    }
}

/// Sum of pairwise overlap areas across all rooms
pub fn total_overlap_area(rooms: &[Room]) -> f64 {
    let mut total = 0.0;
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            total += a.overlap_area(b);
        }
    }
    total
}

/// Number of overlapping room pairs
pub fn count_overlapping_pairs(rooms: &[Room]) -> usize {
    let mut count = 0;
    for (i, a) in rooms.iter().enumerate() {
        count += rooms[i + 1..].iter().filter(|b| a.overlaps(b)).count();
    }
    count
}
