//! Incremental triangulation of major rooms
//!
//! Major rooms are swept left to right. Each new room is always joined to
//! the room before it in sweep order, then to every earlier room it can
//! reach without crossing an edge already accepted. The result is a planar
//! visibility graph, not a Delaunay triangulation.
//!
//! Sweep order is by x, then y, then id. Breaking x ties by y keeps the
//! predecessor edge free of crossings when several rooms share a column.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::room::Room;
use crate::consts::MIN_TRIANGULATION_ROOMS;
use crate::geometry::{segments_intersect, LineSegment, Point2};

/// Undirected connection between two rooms, by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Check if this edge touches the given room
    pub fn connects(&self, id: usize) -> bool {
        self.a == id || self.b == id
    }

    /// The room at the other end from `id`
    pub fn other(&self, id: usize) -> Option<usize> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

impl From<&LineSegment> for Edge {
    fn from(seg: &LineSegment) -> Self {
        Edge::new(seg.start_room, seg.end_room)
    }
}

/// Look up the ids in `rooms` and return (id, midpoint) in sweep order
///
/// Ids with no matching room are skipped.
pub fn sweep_order(rooms: &[Room], ids: &[usize]) -> Vec<(usize, Point2)> {
    let mut nodes: Vec<(usize, Point2)> = ids
        .iter()
        .filter_map(|&id| find_room(rooms, id).map(|room| (id, room.midpoint)))
        .collect();

    nodes.sort_by(|(a_id, a), (b_id, b)| {
        a.x.total_cmp(&b.x)
            .then(a.y.total_cmp(&b.y))
            .then(a_id.cmp(b_id))
    });
    nodes
}

fn find_room(rooms: &[Room], id: usize) -> Option<&Room> {
    match rooms.get(id) {
        Some(room) if room.id == id => Some(room),
        _ => rooms.iter().find(|room| room.id == id),
    }
}

/// Build the edge segments joining the given rooms
///
/// Returns nothing when fewer than `MIN_TRIANGULATION_ROOMS` rooms are given.
pub fn triangulate_segments(rooms: &[Room], ids: &[usize]) -> Vec<LineSegment> {
    let nodes = sweep_order(rooms, ids);
    if nodes.len() < MIN_TRIANGULATION_ROOMS {
        debug!(
            rooms = nodes.len(),
            "too few major rooms, skipping triangulation"
        );
        return Vec::new();
    }

    let segment = |i: usize, j: usize| LineSegment::new(nodes[i].1, nodes[i].0, nodes[j].1, nodes[j].0);

    // Seed triangle from the three leftmost rooms. When those are collinear
    // the long side 0-2 would lie along 0-1, so it is left out.
    let mut segments = vec![segment(0, 1)];
    let long_side = segment(0, 2);
    if !segments_intersect(&segments[0], &long_side) {
        segments.push(long_side);
    }
    segments.push(segment(1, 2));

    for i in 3..nodes.len() {
        // Everything accepted so far lies left of this edge
        segments.push(segment(i, i - 1));

        for z in (0..i - 1).rev() {
            let candidate = segment(i, z);
            if !segments.iter().any(|s| segments_intersect(s, &candidate)) {
                segments.push(candidate);
            }
        }
    }

    debug!(
        rooms = nodes.len(),
        edges = segments.len(),
        "triangulated major rooms"
    );
    segments
}

/// Build the edge graph joining the given rooms
pub fn triangulate(rooms: &[Room], ids: &[usize]) -> Vec<Edge> {
    triangulate_segments(rooms, ids)
        .iter()
        .map(Edge::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms_at(points: &[(f64, f64)]) -> Vec<Room> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Room::new(i, Point2::new(x, y), 1.0, 1.0))
            .collect()
    }

    fn all_ids(rooms: &[Room]) -> Vec<usize> {
        rooms.iter().map(|r| r.id).collect()
    }

    fn assert_planar(segments: &[LineSegment]) {
        for (i, a) in segments.iter().enumerate() {
            for b in &segments[i + 1..] {
                assert!(
                    !segments_intersect(a, b),
                    "edges {:?} and {:?} cross",
                    Edge::from(a),
                    Edge::from(b)
                );
            }
        }
    }

    #[test]
    fn test_edge_helpers() {
        let e = Edge::new(2, 7);
        assert!(e.connects(2));
        assert!(e.connects(7));
        assert!(!e.connects(3));
        assert_eq!(e.other(2), Some(7));
        assert_eq!(e.other(7), Some(2));
        assert_eq!(e.other(1), None);
    }

    #[test]
    fn test_sweep_order() {
        let rooms = rooms_at(&[(5.0, 0.0), (-3.0, 2.0), (5.0, -1.0), (0.0, 0.0)]);
        let order: Vec<usize> = sweep_order(&rooms, &[0, 1, 2, 3])
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_too_few_rooms() {
        let rooms = rooms_at(&[(0.0, 0.0), (1.0, 5.0), (4.0, 2.0)]);
        assert!(triangulate(&rooms, &all_ids(&rooms)).is_empty());
        assert!(triangulate(&rooms, &[]).is_empty());
    }

    #[test]
    fn test_square() {
        let rooms = rooms_at(&[(0.0, 0.0), (0.0, 10.0), (10.0, 0.0), (10.0, 10.0)]);
        let edges = triangulate(&rooms, &all_ids(&rooms));

        // Seed triangle, predecessor edge, then the top side. The 3-0
        // diagonal would cross 1-2 and is rejected.
        assert_eq!(
            edges,
            vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 2),
                Edge::new(3, 2),
                Edge::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_seed_triangle_kept_when_edges_converge() {
        // 0-2 and 1-2 meet at room 2 from nearly the same direction
        let rooms = rooms_at(&[(-14.0, -12.0), (-11.0, -4.0), (-7.0, 8.0), (0.0, 0.0)]);
        let segments = triangulate_segments(&rooms, &all_ids(&rooms));
        let edges: Vec<Edge> = segments.iter().map(Edge::from).collect();

        assert_eq!(
            edges,
            vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(1, 2),
                Edge::new(3, 2),
                Edge::new(3, 1),
                Edge::new(3, 0),
            ]
        );
        assert_planar(&segments);
    }

    #[test]
    fn test_only_listed_rooms_are_used() {
        let rooms = rooms_at(&[
            (0.0, 0.0),
            (2.0, 8.0),
            (4.0, -3.0),
            (50.0, 50.0),
            (7.0, 1.0),
            (9.0, 6.0),
        ]);
        let ids = [0, 1, 2, 4, 5];
        let edges = triangulate(&rooms, &ids);
        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| !e.connects(3)));
        assert!(edges.iter().all(|e| ids.contains(&e.a) && ids.contains(&e.b)));
    }

    #[test]
    fn test_collinear_rooms_stay_planar() {
        let rooms = rooms_at(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
        let segments = triangulate_segments(&rooms, &all_ids(&rooms));
        assert_planar(&segments);
        // A straight chain is all that fits
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_shared_column_stays_planar() {
        let rooms = rooms_at(&[
            (0.0, 0.0),
            (3.0, 10.0),
            (3.0, 0.0),
            (3.0, 5.0),
            (6.0, 2.0),
            (6.0, 8.0),
        ]);
        let segments = triangulate_segments(&rooms, &all_ids(&rooms));
        assert_planar(&segments);
    }

    #[test]
    fn test_scattered_rooms_planar_and_connected() {
        let rooms = rooms_at(&[
            (-8.0, 3.0),
            (-5.0, -6.0),
            (-2.0, 9.0),
            (0.0, 0.0),
            (3.0, -4.0),
            (6.0, 7.0),
            (9.0, -1.0),
            (12.0, 4.0),
        ]);
        let segments = triangulate_segments(&rooms, &all_ids(&rooms));
        assert_planar(&segments);
        for room in &rooms {
            assert!(
                segments.iter().any(|s| Edge::from(s).connects(room.id)),
                "room {} is isolated",
                room.id
            );
        }
    }
}
