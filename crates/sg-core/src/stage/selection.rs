//! Major room selection
//!
//! Rooms whose area reaches the threshold form the candidate pool; up to the
//! cap are drawn from it at random and promoted to major rooms.

use tracing::debug;

use super::room::Room;
use crate::rng::GenRng;

/// Ids of rooms whose area is at least `threshold`, in id order
pub fn qualifying_rooms(rooms: &[Room], threshold: f64) -> Vec<usize> {
    rooms
        .iter()
        .enumerate()
        .filter(|(_, room)| room.area() >= threshold)
        .map(|(idx, _)| idx)
        .collect()
}

/// Promote up to `max_count` qualifying rooms to major rooms
///
/// Draws uniformly from the pool until `max_count` distinct rooms are tagged
/// or the pool runs out; a draw that hits an already tagged room is simply
/// repeated. Returns the promoted ids in draw order.
pub fn select_major_rooms(
    rooms: &mut [Room],
    threshold: f64,
    max_count: usize,
    rng: &mut GenRng,
) -> Vec<usize> {
    let pool = qualifying_rooms(rooms, threshold);
    // Rooms promoted by an earlier call can be drawn but never count
    let available = pool.iter().filter(|&&idx| !rooms[idx].is_major()).count();
    let target = max_count.min(available);
    let mut selected = Vec::with_capacity(target);

    while selected.len() < target {
        let Some(&idx) = rng.choose(&pool) else {
            break;
        };
        if !rooms[idx].is_major() {
            rooms[idx].mark_major();
            selected.push(rooms[idx].id);
        }
    }

    debug!(
        pool = pool.len(),
        selected = selected.len(),
        threshold,
        "selected major rooms"
    );
    selected
}
