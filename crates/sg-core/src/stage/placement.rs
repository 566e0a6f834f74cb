//! Initial room placement
//!
//! Rooms are scattered by polar sampling inside a disc: angle and radius are
//! both drawn uniformly, so density is higher toward the center. Sizes are
//! floored to whole units.

use core::f64::consts::TAU;

use tracing::debug;

use super::params::GenerationParams;
use super::room::Room;
use crate::geometry::Point2;
use crate::rng::GenRng;

/// Generate `params.total_rooms` ordinary rooms
///
/// Room ids are their creation index. Per room the RNG is drawn in a fixed
/// order: angle, radius, width, height.
pub fn place_rooms(params: &GenerationParams, rng: &mut GenRng) -> Vec<Room> {
    let rooms: Vec<Room> = (0..params.total_rooms)
        .map(|id| {
            let angle = TAU * rng.unit();
            let radius = params.generation_radius * rng.unit();
            let midpoint = Point2::from_polar(radius, angle);

            let width = random_edge(params, rng);
            let height = random_edge(params, rng);

            Room::new(id, midpoint, width, height)
        })
        .collect();

    debug!(
        rooms = rooms.len(),
        radius = params.generation_radius,
        "placed rooms"
    );
    rooms
}

/// Whole-unit edge in `[floor(min), ceil(max) - 1]`, or `floor(min)` when the
/// bounds are equal
fn random_edge(params: &GenerationParams, rng: &mut GenRng) -> f64 {
    rng.uniform(params.min_room_size, params.max_room_size).floor()
}
