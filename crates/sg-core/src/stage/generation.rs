//! Stage generation pipeline
//!
//! placement -> separation -> grid snap -> major room selection ->
//! triangulation. The random source is threaded through every randomized
//! step in that order, so a seed and a set of params fully determine the
//! resulting [`Stage`].

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::connectivity::ConnectivityTracker;
use super::params::GenerationParams;
use super::placement::place_rooms;
use super::room::Room;
use super::selection::select_major_rooms;
use super::separation::{separate_rooms, snap_to_grid, SeparationReport};
use super::triangulation::{triangulate, Edge};
use crate::error::{GenError, GenResult};
use crate::geometry::LineSegment;
use crate::rng::GenRng;

/// Output of one generation run, handed to the caller as plain data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Seed of the RNG the run drew from
    pub seed: u64,
    /// Params the run used
    pub params: GenerationParams,
    /// All rooms, indexed by id
    pub rooms: Vec<Room>,
    /// Major room ids in the order they were drawn
    pub major_order: Vec<usize>,
    /// Edges between major rooms, empty when fewer than four were selected
    pub edges: Vec<Edge>,
    /// How the separation simulation went
    pub separation: SeparationReport,
}

impl Stage {
    /// Get a room by id
    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.get(id).filter(|room| room.id == id)
    }

    /// Rooms tagged as major, in id order
    pub fn major_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_major())
    }

    /// Resolve every edge back to the segment between room midpoints
    pub fn edge_segments(&self) -> Vec<LineSegment> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let a = self.room(edge.a)?;
                let b = self.room(edge.b)?;
                Some(LineSegment::new(a.midpoint, a.id, b.midpoint, b.id))
            })
            .collect()
    }

    /// Write the stage as pretty-printed JSON followed by a newline
    pub fn write_json_pretty<W: Write>(&self, mut writer: W) -> GenResult<()> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(GenError::output)?;
        writeln!(writer).map_err(GenError::output)
    }

    /// Check if every major room can reach every other through the edges
    pub fn is_connected(&self) -> bool {
        ConnectivityTracker::from_edges(&self.major_order, &self.edges).all_connected()
    }
}

/// Run the full pipeline with the given random source
#[tracing::instrument(level = "debug", skip_all, fields(seed = rng.seed()))]
pub fn generate_stage(params: &GenerationParams, rng: &mut GenRng) -> GenResult<Stage> {
    params.validate()?;

    let mut rooms = place_rooms(params, rng);

    let separation = separate_rooms(&mut rooms, params.max_separation_steps);
    snap_to_grid(&mut rooms);

    let major_order = select_major_rooms(
        &mut rooms,
        params.major_room_threshold,
        params.major_room_max_count,
        rng,
    );

    let edges = triangulate(&rooms, &major_order);

    info!(
        rooms = rooms.len(),
        major = major_order.len(),
        edges = edges.len(),
        steps = separation.steps,
        converged = separation.converged,
        "stage generated"
    );

    Ok(Stage {
        seed: rng.seed(),
        params: params.clone(),
        rooms,
        major_order,
        edges,
        separation,
    })
}

/// Run the full pipeline with a fresh RNG seeded from `seed`
pub fn generate_stage_with_seed(params: &GenerationParams, seed: u64) -> GenResult<Stage> {
    let mut rng = GenRng::new(seed);
    generate_stage(params, &mut rng)
}
