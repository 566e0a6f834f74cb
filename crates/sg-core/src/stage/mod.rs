//! Stage generation
//!
//! Room model, the generation stages, and the pipeline that chains them.

mod connectivity;
mod generation;
mod params;
mod placement;
mod room;
mod selection;
mod separation;
mod triangulation;

pub use connectivity::ConnectivityTracker;
pub use generation::{generate_stage, generate_stage_with_seed, Stage};
pub use params::GenerationParams;
pub use placement::place_rooms;
pub use room::{count_overlapping_pairs, total_overlap_area, Room, RoomType};
pub use selection::{qualifying_rooms, select_major_rooms};
pub use separation::{
    separate_rooms, separation_force, separation_step, snap_to_grid, SeparationForce,
    SeparationReport, StepOutcome,
};
pub use triangulation::{sweep_order, triangulate, triangulate_segments, Edge};
