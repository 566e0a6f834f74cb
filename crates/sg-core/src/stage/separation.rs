//! Separation steering
//!
//! Overlapping rooms are pushed apart one unit per step, each away from the
//! centroid of the rooms it currently overlaps. Steps are synchronous: every
//! force of a step is computed from the positions at the start of that step
//! and only then applied.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::room::{count_overlapping_pairs, Room};
use crate::consts::MAX_SEPARATION_STEPS;
use crate::geometry::Point2;

/// Push acting on one room during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeparationForce {
    /// No overlapping neighbors
    Clear,
    /// Unit vector away from the overlapping neighbors
    Push(Point2),
    /// Neighbors overlap but their pulls cancel out exactly; the room stays put
    Stalled { neighbors: usize },
}

impl SeparationForce {
    /// Displacement to apply for this step
    pub fn vector(self) -> Point2 {
        match self {
            SeparationForce::Push(v) => v,
            SeparationForce::Clear | SeparationForce::Stalled { .. } => Point2::ZERO,
        }
    }
}

/// Result of a single synchronous step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Rooms that received a non-zero push
    pub moved: usize,
    /// Rooms whose neighbor pulls cancelled out
    pub stalled: usize,
}

/// Summary of a whole separation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeparationReport {
    /// Force evaluations performed, never above the step cap
    pub steps: usize,
    /// The last step moved nothing and no rooms overlap
    pub converged: bool,
    /// Room-steps where the pulls cancelled out
    pub stalled_rooms: usize,
    /// Overlapping pairs left when the simulation stopped
    pub residual_overlaps: usize,
}

/// Compute the separation force on `rooms[index]`
///
/// An index past the end of `rooms` has nothing to push and yields `Clear`.
pub fn separation_force(index: usize, rooms: &[Room]) -> SeparationForce {
    let Some(room) = rooms.get(index) else {
        return SeparationForce::Clear;
    };
    let mut pull = Point2::ZERO;
    let mut neighbors = 0;

    for (i, other) in rooms.iter().enumerate() {
        if i != index && room.overlaps(other) {
            pull += other.midpoint - room.midpoint;
            neighbors += 1;
        }
    }

    if neighbors == 0 {
        return SeparationForce::Clear;
    }

    match pull.normalized() {
        Some(dir) => SeparationForce::Push(-dir),
        None => SeparationForce::Stalled { neighbors },
    }
}

/// Advance the simulation by one synchronous step
pub fn separation_step(rooms: &mut [Room]) -> StepOutcome {
    let snapshot: &[Room] = rooms;
    let forces: Vec<SeparationForce> = (0..snapshot.len())
        .map(|i| separation_force(i, snapshot))
        .collect();

    let mut outcome = StepOutcome::default();
    for (room, force) in rooms.iter_mut().zip(&forces) {
        match *force {
            SeparationForce::Push(v) => {
                room.midpoint += v;
                outcome.moved += 1;
            }
            SeparationForce::Stalled { neighbors } => {
                trace!(room = room.id, neighbors, "separation pull cancelled out");
                outcome.stalled += 1;
            }
            SeparationForce::Clear => {}
        }
    }
    outcome
}

/// Run separation until no room moves or the step budget runs out
///
/// `max_steps` is clamped to `MAX_SEPARATION_STEPS`. Running out of steps is
/// not a failure: the layout is returned as-is and may still overlap.
pub fn separate_rooms(rooms: &mut [Room], max_steps: usize) -> SeparationReport {
    let budget = max_steps.min(MAX_SEPARATION_STEPS);
    let mut report = SeparationReport::default();
    let mut settled = false;

    while report.steps < budget {
        report.steps += 1;
        let outcome = separation_step(rooms);
        report.stalled_rooms += outcome.stalled;
        if outcome.moved == 0 {
            settled = true;
            break;
        }
    }

    report.residual_overlaps = count_overlapping_pairs(rooms);
    report.converged = settled && report.residual_overlaps == 0;

    if !settled {
        warn!(
            steps = report.steps,
            overlaps = report.residual_overlaps,
            "separation step budget exhausted"
        );
    }
    if report.stalled_rooms > 0 {
        warn!(
            stalled = report.stalled_rooms,
            overlaps = report.residual_overlaps,
            "some rooms could not be pushed apart"
        );
    }
    debug!(
        steps = report.steps,
        converged = report.converged,
        "separation finished"
    );
    report
}

/// Floor every midpoint to whole units
pub fn snap_to_grid(rooms: &mut [Room]) {
    for room in rooms {
        room.midpoint = room.midpoint.floor();
    }
}
