//! Stage generation constants
//!
//! Hard limits and documented defaults for a generation run.

/// Hard cap on separation simulation steps
pub const MAX_SEPARATION_STEPS: usize = 10_000;

/// Fewest major rooms the triangulation will work with
pub const MIN_TRIANGULATION_ROOMS: usize = 4;

/// Tolerance used when comparing slopes, intercepts and vertical runs
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Default generation parameters
pub const DEFAULT_TOTAL_ROOMS: usize = 50;
pub const DEFAULT_GENERATION_RADIUS: f64 = 10.0;
pub const DEFAULT_MIN_ROOM_SIZE: f64 = 1.0;
pub const DEFAULT_MAX_ROOM_SIZE: f64 = 10.0;
pub const DEFAULT_MAJOR_ROOM_THRESHOLD: f64 = 70.0;
pub const DEFAULT_MAJOR_ROOM_MAX_COUNT: usize = 10;

/// Smallest room edge once sizes are floored to whole units
pub const MIN_ROOM_EDGE: f64 = 1.0;
