//! Generation parameters
//!
//! A fixed configuration consumed once per run. Params can be built in code,
//! from the `showcase` preset, or read from a JSON document in which missing
//! fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_GENERATION_RADIUS, DEFAULT_MAJOR_ROOM_MAX_COUNT, DEFAULT_MAJOR_ROOM_THRESHOLD,
    DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_SIZE, DEFAULT_TOTAL_ROOMS, MAX_SEPARATION_STEPS,
    MIN_ROOM_EDGE,
};
use crate::error::{GenError, GenResult};

/// Caller-supplied knobs for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Number of rooms to place
    pub total_rooms: usize,
    /// Radius of the disc rooms are scattered in
    pub generation_radius: f64,
    /// Smallest room edge before flooring
    pub min_room_size: f64,
    /// Largest room edge before flooring
    pub max_room_size: f64,
    /// Area a room needs to be a major room candidate
    pub major_room_threshold: f64,
    /// Cap on the number of major rooms
    pub major_room_max_count: usize,
    /// Separation step budget, at most `MAX_SEPARATION_STEPS`
    pub max_separation_steps: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            total_rooms: DEFAULT_TOTAL_ROOMS,
            generation_radius: DEFAULT_GENERATION_RADIUS,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            major_room_threshold: DEFAULT_MAJOR_ROOM_THRESHOLD,
            major_room_max_count: DEFAULT_MAJOR_ROOM_MAX_COUNT,
            max_separation_steps: MAX_SEPARATION_STEPS,
        }
    }
}

impl GenerationParams {
    /// Wider disc and bigger rooms, tuned to give a handful of major rooms
    pub fn showcase() -> Self {
        Self {
            total_rooms: 50,
            generation_radius: 20.0,
            min_room_size: 1.0,
            max_room_size: 20.0,
            major_room_threshold: 100.0,
            major_room_max_count: 10,
            ..Self::default()
        }
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> GenResult<()> {
        if self.total_rooms == 0 {
            return Err(GenError::invalid("total_rooms", "must be at least 1"));
        }
        if !self.generation_radius.is_finite() || self.generation_radius <= 0.0 {
            return Err(GenError::invalid(
                "generation_radius",
                format!("must be a positive number, got {}", self.generation_radius),
            ));
        }
        if !self.min_room_size.is_finite() || self.min_room_size < MIN_ROOM_EDGE {
            return Err(GenError::invalid(
                "min_room_size",
                format!(
                    "must be at least {} since sizes are floored to whole units, got {}",
                    MIN_ROOM_EDGE, self.min_room_size
                ),
            ));
        }
        if !self.max_room_size.is_finite() || self.min_room_size > self.max_room_size {
            return Err(GenError::invalid(
                "max_room_size",
                format!(
                    "must be finite and not below min_room_size ({}), got {}",
                    self.min_room_size, self.max_room_size
                ),
            ));
        }
        if self.major_room_threshold.is_nan() || self.major_room_threshold < 0.0 {
            return Err(GenError::invalid(
                "major_room_threshold",
                format!("must be non-negative, got {}", self.major_room_threshold),
            ));
        }
        if self.max_separation_steps == 0 || self.max_separation_steps > MAX_SEPARATION_STEPS {
            return Err(GenError::invalid(
                "max_separation_steps",
                format!(
                    "must be in 1..={}, got {}",
                    MAX_SEPARATION_STEPS, self.max_separation_steps
                ),
            ));
        }
        Ok(())
    }

    /// Parse params from JSON and validate them
    pub fn from_json_str(contents: &str) -> GenResult<Self> {
        let params: GenerationParams = serde_json::from_str(contents)
            .map_err(|e| GenError::invalid("params", format!("malformed JSON: {}", e)))?;
        params.validate()?;
        Ok(params)
    }

    /// Load params from a JSON file
    pub fn load_from_file(path: &Path) -> GenResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| GenError::params_file(path, e))?;
        let params: GenerationParams =
            serde_json::from_str(&contents).map_err(|e| GenError::params_file(path, e))?;
        params.validate()?;
        Ok(params)
    }
}
