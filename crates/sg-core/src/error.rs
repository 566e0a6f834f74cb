//! Error types for stage generation
//!
//! Generation only fails on bad input. Writing a stage out can also fail.
//! Non-convergence and sparse major
//! rooms degrade gracefully and are reported in the result instead.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while configuring or running a generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Could not load params file '{path}': {reason}")]
    ParamsFile { path: String, reason: String },

    #[error("Could not write stage: {reason}")]
    Output { reason: String },
}

/// Result alias used across the crate
pub type GenResult<T> = Result<T, GenError>;

impl GenError {
    /// Build an `InvalidParameter` error
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GenError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Build a `ParamsFile` error for the given path
    pub fn params_file(path: &Path, reason: impl ToString) -> Self {
        GenError::ParamsFile {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build an `Output` error
    pub fn output(reason: impl ToString) -> Self {
        GenError::Output {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = GenError::invalid("total_rooms", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'total_rooms': must be at least 1"
        );
    }

    #[test]
    fn test_params_file_message() {
        let err = GenError::params_file(Path::new("params.json"), "missing");
        assert_eq!(
            err.to_string(),
            "Could not load params file 'params.json': missing"
        );
    }

    #[test]
    fn test_output_message() {
        let err = GenError::output("broken pipe");
        assert_eq!(err.to_string(), "Could not write stage: broken pipe");
    }
}
