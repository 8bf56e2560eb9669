// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Error types
//!
//! Construction of shapes, bodies, worlds and recordings validates its input
//! and reports problems through [`PhysicsError`]. Stepping a world never fails:
//! degenerate geometry is answered with sentinel values instead.

use thiserror::Error;

/// Unified error type for the sandbox
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A polygon was built from fewer than three vertices
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices that were supplied
        count: usize,
    },

    /// A flat coordinate list did not pair up into (x, y) points
    #[error("coordinate list has odd length {len}")]
    OddCoordinateCount {
        /// Length of the list that was supplied
        len: usize,
    },

    /// A coordinate or scalar was NaN or infinite
    #[error("non-finite value for {field}")]
    NonFinite {
        /// Which value was rejected
        field: &'static str,
    },

    /// A quantity that must be strictly positive was not
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Which value was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A coefficient fell outside its allowed range
    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Which value was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// A recording was written by an incompatible format version
    #[error("recording format {found} is not compatible with {expected}")]
    IncompatibleRecording {
        /// Version found in the recording
        found: String,
        /// Version requirement of this build
        expected: String,
    },

    /// A recording frame does not match the number of bodies in the world
    #[error("recording frame {frame} has {found} bodies, world has {expected}")]
    FrameSizeMismatch {
        /// Index of the offending frame
        frame: usize,
        /// Bodies in the frame
        found: usize,
        /// Bodies in the world
        expected: usize,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Check that a value is finite, naming it in the error otherwise
pub(crate) fn ensure_finite(value: f64, field: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::NonFinite { field })
    }
}

/// Check that a value is finite and strictly positive
pub(crate) fn ensure_positive(value: f64, field: &'static str) -> Result<f64> {
    ensure_finite(value, field)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PhysicsError::TooFewVertices { count: 2 };
        assert_eq!(err.to_string(), "polygon needs at least 3 vertices, got 2");

        let err = PhysicsError::OutOfRange {
            field: "elasticity",
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        assert!(err.to_string().contains("elasticity"));
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive(2.0, "mass"), Ok(2.0));
        assert!(matches!(
            ensure_positive(0.0, "mass"),
            Err(PhysicsError::NonPositive { field: "mass", .. })
        ));
        assert!(matches!(
            ensure_positive(f64::NAN, "mass"),
            Err(PhysicsError::NonFinite { field: "mass" })
        ));
    }
}
