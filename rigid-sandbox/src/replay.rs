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
//! Snapshots and recordings
//!
//! A [`BodySnapshot`] is the minimal pose of one body: position and rotation.
//! A [`Recording`] is a list of frames, each holding one snapshot per body in
//! world insertion order. Recordings are serde types so front ends can store
//! them in any format; the `format_version` field is checked before replay.
//!
//! # Version Compatibility
//!
//! The format follows semantic versioning:
//! - the major version must match
//! - for 1.x and later, a recording's minor version may not exceed ours
//! - for 0.x, minor versions must match exactly
//! - the patch version is ignored

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};
use crate::math::Vector;

/// Format version written into new recordings
pub const RECORDING_FORMAT_VERSION: &str = "1.0.0";

/// Pose of a single body in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (positive is down)
    pub y: f64,
    /// Rotation in radians
    pub r: f64,
}

impl BodySnapshot {
    /// Snapshot from a position and rotation
    pub fn new(position: Vector, rotation: f64) -> Self {
        BodySnapshot {
            x: position.x,
            y: position.y,
            r: rotation,
        }
    }

    /// Position as a vector
    pub fn position(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

/// Frames captured from a world, one snapshot per body per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Semver string of the format that wrote this recording
    pub format_version: String,
    /// Captured frames in order
    pub frames: Vec<Vec<BodySnapshot>>,
}

impl Default for Recording {
    fn default() -> Self {
        Recording {
            format_version: RECORDING_FORMAT_VERSION.to_string(),
            frames: Vec::new(),
        }
    }
}

impl Recording {
    /// Empty recording in the current format
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame
    pub fn push(&mut self, frame: Vec<BodySnapshot>) {
        self.frames.push(frame);
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames were captured
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Check the recording can be replayed into a world with `body_count` bodies
    ///
    /// # Errors
    ///
    /// [`PhysicsError::IncompatibleRecording`] when the format version is
    /// unparseable or incompatible, and [`PhysicsError::FrameSizeMismatch`] for
    /// the first frame whose length differs from `body_count`.
    pub fn validate(&self, body_count: usize) -> Result<()> {
        if !is_format_compatible(&self.format_version, RECORDING_FORMAT_VERSION) {
            return Err(PhysicsError::IncompatibleRecording {
                found: self.format_version.clone(),
                expected: RECORDING_FORMAT_VERSION.to_string(),
            });
        }
        for (frame, snapshots) in self.frames.iter().enumerate() {
            if snapshots.len() != body_count {
                return Err(PhysicsError::FrameSizeMismatch {
                    frame,
                    found: snapshots.len(),
                    expected: body_count,
                });
            }
        }
        Ok(())
    }
}

fn is_format_compatible(recording_version: &str, current_version: &str) -> bool {
    let (Ok(recorded), Ok(current)) = (
        Version::parse(recording_version),
        Version::parse(current_version),
    ) else {
        return false;
    };

    if recorded.major != current.major {
        return false;
    }
    if recorded.major != 0 {
        recorded.minor <= current.minor
    } else {
        recorded.minor == current.minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(n: usize) -> Vec<BodySnapshot> {
        (0..n)
            .map(|i| BodySnapshot::new(Vector::new(i as f64, 0.0), 0.0))
            .collect()
    }

    #[test]
    fn test_format_compatibility() {
        assert!(is_format_compatible("1.0.0", "1.0.0"));
        assert!(is_format_compatible("1.0.7", "1.2.0"));
        assert!(!is_format_compatible("1.3.0", "1.2.0"));
        assert!(!is_format_compatible("2.0.0", "1.0.0"));
        assert!(!is_format_compatible("0.1.0", "0.2.0"));
        assert!(is_format_compatible("0.2.1", "0.2.0"));
        assert!(!is_format_compatible("one", "1.0.0"));
    }

    #[test]
    fn test_validate() {
        let mut recording = Recording::new();
        recording.push(frame(2));
        recording.push(frame(2));
        assert_eq!(recording.len(), 2);
        assert!(recording.validate(2).is_ok());
        assert_eq!(
            recording.validate(3),
            Err(PhysicsError::FrameSizeMismatch {
                frame: 0,
                found: 2,
                expected: 3
            })
        );

        recording.format_version = "2.0.0".to_string();
        assert!(matches!(
            recording.validate(2),
            Err(PhysicsError::IncompatibleRecording { .. })
        ));
    }

    #[test]
    fn test_snapshot_position() {
        let snapshot = BodySnapshot::new(Vector::new(3.0, 4.0), 0.5);
        assert_eq!(snapshot.position(), Vector::new(3.0, 4.0));
        assert_eq!(snapshot.r, 0.5);
    }
}
