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
//! Infinite lines through two points

use crate::geometry::Segment;
use crate::math::Vector;

/// Infinite line passing through two distinct points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// First point on the line
    pub endpoint1: Vector,
    /// Second point on the line
    pub endpoint2: Vector,
}

impl Line {
    /// Create a line through two points
    pub fn new(endpoint1: Vector, endpoint2: Vector) -> Self {
        Line { endpoint1, endpoint2 }
    }

    /// Create a line from raw coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::new(Vector::new(x1, y1), Vector::new(x2, y2))
    }

    /// Rise over run; infinite for vertical lines
    pub fn slope(&self) -> f64 {
        (self.endpoint1.y - self.endpoint2.y) / (self.endpoint1.x - self.endpoint2.x)
    }

    /// y value where the line crosses x = 0
    pub fn y_intercept(&self) -> f64 {
        -self.slope() * self.endpoint1.x + self.endpoint1.y
    }

    /// Whether both points share an x coordinate exactly
    pub fn is_vertical(&self) -> bool {
        self.endpoint1.x == self.endpoint2.x
    }

    /// Direction from `endpoint1` to `endpoint2` in degrees
    pub fn angle(&self) -> f64 {
        (self.endpoint2 - self.endpoint1).angle()
    }

    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Self {
        Line::new(self.endpoint1 + offset, self.endpoint2 + offset)
    }

    /// Copy rotated about the origin by `degrees`
    pub fn rotate(&self, degrees: f64) -> Self {
        Line::new(self.endpoint1.rotate(degrees), self.endpoint2.rotate(degrees))
    }

    /// Copy scaled about the origin
    pub fn scale(&self, factor: f64) -> Self {
        Line::new(self.endpoint1 * factor, self.endpoint2 * factor)
    }

    /// Perpendicular distance from a point to the line
    pub fn distance_from(&self, point: Vector) -> f64 {
        if self.is_vertical() {
            return (point.x - self.endpoint1.x).abs();
        }
        if self.endpoint1.y == self.endpoint2.y {
            return (point.y - self.endpoint1.y).abs();
        }
        let direction = self.endpoint2 - self.endpoint1;
        let offset = point - self.endpoint1;
        (direction.x * offset.y - direction.y * offset.x).abs() / direction.magnitude()
    }
}

impl From<Segment> for Line {
    fn from(segment: Segment) -> Self {
        Line::new(segment.endpoint1, segment.endpoint2)
    }
}

impl From<&Segment> for Line {
    fn from(segment: &Segment) -> Self {
        Line::new(segment.endpoint1, segment.endpoint2)
    }
}
