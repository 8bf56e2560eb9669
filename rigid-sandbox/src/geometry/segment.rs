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
//! Bounded line segments

use crate::geometry::{Line, Rectangle};
use crate::math::Vector;

/// Line segment between two endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point
    pub endpoint1: Vector,
    /// End point
    pub endpoint2: Vector,
}

impl Segment {
    /// Create a segment between two points
    pub fn new(endpoint1: Vector, endpoint2: Vector) -> Self {
        Segment { endpoint1, endpoint2 }
    }

    /// Create a segment from raw coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Segment::new(Vector::new(x1, y1), Vector::new(x2, y2))
    }

    /// Whether both endpoints share an x coordinate exactly
    pub fn is_vertical(&self) -> bool {
        self.endpoint1.x == self.endpoint2.x
    }

    /// Slope of the line through the segment
    pub fn slope(&self) -> f64 {
        Line::from(self).slope()
    }

    /// y intercept of the line through the segment
    pub fn y_intercept(&self) -> f64 {
        Line::from(self).y_intercept()
    }

    /// Direction from `endpoint1` to `endpoint2` in degrees
    pub fn angle(&self) -> f64 {
        (self.endpoint2 - self.endpoint1).angle()
    }

    /// Distance between the endpoints
    pub fn length(&self) -> f64 {
        self.endpoint1.distance_from(self.endpoint2)
    }

    /// Midpoint of the segment
    pub fn midpoint(&self) -> Vector {
        (self.endpoint1 + self.endpoint2) / 2.0
    }

    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Self {
        Segment::new(self.endpoint1 + offset, self.endpoint2 + offset)
    }

    /// Copy rotated about the origin by `degrees`
    pub fn rotate(&self, degrees: f64) -> Self {
        Segment::new(self.endpoint1.rotate(degrees), self.endpoint2.rotate(degrees))
    }

    /// Copy scaled about the origin
    pub fn scale(&self, factor: f64) -> Self {
        Segment::new(self.endpoint1 * factor, self.endpoint2 * factor)
    }

    /// Box spanned by the two endpoints
    pub fn bounding_box(&self) -> Rectangle {
        let left = self.endpoint1.x.min(self.endpoint2.x);
        let top = self.endpoint1.y.min(self.endpoint2.y);
        Rectangle::new(
            left,
            top,
            self.endpoint1.x.max(self.endpoint2.x) - left,
            self.endpoint1.y.max(self.endpoint2.y) - top,
        )
    }

    /// Whether a point lies within the segment's bounding interval in both
    /// axes, widened by `tolerance`
    ///
    /// Only meaningful for points already known to lie on the segment's line.
    pub fn spans(&self, point: Vector, tolerance: f64) -> bool {
        let left = self.endpoint1.x.min(self.endpoint2.x);
        let right = self.endpoint1.x.max(self.endpoint2.x);
        let top = self.endpoint1.y.min(self.endpoint2.y);
        let bottom = self.endpoint1.y.max(self.endpoint2.y);
        left - point.x <= tolerance
            && point.x - right <= tolerance
            && top - point.y <= tolerance
            && point.y - bottom <= tolerance
    }

    /// Shortest distance from a point to any point of the segment
    pub fn distance_from(&self, point: Vector) -> f64 {
        let direction = self.endpoint2 - self.endpoint1;
        let length_sq = direction.dot(direction);
        if length_sq == 0.0 {
            return point.distance_from(self.endpoint1);
        }
        let t = ((point - self.endpoint1).dot(direction) / length_sq).clamp(0.0, 1.0);
        (self.endpoint1 + direction * t).distance_from(point)
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::new(line.endpoint1, line.endpoint2)
    }
}
