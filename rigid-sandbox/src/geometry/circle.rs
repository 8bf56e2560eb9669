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
//! Circles

use crate::geometry::Rectangle;
use crate::math::Vector;

/// Circle given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub position: Vector,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a circle from a center and a radius
    pub fn new(position: Vector, radius: f64) -> Self {
        Circle { position, radius }
    }

    /// Create a circle from center coordinates and a radius
    pub fn from_coords(x: f64, y: f64, radius: f64) -> Self {
        Circle::new(Vector::new(x, y), radius)
    }

    /// Circle of the given radius centered on the origin
    pub fn centered(radius: f64) -> Self {
        Circle::new(Vector::ZERO, radius)
    }

    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Self {
        Circle::new(self.position + offset, self.radius)
    }

    /// Copy whose center is rotated about the origin by `degrees`
    pub fn rotate(&self, degrees: f64) -> Self {
        Circle::new(self.position.rotate(degrees), self.radius)
    }

    /// Copy scaled about the origin
    pub fn scale(&self, factor: f64) -> Self {
        Circle::new(self.position * factor, self.radius * factor.abs())
    }

    /// Whether a point lies inside or on the circle
    pub fn contains_point(&self, point: Vector) -> bool {
        self.position.distance_from(point) <= self.radius
    }

    /// Square enclosing the circle
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            self.position.x - self.radius,
            self.position.y - self.radius,
            2.0 * self.radius,
            2.0 * self.radius,
        )
    }
}

impl Default for Circle {
    fn default() -> Self {
        Circle::centered(1.0)
    }
}
