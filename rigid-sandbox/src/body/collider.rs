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
//! Shapes a rigid body can have

use crate::error::{ensure_finite, ensure_positive, Result};
use crate::geometry::intersection::{
    circle_intersects_circle, circle_intersects_polygon, polygon_intersects_polygon,
    DEFAULT_TOLERANCE,
};
use crate::geometry::{Circle, Polygon, Rectangle, Shape};
use crate::math::Vector;

/// Body shape: a circle or a polygon
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    /// Circular body
    Circle(Circle),
    /// Polygonal body
    Polygon(Polygon),
}

impl Collider {
    /// Check the collider can take part in a simulation
    ///
    /// Polygons are validated on construction; circles need a finite center
    /// and a positive radius.
    pub fn validate(&self) -> Result<()> {
        if let Collider::Circle(c) = self {
            ensure_finite(c.position.x, "circle center")?;
            ensure_finite(c.position.y, "circle center")?;
            ensure_positive(c.radius, "radius")?;
        }
        Ok(())
    }

    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Collider {
        match self {
            Collider::Circle(c) => Collider::Circle(c.translate(offset)),
            Collider::Polygon(p) => Collider::Polygon(p.translate(offset)),
        }
    }

    /// Copy rotated about the origin by `degrees`
    pub fn rotate(&self, degrees: f64) -> Collider {
        match self {
            Collider::Circle(c) => Collider::Circle(c.rotate(degrees)),
            Collider::Polygon(p) => Collider::Polygon(p.rotate(degrees)),
        }
    }

    /// Copy scaled about the origin
    pub fn scale(&self, factor: f64) -> Collider {
        match self {
            Collider::Circle(c) => Collider::Circle(c.scale(factor)),
            Collider::Polygon(p) => Collider::Polygon(p.scale(factor)),
        }
    }

    /// Axis-aligned bounds
    pub fn bounding_box(&self) -> Rectangle {
        match self {
            Collider::Circle(c) => c.bounding_box(),
            Collider::Polygon(p) => p.bounding_box(),
        }
    }

    /// Whether a point lies inside the collider
    pub fn contains_point(&self, point: Vector) -> bool {
        match self {
            Collider::Circle(c) => c.contains_point(point),
            Collider::Polygon(p) => p.contains_point(point),
        }
    }

    /// Whether two colliders overlap or touch
    pub fn intersects(&self, other: &Collider) -> bool {
        match (self, other) {
            (Collider::Circle(a), Collider::Circle(b)) => circle_intersects_circle(a, b),
            (Collider::Circle(c), Collider::Polygon(p))
            | (Collider::Polygon(p), Collider::Circle(c)) => {
                circle_intersects_polygon(c, p, DEFAULT_TOLERANCE)
            }
            (Collider::Polygon(a), Collider::Polygon(b)) => {
                polygon_intersects_polygon(a, b, DEFAULT_TOLERANCE)
            }
        }
    }

    /// Short description used for default body names
    pub fn describe(&self) -> String {
        match self {
            Collider::Circle(_) => "circle".to_string(),
            Collider::Polygon(p) => format!("{}-sided polygon", p.vertices().len()),
        }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Collider::Circle(Circle::default())
    }
}

impl From<Circle> for Collider {
    fn from(c: Circle) -> Self {
        Collider::Circle(c)
    }
}

impl From<Polygon> for Collider {
    fn from(p: Polygon) -> Self {
        Collider::Polygon(p)
    }
}

impl From<Collider> for Shape {
    fn from(collider: Collider) -> Self {
        match collider {
            Collider::Circle(c) => Shape::Circle(c),
            Collider::Polygon(p) => Shape::Polygon(p),
        }
    }
}
