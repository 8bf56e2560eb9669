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
//! 2D vector value type
//!
//! The sandbox works in screen coordinates: x grows to the right and y grows
//! downward. Angles are expressed in degrees and measured counterclockwise as
//! seen on screen, so `(1, 0)` has angle 0 and `(0, -1)` has angle 90.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Default tolerance for approximate vector comparison
pub const VECTOR_EPSILON: f64 = 1e-10;

/// 2D vector with Cartesian and polar views
///
/// # Examples
///
/// ```
/// use rigid_sandbox::math::Vector;
///
/// let v = Vector::new(3.0, -4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert!(v.angle() > 0.0); // pointing up the screen
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal component
    pub x: f64,
    /// Vertical component (positive is down the screen)
    pub y: f64,
}

impl Vector {
    /// The zero vector
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Create a vector from Cartesian components
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Create a vector from an angle in degrees and a magnitude
    ///
    /// A negative magnitude yields a vector pointing opposite to `angle`.
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        let radians = angle.to_radians();
        Vector::new(magnitude * radians.cos(), -magnitude * radians.sin())
    }

    /// Length of the vector
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction of the vector in degrees, normalized to (-180, 180]
    pub fn angle(&self) -> f64 {
        let degrees = (-self.y).atan2(self.x).to_degrees();
        if degrees <= -180.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    /// Copy of this vector pointing along `angle` with the same magnitude
    pub fn with_angle(&self, angle: f64) -> Self {
        Vector::from_polar(angle, self.magnitude())
    }

    /// Copy of this vector with the same direction and a new magnitude
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        self.normalize() * magnitude
    }

    /// Unit vector in the same direction
    ///
    /// The zero vector normalizes to itself.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Vector::ZERO
        } else {
            *self / magnitude
        }
    }

    /// Dot product
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Signed length of this vector's projection onto `onto`
    pub fn scalar_projection(&self, onto: Vector) -> f64 {
        let magnitude = onto.magnitude();
        if magnitude == 0.0 {
            0.0
        } else {
            self.dot(onto) / magnitude
        }
    }

    /// Rotate about the origin by `degrees` (counterclockwise on screen)
    pub fn rotate(&self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vector::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }

    /// Rotate about an arbitrary center point by `degrees`
    pub fn rotate_about(&self, center: Vector, degrees: f64) -> Self {
        (*self - center).rotate(degrees) + center
    }

    /// Euclidean distance to another point
    pub fn distance_from(&self, other: Vector) -> f64 {
        (*self - other).magnitude()
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: Vector, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Check that both components are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::ZERO, |acc, v| acc + v)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}
