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
//! Rigid bodies
//!
//! A [`PhysicsObject`] carries a local-space [`Collider`] plus its linear and
//! angular state. Forces are accumulated into `acceleration` and
//! `angular_acceleration` and folded into the velocities by
//! [`PhysicsObject::update_velocity`], which always clears the accumulators.
//!
//! Units are per frame: velocities are distance per frame, angular velocity is
//! radians per frame, and a force applied for one frame changes velocity by
//! `force / inertial_mass`.

mod collider;

pub use collider::Collider;

use log::warn;

use crate::error::{ensure_finite, ensure_positive, PhysicsError, Result};
use crate::geometry::Rectangle;
use crate::math::Vector;

/// Scales torque so that off-center forces produce modest spin
pub const ROTATION_CONSTANT: f64 = 2e-4;

/// Construction parameters for a [`PhysicsObject`]
///
/// Every field has a default; the mass overrides fall back to `mass`.
///
/// # Examples
///
/// ```
/// use rigid_sandbox::body::{BodyProperties, PhysicsObject};
/// use rigid_sandbox::geometry::Circle;
/// use rigid_sandbox::math::Vector;
///
/// let ball = PhysicsObject::new(
///     BodyProperties::new(Circle::centered(10.0))
///         .with_name("ball")
///         .with_position(Vector::new(100.0, 50.0))
///         .with_mass(2.0),
/// )
/// .unwrap();
/// assert_eq!(ball.inertial_mass, 2.0);
/// assert_eq!(ball.elasticity, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BodyProperties {
    /// Display name; a default is derived from the shape when absent
    pub name: Option<String>,
    /// Shape in body-local coordinates
    pub shape: Collider,
    /// Initial position
    pub position: Vector,
    /// Initial velocity
    pub velocity: Vector,
    /// Initial linear accumulator
    pub acceleration: Vector,
    /// Initial rotation in radians
    pub rotation: f64,
    /// Initial angular velocity in radians per frame
    pub angular_velocity: f64,
    /// Initial angular accumulator
    pub angular_acceleration: f64,
    /// Base mass used where no specific override is given
    pub mass: f64,
    /// Resistance to linear acceleration
    pub inertial_mass: Option<f64>,
    /// Gravitational mass, kept with the body; world gravity scales with
    /// the inertial mass
    pub gravitational_mass: Option<f64>,
    /// Resistance to angular acceleration
    pub rotational_inertia: Option<f64>,
    /// Coefficient of restitution in [0, 1]
    pub elasticity: f64,
    /// Friction coefficient, non-negative
    pub coefficient_of_friction: f64,
    /// Ignore world gravity
    pub antigravity: bool,
    /// Never change velocity
    pub immovable: bool,
    /// Selection flag for front ends
    pub selected: bool,
}

impl Default for BodyProperties {
    fn default() -> Self {
        BodyProperties {
            name: None,
            shape: Collider::default(),
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            acceleration: Vector::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            mass: 1.0,
            inertial_mass: None,
            gravitational_mass: None,
            rotational_inertia: None,
            elasticity: 0.5,
            coefficient_of_friction: 0.25,
            antigravity: false,
            immovable: false,
            selected: false,
        }
    }
}

impl BodyProperties {
    /// Defaults with the given shape
    pub fn new(shape: impl Into<Collider>) -> Self {
        BodyProperties {
            shape: shape.into(),
            ..BodyProperties::default()
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial position
    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    /// Set the initial velocity
    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the initial rotation in radians
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the initial angular velocity in radians per frame
    pub fn with_angular_velocity(mut self, angular_velocity: f64) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Set the base mass
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Override the inertial mass
    pub fn with_inertial_mass(mut self, mass: f64) -> Self {
        self.inertial_mass = Some(mass);
        self
    }

    /// Override the gravitational mass
    pub fn with_gravitational_mass(mut self, mass: f64) -> Self {
        self.gravitational_mass = Some(mass);
        self
    }

    /// Override the rotational inertia
    pub fn with_rotational_inertia(mut self, inertia: f64) -> Self {
        self.rotational_inertia = Some(inertia);
        self
    }

    /// Set the coefficient of restitution
    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Set the friction coefficient
    pub fn with_friction(mut self, coefficient: f64) -> Self {
        self.coefficient_of_friction = coefficient;
        self
    }

    /// Exempt the body from world gravity
    pub fn antigravity(mut self) -> Self {
        self.antigravity = true;
        self
    }

    /// Pin the body in place
    pub fn immovable(mut self) -> Self {
        self.immovable = true;
        self
    }

    /// Mark the body as selected
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// A rigid body in the sandbox
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsObject {
    /// Display name
    pub name: String,
    /// Shape in body-local coordinates
    pub shape: Collider,
    /// World position of the body origin
    pub position: Vector,
    /// Linear velocity per frame
    pub velocity: Vector,
    /// Linear accumulator, cleared by [`PhysicsObject::update_velocity`]
    pub acceleration: Vector,
    /// Rotation in radians
    pub rotation: f64,
    /// Angular velocity in radians per frame
    pub angular_velocity: f64,
    /// Angular accumulator, cleared by [`PhysicsObject::update_velocity`]
    pub angular_acceleration: f64,
    /// Resistance to linear acceleration
    pub inertial_mass: f64,
    /// Gravitational mass, kept with the body; world gravity scales with
    /// the inertial mass
    pub gravitational_mass: f64,
    /// Resistance to angular acceleration
    pub rotational_inertia: f64,
    /// Coefficient of restitution
    pub elasticity: f64,
    /// Friction coefficient
    pub coefficient_of_friction: f64,
    /// Ignores world gravity
    pub antigravity: bool,
    /// Velocity never changes
    pub immovable: bool,
    /// Selection flag for front ends
    pub selected: bool,
}

impl PhysicsObject {
    /// Build a body from its properties
    ///
    /// Logs a warning and derives a name such as `"unnamed circle"` when no
    /// name is given.
    ///
    /// # Errors
    ///
    /// Fails on non-finite state, non-positive masses or radius, elasticity
    /// outside [0, 1], or a negative friction coefficient.
    pub fn new(properties: BodyProperties) -> Result<Self> {
        let BodyProperties {
            name,
            shape,
            position,
            velocity,
            acceleration,
            rotation,
            angular_velocity,
            angular_acceleration,
            mass,
            inertial_mass,
            gravitational_mass,
            rotational_inertia,
            elasticity,
            coefficient_of_friction,
            antigravity,
            immovable,
            selected,
        } = properties;

        shape.validate()?;
        for (value, field) in [
            (position.x, "position"),
            (position.y, "position"),
            (velocity.x, "velocity"),
            (velocity.y, "velocity"),
            (acceleration.x, "acceleration"),
            (acceleration.y, "acceleration"),
            (rotation, "rotation"),
            (angular_velocity, "angular velocity"),
            (angular_acceleration, "angular acceleration"),
        ] {
            ensure_finite(value, field)?;
        }

        let inertial_mass = ensure_positive(inertial_mass.unwrap_or(mass), "inertial mass")?;
        let gravitational_mass =
            ensure_positive(gravitational_mass.unwrap_or(mass), "gravitational mass")?;
        let rotational_inertia =
            ensure_positive(rotational_inertia.unwrap_or(mass), "rotational inertia")?;

        ensure_finite(elasticity, "elasticity")?;
        if !(0.0..=1.0).contains(&elasticity) {
            return Err(PhysicsError::OutOfRange {
                field: "elasticity",
                value: elasticity,
                min: 0.0,
                max: 1.0,
            });
        }
        ensure_finite(coefficient_of_friction, "coefficient of friction")?;
        if coefficient_of_friction < 0.0 {
            return Err(PhysicsError::OutOfRange {
                field: "coefficient of friction",
                value: coefficient_of_friction,
                min: 0.0,
                max: f64::INFINITY,
            });
        }

        let name = match name {
            Some(name) => name,
            None => {
                warn!("No name provided for {}", shape.describe());
                format!("unnamed {}", shape.describe())
            }
        };

        Ok(PhysicsObject {
            name,
            shape,
            position,
            velocity,
            acceleration,
            rotation,
            angular_velocity,
            angular_acceleration,
            inertial_mass,
            gravitational_mass,
            rotational_inertia,
            elasticity,
            coefficient_of_friction,
            antigravity,
            immovable,
            selected,
        })
    }

    /// Fold the accumulators into the velocities and clear them
    ///
    /// Immovable bodies keep their velocity, but their accumulators are still
    /// cleared.
    pub fn update_velocity(&mut self) {
        if !self.immovable {
            self.velocity += self.acceleration;
            self.angular_velocity += self.angular_acceleration;
        }
        self.acceleration = Vector::ZERO;
        self.angular_acceleration = 0.0;
    }

    /// Advance position and rotation by one frame of velocity
    pub fn update_position(&mut self) {
        self.position += self.velocity;
        self.rotation += self.angular_velocity;
    }

    /// [`update_velocity`](Self::update_velocity) then
    /// [`update_position`](Self::update_position)
    pub fn update(&mut self) {
        self.update_velocity();
        self.update_position();
    }

    /// Accumulate a force acting at `point`
    ///
    /// The linear part is `force / inertial_mass`. The angular part is
    /// `|F| * |r| * sin(angle(r) - angle(F)) * ROTATION_CONSTANT` divided by
    /// the rotational inertia, where `r = point - position`. A zero force does
    /// nothing.
    pub fn apply_force(&mut self, force: Vector, point: Vector) {
        let magnitude = force.magnitude();
        if magnitude == 0.0 {
            return;
        }
        self.acceleration += force / self.inertial_mass;
        self.angular_acceleration +=
            torque_about(self.position, force, point) / self.rotational_inertia;
    }

    /// Accumulate a force acting through the body origin
    pub fn apply_central_force(&mut self, force: Vector) {
        self.apply_force(force, self.position);
    }

    /// Collider in world coordinates
    ///
    /// Rotates the local shape by `-rotation` (in degrees) and then moves it
    /// to `position`.
    pub fn transformed_shape(&self) -> Collider {
        self.shape
            .rotate(-self.rotation.to_degrees())
            .translate(self.position)
    }

    /// Velocity of a world-space point rigidly attached to the body
    ///
    /// # Examples
    ///
    /// ```
    /// use rigid_sandbox::body::{BodyProperties, PhysicsObject};
    /// use rigid_sandbox::geometry::Circle;
    /// use rigid_sandbox::math::Vector;
    ///
    /// let spinning = PhysicsObject::new(
    ///     BodyProperties::new(Circle::centered(3.0))
    ///         .with_name("spinner")
    ///         .with_position(Vector::new(5.0, 10.0))
    ///         .with_velocity(Vector::new(123.0, 456.0))
    ///         .with_angular_velocity(std::f64::consts::FRAC_PI_2),
    /// )
    /// .unwrap();
    /// let v = spinning.velocity_of_point(Vector::new(8.0, 10.0));
    /// assert!(v.approx_eq(Vector::new(120.0, 459.0), 1e-9));
    /// ```
    pub fn velocity_of_point(&self, point: Vector) -> Vector {
        rigid_point_velocity(self.position, self.velocity, self.angular_velocity, point)
    }

    /// Bounds of the transformed shape
    pub fn bounding_box(&self) -> Rectangle {
        self.transformed_shape().bounding_box()
    }

    /// Whether a world-space point lies on the body
    pub fn contains_point(&self, point: Vector) -> bool {
        self.transformed_shape().contains_point(point)
    }

    /// Copy of the body moved by `offset`
    pub fn translated(&self, offset: Vector) -> Self {
        let mut copy = self.clone();
        copy.position += offset;
        copy
    }
}

/// Scaled torque of `force` applied at `point` about `origin`
pub(crate) fn torque_about(origin: Vector, force: Vector, point: Vector) -> f64 {
    let arm = point - origin;
    force.magnitude()
        * arm.magnitude()
        * (arm.angle() - force.angle()).to_radians().sin()
        * ROTATION_CONSTANT
}

/// Velocity of `point` on a body at `origin` moving with the given velocities
pub(crate) fn rigid_point_velocity(
    origin: Vector,
    velocity: Vector,
    angular_velocity: f64,
    point: Vector,
) -> Vector {
    point.rotate_about(origin, -angular_velocity.to_degrees()) - point + velocity
}
