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
//! Impulse solver
//!
//! Collisions are resolved as one-frame forces. Given a direction and a point
//! on a body, the solver finds the force magnitude that makes the point's
//! velocity along that direction equal a target after the next
//! [`update_velocity`](crate::body::PhysicsObject::update_velocity). Because
//! an off-center force also spins the body, the point velocity depends on the
//! magnitude through both the linear and the angular response.

use log::warn;

use crate::body::{rigid_point_velocity, torque_about, PhysicsObject, ROTATION_CONSTANT};
use crate::config::{ImpulseMethod, SolverConfig};
use crate::math::{continuous_binary_search, Vector};

/// Minimum separating speed enforced between two colliding bodies
pub const MIN_COLLISION_VELOCITY: f64 = 0.2;

/// Mass multiplier standing in for an immovable body's infinite mass
pub const IMMOVABLE_MASS_FACTOR: f64 = 1e6;

/// Velocity of body 1 along the contact normal after a 1D collision
///
/// `restitution` of 1 is perfectly elastic and 0 perfectly inelastic.
///
/// # Examples
///
/// ```
/// use rigid_sandbox::collision::velocity_after_collision;
///
/// // equal masses swap velocities in an elastic collision
/// assert_eq!(velocity_after_collision(1.0, -1.0, 1.0, 1.0, 1.0), -1.0);
/// ```
pub fn velocity_after_collision(
    velocity1: f64,
    velocity2: f64,
    mass1: f64,
    mass2: f64,
    restitution: f64,
) -> f64 {
    (mass1 * velocity1 + mass2 * velocity2 + mass2 * restitution * (velocity2 - velocity1))
        / (mass1 + mass2)
}

/// Kinematic state needed to simulate one frame of response
///
/// Starts from a body's current state including whatever forces it has
/// already accumulated this frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrialBody {
    position: Vector,
    velocity: Vector,
    acceleration: Vector,
    angular_velocity: f64,
    angular_acceleration: f64,
    inertial_mass: f64,
    rotational_inertia: f64,
    immovable: bool,
}

impl TrialBody {
    pub(crate) fn of(body: &PhysicsObject) -> Self {
        TrialBody {
            position: body.position,
            velocity: body.velocity,
            acceleration: body.acceleration,
            angular_velocity: body.angular_velocity,
            angular_acceleration: body.angular_acceleration,
            inertial_mass: body.inertial_mass,
            rotational_inertia: body.rotational_inertia,
            immovable: body.immovable,
        }
    }

    /// Copy with one more force accumulated
    pub(crate) fn with_force(mut self, force: Vector, point: Vector) -> Self {
        if force.magnitude() != 0.0 {
            self.acceleration += force / self.inertial_mass;
            self.angular_acceleration +=
                torque_about(self.position, force, point) / self.rotational_inertia;
        }
        self
    }

    /// Velocity of `point` along `direction` after applying `magnitude` along
    /// `direction` at `point` and folding the accumulators in
    fn velocity_after(&self, direction: Vector, point: Vector, magnitude: f64) -> f64 {
        let trial = self.with_force(direction.normalize() * magnitude, point);
        let (velocity, angular_velocity) = if trial.immovable {
            (trial.velocity, trial.angular_velocity)
        } else {
            (
                trial.velocity + trial.acceleration,
                trial.angular_velocity + trial.angular_acceleration,
            )
        };
        rigid_point_velocity(trial.position, velocity, angular_velocity, point)
            .scalar_projection(direction)
    }
}

/// Force magnitude along `direction` at `point` that brings the point's
/// velocity along `direction` to `final_velocity`
pub fn collision_force_from_velocity(
    body: &PhysicsObject,
    direction: Vector,
    point: Vector,
    final_velocity: f64,
    solver: &SolverConfig,
) -> f64 {
    impulse_magnitude(&TrialBody::of(body), direction, point, final_velocity, solver)
}

pub(crate) fn impulse_magnitude(
    body: &TrialBody,
    direction: Vector,
    point: Vector,
    final_velocity: f64,
    solver: &SolverConfig,
) -> f64 {
    match solver.impulse_method {
        ImpulseMethod::Quadratic => quadratic_impulse(body, direction, point, final_velocity),
        ImpulseMethod::Bisection => {
            bisection_impulse(body, direction, point, final_velocity, solver.search_iterations)
        }
    }
}

/// Closed-form candidates for the impulse magnitude
///
/// Linearizing the angular response gives two roots, one per sign of the
/// coupling term; the one whose trial lands closest to the target wins.
fn quadratic_impulse(body: &TrialBody, direction: Vector, point: Vector, final_velocity: f64) -> f64 {
    let n = direction;
    let p = body.position;
    let k = n.x * p.y - n.x * point.y + n.y * point.x - n.y * p.x;
    let r = p.distance_from(point);
    let theta = (n.angle() - (point - p).angle()).to_radians();
    let numerator = final_velocity - n.dot(body.velocity) - body.angular_velocity * k;
    let coupling = r * theta.sin() * ROTATION_CONSTANT * k / body.rotational_inertia;
    let inverse_mass = 1.0 / body.inertial_mass;

    let mut best: Option<(f64, f64)> = None;
    for root in [
        numerator / (inverse_mass + coupling),
        numerator / (inverse_mass - coupling),
    ] {
        if !root.is_finite() {
            warn!("Discarding non-finite impulse candidate {root}");
            continue;
        }
        let error = (final_velocity - body.velocity_after(n, point, root)).abs();
        if best.map_or(true, |(_, best_error)| error < best_error) {
            best = Some((root, error));
        }
    }
    best.map(|(root, _)| root).unwrap_or(0.0)
}

/// Bisection on the impulse magnitude
///
/// Probes the response slope first so the search direction is right even when
/// the angular coupling outweighs the linear term.
fn bisection_impulse(
    body: &TrialBody,
    direction: Vector,
    point: Vector,
    final_velocity: f64,
    iterations: usize,
) -> f64 {
    let base = body.velocity_after(direction, point, 0.0);
    let slope = body.velocity_after(direction, point, 1.0) - base;
    if slope == 0.0 || !slope.is_finite() {
        return 0.0;
    }
    let orientation = slope.signum();
    let root = continuous_binary_search(
        |magnitude| orientation * (body.velocity_after(direction, point, magnitude) - final_velocity),
        f64::NEG_INFINITY,
        f64::INFINITY,
        iterations,
    );
    if root.is_finite() {
        root
    } else {
        warn!("Bisection produced non-finite impulse {root}");
        0.0
    }
}
