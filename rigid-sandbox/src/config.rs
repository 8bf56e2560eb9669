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
//! World and solver configuration
//!
//! Both structs are plain data with sensible defaults and `with_*` builder
//! methods. Builders that take numeric arguments assert on nonsense values.

use serde::{Deserialize, Serialize};

use crate::math::DEFAULT_SEARCH_ITERATIONS;

/// How the collision solver turns a target velocity into an impulse magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImpulseMethod {
    /// Solve the coupled linear/angular response in closed form and keep the
    /// root whose one-step trial lands closest to the target
    #[default]
    Quadratic,
    /// Bisect on the impulse magnitude until the trial velocity matches
    Bisection,
}

/// Settings for the pairwise impulse solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Impulse magnitude strategy
    pub impulse_method: ImpulseMethod,
    /// Halvings performed by [`ImpulseMethod::Bisection`]
    pub search_iterations: usize,
    /// Whether tangential friction impulses are applied
    pub friction: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            impulse_method: ImpulseMethod::Quadratic,
            search_iterations: DEFAULT_SEARCH_ITERATIONS,
            friction: true,
        }
    }
}

impl SolverConfig {
    /// Use bisection with the given number of iterations
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    pub fn with_bisection(mut self, iterations: usize) -> Self {
        assert!(iterations > 0, "Bisection needs at least one iteration");
        self.impulse_method = ImpulseMethod::Bisection;
        self.search_iterations = iterations;
        self
    }

    /// Use the closed-form solver
    pub fn with_quadratic(mut self) -> Self {
        self.impulse_method = ImpulseMethod::Quadratic;
        self
    }

    /// Enable or disable friction
    pub fn with_friction(mut self, enabled: bool) -> Self {
        self.friction = enabled;
        self
    }
}

/// Settings for a [`PhysicsWorld`](crate::world::PhysicsWorld)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Downward acceleration applied each frame (positive y is down)
    pub gravitational_acceleration: f64,
    /// Collision solver settings
    pub solver: SolverConfig,
    /// Keep a [`CollisionInfo`](crate::world::CollisionInfo) record for every
    /// intersecting pair each step
    pub collect_collision_info: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            gravitational_acceleration: 0.0,
            solver: SolverConfig::default(),
            collect_collision_info: false,
        }
    }
}

impl WorldConfig {
    /// Default configuration with the given gravity
    pub fn new(gravitational_acceleration: f64) -> Self {
        WorldConfig::default().with_gravity(gravitational_acceleration)
    }

    /// Set the gravitational acceleration
    ///
    /// # Panics
    ///
    /// Panics if `gravitational_acceleration` is not finite.
    pub fn with_gravity(mut self, gravitational_acceleration: f64) -> Self {
        assert!(
            gravitational_acceleration.is_finite(),
            "Gravitational acceleration must be finite"
        );
        self.gravitational_acceleration = gravitational_acceleration;
        self
    }

    /// Replace the solver settings
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Record per-pair collision details every step
    pub fn with_collision_info(mut self) -> Self {
        self.collect_collision_info = true;
        self
    }
}
