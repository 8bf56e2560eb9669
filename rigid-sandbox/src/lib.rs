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
//! # Rigid Sandbox
//!
//! A 2D rigid-body physics sandbox with impulse-based collision response.
//!
//! ## Features
//!
//! - **Geometry**: circles, polygons, lines and segments with a full
//!   pairwise intersection library
//! - **Rigid bodies**: linear and angular state with per-frame force
//!   accumulation
//! - **Collision response**: one-frame impulses with restitution, a minimum
//!   separation speed and Coulomb-style friction
//! - **Recording**: per-frame snapshots that replay bit-exactly
//! - **Parallelization**: optional Rayon fan-out of the read-only narrow phase
//!
//! Coordinates follow the screen convention: y grows downward and angles are
//! measured in degrees counter-clockwise as seen on screen.
//!
//! ## Example
//!
//! ```rust
//! use rigid_sandbox::body::{BodyProperties, PhysicsObject};
//! use rigid_sandbox::config::WorldConfig;
//! use rigid_sandbox::geometry::Circle;
//! use rigid_sandbox::math::Vector;
//! use rigid_sandbox::world::PhysicsWorld;
//!
//! let mut world = PhysicsWorld::with_config(WorldConfig::default());
//! let left = world.add(
//!     PhysicsObject::new(
//!         BodyProperties::new(Circle::centered(2.0))
//!             .with_name("left")
//!             .with_position(Vector::new(-9.0, 0.0))
//!             .with_velocity(Vector::new(2.0, 0.0)),
//!     )
//!     .unwrap(),
//! );
//! world.add(
//!     PhysicsObject::new(
//!         BodyProperties::new(Circle::centered(2.0))
//!             .with_name("right")
//!             .with_position(Vector::new(9.0, 0.0))
//!             .with_velocity(Vector::new(-2.0, 0.0)),
//!     )
//!     .unwrap(),
//! );
//!
//! for _ in 0..10 {
//!     world.update();
//! }
//! assert!(world.get(left).unwrap().velocity.x < 0.0);
//! ```

#![warn(missing_docs)]

/// Rigid bodies and their shapes
pub mod body;

/// Pairwise collision derivation and impulse solving
pub mod collision;

/// World and solver settings
pub mod config;

/// Crate-wide error type
pub mod error;

/// Shapes and intersection tests
pub mod geometry;

/// Vector math and numeric helpers
pub mod math;

/// Snapshots and recordings
pub mod replay;

/// The simulation world
pub mod world;

pub use body::{BodyProperties, PhysicsObject};
pub use config::{SolverConfig, WorldConfig};
pub use error::{PhysicsError, Result};
pub use math::Vector;
pub use world::{BodyId, PhysicsWorld};
