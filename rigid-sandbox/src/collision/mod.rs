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
//! Collision response
//!
//! [`Contact`] derives the geometry of a single colliding pair and the
//! impulses that resolve it. The impulse solver lives in `response` and is
//! exposed through [`collision_force_from_velocity`].

mod contact;
mod response;

pub use contact::{Contact, Resolution, Side};
pub use response::{
    collision_force_from_velocity, velocity_after_collision, IMMOVABLE_MASS_FACTOR,
    MIN_COLLISION_VELOCITY,
};
