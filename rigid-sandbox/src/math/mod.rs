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
//! Vector math and numeric helpers
//!
//! - [`Vector`]: 2D value type used by every other module
//! - [`continuous_binary_search`]: bisection with open brackets, used by the
//!   alternative impulse solver
//! - [`weighted_average`] / [`mean`]: point averaging for contact derivation

mod search;
mod vector;

pub use search::{continuous_binary_search, mean, weighted_average, DEFAULT_SEARCH_ITERATIONS};
pub use vector::{Vector, VECTOR_EPSILON};
