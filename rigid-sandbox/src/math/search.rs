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
//! Small numeric helpers used by the collision solver

use crate::math::Vector;

/// Default number of bisection steps for [`continuous_binary_search`]
pub const DEFAULT_SEARCH_ITERATIONS: usize = 20;

/// Upper limit on bracket doublings before giving up on an open bound
const MAX_EXPANSIONS: usize = 128;

/// Bisection search over a continuous, monotonic function
///
/// `callback` must return a negative value when its argument is too small and
/// a positive value when it is too big. Either bound may be infinite; an open
/// bound is closed by probing ±1, ±2, ±4, ... until the sign flips. The
/// bracket is then halved `iterations` times and its midpoint returned.
///
/// # Examples
///
/// ```
/// use rigid_sandbox::math::continuous_binary_search;
///
/// let root = continuous_binary_search(|x| x * x - 2.0, 0.0, f64::INFINITY, 30);
/// assert!((root - 2f64.sqrt()).abs() < 1e-6);
/// ```
pub fn continuous_binary_search<F>(mut callback: F, min: f64, max: f64, iterations: usize) -> f64
where
    F: FnMut(f64) -> f64,
{
    let mut min = min;
    let mut max = max;

    if max == f64::INFINITY {
        let mut probe = 1.0;
        for _ in 0..MAX_EXPANSIONS {
            if callback(probe) > 0.0 {
                max = probe;
                break;
            }
            probe *= 2.0;
        }
        if max == f64::INFINITY {
            max = probe;
        }
    }
    if min == f64::NEG_INFINITY {
        let mut probe = -1.0;
        for _ in 0..MAX_EXPANSIONS {
            if callback(probe) < 0.0 {
                min = probe;
                break;
            }
            probe *= 2.0;
        }
        if min == f64::NEG_INFINITY {
            min = probe;
        }
    }

    for _ in 0..iterations {
        let mid = (max + min) / 2.0;
        let result = callback(mid);
        if result < 0.0 {
            min = mid;
        } else if result > 0.0 {
            max = mid;
        } else {
            return mid;
        }
    }
    (max + min) / 2.0
}

/// Weighted mean of a set of points
///
/// Falls back to the plain mean when the weights sum to zero, and returns
/// `None` for an empty set.
pub fn weighted_average(points: &[Vector], weights: &[f64]) -> Option<Vector> {
    if points.is_empty() {
        return None;
    }
    let total: f64 = weights.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return mean(points);
    }
    let sum: Vector = points
        .iter()
        .zip(weights)
        .map(|(&p, &w)| p * w)
        .sum();
    Some(sum / total)
}

/// Arithmetic mean of a set of points, `None` when empty
pub fn mean(points: &[Vector]) -> Option<Vector> {
    if points.is_empty() {
        None
    } else {
        Some(points.iter().copied().sum::<Vector>() / points.len() as f64)
    }
}
