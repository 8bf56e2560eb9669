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
//! Which bodies were overlapping after the last step

use std::collections::{BTreeMap, BTreeSet};

use super::BodyId;

/// Symmetric adjacency set of overlapping bodies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapSet {
    adjacency: BTreeMap<BodyId, BTreeSet<BodyId>>,
}

impl OverlapSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `a` and `b` overlap
    pub fn insert(&mut self, a: BodyId, b: BodyId) {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Whether `a` and `b` overlap, in either order
    pub fn contains(&self, a: BodyId, b: BodyId) -> bool {
        self.adjacency
            .get(&a)
            .map_or(false, |neighbors| neighbors.contains(&b))
    }

    /// Bodies overlapping `id`, in ascending order
    pub fn overlapping(&self, id: BodyId) -> impl Iterator<Item = BodyId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    /// Number of overlapping pairs
    pub fn pair_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Whether no bodies overlap
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Forget every pair
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }
}
