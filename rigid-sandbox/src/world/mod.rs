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
//! The simulation world
//!
//! [`PhysicsWorld`] owns every body and advances them one frame at a time:
//!
//! 1. a weight of `inertial_mass * g` is applied to every body that is not
//!    `antigravity`
//! 2. every body moves by its velocity, then folds its accumulators in
//! 3. every pair `i < j` whose shapes intersect is resolved through a fresh
//!    [`Contact`], applying normal impulses first and friction second
//! 4. the overlap set is replaced by the pairs found in step 3
//! 5. every body folds the collision impulses into its velocity
//!
//! With the `parallel` feature the read-only part of step 3 (transforming
//! shapes and testing pairs) runs on rayon. Resolution is always sequential in
//! pair order, so results do not depend on the feature.

mod handle;
mod overlap;

pub use handle::BodyId;
pub use overlap::OverlapSet;

use log::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::body::{Collider, PhysicsObject};
use crate::collision::{Contact, Resolution, Side};
use crate::config::WorldConfig;
use crate::error::Result;
use crate::math::Vector;
use crate::replay::{BodySnapshot, Recording};

/// Details of one intersecting pair, kept when
/// [`WorldConfig::collect_collision_info`] is set
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionInfo {
    /// Lower-indexed body
    pub first: BodyId,
    /// Higher-indexed body
    pub second: BodyId,
    /// Contact point
    pub intersection: Vector,
    /// Normal from the first body's point of view
    pub normal: Vector,
    /// Tangent from the first body's point of view
    pub tangent: Vector,
    /// Where each body is pushed
    pub force_points: [Vector; 2],
    /// Normal impulse each body would receive
    pub forces: [Vector; 2],
    /// Whether the impulses were actually applied this step
    pub resolved: bool,
}

impl CollisionInfo {
    fn from_contact(first: BodyId, second: BodyId, contact: &Contact<'_>, resolved: bool) -> Self {
        CollisionInfo {
            first,
            second,
            intersection: contact.intersection(),
            normal: contact.normal(Side::First),
            tangent: contact.tangent(Side::First),
            force_points: [
                contact.force_point(Side::First),
                contact.force_point(Side::Second),
            ],
            forces: [
                contact.collision_force(Side::First),
                contact.collision_force(Side::Second),
            ],
            resolved,
        }
    }
}

#[derive(Debug, Clone)]
struct ReplayCursor {
    recording: Recording,
    next: usize,
}

/// Container of bodies advanced in fixed frames
///
/// # Examples
///
/// ```
/// use rigid_sandbox::body::{BodyProperties, PhysicsObject};
/// use rigid_sandbox::geometry::Circle;
/// use rigid_sandbox::math::Vector;
/// use rigid_sandbox::world::PhysicsWorld;
/// use rigid_sandbox::config::WorldConfig;
///
/// let mut world = PhysicsWorld::with_config(WorldConfig::new(0.1));
/// let ball = world.add(
///     PhysicsObject::new(BodyProperties::new(Circle::centered(10.0)).with_name("ball")).unwrap(),
/// );
/// world.step();
/// assert!(world.get(ball).unwrap().velocity.y > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhysicsWorld {
    objects: Vec<PhysicsObject>,
    config: WorldConfig,
    paused: bool,
    frame: u64,
    overlaps: OverlapSet,
    collision_info: Vec<CollisionInfo>,
    recording: Option<Recording>,
    replay: Option<ReplayCursor>,
}

impl PhysicsWorld {
    /// Empty world without gravity
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty world with the given configuration
    pub fn with_config(config: WorldConfig) -> Self {
        PhysicsWorld {
            config,
            ..Self::default()
        }
    }

    /// Add a body and return its handle
    pub fn add(&mut self, body: PhysicsObject) -> BodyId {
        let id = BodyId::new(self.objects.len());
        debug!("Added {} as {}", body.name, id);
        self.objects.push(body);
        id
    }

    /// Add several bodies, returning their handles in order
    pub fn extend<I: IntoIterator<Item = PhysicsObject>>(&mut self, bodies: I) -> Vec<BodyId> {
        bodies.into_iter().map(|body| self.add(body)).collect()
    }

    /// All bodies in insertion order
    pub fn objects(&self) -> &[PhysicsObject] {
        &self.objects
    }

    /// Bodies with their handles
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &PhysicsObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyId::new(i), body))
    }

    /// Body by handle
    pub fn get(&self, id: BodyId) -> Option<&PhysicsObject> {
        self.objects.get(id.index())
    }

    /// Mutable body by handle
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut PhysicsObject> {
        self.objects.get_mut(id.index())
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the world has no bodies
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Current configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Gravity applied per frame
    pub fn gravitational_acceleration(&self) -> f64 {
        self.config.gravitational_acceleration
    }

    /// Change gravity
    ///
    /// # Panics
    ///
    /// Panics if `gravitational_acceleration` is not finite.
    pub fn set_gravitational_acceleration(&mut self, gravitational_acceleration: f64) {
        self.config = self.config.with_gravity(gravitational_acceleration);
    }

    /// Whether [`update`](Self::update) is suspended
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend or resume [`update`](Self::update)
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause flag
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Number of frames advanced so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Pairs that intersected during the last step
    pub fn overlaps(&self) -> &OverlapSet {
        &self.overlaps
    }

    /// Per-pair details from the last step
    ///
    /// Empty unless [`WorldConfig::collect_collision_info`] is set.
    pub fn collision_info(&self) -> &[CollisionInfo] {
        &self.collision_info
    }

    /// Advance one frame unless paused
    pub fn update(&mut self) {
        if !self.paused {
            self.step();
        }
    }

    /// Advance exactly one frame, ignoring the pause flag
    pub fn step(&mut self) {
        if self.replay.is_some() {
            self.advance_replay();
        } else {
            self.simulate();
        }
        if self.recording.is_some() {
            let snapshot = self.snapshot();
            if let Some(recording) = self.recording.as_mut() {
                recording.push(snapshot);
            }
        }
        self.frame += 1;
    }

    /// Pose of every body in insertion order
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.objects
            .iter()
            .map(|body| BodySnapshot::new(body.position, body.rotation))
            .collect()
    }

    /// Start capturing a snapshot after every step, discarding any previous
    /// recording
    pub fn start_recording(&mut self) {
        self.recording = Some(Recording::new());
    }

    /// Frames captured so far
    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    /// Stop capturing and hand back the recording
    pub fn stop_recording(&mut self) -> Option<Recording> {
        self.recording.take()
    }

    /// Drive the bodies from `recording` instead of simulating
    ///
    /// Each subsequent step sets every body's position and rotation from the
    /// next frame. Simulation resumes once the frames run out.
    ///
    /// # Errors
    ///
    /// Rejects recordings with an incompatible format version or a frame whose
    /// length differs from the number of bodies.
    pub fn replay(&mut self, recording: Recording) -> Result<()> {
        if let Err(err) = recording.validate(self.objects.len()) {
            warn!("Rejected recording: {err}");
            return Err(err);
        }
        debug!("Replaying {} frames", recording.len());
        self.replay = Some(ReplayCursor { recording, next: 0 });
        Ok(())
    }

    /// Whether a replay is in progress
    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    /// Abandon the current replay and resume simulating
    pub fn stop_replay(&mut self) {
        self.replay = None;
    }

    fn advance_replay(&mut self) {
        let Some(cursor) = self.replay.as_mut() else {
            return;
        };
        if let Some(frame) = cursor.recording.frames.get(cursor.next) {
            for (body, snapshot) in self.objects.iter_mut().zip(frame) {
                body.position = snapshot.position();
                body.rotation = snapshot.r;
            }
            cursor.next += 1;
        }
        self.collision_info.clear();
        if cursor.next >= cursor.recording.len() {
            debug!("Replay finished at frame {}", self.frame);
            self.replay = None;
        }
    }

    fn simulate(&mut self) {
        self.apply_gravity();
        for body in &mut self.objects {
            body.update_position();
            body.update_velocity();
        }
        self.apply_collisions();
        for body in &mut self.objects {
            body.update_velocity();
        }
    }

    fn apply_gravity(&mut self) {
        let g = self.config.gravitational_acceleration;
        for body in self.objects.iter_mut().filter(|body| !body.antigravity) {
            let weight = Vector::new(0.0, body.inertial_mass * g);
            body.apply_central_force(weight);
        }
    }

    fn apply_collisions(&mut self) {
        let shapes = transformed_shapes(&self.objects);
        let candidates = intersecting_pairs(&shapes);

        let mut overlaps = OverlapSet::new();
        let mut collision_info = Vec::new();
        let mut resolved = 0;
        for &(i, j) in &candidates {
            let (first, second) = (BodyId::new(i), BodyId::new(j));
            overlaps.insert(first, second);
            if self.objects[i].immovable && self.objects[j].immovable {
                continue;
            }

            let contact = Contact::with_shapes(
                &self.objects[i],
                &self.objects[j],
                shapes[i].clone(),
                shapes[j].clone(),
                self.config.solver,
            );
            let resolution = contact
                .should_collide(self.overlaps.contains(first, second))
                .then(|| contact.resolve());
            if self.config.collect_collision_info {
                collision_info.push(CollisionInfo::from_contact(
                    first,
                    second,
                    &contact,
                    resolution.is_some(),
                ));
            }
            drop(contact);

            if let Some(resolution) = resolution {
                trace!("Resolving {first} / {second}");
                self.apply_resolution(i, j, &resolution);
                resolved += 1;
            }
        }

        debug!(
            "Frame {}: {} intersecting pairs, {} resolved",
            self.frame,
            candidates.len(),
            resolved
        );
        self.overlaps = overlaps;
        self.collision_info = collision_info;
    }

    fn apply_resolution(&mut self, i: usize, j: usize, resolution: &Resolution) {
        let [point_i, point_j] = resolution.force_points;
        self.objects[i].apply_force(resolution.normal_forces[0], point_i);
        self.objects[j].apply_force(resolution.normal_forces[1], point_j);
        self.objects[i].apply_force(resolution.friction_forces[0], point_i);
        self.objects[j].apply_force(resolution.friction_forces[1], point_j);
    }
}

fn transformed_shapes(objects: &[PhysicsObject]) -> Vec<Collider> {
    #[cfg(feature = "parallel")]
    {
        objects.par_iter().map(PhysicsObject::transformed_shape).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        objects.iter().map(PhysicsObject::transformed_shape).collect()
    }
}

/// Every pair `i < j` whose shapes intersect, in pair order
fn intersecting_pairs(shapes: &[Collider]) -> Vec<(usize, usize)> {
    let n = shapes.len();
    let pairs = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));

    #[cfg(feature = "parallel")]
    {
        let pairs: Vec<(usize, usize)> = pairs.collect();
        pairs
            .into_par_iter()
            .filter(|&(i, j)| shapes[i].intersects(&shapes[j]))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pairs
            .filter(|&(i, j)| shapes[i].intersects(&shapes[j]))
            .collect()
    }
}
