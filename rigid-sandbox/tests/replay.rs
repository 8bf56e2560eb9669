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
//! Integration tests for recording and replaying worlds

use rigid_sandbox::body::{BodyProperties, PhysicsObject};
use rigid_sandbox::config::WorldConfig;
use rigid_sandbox::error::PhysicsError;
use rigid_sandbox::geometry::{Circle, Polygon};
use rigid_sandbox::math::Vector;
use rigid_sandbox::replay::{Recording, RECORDING_FORMAT_VERSION};
use rigid_sandbox::world::PhysicsWorld;

fn falling_rectangle() -> PhysicsWorld {
    let mut world = PhysicsWorld::with_config(WorldConfig::new(0.1));
    world.add(
        PhysicsObject::new(
            BodyProperties::new(
                Polygon::from_coords(&[-400.0, -37.5, 400.0, -37.5, 400.0, 37.5, -400.0, 37.5]).unwrap(),
            )
            .with_name("floor")
            .with_position(Vector::new(400.0, 562.5))
            .with_elasticity(0.1)
            .antigravity()
            .immovable(),
        )
        .unwrap(),
    );
    world.add(
        PhysicsObject::new(
            BodyProperties::new(
                Polygon::from_coords(&[-50.0, -10.0, 50.0, -10.0, 50.0, 10.0, -50.0, 10.0])
                    .unwrap()
                    .rotate(45.0),
            )
            .with_name("slanted-rectangle")
            .with_position(Vector::new(400.0, 300.0))
            .with_elasticity(0.1),
        )
        .unwrap(),
    );
    world.add(
        PhysicsObject::new(
            BodyProperties::new(Circle::centered(20.0))
                .with_name("ball")
                .with_position(Vector::new(250.0, 350.0))
                .with_velocity(Vector::new(1.5, 0.0)),
        )
        .unwrap(),
    );
    world
}

fn record(frames: usize) -> Recording {
    let mut world = falling_rectangle();
    world.start_recording();
    for _ in 0..frames {
        world.step();
    }
    world.stop_recording().unwrap()
}

#[test]
fn test_recording_is_reproducible() {
    let recording = record(400);
    assert_eq!(recording.len(), 400);
    assert_eq!(recording.format_version, RECORDING_FORMAT_VERSION);

    // a fresh simulation retraces the recording bit for bit
    let mut world = falling_rectangle();
    for frame in &recording.frames {
        world.step();
        assert_eq!(&world.snapshot(), frame);
    }
}

#[test]
fn test_json_round_trip_replays() {
    let recording = record(120);
    let json = serde_json::to_string(&recording).unwrap();
    assert!(json.contains("\"format_version\""));
    let loaded: Recording = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, recording);

    let mut world = falling_rectangle();
    world.replay(loaded).unwrap();
    let mut replayed = Vec::new();
    while world.is_replaying() {
        world.step();
        replayed.push(world.snapshot());
    }
    assert_eq!(replayed, recording.frames);
    assert_eq!(world.frame(), 120);
}

#[test]
fn test_snapshot_json_shape() {
    let world = falling_rectangle();
    let json = serde_json::to_value(world.snapshot()).unwrap();
    assert_eq!(json[2]["x"], 250.0);
    assert_eq!(json[2]["y"], 350.0);
    assert_eq!(json[2]["r"], 0.0);
}

#[test]
fn test_rejects_incompatible_recordings() {
    let mut recording = record(3);
    recording.format_version = "2.1.0".to_string();
    let mut world = falling_rectangle();
    assert!(matches!(
        world.replay(recording.clone()),
        Err(PhysicsError::IncompatibleRecording { .. })
    ));

    recording.format_version = RECORDING_FORMAT_VERSION.to_string();
    recording.frames[1].pop();
    assert_eq!(
        world.replay(recording),
        Err(PhysicsError::FrameSizeMismatch {
            frame: 1,
            found: 2,
            expected: 3
        })
    );
    assert!(!world.is_replaying());
}
