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
//! Scenario Presets Example
//!
//! Builds one of the preset sandbox scenes on an 800x600 canvas, runs it for
//! a number of frames and prints where every body ended up. Optionally
//! writes the recorded trajectory as JSON so it can be replayed later.
//!
//! # Running
//!
//! ```bash
//! # List the presets
//! cargo run --example scenarios -- --list
//!
//! # Run a preset for 500 frames and save the recording
//! cargo run --example scenarios -- polygon-polygon-collision --frames 500 --record out.json
//!
//! # Replay a saved recording against the same preset
//! cargo run --example scenarios -- polygon-polygon-collision --replay out.json
//! ```

use rigid_sandbox::body::{BodyProperties, PhysicsObject};
use rigid_sandbox::config::WorldConfig;
use rigid_sandbox::geometry::{Circle, Polygon};
use rigid_sandbox::math::Vector;
use rigid_sandbox::replay::Recording;
use rigid_sandbox::world::PhysicsWorld;
use rigid_sandbox::Result;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

type Loader = fn() -> Result<PhysicsWorld>;

const SCENARIOS: &[(&str, Loader)] = &[
    ("falling-ball", falling_ball),
    ("ball-collisions-different-elasticities", ball_collisions),
    ("2d-collision", collision_2d),
    ("2d-collision-with-rotation", collision_with_rotation),
    ("polygon-polygon-collision", polygon_polygon),
    ("bouncing-ball", bouncing_ball),
    ("falling-rectangle", falling_rectangle),
    ("slanted-falling-rectangle", slanted_falling_rectangle),
    ("rectangle-falls-on-slope", rectangle_falls_on_slope),
];

fn ball(position: Vector) -> BodyProperties {
    BodyProperties::new(Circle::centered(50.0)).with_position(position)
}

fn floor() -> Result<BodyProperties> {
    let (w, h) = (WIDTH / 2.0, HEIGHT / 16.0);
    Ok(BodyProperties::new(Polygon::from_coords(&[-w, -h, w, -h, w, h, -w, h])?)
        .with_name("floor")
        .with_position(Vector::new(WIDTH / 2.0, HEIGHT * 15.0 / 16.0))
        .antigravity()
        .immovable())
}

fn plank() -> Result<Polygon> {
    Polygon::from_coords(&[-50.0, -10.0, 50.0, -10.0, 50.0, 10.0, -50.0, 10.0])
}

fn build(gravity: f64, bodies: Vec<BodyProperties>) -> Result<PhysicsWorld> {
    let mut world = PhysicsWorld::with_config(WorldConfig::new(gravity));
    for props in bodies {
        world.add(PhysicsObject::new(props)?);
    }
    Ok(world)
}

fn falling_ball() -> Result<PhysicsWorld> {
    build(0.1, vec![ball(Vector::new(WIDTH / 2.0, HEIGHT / 2.0))])
}

fn ball_collisions() -> Result<PhysicsWorld> {
    let mut bodies = Vec::new();
    for (y, elasticity) in [(100.0, 1.0), (250.0, 0.5), (400.0, 0.1)] {
        bodies.push(
            ball(Vector::new(0.0, y))
                .with_velocity(Vector::new(3.0, 0.0))
                .with_elasticity(elasticity),
        );
        bodies.push(
            ball(Vector::new(WIDTH, y))
                .with_velocity(Vector::new(-3.0, 0.0))
                .with_elasticity(elasticity),
        );
    }
    build(0.0, bodies)
}

fn collision_2d() -> Result<PhysicsWorld> {
    build(
        0.0,
        vec![
            ball(Vector::new(0.0, HEIGHT / 4.0))
                .with_velocity(Vector::new(3.0, 0.0))
                .with_elasticity(0.5),
            ball(Vector::new(WIDTH / 2.0, HEIGHT / 4.0 + 75.0)).with_elasticity(0.5),
        ],
    )
}

fn collision_with_rotation() -> Result<PhysicsWorld> {
    let triangle = Polygon::new(vec![
        Vector::new(-50.0, 50.0),
        Vector::new(50.0, 50.0),
        Vector::new(0.0, -150.0),
    ])?;
    build(
        0.0,
        vec![
            BodyProperties::new(triangle).with_position(Vector::new(WIDTH / 2.0, HEIGHT / 2.0)),
            ball(Vector::new(0.0, HEIGHT / 2.0 - 100.0))
                .with_velocity(Vector::new(3.0, 0.0))
                .selected(),
        ],
    )
}

fn polygon_polygon() -> Result<PhysicsWorld> {
    build(
        0.0,
        vec![
            BodyProperties::new(Polygon::regular(3)?.scale(50.0).rotate(90.0))
                .with_position(Vector::new(WIDTH / 4.0, HEIGHT / 4.0))
                .with_angular_velocity(0.1)
                .with_velocity(Vector::new(1.0, 1.0))
                .with_elasticity(0.5),
            BodyProperties::new(Polygon::regular(6)?.scale(100.0).rotate(90.0))
                .with_position(Vector::new(WIDTH / 2.0, HEIGHT / 2.0))
                .with_mass(2.0)
                .with_elasticity(0.5),
        ],
    )
}

fn bouncing_ball() -> Result<PhysicsWorld> {
    build(
        0.1,
        vec![
            ball(Vector::new(WIDTH / 2.0, HEIGHT / 2.0)),
            ball(Vector::new(WIDTH / 2.0 - 150.0, HEIGHT / 2.0)).with_mass(100.0),
            floor()?,
        ],
    )
}

fn falling_rectangle() -> Result<PhysicsWorld> {
    build(
        0.1,
        vec![
            floor()?.with_elasticity(0.1),
            BodyProperties::new(plank()?)
                .with_position(Vector::new(WIDTH / 2.0, HEIGHT / 2.0))
                .with_elasticity(0.1),
        ],
    )
}

fn slanted_falling_rectangle() -> Result<PhysicsWorld> {
    build(
        0.1,
        vec![
            floor()?.with_elasticity(0.1),
            BodyProperties::new(plank()?.rotate(45.0))
                .with_position(Vector::new(WIDTH / 2.0, HEIGHT / 2.0))
                .with_elasticity(0.1),
        ],
    )
}

fn rectangle_falls_on_slope() -> Result<PhysicsWorld> {
    const FLOOR_SIZE: f64 = 150.0;
    let slope = Polygon::from_coords(&[
        FLOOR_SIZE, FLOOR_SIZE, -FLOOR_SIZE, FLOOR_SIZE, -FLOOR_SIZE, 0.0, FLOOR_SIZE, -FLOOR_SIZE,
    ])?;
    build(
        0.1,
        vec![
            BodyProperties::new(plank()?)
                .with_position(Vector::new(WIDTH / 2.0, 0.0))
                .with_elasticity(0.1)
                .selected(),
            BodyProperties::new(slope)
                .with_position(Vector::new(WIDTH / 2.0, HEIGHT / 2.0))
                .immovable()
                .antigravity()
                .with_elasticity(0.1),
        ],
    )
}

struct Options {
    scenario: String,
    frames: u64,
    record: Option<String>,
    replay: Option<String>,
}

fn parse_args() -> std::result::Result<Option<Options>, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = Options {
        scenario: "polygon-polygon-collision".to_string(),
        frames: 300,
        record: None,
        replay: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--list" => return Ok(None),
            "--frames" => {
                let value = args.get(i + 1).ok_or("--frames requires an argument")?;
                options.frames = value
                    .parse()
                    .map_err(|_| format!("invalid frame count '{value}'"))?;
                i += 1;
            }
            "--record" => {
                options.record = Some(args.get(i + 1).ok_or("--record requires a path")?.clone());
                i += 1;
            }
            "--replay" => {
                options.replay = Some(args.get(i + 1).ok_or("--replay requires a path")?.clone());
                i += 1;
            }
            name => options.scenario = name.to_string(),
        }
        i += 1;
    }
    Ok(Some(options))
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(options) = parse_args()? else {
        for (name, _) in SCENARIOS {
            println!("{name}");
        }
        return Ok(());
    };

    let loader = SCENARIOS
        .iter()
        .find(|(name, _)| *name == options.scenario)
        .map(|(_, loader)| *loader)
        .ok_or_else(|| format!("unknown scenario '{}', try --list", options.scenario))?;
    let mut world = loader()?;
    println!("Scenario: {} ({} bodies)", options.scenario, world.len());

    if let Some(path) = &options.replay {
        let recording: Recording = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let frames = recording.len();
        world.replay(recording)?;
        println!("Replaying {frames} recorded frames from {path}");
    }
    if options.record.is_some() {
        world.start_recording();
    }

    for _ in 0..options.frames {
        world.step();
    }

    println!("After {} frames:", world.frame());
    for (id, body) in world.bodies() {
        println!(
            "  {id} {:<20} position ({:8.2}, {:8.2})  velocity ({:7.3}, {:7.3})  rotation {:7.3}",
            body.name,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.rotation,
        );
    }
    println!("Overlapping pairs seen: {}", world.overlaps().pair_count());

    if let (Some(path), Some(recording)) = (&options.record, world.stop_recording()) {
        std::fs::write(path, serde_json::to_string(&recording)?)?;
        println!("Wrote {} frames to {path}", recording.len());
    }

    Ok(())
}
