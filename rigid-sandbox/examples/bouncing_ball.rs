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
//! Bouncing Ball Example
//!
//! Drops a ball onto an immovable floor and prints its height every few
//! frames until it settles. Set `RUST_LOG=debug` to see the collision log.
//!
//! # Running
//!
//! ```bash
//! cargo run --example bouncing_ball
//! RUST_LOG=trace cargo run --example bouncing_ball -- 600
//! ```

use rigid_sandbox::body::{BodyProperties, PhysicsObject};
use rigid_sandbox::config::WorldConfig;
use rigid_sandbox::geometry::{Circle, Polygon};
use rigid_sandbox::math::Vector;
use rigid_sandbox::world::PhysicsWorld;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 400,
    };

    let mut world = PhysicsWorld::with_config(WorldConfig::new(0.1));
    let ball = world.add(PhysicsObject::new(
        BodyProperties::new(Circle::centered(50.0))
            .with_name("ball")
            .with_position(Vector::new(WIDTH / 2.0, HEIGHT / 2.0)),
    )?);
    world.add(PhysicsObject::new(
        BodyProperties::new(Polygon::from_coords(&[
            -WIDTH / 2.0,
            -HEIGHT / 16.0,
            WIDTH / 2.0,
            -HEIGHT / 16.0,
            WIDTH / 2.0,
            HEIGHT / 16.0,
            -WIDTH / 2.0,
            HEIGHT / 16.0,
        ])?)
        .with_name("floor")
        .with_position(Vector::new(WIDTH / 2.0, HEIGHT * 15.0 / 16.0))
        .antigravity()
        .immovable(),
    )?);

    println!("frame      y          vy");
    for _ in 0..frames {
        world.step();
        if world.frame() % 20 == 0 {
            if let Some(body) = world.get(ball) {
                println!("{:5}  {:9.3}  {:9.4}", world.frame(), body.position.y, body.velocity.y);
            }
        }
    }

    Ok(())
}
