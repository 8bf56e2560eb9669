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
//! Integration tests for body intersection and pairwise collision response

use approx::assert_abs_diff_eq;
use rigid_sandbox::body::{BodyProperties, Collider, PhysicsObject};
use rigid_sandbox::collision::{
    collision_force_from_velocity, velocity_after_collision, Contact, Side,
    MIN_COLLISION_VELOCITY,
};
use rigid_sandbox::config::SolverConfig;
use rigid_sandbox::geometry::{Circle, Polygon};
use rigid_sandbox::math::Vector;

fn body(props: BodyProperties) -> PhysicsObject {
    PhysicsObject::new(props).unwrap()
}

fn triangle() -> Polygon {
    Polygon::from_coords(&[1.0, -10.0, 1.0, 10.0, 10.0, 0.0]).unwrap()
}

fn intersects(a: &PhysicsObject, b: &PhysicsObject) -> bool {
    a.transformed_shape().intersects(&b.transformed_shape())
}

#[test]
fn test_bodies_intersect() {
    let circle = body(BodyProperties::new(Circle::from_coords(0.0, 0.0, 5.0)).with_name("circle-at-origin"));
    let tri = body(BodyProperties::new(triangle()).with_name("triangle"));
    assert!(intersects(&circle, &tri));
    assert!(intersects(&tri, &circle));
}

#[test]
fn test_bodies_do_not_intersect() {
    let circle = body(BodyProperties::new(Circle::from_coords(20.0, 0.0, 5.0)).with_name("circle-far-right"));
    let tri = body(BodyProperties::new(triangle()).with_name("triangle-near-origin"));
    assert!(!intersects(&circle, &tri));
}

#[test]
fn test_intersection_uses_body_position() {
    let circle = body(
        BodyProperties::new(Circle::from_coords(20.0, 0.0, 5.0))
            .with_name("circle-at-origin")
            .with_position(Vector::new(-20.0, 0.0)),
    );
    let small = body(
        BodyProperties::new(Polygon::from_coords(&[1.0, -1.0, -1.0, -1.0, 0.0, 1.0]).unwrap())
            .with_name("small-triangle"),
    );
    assert!(intersects(&circle, &small));
}

#[test]
fn test_intersection_uses_body_rotation() {
    let circle = body(BodyProperties::new(Circle::from_coords(50.0, 0.0, 5.0)).with_name("right-circle"));
    let needle = body(
        BodyProperties::new(Polygon::from_coords(&[1.0, -1.0, -1.0, -1.0, 0.0, 100.0]).unwrap())
            .with_name("rotated-triangle-pointing-right")
            .with_rotation(-std::f64::consts::FRAC_PI_2),
    );
    assert!(intersects(&circle, &needle));
    assert!(Contact::new(&circle, &needle, SolverConfig::default()).intersects());
}

#[test]
fn test_collision_forces_are_equal_and_opposite_for_circles() {
    let a = body(
        BodyProperties::new(Circle::centered(10.0))
            .with_name("a")
            .with_position(Vector::new(0.0, 0.0))
            .with_velocity(Vector::new(2.0, 1.0)),
    );
    let b = body(
        BodyProperties::new(Circle::centered(10.0))
            .with_name("b")
            .with_position(Vector::new(15.0, 8.0))
            .with_velocity(Vector::new(-1.0, 0.5)),
    );
    let contact = Contact::new(&a, &b, SolverConfig::default());
    assert!(contact.should_collide(false));
    let f1 = contact.collision_force(Side::First);
    let f2 = contact.collision_force(Side::Second);
    assert!((f1 + f2).approx_eq(Vector::ZERO, 1e-9), "{f1:?} vs {f2:?}");
    // the push on `a` points away from `b`
    assert!(f1.dot(b.position - a.position) < 0.0);
}

#[test]
fn test_forces_reach_target_velocities() {
    let a = body(
        BodyProperties::new(Circle::centered(10.0))
            .with_name("a")
            .with_velocity(Vector::new(3.0, 0.0))
            .with_elasticity(0.8),
    );
    let b = body(
        BodyProperties::new(Circle::centered(10.0))
            .with_name("b")
            .with_position(Vector::new(18.0, 6.0))
            .with_mass(2.5)
            .with_elasticity(0.8),
    );
    let contact = Contact::new(&a, &b, SolverConfig::default().with_friction(false));
    for (side, original) in [(Side::First, &a), (Side::Second, &b)] {
        let mut moved = original.clone();
        moved.apply_force(contact.collision_force(side), contact.force_point(side));
        moved.update_velocity();
        let normal_speed = moved
            .velocity_of_point(contact.force_point(side))
            .scalar_projection(contact.normal(side));
        assert_abs_diff_eq!(
            normal_speed,
            contact.velocity_after_collision(side),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_restitution_law() {
    for e in [0.0, 0.3, 0.5, 1.0] {
        let v1 = velocity_after_collision(2.0, -1.0, 1.5, 2.5, e);
        let v2 = velocity_after_collision(-1.0, 2.0, 2.5, 1.5, e);
        // momentum is conserved and separation is e times approach
        assert_abs_diff_eq!(1.5 * v1 + 2.5 * v2, 1.5 * 2.0 + 2.5 * -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v2 - v1, e * 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_separating_pair_is_not_resolved_twice() {
    let a = body(
        BodyProperties::new(Circle::centered(1.0))
            .with_name("a")
            .with_position(Vector::new(-0.9, 0.0))
            .with_velocity(Vector::new(-MIN_COLLISION_VELOCITY, 0.0)),
    );
    let b = body(
        BodyProperties::new(Circle::centered(1.0))
            .with_name("b")
            .with_position(Vector::new(0.9, 0.0))
            .with_velocity(Vector::new(MIN_COLLISION_VELOCITY, 0.0)),
    );
    let contact = Contact::new(&a, &b, SolverConfig::default());
    assert!(!contact.moving_toward(Side::First));
    assert!(!contact.moving_toward(Side::Second));
    assert!(!contact.should_collide(true));

    // slower than the floor, so the pair is pushed apart again
    let mut slow_a = a.clone();
    let mut slow_b = b.clone();
    slow_a.velocity = Vector::ZERO;
    slow_b.velocity = Vector::ZERO;
    let contact = Contact::new(&slow_a, &slow_b, SolverConfig::default());
    assert!(contact.should_collide(true));
}

#[test]
fn test_polygon_contact_geometry() {
    let floor = body(
        BodyProperties::new(Polygon::from_coords(&[-50.0, -5.0, 50.0, -5.0, 50.0, 5.0, -50.0, 5.0]).unwrap())
            .with_name("floor")
            .with_position(Vector::new(0.0, 10.0))
            .immovable(),
    );
    let block = body(
        BodyProperties::new(Polygon::from_coords(&[-2.0, -2.0, 2.0, -2.0, 2.0, 2.0, -2.0, 2.0]).unwrap())
            .with_name("block")
            .with_position(Vector::new(0.0, 4.0))
            .with_velocity(Vector::new(0.0, 1.0)),
    );
    let contact = Contact::new(&block, &floor, SolverConfig::default());
    assert!(contact.intersects());
    assert!(contact.intersection().approx_eq(Vector::new(0.0, 5.0), 1e-9));
    // perpendicular to the floor's top edge
    assert!(contact.normal(Side::First).approx_eq(Vector::new(0.0, 1.0), 1e-9));
    // both buried corners weigh the same
    assert!(contact.force_point(Side::First).approx_eq(Vector::new(0.0, 6.0), 1e-9));

    let push = contact.collision_force(Side::First);
    assert!(push.y < 0.0, "{push:?}");
    assert_eq!(contact.collision_force(Side::Second), -push);
}

#[test]
fn test_solvers_agree_on_central_hits() {
    let target = body(
        BodyProperties::new(Collider::from(Circle::centered(1.0)))
            .with_name("target")
            .with_velocity(Vector::new(0.0, 4.0))
            .with_mass(3.0),
    );
    let direction = Vector::new(0.0, -1.0);
    let quadratic =
        collision_force_from_velocity(&target, direction, target.position, 2.0, &SolverConfig::default());
    let bisection = collision_force_from_velocity(
        &target,
        direction,
        target.position,
        2.0,
        &SolverConfig::default().with_bisection(80),
    );
    // velocity along `direction` goes from -4 to 2
    assert_abs_diff_eq!(quadratic, 18.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bisection, 18.0, epsilon = 1e-9);
}
