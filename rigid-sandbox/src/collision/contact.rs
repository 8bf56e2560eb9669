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
//! Pairwise contact derivation
//!
//! A [`Contact`] borrows two bodies and lazily derives everything the solver
//! needs about their collision: the contact point, the normal and tangent as
//! seen from each body, where each body is pushed, and the resulting forces.
//! Each quantity is computed at most once per contact and a contact lives for
//! a single pair in a single step, so nothing can go stale.

use std::cell::OnceCell;

use log::trace;

use crate::body::{Collider, PhysicsObject};
use crate::collision::response::{
    impulse_magnitude, velocity_after_collision, TrialBody, IMMOVABLE_MASS_FACTOR,
    MIN_COLLISION_VELOCITY,
};
use crate::config::SolverConfig;
use crate::geometry::intersection::line_intersects_segment;
use crate::geometry::{
    circle_polygon_intersections, polygon_intersections, Line, Segment, DEFAULT_TOLERANCE,
};
use crate::math::{mean, weighted_average, Vector};

/// One of the two bodies in a [`Contact`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The body passed first
    First,
    /// The body passed second
    Second,
}

impl Side {
    /// The opposite side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Forces produced by resolving a contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Normal impulse for each body
    pub normal_forces: [Vector; 2],
    /// Friction impulse for each body
    pub friction_forces: [Vector; 2],
    /// Where each body's impulses act
    pub force_points: [Vector; 2],
}

/// Per-pair scratch for one collision between two bodies
pub struct Contact<'a> {
    bodies: [&'a PhysicsObject; 2],
    shapes: [Collider; 2],
    solver: SolverConfig,
    intersects: OnceCell<bool>,
    intersection: OnceCell<Vector>,
    normals: [OnceCell<Vector>; 2],
    force_points: [OnceCell<Vector>; 2],
    moving_toward: [OnceCell<bool>; 2],
    target_velocities: [OnceCell<f64>; 2],
    forces: [OnceCell<Vector>; 2],
}

impl<'a> Contact<'a> {
    /// Contact between two bodies using their current transformed shapes
    pub fn new(first: &'a PhysicsObject, second: &'a PhysicsObject, solver: SolverConfig) -> Self {
        Contact::with_shapes(
            first,
            second,
            first.transformed_shape(),
            second.transformed_shape(),
            solver,
        )
    }

    /// Contact with world-space shapes that were already computed
    pub fn with_shapes(
        first: &'a PhysicsObject,
        second: &'a PhysicsObject,
        first_shape: Collider,
        second_shape: Collider,
        solver: SolverConfig,
    ) -> Self {
        Contact {
            bodies: [first, second],
            shapes: [first_shape, second_shape],
            solver,
            intersects: OnceCell::new(),
            intersection: OnceCell::new(),
            normals: Default::default(),
            force_points: Default::default(),
            moving_toward: Default::default(),
            target_velocities: Default::default(),
            forces: Default::default(),
        }
    }

    /// Body on the given side
    pub fn body(&self, side: Side) -> &'a PhysicsObject {
        self.bodies[side.index()]
    }

    /// World-space shape on the given side
    pub fn shape(&self, side: Side) -> &Collider {
        &self.shapes[side.index()]
    }

    /// Whether the two shapes overlap
    pub fn intersects(&self) -> bool {
        *self
            .intersects
            .get_or_init(|| self.shapes[0].intersects(&self.shapes[1]))
    }

    /// Representative contact point
    ///
    /// Two circles meet halfway between their centers. Otherwise this is the
    /// mean of the points where the boundaries cross. When one shape sits
    /// entirely inside the other there are no crossings, so the circle's center
    /// or the mean of the contained polygon vertices is used instead, and the
    /// midpoint of the two bodies as a last resort.
    pub fn intersection(&self) -> Vector {
        *self.intersection.get_or_init(|| self.compute_intersection())
    }

    fn compute_intersection(&self) -> Vector {
        match (&self.shapes[0], &self.shapes[1]) {
            (Collider::Circle(a), Collider::Circle(b)) => (a.position + b.position) / 2.0,
            (Collider::Circle(c), Collider::Polygon(p))
            | (Collider::Polygon(p), Collider::Circle(c)) => {
                mean(&circle_polygon_intersections(c, p)).unwrap_or(c.position)
            }
            (Collider::Polygon(a), Collider::Polygon(b)) => mean(&polygon_intersections(a, b))
                .or_else(|| {
                    let contained: Vec<Vector> = a
                        .vertices()
                        .iter()
                        .filter(|v| b.contains_point(**v))
                        .chain(b.vertices().iter().filter(|v| a.contains_point(**v)))
                        .copied()
                        .collect();
                    mean(&contained)
                })
                .unwrap_or_else(|| (self.bodies[0].position + self.bodies[1].position) / 2.0),
        }
    }

    /// Unit contact normal from the point of view of `side`
    ///
    /// Between two circles it points from the other center toward this one.
    /// With a circle involved it points from the circle's center to the
    /// contact point. Between two polygons it is perpendicular to the closest
    /// edge of whichever polygon has its nearest vertex farther from the
    /// contact point.
    pub fn normal(&self, side: Side) -> Vector {
        *self.normals[side.index()].get_or_init(|| self.compute_normal(side))
    }

    fn compute_normal(&self, side: Side) -> Vector {
        let intersection = self.intersection();
        match (self.shape(side), self.shape(side.other())) {
            (Collider::Circle(a), Collider::Circle(b)) => (a.position - b.position).normalize(),
            (Collider::Circle(c), Collider::Polygon(_))
            | (Collider::Polygon(_), Collider::Circle(c)) => {
                (intersection - c.position).normalize()
            }
            (Collider::Polygon(a), Collider::Polygon(b)) => {
                let polygon = if b.nearest_vertex_distance(intersection)
                    > a.nearest_vertex_distance(intersection)
                {
                    b
                } else {
                    a
                };
                let edge = polygon.closest_edge(intersection);
                (edge.endpoint1 - edge.endpoint2).rotate(90.0).normalize()
            }
        }
    }

    /// Normal rotated by 90 degrees
    pub fn tangent(&self, side: Side) -> Vector {
        self.normal(side).rotate(90.0)
    }

    /// Point at which the collision pushes the body on `side`
    ///
    /// A circle is pushed at the point of its rim facing the contact. A
    /// polygon is pushed at the average of its vertices that are buried in the
    /// other shape on the near side of the tangent line, weighted by depth.
    pub fn force_point(&self, side: Side) -> Vector {
        *self.force_points[side.index()].get_or_init(|| self.compute_force_point(side))
    }

    fn compute_force_point(&self, side: Side) -> Vector {
        let intersection = self.intersection();
        match self.shape(side) {
            Collider::Circle(c) => {
                c.position + (intersection - c.position).normalize() * c.radius
            }
            Collider::Polygon(p) => {
                let tangent_line = Line::new(intersection, intersection + self.tangent(side));
                let other_shape = self.shape(side.other());
                let other_position = self.body(side.other()).position;

                let buried: Vec<Vector> = p
                    .vertices()
                    .iter()
                    .copied()
                    .filter(|&v| {
                        other_shape.contains_point(v)
                            && !line_intersects_segment(
                                &tangent_line,
                                &Segment::new(v, other_position),
                                DEFAULT_TOLERANCE,
                            )
                    })
                    .collect();
                let weights: Vec<f64> = buried.iter().map(|&v| tangent_line.distance_from(v)).collect();
                weighted_average(&buried, &weights).unwrap_or(intersection)
            }
        }
    }

    /// Whether the body on `side` is not yet separating fast enough
    ///
    /// Compares the normal velocities of both force points. The normal is
    /// oriented by checking which body it points toward.
    pub fn moving_toward(&self, side: Side) -> bool {
        *self.moving_toward[side.index()].get_or_init(|| {
            let this = self.body(side);
            let other = self.body(side.other());
            let intersection = self.intersection();
            let normal = self.normal(side);
            let v1 = this
                .velocity_of_point(self.force_point(side))
                .scalar_projection(normal);
            let v2 = other
                .velocity_of_point(self.force_point(side.other()))
                .scalar_projection(normal);
            if (intersection + normal).distance_from(this.position)
                < intersection.distance_from(this.position)
            {
                v1 - v2 < MIN_COLLISION_VELOCITY
            } else {
                v2 - v1 < MIN_COLLISION_VELOCITY
            }
        })
    }

    /// Whether the pair should be resolved this step
    ///
    /// A pair that already overlapped last step is only resolved again while
    /// one of the bodies is still moving into the other.
    pub fn should_collide(&self, overlapped: bool) -> bool {
        if !self.intersects() {
            return false;
        }
        !overlapped || self.moving_toward(Side::First) || self.moving_toward(Side::Second)
    }

    fn effective_mass(&self, side: Side) -> f64 {
        let body = self.body(side);
        if body.immovable {
            self.bodies[0].inertial_mass.max(self.bodies[1].inertial_mass) * IMMOVABLE_MASS_FACTOR
        } else {
            body.inertial_mass
        }
    }

    /// Target normal velocity of `side`'s force point after the collision
    ///
    /// Uses the mean of both elasticities. If the two targets would separate
    /// slower than [`MIN_COLLISION_VELOCITY`], this body's target is rescaled
    /// so the bodies separate at that speed.
    pub fn velocity_after_collision(&self, side: Side) -> f64 {
        *self.target_velocities[side.index()].get_or_init(|| {
            let this = self.body(side);
            let other = self.body(side.other());
            let intersection = self.intersection();
            let normal = self.normal(side);
            let u1 = this
                .velocity_of_point(self.force_point(side))
                .scalar_projection(normal);
            let u2 = other
                .velocity_of_point(self.force_point(side.other()))
                .scalar_projection(normal);
            let restitution = (this.elasticity + other.elasticity) / 2.0;
            let m1 = self.effective_mass(side);
            let m2 = self.effective_mass(side.other());

            let mut result = velocity_after_collision(u1, u2, m1, m2, restitution);
            let partner = velocity_after_collision(u2, u1, m2, m1, restitution);
            let difference = result - partner;
            if difference.abs() < MIN_COLLISION_VELOCITY {
                result = if difference == 0.0 {
                    MIN_COLLISION_VELOCITY / 2.0
                } else {
                    result * MIN_COLLISION_VELOCITY / (result.abs() + partner.abs())
                };
                result = if (intersection + normal).distance_from(other.position)
                    < intersection.distance_from(other.position)
                {
                    -result.abs()
                } else {
                    result.abs()
                };
            }
            result
        })
    }

    /// Normal impulse on `side`
    ///
    /// An immovable body receives the negation of its partner's impulse; two
    /// immovable bodies exchange nothing.
    pub fn collision_force(&self, side: Side) -> Vector {
        *self.forces[side.index()].get_or_init(|| {
            let this = self.body(side);
            if this.immovable {
                if self.body(side.other()).immovable {
                    return Vector::ZERO;
                }
                return -self.collision_force(side.other());
            }
            let normal = self.normal(side);
            let magnitude = impulse_magnitude(
                &TrialBody::of(this),
                normal,
                self.force_point(side),
                self.velocity_after_collision(side),
                &self.solver,
            );
            normal * magnitude
        })
    }

    /// Friction impulse on `side`
    ///
    /// Opposes the relative tangential velocity at the force point with
    /// magnitude `min(mu * |normal impulse|, impulse that stops the sliding)`,
    /// where `mu` is the mean of both friction coefficients. The JS sandbox
    /// used the partner's coefficient alone, so results differ from it only
    /// when the two coefficients differ. The stopping impulse is found with the
    /// normal impulse already accumulated.
    pub fn friction_force(&self, side: Side) -> Vector {
        if !self.solver.friction {
            return Vector::ZERO;
        }
        let this = self.body(side);
        let other = self.body(side.other());
        let tangent = self.tangent(side);
        let point = self.force_point(side);
        let normal_force = self.collision_force(side);

        let v1 = this.velocity_of_point(point).scalar_projection(tangent);
        let v2 = other.velocity_of_point(point).scalar_projection(tangent);
        let relative = v1 - v2;
        let stopping = impulse_magnitude(
            &TrialBody::of(this).with_force(normal_force, point),
            tangent,
            point,
            v2,
            &self.solver,
        );
        let mu = (this.coefficient_of_friction + other.coefficient_of_friction) / 2.0;
        let magnitude = (mu * normal_force.magnitude()).abs().min(stopping.abs()) * -sign(relative);
        tangent * magnitude
    }

    /// Compute every impulse for this pair without touching the bodies
    pub fn resolve(&self) -> Resolution {
        let normal_forces = [
            self.collision_force(Side::First),
            self.collision_force(Side::Second),
        ];
        let friction_forces = [
            self.friction_force(Side::First),
            self.friction_force(Side::Second),
        ];
        let force_points = [self.force_point(Side::First), self.force_point(Side::Second)];
        trace!(
            "resolved {} / {}: normal {:?}, friction {:?}",
            self.bodies[0].name,
            self.bodies[1].name,
            normal_forces,
            friction_forces
        );
        Resolution {
            normal_forces,
            friction_forces,
            force_points,
        }
    }
}

/// Sign with zero mapped to zero
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
