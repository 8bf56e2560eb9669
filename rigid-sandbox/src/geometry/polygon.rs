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
//! Closed polygons
//!
//! A polygon is an ordered list of at least three vertices; the closing edge
//! from the last vertex back to the first is implicit. Construction validates
//! the vertex list, after which every transform returns a new polygon.

use crate::error::{ensure_finite, PhysicsError, Result};
use crate::geometry::{Rectangle, Segment};
use crate::math::{mean, Vector, VECTOR_EPSILON};

/// Closed polygon with at least three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector>,
}

impl Polygon {
    /// Create a polygon from its vertices
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::TooFewVertices`] for fewer than three vertices
    /// and [`PhysicsError::NonFinite`] if any coordinate is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use rigid_sandbox::geometry::Polygon;
    /// use rigid_sandbox::math::Vector;
    ///
    /// let triangle = Polygon::new(vec![
    ///     Vector::new(0.0, 0.0),
    ///     Vector::new(1.0, 0.0),
    ///     Vector::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(triangle.edges().count(), 3);
    /// ```
    pub fn new(vertices: Vec<Vector>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for v in &vertices {
            ensure_finite(v.x, "polygon vertex")?;
            ensure_finite(v.y, "polygon vertex")?;
        }
        Ok(Polygon { vertices })
    }

    /// Create a polygon from a flat `[x1, y1, x2, y2, ...]` list
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::OddCoordinateCount`] when the list does not pair
    /// up, plus every error [`Polygon::new`] can return.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(PhysicsError::OddCoordinateCount { len: coords.len() });
        }
        Polygon::new(
            coords
                .chunks_exact(2)
                .map(|pair| Vector::new(pair[0], pair[1]))
                .collect(),
        )
    }

    /// Regular polygon with `sides` vertices on the unit circle
    ///
    /// The first vertex sits at angle 0 and the rest follow counterclockwise.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::TooFewVertices`] when `sides < 3`.
    pub fn regular(sides: usize) -> Result<Self> {
        let step = 360.0 / sides as f64;
        Polygon::new(
            (0..sides)
                .map(|k| Vector::from_polar(k as f64 * step, 1.0))
                .collect(),
        )
    }

    /// Vertices in order
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Edges in order, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Mean of the vertices
    pub fn centroid(&self) -> Vector {
        mean(&self.vertices).unwrap_or(Vector::ZERO)
    }

    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Self {
        self.map_vertices(|v| v + offset)
    }

    /// Copy rotated about the origin by `degrees`
    pub fn rotate(&self, degrees: f64) -> Self {
        self.map_vertices(|v| v.rotate(degrees))
    }

    /// Copy scaled about the origin
    pub fn scale(&self, factor: f64) -> Self {
        self.map_vertices(|v| v * factor)
    }

    fn map_vertices<F: Fn(Vector) -> Vector>(&self, f: F) -> Self {
        Polygon {
            vertices: self.vertices.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Smallest axis-aligned box containing every vertex
    pub fn bounding_box(&self) -> Rectangle {
        Rectangle::from_points(self.vertices.iter().copied())
            .unwrap_or_else(|| Rectangle::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Edge nearest to `point`; the first one wins ties
    pub fn closest_edge(&self, point: Vector) -> Segment {
        let mut edges = self.edges();
        // at least three edges exist by construction
        let mut best = edges
            .next()
            .unwrap_or_else(|| Segment::new(self.vertices[0], self.vertices[0]));
        let mut best_distance = best.distance_from(point);
        for edge in edges {
            let distance = edge.distance_from(point);
            if distance < best_distance {
                best = edge;
                best_distance = distance;
            }
        }
        best
    }

    /// Distance from `point` to the nearest vertex
    pub fn nearest_vertex_distance(&self, point: Vector) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.distance_from(point))
            .fold(f64::INFINITY, f64::min)
    }

    /// Point-in-polygon test
    ///
    /// Casts a ray from `point` along the bisector of the widest angular gap
    /// between the vertices as seen from `point`, so the ray cannot pass
    /// through a vertex, then counts edge crossings. A point that coincides
    /// with a vertex is inside.
    ///
    /// # Examples
    ///
    /// ```
    /// use rigid_sandbox::geometry::Polygon;
    /// use rigid_sandbox::math::Vector;
    ///
    /// let diamond = Polygon::from_coords(&[1.0, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, -1.0]).unwrap();
    /// assert!(diamond.contains_point(Vector::new(0.0, 0.0)));
    /// assert!(!diamond.contains_point(Vector::new(1.0, 1.0)));
    /// ```
    pub fn contains_point(&self, point: Vector) -> bool {
        if self
            .vertices
            .iter()
            .any(|v| v.approx_eq(point, VECTOR_EPSILON))
        {
            return true;
        }

        let mut angles: Vec<f64> = self.vertices.iter().map(|&v| (v - point).angle()).collect();
        angles.sort_by(|a, b| a.total_cmp(b));

        let last = angles[angles.len() - 1];
        let mut widest = angles[0] + 360.0 - last;
        let mut ray_angle = last + widest / 2.0;
        for pair in angles.windows(2) {
            let gap = pair[1] - pair[0];
            if gap > widest {
                widest = gap;
                ray_angle = pair[0] + gap / 2.0;
            }
        }

        let reach = self
            .vertices
            .iter()
            .map(|v| v.distance_from(point))
            .fold(0.0, f64::max)
            * 2.0
            + 1.0;
        let far = point + Vector::from_polar(ray_angle, reach);

        let crossings = self
            .edges()
            .filter(|edge| ray_crosses(point, far, edge))
            .count();
        crossings % 2 == 1
    }
}

/// Orientation-based crossing test between the ray segment and an edge
fn ray_crosses(start: Vector, end: Vector, edge: &Segment) -> bool {
    let d1 = orientation(edge.endpoint1, edge.endpoint2, start);
    let d2 = orientation(edge.endpoint1, edge.endpoint2, end);
    let d3 = orientation(start, end, edge.endpoint1);
    let d4 = orientation(start, end, edge.endpoint2);
    ((d1 <= 0.0 && d2 >= 0.0) || (d1 >= 0.0 && d2 <= 0.0))
        && ((d3 < 0.0 && d4 > 0.0) || (d3 > 0.0 && d4 < 0.0))
}

fn orientation(a: Vector, b: Vector, c: Vector) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
