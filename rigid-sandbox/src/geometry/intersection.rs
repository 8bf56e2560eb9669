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
//! Narrow-phase intersection library
//!
//! Every predicate here is a pure function of its arguments. Lines are solved
//! in slope/intercept form with vertical lines handled by substitution, and
//! bounded shapes then filter candidate points against their bounding
//! intervals using [`DEFAULT_TOLERANCE`].
//!
//! Argument order never changes the answer: `line_intersection` puts its two
//! lines in a canonical order before solving, so `f(a, b)` and `f(b, a)`
//! produce bit-identical points.

use std::cmp::Ordering;

use crate::geometry::{Circle, Line, Polygon, Segment};
use crate::math::{Vector, VECTOR_EPSILON};

/// Slack used when checking that a point lies within a segment's extent
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Result of intersecting two infinite lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The lines cross at a single point
    Point(Vector),
    /// The lines are the same line
    Coincident,
    /// The lines are parallel and distinct
    Parallel,
}

impl LineIntersection {
    /// The crossing point, if there is exactly one
    pub fn point(&self) -> Option<Vector> {
        match self {
            LineIntersection::Point(p) => Some(*p),
            _ => None,
        }
    }
}

fn line_key(line: &Line) -> [f64; 4] {
    [
        line.endpoint1.x,
        line.endpoint1.y,
        line.endpoint2.x,
        line.endpoint2.y,
    ]
}

fn canonical_order<'a>(a: &'a Line, b: &'a Line) -> (&'a Line, &'a Line) {
    let ka = line_key(a);
    let kb = line_key(b);
    for (x, y) in ka.iter().zip(kb.iter()) {
        match x.total_cmp(y) {
            Ordering::Less => return (a, b),
            Ordering::Greater => return (b, a),
            Ordering::Equal => {}
        }
    }
    (a, b)
}

/// Intersect two infinite lines
///
/// # Examples
///
/// ```
/// use rigid_sandbox::geometry::{line_intersection, Line, LineIntersection};
/// use rigid_sandbox::math::Vector;
///
/// let a = Line::from_coords(0.0, 0.0, 1.0, 1.0);
/// let b = Line::from_coords(0.0, 2.0, 2.0, 0.0);
/// assert_eq!(line_intersection(&a, &b), LineIntersection::Point(Vector::new(1.0, 1.0)));
/// ```
pub fn line_intersection(a: &Line, b: &Line) -> LineIntersection {
    let (line1, line2) = canonical_order(a, b);

    match (line1.is_vertical(), line2.is_vertical()) {
        (true, true) => {
            if line1.endpoint1.x == line2.endpoint1.x {
                LineIntersection::Coincident
            } else {
                LineIntersection::Parallel
            }
        }
        (true, false) => LineIntersection::Point(on_vertical(line1.endpoint1.x, line2)),
        (false, true) => LineIntersection::Point(on_vertical(line2.endpoint1.x, line1)),
        (false, false) => {
            let m1 = line1.slope();
            let m2 = line2.slope();
            let b1 = line1.y_intercept();
            let b2 = line2.y_intercept();
            if m1 == m2 {
                if b1 == b2 {
                    LineIntersection::Coincident
                } else {
                    LineIntersection::Parallel
                }
            } else {
                let x = (b2 - b1) / (m1 - m2);
                LineIntersection::Point(Vector::new(x, x * m1 + b1))
            }
        }
    }
}

fn on_vertical(x: f64, line: &Line) -> Vector {
    Vector::new(x, line.slope() * (x - line.endpoint1.x) + line.endpoint1.y)
}

/// Whether two infinite lines meet anywhere
pub fn line_intersects_line(a: &Line, b: &Line) -> bool {
    !matches!(line_intersection(a, b), LineIntersection::Parallel)
}

/// Whether an infinite line meets a segment
pub fn line_intersects_segment(line: &Line, segment: &Segment, tolerance: f64) -> bool {
    match line_intersection(line, &Line::from(segment)) {
        LineIntersection::Point(p) => segment.spans(p, tolerance),
        LineIntersection::Coincident => true,
        LineIntersection::Parallel => false,
    }
}

/// Crossing point of two segments, if they cross at a single point
pub fn segment_intersection(a: &Segment, b: &Segment, tolerance: f64) -> Option<Vector> {
    line_intersection(&Line::from(a), &Line::from(b))
        .point()
        .filter(|p| a.spans(*p, tolerance) && b.spans(*p, tolerance))
}

/// Whether two segments touch
///
/// Collinear segments intersect when their extents overlap on both axes.
pub fn segment_intersects_segment(a: &Segment, b: &Segment, tolerance: f64) -> bool {
    match line_intersection(&Line::from(a), &Line::from(b)) {
        LineIntersection::Point(p) => a.spans(p, tolerance) && b.spans(p, tolerance),
        LineIntersection::Coincident => {
            let ra = a.bounding_box();
            let rb = b.bounding_box();
            ra.intersects(&rb, tolerance)
        }
        LineIntersection::Parallel => false,
    }
}

/// Whether two circles overlap or touch
pub fn circle_intersects_circle(a: &Circle, b: &Circle) -> bool {
    a.position.distance_from(b.position) <= a.radius + b.radius
}

/// Points where a circle meets an infinite line
///
/// Returns zero, one (tangent) or two points; for two points the one with the
/// larger root comes first.
pub fn circle_line_intersections(circle: &Circle, line: &Line) -> Vec<Vector> {
    let center = circle.position;
    let r = circle.radius;

    if line.is_vertical() {
        let x = line.endpoint1.x;
        let dx = x - center.x;
        let rest = r * r - dx * dx;
        if rest < 0.0 {
            return Vec::new();
        }
        if rest == 0.0 {
            return vec![Vector::new(x, center.y)];
        }
        let dy = rest.sqrt();
        return vec![Vector::new(x, center.y + dy), Vector::new(x, center.y - dy)];
    }

    let m = line.slope();
    let b = line.y_intercept();
    let qa = 1.0 + m * m;
    let qb = 2.0 * m * b - 2.0 * m * center.y - 2.0 * center.x;
    let qc = b * b + center.x * center.x + center.y * center.y - r * r - 2.0 * b * center.y;
    let discriminant = qb * qb - 4.0 * qa * qc;

    if discriminant < 0.0 {
        Vec::new()
    } else if discriminant == 0.0 {
        let x = -qb / (2.0 * qa);
        vec![Vector::new(x, m * x + b)]
    } else {
        let root = discriminant.sqrt();
        let x1 = (-qb + root) / (2.0 * qa);
        let x2 = (-qb - root) / (2.0 * qa);
        vec![Vector::new(x1, m * x1 + b), Vector::new(x2, m * x2 + b)]
    }
}

/// Points where a circle meets a segment
pub fn circle_segment_intersections(circle: &Circle, segment: &Segment, tolerance: f64) -> Vec<Vector> {
    circle_line_intersections(circle, &Line::from(segment))
        .into_iter()
        .filter(|p| segment.spans(*p, tolerance))
        .collect()
}

/// Whether a circle meets an infinite line
pub fn circle_intersects_line(circle: &Circle, line: &Line) -> bool {
    !circle_line_intersections(circle, line).is_empty()
}

/// Whether a circle meets a segment, including a segment entirely inside it
pub fn circle_intersects_segment(circle: &Circle, segment: &Segment, tolerance: f64) -> bool {
    !circle_segment_intersections(circle, segment, tolerance).is_empty()
        || circle.contains_point(segment.endpoint1)
}

/// Whether a circle and a polygon overlap
pub fn circle_intersects_polygon(circle: &Circle, polygon: &Polygon, tolerance: f64) -> bool {
    polygon.contains_point(circle.position)
        || polygon
            .edges()
            .any(|edge| circle_intersects_segment(circle, &edge, tolerance))
}

/// Whether an infinite line passes through a polygon
pub fn line_intersects_polygon(line: &Line, polygon: &Polygon, tolerance: f64) -> bool {
    polygon.contains_point(line.endpoint1)
        || polygon
            .edges()
            .any(|edge| line_intersects_segment(line, &edge, tolerance))
}

/// Whether a segment touches or lies inside a polygon
pub fn polygon_intersects_segment(polygon: &Polygon, segment: &Segment, tolerance: f64) -> bool {
    polygon.contains_point(segment.endpoint1)
        || polygon
            .edges()
            .any(|edge| segment_intersects_segment(&edge, segment, tolerance))
}

/// Whether two polygons overlap, including full containment
pub fn polygon_intersects_polygon(a: &Polygon, b: &Polygon, tolerance: f64) -> bool {
    a.contains_point(b.vertices()[0])
        || b.contains_point(a.vertices()[0])
        || a.edges().any(|ea| {
            b.edges()
                .any(|eb| segment_intersects_segment(&ea, &eb, tolerance))
        })
}

fn push_unique(points: &mut Vec<Vector>, point: Vector) {
    if !points.iter().any(|p| p.approx_eq(point, VECTOR_EPSILON)) {
        points.push(point);
    }
}

/// Every point where a circle crosses a polygon's boundary, de-duplicated
///
/// # Examples
///
/// ```
/// use rigid_sandbox::geometry::{circle_polygon_intersections, Circle, Polygon};
/// use rigid_sandbox::math::Vector;
///
/// let circle = Circle::from_coords(3.0, 2.0, 5.0);
/// let rect = Polygon::from_coords(&[6.0, 2.0, 6.0, 8.0, 10.0, 8.0, 10.0, 2.0]).unwrap();
/// let points = circle_polygon_intersections(&circle, &rect);
/// assert_eq!(points, vec![Vector::new(6.0, 6.0), Vector::new(8.0, 2.0)]);
/// ```
pub fn circle_polygon_intersections(circle: &Circle, polygon: &Polygon) -> Vec<Vector> {
    let mut points = Vec::new();
    for edge in polygon.edges() {
        for p in circle_segment_intersections(circle, &edge, DEFAULT_TOLERANCE) {
            push_unique(&mut points, p);
        }
    }
    points
}

/// Every point where two polygon boundaries cross, de-duplicated
pub fn polygon_intersections(a: &Polygon, b: &Polygon) -> Vec<Vector> {
    let mut points = Vec::new();
    for ea in a.edges() {
        for eb in b.edges() {
            if let Some(p) = segment_intersection(&ea, &eb, DEFAULT_TOLERANCE) {
                push_unique(&mut points, p);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_points(actual: &[Vector], expected: &[Vector]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.approx_eq(*e, 1e-9), "{a:?} != {e:?}");
        }
    }

    #[test]
    fn test_line_intersection_cases() {
        let diagonal = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        let anti = Line::from_coords(0.0, 2.0, 2.0, 0.0);
        assert_eq!(
            line_intersection(&diagonal, &anti),
            LineIntersection::Point(Vector::new(1.0, 1.0))
        );

        let shifted = Line::from_coords(0.0, 1.0, 1.0, 2.0);
        assert_eq!(line_intersection(&diagonal, &shifted), LineIntersection::Parallel);

        let same = Line::from_coords(2.0, 2.0, 5.0, 5.0);
        assert_eq!(line_intersection(&diagonal, &same), LineIntersection::Coincident);
    }

    #[test]
    fn test_line_intersection_vertical() {
        let vertical = Line::from_coords(3.0, 0.0, 3.0, 1.0);
        let diagonal = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        assert_eq!(
            line_intersection(&vertical, &diagonal),
            LineIntersection::Point(Vector::new(3.0, 3.0))
        );
        assert_eq!(
            line_intersection(&diagonal, &vertical),
            LineIntersection::Point(Vector::new(3.0, 3.0))
        );

        let other_vertical = Line::from_coords(4.0, 0.0, 4.0, 9.0);
        assert_eq!(line_intersection(&vertical, &other_vertical), LineIntersection::Parallel);
        let same_vertical = Line::from_coords(3.0, 5.0, 3.0, 9.0);
        assert_eq!(line_intersection(&vertical, &same_vertical), LineIntersection::Coincident);
    }

    #[test]
    fn test_line_intersection_order_independent() {
        let a = Line::from_coords(0.1, 0.3, 7.7, 2.9);
        let b = Line::from_coords(-1.3, 5.0, 4.4, -2.2);
        assert_eq!(line_intersection(&a, &b), line_intersection(&b, &a));
    }

    #[test]
    fn test_segment_intersection_with_tolerance() {
        let a = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Segment::from_coords(3.0, 0.0, 2.0, 1.0);
        assert!(!segment_intersects_segment(&a, &b, DEFAULT_TOLERANCE));
        // lines cross at (1.5, 1.5), within 2 of both segments
        assert!(segment_intersects_segment(&a, &b, 2.0));

        let c = Segment::from_coords(0.0, 2.0, 2.0, 0.0);
        assert!(segment_intersects_segment(&a, &c, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_collinear_segments() {
        let a = Segment::from_coords(0.0, 0.0, 2.0, 2.0);
        let b = Segment::from_coords(1.0, 1.0, 3.0, 3.0);
        let c = Segment::from_coords(4.0, 4.0, 5.0, 5.0);
        assert!(segment_intersects_segment(&a, &b, DEFAULT_TOLERANCE));
        assert!(segment_intersects_segment(&b, &a, DEFAULT_TOLERANCE));
        assert!(!segment_intersects_segment(&a, &c, DEFAULT_TOLERANCE));
        assert!(!segment_intersects_segment(&c, &a, DEFAULT_TOLERANCE));

        // one segment swallowing the other
        let inner = Segment::from_coords(0.5, 0.5, 1.0, 1.0);
        assert!(segment_intersects_segment(&a, &inner, DEFAULT_TOLERANCE));
        assert!(segment_intersects_segment(&inner, &a, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_line_vs_segment() {
        let line = Line::from_coords(0.0, 0.0, 1.0, 1.0);
        assert!(line_intersects_segment(
            &line,
            &Segment::from_coords(10.0, 0.0, 0.0, 10.0),
            DEFAULT_TOLERANCE
        ));
        assert!(!line_intersects_segment(
            &line,
            &Segment::from_coords(3.0, 0.0, 4.0, 0.5),
            DEFAULT_TOLERANCE
        ));
    }

    #[test]
    fn test_circle_line_intersections() {
        let circle = Circle::from_coords(3.0, 2.0, 5.0);
        let points = circle_line_intersections(&circle, &Line::from_coords(4.0, 4.0, 8.0, 8.0));
        assert_points(&points, &[Vector::new(6.0, 6.0), Vector::new(-1.0, -1.0)]);

        let centered = Circle::from_coords(0.0, 0.0, 13.0);
        let vertical = Line::from_coords(5.0, 0.0, 5.0, 1.0);
        let points = circle_line_intersections(&centered, &vertical);
        assert_points(&points, &[Vector::new(5.0, 12.0), Vector::new(5.0, -12.0)]);

        let tangent = Line::from_coords(-1.0, 13.0, 1.0, 13.0);
        assert_points(&circle_line_intersections(&centered, &tangent), &[Vector::new(0.0, 13.0)]);

        let miss = Line::from_coords(-1.0, 20.0, 1.0, 20.0);
        assert!(circle_line_intersections(&centered, &miss).is_empty());
        assert!(!circle_intersects_line(&centered, &miss));
    }

    #[test]
    fn test_circle_segment() {
        let circle = Circle::from_coords(3.0, 2.0, 5.0);
        let segment = Segment::from_coords(4.0, 4.0, 8.0, 8.0);
        let points = circle_segment_intersections(&circle, &segment, DEFAULT_TOLERANCE);
        assert_points(&points, &[Vector::new(6.0, 6.0)]);

        // fully inside counts as intersecting
        let inner = Segment::from_coords(2.0, 2.0, 3.0, 3.0);
        assert!(circle_segment_intersections(&circle, &inner, DEFAULT_TOLERANCE).is_empty());
        assert!(circle_intersects_segment(&circle, &inner, DEFAULT_TOLERANCE));

        let outside = Segment::from_coords(20.0, 20.0, 30.0, 30.0);
        assert!(!circle_intersects_segment(&circle, &outside, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_circle_polygon_intersections() {
        let circle = Circle::from_coords(3.0, 2.0, 5.0);
        let rect = Polygon::from_coords(&[6.0, 2.0, 6.0, 8.0, 10.0, 8.0, 10.0, 2.0]).unwrap();
        assert_points(
            &circle_polygon_intersections(&circle, &rect),
            &[Vector::new(6.0, 6.0), Vector::new(8.0, 2.0)],
        );
        assert!(circle_intersects_polygon(&circle, &rect, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_circle_inside_polygon() {
        let big = Polygon::from_coords(&[-10.0, -10.0, -10.0, 10.0, 10.0, 10.0, 10.0, -10.0]).unwrap();
        let circle = Circle::from_coords(0.0, 0.0, 1.0);
        assert!(circle_polygon_intersections(&circle, &big).is_empty());
        assert!(circle_intersects_polygon(&circle, &big, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_polygon_intersections() {
        let a = Polygon::from_coords(&[0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0]).unwrap();
        let b = Polygon::from_coords(&[1.0, 1.0, 1.0, 3.0, 3.0, 3.0, 3.0, 1.0]).unwrap();
        assert_points(
            &polygon_intersections(&a, &b),
            &[Vector::new(1.0, 2.0), Vector::new(2.0, 1.0)],
        );
        assert!(polygon_intersects_polygon(&a, &b, DEFAULT_TOLERANCE));

        let far = b.translate(Vector::new(10.0, 0.0));
        assert!(!polygon_intersects_polygon(&a, &far, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_polygon_containment() {
        let outer = Polygon::from_coords(&[0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0]).unwrap();
        let inner = Polygon::from_coords(&[4.0, 4.0, 4.0, 5.0, 5.0, 5.0]).unwrap();
        assert!(polygon_intersections(&outer, &inner).is_empty());
        assert!(polygon_intersects_polygon(&outer, &inner, DEFAULT_TOLERANCE));
        assert!(polygon_intersects_polygon(&inner, &outer, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_line_and_segment_vs_polygon() {
        let square = Polygon::from_coords(&[0.0, 0.0, 0.0, 2.0, 2.0, 2.0, 2.0, 0.0]).unwrap();
        assert!(line_intersects_polygon(
            &Line::from_coords(-5.0, 1.0, -4.0, 1.0),
            &square,
            DEFAULT_TOLERANCE
        ));
        assert!(!line_intersects_polygon(
            &Line::from_coords(-5.0, 5.0, -4.0, 5.0),
            &square,
            DEFAULT_TOLERANCE
        ));
        assert!(polygon_intersects_segment(
            &square,
            &Segment::from_coords(0.5, 0.5, 1.0, 1.0),
            DEFAULT_TOLERANCE
        ));
        assert!(!polygon_intersects_segment(
            &square,
            &Segment::from_coords(3.0, 3.0, 4.0, 4.0),
            DEFAULT_TOLERANCE
        ));
    }

    #[test]
    fn test_circle_circle() {
        let a = Circle::from_coords(0.0, 0.0, 1.0);
        let b = Circle::from_coords(2.0, 0.0, 1.0);
        let c = Circle::from_coords(2.5, 0.0, 1.0);
        assert!(circle_intersects_circle(&a, &b));
        assert!(!circle_intersects_circle(&a, &c));
        assert_abs_diff_eq!(a.position.distance_from(b.position), 2.0);
    }
}
