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
//! Closed set of shapes with pairwise intersection dispatch

use crate::geometry::intersection::{
    circle_intersects_circle, circle_intersects_line, circle_intersects_polygon,
    circle_intersects_segment, line_intersects_line, line_intersects_polygon,
    line_intersects_segment, polygon_intersects_polygon, polygon_intersects_segment,
    segment_intersects_segment, DEFAULT_TOLERANCE,
};
use crate::geometry::{Circle, Line, Polygon, Rectangle, Segment};
use crate::math::Vector;

/// Any of the supported shapes
///
/// Every pair of variants has an intersection test, so
/// [`Shape::intersects`] is total and symmetric.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A circle
    Circle(Circle),
    /// A bounded segment
    Segment(Segment),
    /// An infinite line
    Line(Line),
    /// A closed polygon
    Polygon(Polygon),
}

impl Shape {
    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Shape {
        match self {
            Shape::Circle(c) => Shape::Circle(c.translate(offset)),
            Shape::Segment(s) => Shape::Segment(s.translate(offset)),
            Shape::Line(l) => Shape::Line(l.translate(offset)),
            Shape::Polygon(p) => Shape::Polygon(p.translate(offset)),
        }
    }

    /// Copy rotated about the origin by `degrees`
    pub fn rotate(&self, degrees: f64) -> Shape {
        match self {
            Shape::Circle(c) => Shape::Circle(c.rotate(degrees)),
            Shape::Segment(s) => Shape::Segment(s.rotate(degrees)),
            Shape::Line(l) => Shape::Line(l.rotate(degrees)),
            Shape::Polygon(p) => Shape::Polygon(p.rotate(degrees)),
        }
    }

    /// Copy scaled about the origin
    pub fn scale(&self, factor: f64) -> Shape {
        match self {
            Shape::Circle(c) => Shape::Circle(c.scale(factor)),
            Shape::Segment(s) => Shape::Segment(s.scale(factor)),
            Shape::Line(l) => Shape::Line(l.scale(factor)),
            Shape::Polygon(p) => Shape::Polygon(p.scale(factor)),
        }
    }

    /// Axis-aligned bounds; `None` for an unbounded line
    pub fn bounding_box(&self) -> Option<Rectangle> {
        match self {
            Shape::Circle(c) => Some(c.bounding_box()),
            Shape::Segment(s) => Some(s.bounding_box()),
            Shape::Line(_) => None,
            Shape::Polygon(p) => Some(p.bounding_box()),
        }
    }

    /// Whether two shapes overlap or touch
    ///
    /// # Examples
    ///
    /// ```
    /// use rigid_sandbox::geometry::{Circle, Polygon, Shape};
    ///
    /// let circle = Shape::Circle(Circle::from_coords(0.0, 0.0, 1.0));
    /// let square = Shape::Polygon(
    ///     Polygon::from_coords(&[0.5, -1.0, 0.5, 1.0, 3.0, 1.0, 3.0, -1.0]).unwrap(),
    /// );
    /// assert!(circle.intersects(&square));
    /// assert!(square.intersects(&circle));
    /// ```
    pub fn intersects(&self, other: &Shape) -> bool {
        let tol = DEFAULT_TOLERANCE;
        match (self, other) {
            (Shape::Circle(a), Shape::Circle(b)) => circle_intersects_circle(a, b),
            (Shape::Circle(c), Shape::Line(l)) | (Shape::Line(l), Shape::Circle(c)) => {
                circle_intersects_line(c, l)
            }
            (Shape::Circle(c), Shape::Segment(s)) | (Shape::Segment(s), Shape::Circle(c)) => {
                circle_intersects_segment(c, s, tol)
            }
            (Shape::Circle(c), Shape::Polygon(p)) | (Shape::Polygon(p), Shape::Circle(c)) => {
                circle_intersects_polygon(c, p, tol)
            }
            (Shape::Line(a), Shape::Line(b)) => line_intersects_line(a, b),
            (Shape::Line(l), Shape::Segment(s)) | (Shape::Segment(s), Shape::Line(l)) => {
                line_intersects_segment(l, s, tol)
            }
            (Shape::Line(l), Shape::Polygon(p)) | (Shape::Polygon(p), Shape::Line(l)) => {
                line_intersects_polygon(l, p, tol)
            }
            (Shape::Segment(a), Shape::Segment(b)) => segment_intersects_segment(a, b, tol),
            (Shape::Segment(s), Shape::Polygon(p)) | (Shape::Polygon(p), Shape::Segment(s)) => {
                polygon_intersects_segment(p, s, tol)
            }
            (Shape::Polygon(a), Shape::Polygon(b)) => polygon_intersects_polygon(a, b, tol),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoo() -> Vec<Shape> {
        vec![
            Circle::from_coords(0.0, 0.0, 1.5).into(),
            Circle::from_coords(5.0, 5.0, 1.0).into(),
            Segment::from_coords(-3.0, 1.0, 3.0, 1.0).into(),
            Segment::from_coords(0.2, 0.2, 0.4, 0.3).into(),
            Line::from_coords(-1.0, -2.0, 1.0, 2.0).into(),
            Line::from_coords(10.0, 0.0, 10.0, 1.0).into(),
            Polygon::from_coords(&[1.0, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, -1.0])
                .unwrap()
                .into(),
            Polygon::regular(5).unwrap().scale(2.0).translate(Vector::new(6.0, 6.0)).into(),
        ]
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let shapes = zoo();
        for a in &shapes {
            for b in &shapes {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_intersects_expected_pairs() {
        let shapes = zoo();
        // small circle sits inside the pentagon's neighbourhood
        assert!(shapes[1].intersects(&shapes[7]));
        assert!(!shapes[0].intersects(&shapes[1]));
        assert!(shapes[0].intersects(&shapes[2]));
        // short segment lies entirely inside the big circle and the diamond
        assert!(shapes[0].intersects(&shapes[3]));
        assert!(shapes[6].intersects(&shapes[3]));
        // the vertical line at x = 10 misses everything near the origin
        assert!(!shapes[5].intersects(&shapes[0]));
        assert!(!shapes[5].intersects(&shapes[6]));
        assert!(shapes[4].intersects(&shapes[6]));
    }

    #[test]
    fn test_transforms_round_trip() {
        for shape in zoo() {
            let moved = shape.translate(Vector::new(3.0, -4.0)).translate(Vector::new(-3.0, 4.0));
            assert_eq!(moved.bounding_box().is_some(), shape.bounding_box().is_some());
            assert_eq!(shape.translate(Vector::ZERO), shape);
        }
        assert!(Shape::Line(Line::from_coords(0.0, 0.0, 1.0, 1.0))
            .bounding_box()
            .is_none());
    }
}
