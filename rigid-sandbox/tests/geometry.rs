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
//! Integration tests for shape geometry and the intersection library

use rigid_sandbox::geometry::{
    line_intersection, Circle, Line, LineIntersection, Polygon, Rectangle, Segment, Shape,
};
use rigid_sandbox::math::Vector;

fn shape_zoo() -> Vec<Shape> {
    vec![
        Circle::from_coords(0.0, 0.0, 3.0).into(),
        Circle::from_coords(4.0, 1.0, 1.5).into(),
        Segment::from_coords(-5.0, -5.0, 5.0, 5.0).into(),
        Segment::from_coords(0.0, -4.0, 0.0, 4.0).into(),
        Line::from_coords(-1.0, 2.0, 3.0, 2.0).into(),
        Line::from_coords(2.0, -1.0, 2.0, 7.0).into(),
        Polygon::regular(5).unwrap().scale(4.0).into(),
        Polygon::from_coords(&[0.0, 0.0, 6.0, 0.0, 6.0, 1.0, 1.0, 1.0, 1.0, 6.0, 0.0, 6.0])
            .unwrap()
            .into(),
    ]
}

#[test]
fn test_intersects_is_symmetric() {
    let zoo = shape_zoo();
    let offsets = [-6.0, -3.5, -1.0, 0.0, 0.5, 2.0, 4.5, 7.0];
    for a in &zoo {
        for b in &zoo {
            for &dx in &offsets {
                for &dy in &offsets {
                    let moved = b.translate(Vector::new(dx, dy));
                    assert_eq!(
                        a.intersects(&moved),
                        moved.intersects(a),
                        "{a:?} vs {moved:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_transforms_round_trip() {
    let offset = Vector::new(12.5, -3.25);
    for shape in shape_zoo() {
        let moved_back = shape.translate(offset).translate(-offset);
        let spun = shape.rotate(360.0);
        let scaled_back = shape.scale(4.0).scale(0.25);
        for other in [moved_back, spun, scaled_back] {
            let (Some(expected), Some(found)) = (shape.bounding_box(), other.bounding_box()) else {
                assert!(matches!(shape, Shape::Line(_)));
                continue;
            };
            for (e, f) in [
                (expected.left(), found.left()),
                (expected.right(), found.right()),
                (expected.top(), found.top()),
                (expected.bottom(), found.bottom()),
            ] {
                assert!((e - f).abs() < 1e-9, "{shape:?}: {e} vs {f}");
            }
        }
    }
}

#[test]
fn test_transforms_do_not_mutate() {
    let pentagon = Polygon::regular(5).unwrap();
    let before = pentagon.clone();
    let _ = pentagon.translate(Vector::new(1.0, 1.0));
    let _ = pentagon.rotate(33.0);
    let _ = pentagon.scale(2.0);
    assert_eq!(pentagon, before);
}

#[test]
fn test_diamond_contains_point() {
    let diamond = Polygon::from_coords(&[0.0, -1.0, 1.0, 0.0, 0.0, 1.0, -1.0, 0.0]).unwrap();
    assert!(diamond.contains_point(Vector::ZERO));
    assert!(diamond.contains_point(Vector::new(0.5, 0.49)));
    assert!(diamond.contains_point(Vector::new(1.0, 0.0)));
    assert!(!diamond.contains_point(Vector::new(0.6, 0.6)));
    assert!(!diamond.contains_point(Vector::new(2.0, 0.0)));
    assert!(!diamond.contains_point(Vector::new(0.0, -1.5)));

    // repeated queries see the same vertices and give the same answer
    let before = diamond.clone();
    for point in [Vector::ZERO, Vector::new(1.0, 0.0), Vector::new(0.6, 0.6)] {
        let first = diamond.contains_point(point);
        assert_eq!(diamond.contains_point(point), first);
    }
    assert_eq!(diamond, before);
}

#[test]
fn test_regular_polygon_contains_its_centroid() {
    for sides in 3..12 {
        let polygon = Polygon::regular(sides).unwrap().scale(10.0).translate(Vector::new(3.0, -7.0));
        assert!(polygon.contains_point(polygon.centroid()));
        assert!(!polygon.contains_point(polygon.centroid() + Vector::new(11.0, 0.0)));
    }
}

#[test]
fn test_line_intersection_kinds() {
    let horizontal = Line::from_coords(0.0, 1.0, 1.0, 1.0);
    let vertical = Line::from_coords(3.0, -5.0, 3.0, 5.0);
    assert_eq!(
        line_intersection(&horizontal, &vertical).point(),
        Some(Vector::new(3.0, 1.0))
    );
    assert_eq!(
        line_intersection(&horizontal, &horizontal.translate(Vector::new(0.0, 2.0))),
        LineIntersection::Parallel
    );
    assert_eq!(
        line_intersection(&horizontal, &horizontal.translate(Vector::new(7.0, 0.0))),
        LineIntersection::Coincident
    );
}

#[test]
fn test_bounding_boxes() {
    let circle: Shape = Circle::from_coords(1.0, 2.0, 3.0).into();
    assert_eq!(circle.bounding_box(), Some(Rectangle::new(-2.0, -1.0, 6.0, 6.0)));

    let segment: Shape = Segment::from_coords(4.0, -1.0, -2.0, 3.0).into();
    assert_eq!(segment.bounding_box(), Some(Rectangle::new(-2.0, -1.0, 6.0, 4.0)));

    let line: Shape = Line::from_coords(0.0, 0.0, 1.0, 1.0).into();
    assert_eq!(line.bounding_box(), None);

    let union = Rectangle::union([
        Rectangle::new(0.0, 0.0, 1.0, 1.0),
        Rectangle::new(5.0, -2.0, 1.0, 1.0),
    ])
    .unwrap();
    assert_eq!(union, Rectangle::new(0.0, -2.0, 6.0, 3.0));
}
