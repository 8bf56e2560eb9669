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
//! Axis-aligned rectangles used as bounding boxes

use crate::math::Vector;

/// Axis-aligned rectangle anchored at its top-left corner
///
/// `top` is the smaller y coordinate because y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rectangle { x, y, width, height }
    }

    /// Smallest rectangle containing every given point, `None` when empty
    pub fn from_points<I: IntoIterator<Item = Vector>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut left, mut right, mut top, mut bottom) = (first.x, first.x, first.y, first.y);
        for p in iter {
            left = left.min(p.x);
            right = right.max(p.x);
            top = top.min(p.y);
            bottom = bottom.max(p.y);
        }
        Some(Rectangle::new(left, top, right - left, bottom - top))
    }

    /// Smallest rectangle containing every given rectangle, `None` when empty
    pub fn union<I: IntoIterator<Item = Rectangle>>(boxes: I) -> Option<Self> {
        let mut iter = boxes.into_iter();
        let first = iter.next()?;
        let mut result = first;
        for b in iter {
            let left = result.left().min(b.left());
            let right = result.right().max(b.right());
            let top = result.top().min(b.top());
            let bottom = result.bottom().max(b.bottom());
            result = Rectangle::new(left, top, right - left, bottom - top);
        }
        Some(result)
    }

    /// Left edge
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Move the left edge, keeping the right edge in place
    pub fn set_left(&mut self, value: f64) {
        self.width += self.x - value;
        self.x = value;
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Move the right edge, keeping the left edge in place
    pub fn set_right(&mut self, value: f64) {
        self.width = value - self.x;
    }

    /// Top edge
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Move the top edge, keeping the bottom edge in place
    pub fn set_top(&mut self, value: f64) {
        self.height += self.y - value;
        self.y = value;
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Move the bottom edge, keeping the top edge in place
    pub fn set_bottom(&mut self, value: f64) {
        self.height = value - self.y;
    }

    /// Overlap test with touching edges counted, widened by `tolerance`
    pub fn intersects(&self, other: &Rectangle, tolerance: f64) -> bool {
        self.right() >= other.left() - tolerance
            && self.left() <= other.right() + tolerance
            && self.bottom() >= other.top() - tolerance
            && self.top() <= other.bottom() + tolerance
    }

    /// Whether the point lies inside or on the boundary
    pub fn contains_point(&self, point: Vector) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Copy shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Self {
        Rectangle::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}
