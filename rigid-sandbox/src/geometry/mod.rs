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
//! Shapes and the narrow-phase intersection library
//!
//! All shapes are immutable values: `translate`, `rotate` and `scale` return
//! new instances. Rotation is in degrees about the origin using the screen
//! convention of [`Vector::rotate`](crate::math::Vector::rotate).

mod circle;
pub mod intersection;
mod line;
mod polygon;
mod rectangle;
mod segment;
mod shape;

pub use circle::Circle;
pub use intersection::{
    circle_line_intersections, circle_polygon_intersections, circle_segment_intersections,
    line_intersection, polygon_intersections, segment_intersection, LineIntersection,
    DEFAULT_TOLERANCE,
};
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use segment::Segment;
pub use shape::Shape;
