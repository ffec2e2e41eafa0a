//! Free functions combining points, lines and circles.
//!
//! Queries whose geometric answer may not exist return `Option`; passing a
//! non-existent point into any of them is an error.

pub mod intersect;
pub mod projection;
pub mod relation;

pub use intersect::{cross_circle_and_line, cross_circles, cross_lines};
pub use projection::from_point_to_line;
pub use relation::{
    is_crossing_circle_and_line, is_crossing_circles, is_in_same_side,
    is_in_same_side_excluding, is_point_in_circle,
};
