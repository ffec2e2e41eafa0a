//! Planar geometry: points, lines in implicit form, circles, and the
//! intersection and relation queries between them.
//!
//! Geometric queries with no answer (parallel lines, disjoint circles)
//! return `None`. Handing the non-existent point sentinel to any operation
//! returns [`GeometryError::NonExistentPoint`](error::GeometryError).

pub mod error;
pub mod format;
pub mod geometry;
pub mod label;
pub mod math;
pub mod operations;

pub use error::{PlangeoError, Result};
pub use format::FormatTokens;
pub use geometry::{Circle, Line, Point};
pub use label::Label;
