pub mod tools;

pub use tools::{sgn, to_degrees, to_radians};

/// 2D vector type backing [`crate::geometry::Point`].
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Archimedes' constant, re-exported for angle arithmetic.
pub const PI: f64 = std::f64::consts::PI;
