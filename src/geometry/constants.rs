use super::{Line, Point};

/// The X axis, `y = 0`.
pub const AXIS_X: Line = Line::new(0.0, 1.0, 0.0);

/// The Y axis, `x = 0`.
pub const AXIS_Y: Line = Line::new(1.0, 0.0, 0.0);

/// The "no such point" sentinel.
pub const NON_EXISTENT_POINT: Point = Point::non_existent();

/// The origin, `(0, 0)`.
pub const ORIGIN: Point = Point::new(0.0, 0.0);
