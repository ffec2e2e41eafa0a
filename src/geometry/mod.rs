pub mod circle;
pub mod constants;
pub mod line;
pub mod point;

pub use circle::Circle;
pub use constants::{AXIS_X, AXIS_Y, NON_EXISTENT_POINT, ORIGIN};
pub use line::Line;
pub use point::Point;
