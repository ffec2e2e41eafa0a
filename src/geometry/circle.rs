use std::fmt;

use crate::error::Result;
use crate::format::{self, FormatTokens};

use super::Point;

/// A circle in the plane, defined by an existent center and a radius.
///
/// Equality compares centers within tolerance and radii exactly. Ordering
/// is by center (see [`Point::lt`]), then by radius.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Default for Circle {
    /// Zero-radius circle at the origin.
    fn default() -> Self {
        Self::from_coords(0.0, 0.0, 0.0)
    }
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if `center` is the sentinel.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        center.must_exist()?;
        Ok(Self { center, radius })
    }

    /// Creates a circle centered at `(x, y)`.
    #[must_use]
    pub const fn from_coords(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }

    /// Returns the center of the circle. Always existent.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.center.eq_unchecked(&other.center) && self.radius == other.radius
    }

    #[must_use]
    pub fn approx_ne(&self, other: &Self) -> bool {
        !self.approx_eq(other)
    }

    #[must_use]
    pub fn lt(&self, other: &Self) -> bool {
        self.center.lt_unchecked(&other.center)
            || (self.center.eq_unchecked(&other.center) && self.radius < other.radius)
    }

    #[must_use]
    pub fn le(&self, other: &Self) -> bool {
        self.lt(other) || self.approx_eq(other)
    }

    #[must_use]
    pub fn gt(&self, other: &Self) -> bool {
        !self.le(other)
    }

    #[must_use]
    pub fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }

    /// Renders `Circle(Point(x, y), r)` with the given tokens.
    #[must_use]
    pub fn render(&self, tokens: &FormatTokens) -> String {
        let mut out = tokens.circle_label.clone();
        out.push_str(&tokens.open);
        out.push_str(&tokens.tuple(&tokens.point_label, &[self.center.x(), self.center.y()]));
        out.push_str(&tokens.separator);
        tokens.push_number(&mut out, self.radius);
        out.push_str(&tokens.close);
        out
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(format::tokens()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_sentinel_center() {
        assert!(Circle::new(Point::non_existent(), 1.0).is_err());
        let c = Circle::new(Point::new(1.0, 2.0), 3.0).unwrap();
        assert!(c.center().exists());
        assert!((c.radius() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_existent_origin() {
        let c = Circle::default();
        assert!(c.center().exists());
        assert!(c.center().is_zero());
        assert!(c.radius().abs() < f64::EPSILON);
    }

    #[test]
    fn equality_tolerates_center_but_not_radius() {
        let a = Circle::from_coords(1.0, 1.0, 2.0);
        let b = Circle::from_coords(1.0 + 1e-10, 1.0, 2.0);
        let c = Circle::from_coords(1.0, 1.0, 2.0 + 1e-12);
        assert!(a.approx_eq(&b));
        assert!(a.approx_ne(&c));
    }

    #[test]
    fn ordering_center_then_radius() {
        let small = Circle::from_coords(0.0, 0.0, 1.0);
        let big = Circle::from_coords(0.0, 0.0, 2.0);
        let right = Circle::from_coords(1.0, 0.0, 0.5);

        assert!(small.lt(&big));
        assert!(big.lt(&right));
        assert!(small.le(&small));
        assert!(small.ge(&small));
        assert!(!small.gt(&small));
        assert!(right.gt(&big));
        assert!(!big.gt(&right));
    }

    #[test]
    fn display() {
        assert_eq!(
            Circle::from_coords(0.0, 1.5, 5.0).to_string(),
            "Circle(Point(0, 1.5), 5)"
        );
    }
}
