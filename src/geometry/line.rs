use std::fmt;

use crate::error::Result;
use crate::format::{self, FormatTokens};
use crate::math::TOLERANCE;

use super::Point;

/// An infinite line in implicit form `a * x + b * y + c = 0`.
///
/// Coefficients are stored as given; two lines compare equal when their
/// coefficient triples are proportional, not after normalization.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Default for Line {
    /// The line `x - y = 0`.
    fn default() -> Self {
        Self::new(1.0, -1.0, 0.0)
    }
}

impl Line {
    /// Creates a line from its coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates the line through `p1` and `p2`.
    ///
    /// Coincident points produce a degenerate line.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either point is the sentinel.
    pub fn through(p1: &Point, p2: &Point) -> Result<Self> {
        p1.must_exist()?;
        p2.must_exist()?;

        let a = p2.y() - p1.y();
        let b = p1.x() - p2.x();
        let c = -(a * p1.x() + b * p1.y());
        Ok(Self { a, b, c })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Substitutes `p` into the line equation.
    ///
    /// Zero on the line; the sign tells which side `p` is on.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if `p` is the sentinel.
    pub fn evaluate(&self, p: &Point) -> Result<f64> {
        p.must_exist()?;
        Ok(self.a * p.x() + self.b * p.y() + self.c)
    }

    /// Whether both `a` and `b` vanish, i.e. the equation describes no line.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a.abs() < TOLERANCE && self.b.abs() < TOLERANCE
    }

    /// Normal vector `(a, b)`.
    #[must_use]
    pub fn perpendicular_vector(&self) -> Point {
        Point::new(self.a, self.b)
    }

    /// Direction vector `(b, -a)`.
    #[must_use]
    pub fn guide_vector(&self) -> Point {
        Point::new(self.b, -self.a)
    }

    /// Whether the two coefficient triples are proportional.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.is_parallel_to(other)
            && (self.a * other.c - other.a * self.c).abs() < TOLERANCE
            && (self.b * other.c - other.b * self.c).abs() < TOLERANCE
    }

    #[must_use]
    pub fn approx_ne(&self, other: &Self) -> bool {
        !self.approx_eq(other)
    }

    /// Whether the normals are proportional. Equal lines are parallel too.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        (self.a * other.b - other.a * self.b).abs() < TOLERANCE
    }

    /// Renders `Line(a, b, c)` with the given tokens.
    #[must_use]
    pub fn render(&self, tokens: &FormatTokens) -> String {
        tokens.tuple(&tokens.line_label, &[self.a, self.b, self.c])
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(format::tokens()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn through_two_points() {
        let (p1, p2) = (Point::new(0.0, 1.0), Point::new(2.0, 3.0));
        let l = Line::through(&p1, &p2).unwrap();
        assert!((l.a() - 2.0).abs() < TOLERANCE);
        assert!((l.b() + 2.0).abs() < TOLERANCE);
        assert!((l.c() - 2.0).abs() < TOLERANCE);
        assert!(l.evaluate(&p1).unwrap().abs() < TOLERANCE);
        assert!(l.evaluate(&p2).unwrap().abs() < TOLERANCE);
        assert!(l.evaluate(&Point::new(5.0, 6.0)).unwrap().abs() < TOLERANCE);
    }

    #[test]
    fn through_rejects_sentinel() {
        let missing = Point::non_existent();
        assert!(Line::through(&Point::new(0.0, 0.0), &missing).is_err());
        assert!(Line::new(1.0, 1.0, 0.0).evaluate(&missing).is_err());
    }

    #[test]
    fn coincident_points_give_degenerate_line() {
        let p = Point::new(1.0, 1.0);
        assert!(Line::through(&p, &p).unwrap().is_degenerate());
        assert!(!Line::new(0.0, 1.0, 5.0).is_degenerate());
    }

    #[test]
    fn evaluate_sign_tells_side() {
        let l = Line::new(0.0, 1.0, 0.0);
        assert!(l.evaluate(&Point::new(3.0, 2.0)).unwrap() > 0.0);
        assert!(l.evaluate(&Point::new(3.0, -2.0)).unwrap() < 0.0);
    }

    #[test]
    fn vectors() {
        let l = Line::new(1.0, 2.0, 3.0);
        let normal = l.perpendicular_vector();
        let guide = l.guide_vector();
        assert!(normal.approx_eq(&Point::new(1.0, 2.0)).unwrap());
        assert!(guide.approx_eq(&Point::new(2.0, -1.0)).unwrap());
        assert!(normal.dot(&guide).unwrap().abs() < TOLERANCE);
    }

    #[test]
    fn proportional_lines_are_equal() {
        let l1 = Line::new(1.0, 2.0, 3.0);
        let l2 = Line::new(-2.0, -4.0, -6.0);
        assert!(l1.approx_eq(&l2));
        assert!(l1.is_parallel_to(&l2));
    }

    #[test]
    fn parallel_but_distinct() {
        let l1 = Line::new(1.0, 2.0, 3.0);
        let l2 = Line::new(2.0, 4.0, 0.0);
        assert!(l1.is_parallel_to(&l2));
        assert!(l1.approx_ne(&l2));
        assert!(!l1.is_parallel_to(&Line::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn default_is_diagonal() {
        let l = Line::default();
        assert!(l.evaluate(&Point::new(4.0, 4.0)).unwrap().abs() < TOLERANCE);
    }

    #[test]
    fn display_uses_tokens() {
        assert_eq!(Line::new(0.0, 1.0, -2.5).to_string(), "Line(0, 1, -2.5)");
        let tokens = FormatTokens {
            debug: true,
            ..FormatTokens::default()
        };
        assert_eq!(Line::new(0.0, 1.0, 0.0).render(&tokens), "Line(0.0, 1.0, 0.0)");
    }
}
