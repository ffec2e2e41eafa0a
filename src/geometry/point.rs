use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::format::{self, FormatTokens};
use crate::math::{sgn, to_radians, Rotation2, Vector2, PI, TOLERANCE};

/// A 2D point or free vector with an existence flag.
///
/// `Point::new(x, y)` is always existent. The default value is the
/// non-existent sentinel `(0, 0)`; every metric, arithmetic, comparison
/// and rendering operation rejects it with
/// [`GeometryError::NonExistentPoint`].
///
/// Arithmetic is exposed as named methods returning [`Result`] so that a
/// sentinel can never silently flow into a computation.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
    exists: bool,
}

impl Default for Point {
    fn default() -> Self {
        Self::non_existent()
    }
}

impl Point {
    /// Creates an existent point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self::with_existence(x, y, true)
    }

    /// Creates a point with an explicit existence flag.
    #[must_use]
    pub const fn with_existence(x: f64, y: f64, exists: bool) -> Self {
        Self { x, y, exists }
    }

    /// The "no such point" sentinel.
    #[must_use]
    pub const fn non_existent() -> Self {
        Self::with_existence(0.0, 0.0, false)
    }

    /// Wraps a nalgebra vector as an existent point.
    #[must_use]
    pub fn from_vector(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Returns the underlying vector.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn to_vector(&self) -> Result<Vector2> {
        self.must_exist()?;
        Ok(self.vector())
    }

    fn vector(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Fails if this point is the non-existent sentinel.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonExistentPoint`.
    pub fn must_exist(&self) -> Result<()> {
        if self.exists {
            Ok(())
        } else {
            tracing::trace!("rejecting non-existent point");
            Err(GeometryError::NonExistentPoint.into())
        }
    }

    /// Whether both coordinates are within [`TOLERANCE`] of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x.abs() < TOLERANCE && self.y.abs() < TOLERANCE
    }

    /// Euclidean length.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn length(&self) -> Result<f64> {
        self.must_exist()?;
        Ok(self.vector().norm())
    }

    /// Squared Euclidean length.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn length_squared(&self) -> Result<f64> {
        self.must_exist()?;
        Ok(self.vector().norm_squared())
    }

    /// Rotates counter-clockwise by `angle` radians.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn rotate_radians(&self, angle: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::from_vector(Rotation2::new(angle) * self.vector()))
    }

    /// Rotates counter-clockwise by `angle` degrees.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn rotate_degrees(&self, angle: f64) -> Result<Self> {
        self.rotate_radians(to_radians(angle))
    }

    /// Signed counter-clockwise angle from `self` to `other`, in `(-pi, pi]`.
    ///
    /// Returns `0` if either vector is (nearly) zero-length. The sign comes
    /// from the cross product; `asin` only covers `[-pi/2, pi/2]`, so the
    /// sign of the dot product selects the half-plane.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn angle_to(&self, other: &Self) -> Result<f64> {
        other.must_exist()?;
        let len1 = self.length()?;
        let len2 = other.length()?;

        if (len1 * len2).abs() < TOLERANCE {
            return Ok(0.0);
        }

        let sin = self.cross(other)? / len1 / len2;
        let sin_sgn = sgn(sin);
        let cos_sgn = sgn(self.dot(other)? / len1 / len2);

        let angle = match (cos_sgn, sin_sgn) {
            (0, 1) => PI / 2.0,
            (0, -1) => -PI / 2.0,
            (1, 0) => 0.0,
            (-1, 0) => PI,
            (1, _) => sin.asin(),
            (-1, _) => PI * f64::from(sin_sgn) - sin.asin(),
            _ => 0.0,
        };
        Ok(angle)
    }

    /// Unit vector in the same direction; a zero vector maps to `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn unit_vector(&self) -> Result<Self> {
        let len = self.length()?;
        if self.is_zero() {
            return Ok(Self::new(0.0, 0.0));
        }
        Ok(Self::from_vector(self.vector() / len))
    }

    /// The clockwise perpendicular `(y, -x)`.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn perpendicular_vector(&self) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::new(self.y, -self.x))
    }

    // ── arithmetic ──

    /// Unary plus: returns the point itself after validation.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn identity(&self) -> Result<Self> {
        self.must_exist()?;
        Ok(*self)
    }

    /// Unary minus.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn negated(&self) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::from_vector(-self.vector()))
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.must_exist()?;
        other.must_exist()?;
        Ok(Self::from_vector(self.vector() + other.vector()))
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.must_exist()?;
        other.must_exist()?;
        Ok(Self::from_vector(self.vector() - other.vector()))
    }

    /// Adds `a` to both coordinates (`p + a`, equivalently `a + p`).
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn plus_scalar(&self, a: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::from_vector(self.vector().add_scalar(a)))
    }

    /// Subtracts `a` from both coordinates (`p - a`).
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn minus_scalar(&self, a: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::from_vector(self.vector().add_scalar(-a)))
    }

    /// Subtracts both coordinates from `a` (`a - p`).
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn scalar_minus(&self, a: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::new(a - self.x, a - self.y))
    }

    /// Scales both coordinates by `a` (`p * a`, equivalently `a * p`).
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn scaled(&self, a: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::from_vector(self.vector() * a))
    }

    /// Divides both coordinates by `a` (`p / a`).
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn divided(&self, a: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::from_vector(self.vector() / a))
    }

    /// Divides `a` by each coordinate (`a / p` = `(a / x, a / y)`).
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn scalar_divided(&self, a: f64) -> Result<Self> {
        self.must_exist()?;
        Ok(Self::new(a / self.x, a / self.y))
    }

    /// Dot product.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.must_exist()?;
        other.must_exist()?;
        Ok(self.vector().dot(&other.vector()))
    }

    /// 2D cross product `x1 * y2 - y1 * x2`.
    ///
    /// The sign matches the direction of rotation from `self` to `other`.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn cross(&self, other: &Self) -> Result<f64> {
        self.must_exist()?;
        other.must_exist()?;
        Ok(self.vector().perp(&other.vector()))
    }

    /// Whether the two vectors are collinear. A zero vector is collinear
    /// with everything.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn is_collinear_with(&self, other: &Self) -> Result<bool> {
        let cross = self.cross(other)?;
        Ok(self.is_zero() || other.is_zero() || cross.abs() < TOLERANCE)
    }

    // ── comparison ──

    /// Equality within [`TOLERANCE`] on both coordinates.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn approx_eq(&self, other: &Self) -> Result<bool> {
        self.must_exist()?;
        other.must_exist()?;
        Ok(self.eq_unchecked(other))
    }

    /// Negation of [`Point::approx_eq`].
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn approx_ne(&self, other: &Self) -> Result<bool> {
        Ok(!self.approx_eq(other)?)
    }

    /// Strict lexicographic order (x, then y) with tolerance gaps.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn lt(&self, other: &Self) -> Result<bool> {
        self.must_exist()?;
        other.must_exist()?;
        Ok(self.lt_unchecked(other))
    }

    /// `lt || approx_eq`.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn le(&self, other: &Self) -> Result<bool> {
        Ok(self.lt(other)? || self.eq_unchecked(other))
    }

    /// `!lt && !approx_eq`.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn gt(&self, other: &Self) -> Result<bool> {
        Ok(!self.lt(other)? && !self.eq_unchecked(other))
    }

    /// `!lt`.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn ge(&self, other: &Self) -> Result<bool> {
        Ok(!self.lt(other)?)
    }

    /// Three-way comparison consistent with [`Point::lt`] and
    /// [`Point::approx_eq`].
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` if either operand is the sentinel.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        Ok(if self.lt(other)? {
            Ordering::Less
        } else if self.eq_unchecked(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        })
    }

    pub(crate) fn eq_unchecked(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < TOLERANCE && (self.y - other.y).abs() < TOLERANCE
    }

    pub(crate) fn lt_unchecked(&self, other: &Self) -> bool {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx < -TOLERANCE || (dx.abs() < TOLERANCE && dy < -TOLERANCE)
    }

    // ── rendering ──

    /// Renders `Point(x, y)` with the given tokens.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn render(&self, tokens: &FormatTokens) -> Result<String> {
        self.must_exist()?;
        Ok(tokens.tuple(&tokens.point_label, &[self.x, self.y]))
    }

    /// Renders with the process-wide tokens.
    ///
    /// # Errors
    ///
    /// Returns `NonExistentPoint` for the sentinel.
    pub fn to_text(&self) -> Result<String> {
        self.render(format::tokens())
    }
}
