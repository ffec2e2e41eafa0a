use crate::error::{GeometryError, Result};
use crate::geometry::{Circle, Line, Point};
use crate::math::TOLERANCE;

use super::from_point_to_line;

/// Whether `a` and `b` lie on the same side of `l`, counting points on the
/// line as being on either side.
///
/// # Errors
///
/// Returns `NonExistentPoint` if either point is the sentinel.
pub fn is_in_same_side(l: &Line, a: &Point, b: &Point) -> Result<bool> {
    Ok(l.evaluate(a)? * l.evaluate(b)? > -TOLERANCE)
}

/// Whether `a` and `b` lie strictly on the same side of `l`.
///
/// # Errors
///
/// Returns `NonExistentPoint` if either point is the sentinel.
pub fn is_in_same_side_excluding(l: &Line, a: &Point, b: &Point) -> Result<bool> {
    Ok(l.evaluate(a)? * l.evaluate(b)? > TOLERANCE)
}

/// Whether `p` lies inside `c` or on its boundary.
///
/// # Errors
///
/// Returns `NonExistentPoint` if `p` is the sentinel.
pub fn is_point_in_circle(p: &Point, c: &Circle) -> Result<bool> {
    Ok(p.minus(&c.center())?.length()? - c.radius() < TOLERANCE)
}

/// Whether `l` touches or crosses `c`.
///
/// # Errors
///
/// Returns `DegenerateLine` if `l` has no direction. Earlier releases
/// reported this case as `NonExistentPoint`.
pub fn is_crossing_circle_and_line(c: &Circle, l: &Line) -> Result<bool> {
    let h = from_point_to_line(&c.center(), l)?
        .ok_or(GeometryError::DegenerateLine)?;
    Ok(h.length()? - c.radius() < TOLERANCE)
}

/// Whether the boundaries of `c1` and `c2` intersect.
///
/// Internal tangency counts as crossing; external tangency does not.
#[must_use]
pub fn is_crossing_circles(c1: &Circle, c2: &Circle) -> bool {
    let l = distance(&c1.center(), &c2.center());
    let (r1, r2) = (c1.radius(), c2.radius());
    r2 - l - r1 < TOLERANCE && r1 - l - r2 < TOLERANCE && r1 + r2 - l > TOLERANCE
}

/// Distance between two points known to exist.
fn distance(p: &Point, q: &Point) -> f64 {
    (p.x() - q.x()).hypot(p.y() - q.y())
}
