use crate::error::{GeometryError, Result};
use crate::geometry::{Circle, Line, Point};
use crate::math::TOLERANCE;

use super::relation::{is_crossing_circle_and_line, is_crossing_circles};
use super::from_point_to_line;

/// Intersection point of two lines.
///
/// Returns `None` when the lines are parallel or coincident (zero or
/// infinitely many common points).
#[must_use]
pub fn cross_lines(l1: &Line, l2: &Line) -> Option<Point> {
    let d = l1.a() * l2.b() - l1.b() * l2.a();
    if d.abs() < TOLERANCE {
        tracing::debug!(%l1, %l2, "lines are parallel");
        return None;
    }

    let x = (l2.c() * l1.b() - l1.c() * l2.b()) / d;
    let y = (l1.c() * l2.a() - l1.a() * l2.c()) / d;
    Some(Point::new(x, y))
}

/// Intersection points of a circle and a line.
///
/// Returns `None` if they do not meet. A tangent line yields the touching
/// point twice.
///
/// # Errors
///
/// Returns `DegenerateLine` if `l` has no direction.
pub fn cross_circle_and_line(c: &Circle, l: &Line) -> Result<Option<(Point, Point)>> {
    if !is_crossing_circle_and_line(c, l)? {
        tracing::debug!(circle = %c, line = %l, "circle and line do not meet");
        return Ok(None);
    }

    let h = from_point_to_line(&c.center(), l)?
        .ok_or(GeometryError::DegenerateLine)?;
    // Tangency can leave the radicand a hair below zero.
    let radicand = c.radius() * c.radius() - h.length_squared()?;
    let x = radicand.max(0.0).sqrt();
    let along = l.guide_vector().unit_vector()?.scaled(x)?;
    let foot = c.center().plus(&h)?;

    Ok(Some((foot.plus(&along)?, foot.minus(&along)?)))
}

/// Intersection points of two circles.
///
/// Returns `None` if the boundaries do not meet or the circles are
/// concentric. Internal tangency yields the touching point twice.
///
/// # Errors
///
/// Only fails on internal inconsistencies; circle centers always exist.
pub fn cross_circles(c1: &Circle, c2: &Circle) -> Result<Option<(Point, Point)>> {
    if !is_crossing_circles(c1, c2) {
        tracing::debug!(%c1, %c2, "circles do not cross");
        return Ok(None);
    }

    let d = c1.center().minus(&c2.center())?;
    if d.is_zero() {
        tracing::debug!(%c1, %c2, "concentric circles");
        return Ok(None);
    }

    let len = d.length()?;
    let r1 = c1.radius();
    let r2 = c2.radius();

    // Angle at c2 between the center line and the intersection point.
    let cos_a = (len * len + r2 * r2 - r1 * r1) / (2.0 * len * r2);
    let d1 = d.unit_vector()?.scaled(r2 * cos_a)?;
    let x = (r2 * r2 - d1.length_squared()?).max(0.0).sqrt();
    let offset = d.perpendicular_vector()?.unit_vector()?.scaled(x)?;
    let foot = c2.center().plus(&d1)?;

    Ok(Some((foot.plus(&offset)?, foot.minus(&offset)?)))
}
