use crate::error::Result;
use crate::geometry::{Line, Point};

/// Vector from `p` to its orthogonal projection on `l`.
///
/// Returns `None` if `l` is degenerate. Adding the result to `p` gives the
/// foot of the perpendicular.
///
/// # Errors
///
/// Returns `NonExistentPoint` if `p` is the sentinel.
pub fn from_point_to_line(p: &Point, l: &Line) -> Result<Option<Point>> {
    p.must_exist()?;
    if l.is_degenerate() {
        tracing::debug!(line = %l, "projection onto a degenerate line");
        return Ok(None);
    }

    let distance = l.evaluate(p)?.abs() / l.a().hypot(l.b());
    let w = l.perpendicular_vector().unit_vector()?.scaled(distance)?;

    // The normal (a, b) points to the positive side, so only one of `w` and
    // `-w` lands on the line. Pick by residual rather than against a fixed
    // tolerance, which rounding exceeds once coordinates grow large.
    let flipped = w.negated()?;
    let miss = l.evaluate(&p.plus(&w)?)?.abs();
    let miss_flipped = l.evaluate(&p.plus(&flipped)?)?.abs();
    if miss_flipped < miss {
        return Ok(Some(flipped));
    }
    Ok(Some(w))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{AXIS_X, AXIS_Y};
    use crate::math::TOLERANCE;

    fn project(x: f64, y: f64, l: &Line) -> Point {
        from_point_to_line(&Point::new(x, y), l).unwrap().unwrap()
    }

    #[test]
    fn projection_onto_x_axis() {
        let w = project(3.0, 2.0, &AXIS_X);
        assert!(w.approx_eq(&Point::new(0.0, -2.0)).unwrap());

        let w = project(3.0, -2.0, &AXIS_X);
        assert!(w.approx_eq(&Point::new(0.0, 2.0)).unwrap());
    }

    #[test]
    fn projection_onto_y_axis() {
        let w = project(-4.0, 1.0, &AXIS_Y);
        assert!(w.approx_eq(&Point::new(4.0, 0.0)).unwrap());
    }

    #[test]
    fn projection_onto_diagonal_lands_on_line() {
        let l = Line::new(1.0, -1.0, 2.0);
        let p = Point::new(3.0, 0.0);
        let w = from_point_to_line(&p, &l).unwrap().unwrap();
        let foot = p.plus(&w).unwrap();
        assert!(l.evaluate(&foot).unwrap().abs() < TOLERANCE);
        assert!(foot.approx_eq(&Point::new(0.5, 2.5)).unwrap());
    }

    #[test]
    fn far_points_project_toward_the_line() {
        let l = Line::new(2.0, 3.0, -6.0);
        let norm_sq = l.a() * l.a() + l.b() * l.b();
        for scale in [1e5, 1e6, 1e7, 1e8] {
            for k in 0..50 {
                let t = f64::from(k);
                for side in [1.0, -1.0] {
                    let x = side * scale * (1.0 + 0.1 * t);
                    let y = side * scale * (0.5 + 0.03 * t);
                    let w = project(x, y, &l);
                    let offset = l.evaluate(&Point::new(x, y)).unwrap() / norm_sq;
                    assert_relative_eq!(w.x(), -offset * l.a(), max_relative = 1e-9);
                    assert_relative_eq!(w.y(), -offset * l.b(), max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn point_on_line_gives_zero_vector() {
        assert!(project(7.0, 0.0, &AXIS_X).is_zero());
    }

    #[test]
    fn degenerate_line_gives_none() {
        let degenerate = Line::new(0.0, 0.0, 1.0);
        let r = from_point_to_line(&Point::new(1.0, 1.0), &degenerate).unwrap();
        assert!(r.is_none());
    }

    #[test]
    fn sentinel_point_is_an_error() {
        assert!(from_point_to_line(&Point::non_existent(), &AXIS_X).is_err());
    }
}
