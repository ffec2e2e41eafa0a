use super::{PI, TOLERANCE};

/// Sign of `a` with a dead zone of [`TOLERANCE`] around zero.
///
/// Returns `1` for positive, `-1` for negative and `0` for values within
/// the tolerance of zero.
#[must_use]
pub fn sgn(a: f64) -> i32 {
    if a > TOLERANCE {
        1
    } else if a < -TOLERANCE {
        -1
    } else {
        0
    }
}

/// Converts radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Converts degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgn_dead_zone() {
        assert_eq!(sgn(1.0), 1);
        assert_eq!(sgn(-1.0), -1);
        assert_eq!(sgn(0.0), 0);
        assert_eq!(sgn(TOLERANCE / 2.0), 0);
        assert_eq!(sgn(-TOLERANCE / 2.0), 0);
        assert_eq!(sgn(TOLERANCE * 2.0), 1);
    }

    #[test]
    fn degrees_radians_conversion() {
        assert!((to_radians(180.0) - PI).abs() < TOLERANCE);
        assert!((to_degrees(PI / 2.0) - 90.0).abs() < TOLERANCE);
        assert!((to_degrees(to_radians(37.5)) - 37.5).abs() < TOLERANCE);
    }
}
