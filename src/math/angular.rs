use std::f64::consts::PI;

/// Transformation from radians to degrees: one radian is 180/π degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180. / PI)
}

/// Transformation from degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.)
}

/// normalize arbitrary angles to [-π, π):
pub fn normalize_symmetric(angle: f64) -> f64 {
    let angle = (angle + PI) % (2.0 * PI);
    angle - PI * angle.signum()
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_angular() {
        assert_eq!(to_degrees(0.), 0.);
        assert_eq!(to_degrees(PI), 180.);
        assert_eq!(to_degrees(PI / 2.), 90.);
        assert_eq!(to_degrees(-PI), -180.);

        assert_eq!(to_radians(0.), 0.);
        assert_eq!(to_radians(180.), PI);
        assert_float_eq!(to_radians(to_degrees(1.)), 1., abs <= 1e-15);
        assert_float_eq!(to_degrees(to_radians(55.51)), 55.51, abs <= 1e-12);
    }

    #[test]
    fn test_normalization() {
        assert_float_eq!(normalize_symmetric(0.), 0., abs <= 1e-15);
        assert_float_eq!(normalize_symmetric(2. * PI), 0., abs <= 1e-15);
        assert_float_eq!(normalize_symmetric(5. * PI / 2.), PI / 2., abs <= 1e-15);
        assert_float_eq!(normalize_symmetric(-5. * PI / 2.), -PI / 2., abs <= 1e-15);

        // The upper bound of [-π, π) is open: π wraps to -π
        assert_eq!(normalize_symmetric(PI), -PI);
    }
}
