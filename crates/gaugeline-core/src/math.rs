//! Circle math on top of `glam`'s double-precision types.
//!
//! All angles are radians, measured the way a canvas arc measures them:
//! `0` points along +x and positive angles turn towards +y (clockwise on a
//! y-down surface).
//!
//! ```
//! use gaugeline_core::math::{DVec2, point_on_circle};
//!
//! let p = point_on_circle(DVec2::new(100.0, 100.0), 50.0, 0.0);
//! assert_eq!(p, DVec2::new(150.0, 100.0));
//! ```

pub use glam::{DAffine2, DMat2, DVec2};

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Point on the circle of `radius` around `center` at `angle` radians.
#[inline]
pub fn point_on_circle(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + DVec2::new(angle.cos(), angle.sin()) * radius
}

/// Convert radians to degrees.
#[inline]
pub fn radian_to_degree(radian: f64) -> f64 {
    radian.to_degrees()
}

/// Length of the arc spanned by `angle` radians on a circle of `radius`.
///
/// Signed: a negative sweep yields a negative length.
#[inline]
pub fn arc_length(radius: f64, angle: f64) -> f64 {
    radius * angle
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_point_on_circle_quadrants() {
        let c = DVec2::new(10.0, 20.0);

        let right = point_on_circle(c, 5.0, 0.0);
        assert!((right - DVec2::new(15.0, 20.0)).length() < EPS);

        let down = point_on_circle(c, 5.0, FRAC_PI_2);
        assert!((down - DVec2::new(10.0, 25.0)).length() < EPS);

        let left = point_on_circle(c, 5.0, PI);
        assert!((left - DVec2::new(5.0, 20.0)).length() < EPS);
    }

    #[test]
    fn test_radian_to_degree() {
        assert!((radian_to_degree(PI) - 180.0).abs() < EPS);
        assert!((radian_to_degree(-FRAC_PI_2) + 90.0).abs() < EPS);
    }

    #[test]
    fn test_arc_length_signed() {
        assert!((arc_length(2.0, PI) - TAU).abs() < EPS);
        assert!(arc_length(2.0, -PI) < 0.0);
    }
}
