//! 2D affine transformations for primitive styling.

use gaugeline_core::math::{DAffine2, DVec2};

/// A 2D affine transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    affine: DAffine2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// Identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        affine: DAffine2::IDENTITY,
    };

    /// Create a translation transform.
    pub fn translate(offset: DVec2) -> Self {
        Self {
            affine: DAffine2::from_translation(offset),
        }
    }

    /// Create a rotation transform (angle in radians).
    pub fn rotate(angle: f64) -> Self {
        Self {
            affine: DAffine2::from_angle(angle),
        }
    }

    /// Create a non-uniform scale transform.
    pub fn scale_xy(scale: DVec2) -> Self {
        Self {
            affine: DAffine2::from_scale(scale),
        }
    }

    /// Rotate by `degrees` and scale by `scale`, both about `center`.
    ///
    /// This is how a graphic's `rotate`/`scale` style is applied: the
    /// graphic turns around its declared center rather than the origin.
    pub fn rotate_scale_about(center: DVec2, degrees: f64, scale: DVec2) -> Self {
        Self::translate(-center)
            .then(&Self::scale_xy(scale))
            .then(&Self::rotate(degrees.to_radians()))
            .then(&Self::translate(center))
    }

    /// Combine two transforms (self then other).
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            affine: other.affine * self.affine,
        }
    }

    /// Transform a point.
    pub fn transform_point(&self, point: DVec2) -> DVec2 {
        self.affine.transform_point2(point)
    }

    /// Check if this is the identity transform.
    pub fn is_identity(&self) -> bool {
        self.affine == DAffine2::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_identity() {
        let t = Transform2D::IDENTITY;
        let p = DVec2::new(10.0, 20.0);
        assert_eq!(t.transform_point(p), p);
        assert!(t.is_identity());
    }

    #[test]
    fn test_rotate_about_center() {
        let center = DVec2::new(100.0, 100.0);
        let t = Transform2D::rotate_scale_about(center, 90.0, DVec2::ONE);

        // A point 40px above the center ends up 40px to its right (y-down).
        let tip = t.transform_point(DVec2::new(100.0, 60.0));
        assert!(approx(tip, DVec2::new(140.0, 100.0)));
        assert!(approx(t.transform_point(center), center));
    }

    #[test]
    fn test_scale_about_center() {
        let center = DVec2::new(10.0, 10.0);
        let t = Transform2D::rotate_scale_about(center, 0.0, DVec2::splat(2.0));
        assert!(approx(t.transform_point(DVec2::new(11.0, 10.0)), DVec2::new(12.0, 10.0)));
    }
}
