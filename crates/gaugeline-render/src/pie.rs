//! Pie/ring (annular sector) renderer.

use crate::error::{ShapeResult, ensure_finite};
use gaugeline_core::DrawContext;
use gaugeline_core::math::{DVec2, point_on_circle};

/// A closed sector between an inner and an outer radius.
///
/// `inner_radius = 0` gives a plain pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieShape {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub clock_wise: bool,
}

impl PieShape {
    pub fn new(
        center: DVec2,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            clock_wise: true,
        }
    }

    pub fn with_clock_wise(mut self, clock_wise: bool) -> Self {
        self.clock_wise = clock_wise;
        self
    }

    pub fn validate(&self) -> ShapeResult<()> {
        ensure_finite(
            "pie",
            &[
                ("rx", self.center.x),
                ("ry", self.center.y),
                ("ir", self.inner_radius),
                ("or", self.outer_radius),
                ("startAngle", self.start_angle),
                ("endAngle", self.end_angle),
            ],
        )
    }

    /// Trace the ring outline as one closed path, then stroke and fill it.
    ///
    /// The inner arc runs start→end in the shape's direction, a straight
    /// segment joins it to the outer arc, which runs back end→start, and a
    /// second segment closes onto the inner start. The center and both
    /// joining points are snapped to pixel centers.
    pub fn draw(&self, ctx: &mut dyn DrawContext) -> ShapeResult<()> {
        self.validate()?;

        let center = snap_to_pixel(self.center);
        let inner = self.inner_radius.max(0.0);
        let outer = self.outer_radius.max(0.0);

        ctx.begin_path();

        ctx.arc(
            center,
            inner,
            self.start_angle,
            self.end_angle,
            !self.clock_wise,
        );

        let outer_end = snap_to_pixel(point_on_circle(center, outer, self.end_angle));
        let inner_start = snap_to_pixel(point_on_circle(center, inner, self.start_angle));

        ctx.line_to(outer_end);
        ctx.arc(
            center,
            outer,
            self.end_angle,
            self.start_angle,
            self.clock_wise,
        );
        ctx.line_to(inner_start);

        ctx.close_path();

        ctx.stroke();
        ctx.fill();

        Ok(())
    }
}

/// Truncate to whole pixels and move onto the pixel center.
fn snap_to_pixel(point: DVec2) -> DVec2 {
    point.trunc() + DVec2::splat(0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_pixel() {
        assert_eq!(snap_to_pixel(DVec2::new(10.7, 3.2)), DVec2::new(10.5, 3.5));
        // Truncation is towards zero, like integer parsing.
        assert_eq!(snap_to_pixel(DVec2::new(-1.5, 0.0)), DVec2::new(-0.5, 0.5));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let pie = PieShape::new(DVec2::ZERO, f64::NAN, 10.0, 0.0, 1.0);
        assert!(pie.validate().is_err());
    }
}
