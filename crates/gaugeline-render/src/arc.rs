//! Plain stroked circular arc.

use crate::error::{ShapeResult, ensure_finite};
use gaugeline_core::DrawContext;
use gaugeline_core::math::DVec2;

/// A circular arc stroked with a single paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcShape {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Trace from start to end with increasing angles.
    pub clock_wise: bool,
}

impl ArcShape {
    pub fn new(center: DVec2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            clock_wise: true,
        }
    }

    pub fn with_clock_wise(mut self, clock_wise: bool) -> Self {
        self.clock_wise = clock_wise;
        self
    }

    /// Same arc with zero sweep, pinned at its start angle.
    pub fn collapsed(self) -> Self {
        Self {
            end_angle: self.start_angle,
            ..self
        }
    }

    pub fn validate(&self) -> ShapeResult<()> {
        ensure_finite(
            "arc",
            &[
                ("rx", self.center.x),
                ("ry", self.center.y),
                ("r", self.radius),
                ("startAngle", self.start_angle),
                ("endAngle", self.end_angle),
            ],
        )
    }

    /// Stroke the arc with whatever stroke paint and width are current.
    pub fn draw(&self, ctx: &mut dyn DrawContext) -> ShapeResult<()> {
        self.validate()?;

        ctx.begin_path();
        ctx.arc(
            self.center,
            self.radius.max(0.0),
            self.start_angle,
            self.end_angle,
            !self.clock_wise,
        );
        ctx.stroke();

        Ok(())
    }
}
