//! Gradient arc renderer.
//!
//! A canvas cannot stroke a gradient that follows a curve, so the arc is cut
//! into one sub-arc per pair of adjacent colors. Each sub-arc is stroked on
//! its own path with a linear gradient running along its chord, which reads
//! as a continuous color transition around the circle.

use crate::error::{ShapeError, ShapeResult, ensure_finite};
use gaugeline_core::math::{DVec2, point_on_circle};
use gaugeline_core::{Color, DrawContext, LinearGradient, Paint};

/// A circular arc whose stroke interpolates through a list of colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientArcShape {
    pub center: DVec2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Angle where the first color sits. Defaults to `start_angle`.
    pub gradient_start_angle: Option<f64>,
    /// Angle where the last color sits. Defaults to `end_angle`.
    pub gradient_end_angle: Option<f64>,
}

/// One stroked slice of a gradient arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSegment {
    /// Angular range actually stroked.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Chord endpoints of the gradient sub-interval, which anchor the brush.
    pub chord: (DVec2, DVec2),
    /// Colors at the two chord endpoints.
    pub colors: (Color, Color),
}

impl GradientSegment {
    pub fn paint(&self) -> Paint {
        Paint::LinearGradient(LinearGradient::evenly_spaced(
            self.chord.0,
            self.chord.1,
            &[self.colors.0, self.colors.1],
        ))
    }
}

impl GradientArcShape {
    pub fn new(center: DVec2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            gradient_start_angle: None,
            gradient_end_angle: None,
        }
    }

    pub fn with_gradient_range(mut self, start: Option<f64>, end: Option<f64>) -> Self {
        self.gradient_start_angle = start;
        self.gradient_end_angle = end;
        self
    }

    /// Same arc with zero sweep, pinned at its start angle. The gradient
    /// range is untouched so the colors stay put while the arc grows.
    pub fn collapsed(self) -> Self {
        Self {
            end_angle: self.start_angle,
            ..self
        }
    }

    pub fn validate(&self) -> ShapeResult<()> {
        ensure_finite(
            "agArc",
            &[
                ("rx", self.center.x),
                ("ry", self.center.y),
                ("r", self.radius),
                ("startAngle", self.start_angle),
                ("endAngle", self.end_angle),
            ],
        )
    }

    /// The gradient's angular range after defaulting.
    pub fn gradient_range(&self) -> (f64, f64) {
        (
            self.gradient_start_angle.unwrap_or(self.start_angle),
            self.gradient_end_angle.unwrap_or(self.end_angle),
        )
    }

    /// Split the arc into the segments that will be stroked.
    ///
    /// `[gradient_start, gradient_end]` is cut into `colors.len() - 1` equal
    /// sub-intervals (a single color counts as two equal colors). Each
    /// sub-interval is clipped to `[start_angle, end_angle]`; the first one
    /// that reaches past `end_angle` is clamped and ends the list.
    pub fn segments(&self, colors: &[Color]) -> ShapeResult<Vec<GradientSegment>> {
        let colors: Vec<Color> = match colors {
            [] => return Err(ShapeError::EmptyGradient),
            [single] => vec![*single, *single],
            many => many.to_vec(),
        };

        let count = colors.len() - 1;
        let (gradient_start, gradient_end) = self.gradient_range();
        let gap = (gradient_end - gradient_start) / count as f64;
        let direction = if gap < 0.0 { -1.0 } else { 1.0 };

        // Distance travelled from `start_angle` in the sweep direction.
        let progress = |angle: f64| (angle - self.start_angle) * direction;
        let limit = progress(self.end_angle);

        let mut segments = Vec::with_capacity(count);
        for i in 0..count {
            let sub_start = gradient_start + gap * i as f64;
            let sub_end = gradient_start + gap * (i + 1) as f64;

            if progress(sub_end) < 0.0 {
                continue;
            }

            let arc_start = if progress(sub_start) < 0.0 {
                self.start_angle
            } else {
                sub_start
            };
            let overshoot = progress(sub_end) > limit;
            let arc_end = if overshoot { self.end_angle } else { sub_end };

            segments.push(GradientSegment {
                start_angle: arc_start,
                end_angle: arc_end,
                chord: (
                    point_on_circle(self.center, self.radius, sub_start),
                    point_on_circle(self.center, self.radius, sub_end),
                ),
                colors: (colors[i], colors[i + 1]),
            });

            if overshoot {
                break;
            }
        }

        Ok(segments)
    }

    /// Stroke every segment as its own path with its own gradient brush.
    ///
    /// Line width is left to the caller. A sweep toward a smaller
    /// `end_angle` is drawn counter-clockwise so it never wraps the long way.
    pub fn draw(&self, ctx: &mut dyn DrawContext, colors: &[Color]) -> ShapeResult<()> {
        self.validate()?;

        let counter_clockwise = self.end_angle < self.start_angle;
        for segment in self.segments(colors)? {
            ctx.begin_path();
            ctx.arc(
                self.center,
                self.radius,
                segment.start_angle,
                segment.end_angle,
                counter_clockwise,
            );
            ctx.set_stroke(segment.paint());
            ctx.stroke();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaugeline_core::math::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_color_is_one_full_segment() {
        let arc = GradientArcShape::new(DVec2::ZERO, 10.0, 0.0, PI);
        let segments = arc.segments(&[Color::RED]).unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_angle, 0.0);
        assert_eq!(segments[0].end_angle, PI);
        assert_eq!(segments[0].colors, (Color::RED, Color::RED));
    }

    #[test]
    fn test_segments_tile_gradient_range() {
        let arc = GradientArcShape::new(DVec2::ZERO, 10.0, 0.0, PI);
        let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];
        let segments = arc.segments(&colors).unwrap();

        assert_eq!(segments.len(), 3);
        assert!((segments[0].start_angle - 0.0).abs() < EPS);
        for pair in segments.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < EPS);
        }
        assert!((segments[2].end_angle - PI).abs() < EPS);
        for s in &segments {
            assert!((s.end_angle - s.start_angle - PI / 3.0).abs() < EPS);
        }
        assert_eq!(segments[1].colors, (Color::GREEN, Color::BLUE));
    }

    #[test]
    fn test_stretched_gradient_is_clamped_and_stops() {
        // Drawn span covers only the first half of the gradient range.
        let arc = GradientArcShape::new(DVec2::ZERO, 10.0, 0.0, FRAC_PI_2)
            .with_gradient_range(None, Some(PI));
        let colors = [Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];
        let segments = arc.segments(&colors).unwrap();

        assert_eq!(segments.len(), 2);
        assert!((segments[1].start_angle - PI / 3.0).abs() < EPS);
        assert!((segments[1].end_angle - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_collapsed_arc_draws_one_empty_segment() {
        let arc = GradientArcShape::new(DVec2::ZERO, 10.0, 1.0, 1.0)
            .with_gradient_range(None, Some(2.0));
        let segments = arc.segments(&[Color::RED, Color::BLUE]).unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_angle, 1.0);
        assert_eq!(segments[0].end_angle, 1.0);
    }

    #[test]
    fn test_chord_endpoints_on_circle() {
        let arc = GradientArcShape::new(DVec2::new(5.0, 5.0), 10.0, 0.0, PI);
        let segments = arc.segments(&[Color::RED, Color::BLUE]).unwrap();
        let (a, b) = segments[0].chord;

        assert!((a - DVec2::new(15.0, 5.0)).length() < EPS);
        assert!((b - DVec2::new(-5.0, 5.0)).length() < EPS);
    }

    #[test]
    fn test_empty_gradient_is_rejected() {
        let arc = GradientArcShape::new(DVec2::ZERO, 10.0, 0.0, PI);
        assert_eq!(arc.segments(&[]), Err(ShapeError::EmptyGradient));
    }

    #[test]
    fn test_decreasing_sweep() {
        let arc = GradientArcShape::new(DVec2::ZERO, 10.0, PI, 0.0);
        let segments = arc.segments(&[Color::RED, Color::GREEN, Color::BLUE]).unwrap();

        assert_eq!(segments.len(), 2);
        assert!((segments[0].end_angle - FRAC_PI_2).abs() < EPS);
        assert!((segments[1].end_angle - 0.0).abs() < EPS);
    }
}
