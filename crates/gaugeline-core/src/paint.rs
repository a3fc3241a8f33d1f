//! Paint types for filling and stroking.
//!
//! A paint is either a solid color or a linear gradient between two points.

use crate::Color;
use crate::math::DVec2;

/// How a stroke or fill is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Solid color.
    Solid(Color),
    /// Linear gradient.
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Create a solid color paint.
    pub fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Create a linear gradient paint.
    pub fn linear_gradient(start: DVec2, end: DVec2, stops: Vec<GradientStop>) -> Self {
        Self::LinearGradient(LinearGradient { start, end, stops })
    }

    /// Check if this is a solid color.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// Get the solid color if this is a solid paint.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            _ => None,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::LinearGradient(gradient)
    }
}

/// A linear gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Start point
    pub start: DVec2,
    /// End point
    pub end: DVec2,
    /// Color stops
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Create a new linear gradient.
    pub fn new(start: DVec2, end: DVec2, stops: Vec<GradientStop>) -> Self {
        Self { start, end, stops }
    }

    /// Gradient from `start` to `end` with `colors` placed at equal offsets.
    ///
    /// A single color yields one stop at offset `0`; no colors yields no stops.
    pub fn evenly_spaced(start: DVec2, end: DVec2, colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop::new(i as f32 / last, color))
            .collect();

        Self { start, end, stops }
    }

    /// Get the direction vector (normalized).
    pub fn direction(&self) -> DVec2 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Interpolate color at a position.
    pub fn sample(&self, position: DVec2) -> Color {
        if self.stops.is_empty() {
            return Color::TRANSPARENT;
        }
        if self.stops.len() == 1 {
            return self.stops[0].color;
        }

        let dir = self.end - self.start;
        let len_sq = dir.length_squared();
        if len_sq < f64::EPSILON {
            return self.stops[0].color;
        }

        // Project position onto gradient line
        let t = ((position - self.start).dot(dir) / len_sq).clamp(0.0, 1.0) as f32;

        interpolate_gradient(&self.stops, t)
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop.
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

fn interpolate_gradient(stops: &[GradientStop], t: f32) -> Color {
    let mut prev = &stops[0];
    for stop in &stops[1..] {
        if t <= stop.offset {
            let range = stop.offset - prev.offset;
            if range < f32::EPSILON {
                return stop.color;
            }
            let local_t = (t - prev.offset) / range;
            return prev.color.lerp(stop.color, local_t);
        }
        prev = stop;
    }

    // Past the last stop
    stops.last().map(|s| s.color).unwrap_or(Color::TRANSPARENT)
}
