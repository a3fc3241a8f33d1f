//! Primitive styling.
//!
//! Every field is optional. A computed base style is overlaid with the
//! user's style via [`PrimitiveStyle::merged`]; fields the user sets win.

use gaugeline_core::math::DVec2;
use gaugeline_core::{Color, FontWeight, TextAlign, TextBaseline, TextStyle};

/// Style attached to a [`Primitive`](crate::Primitive).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveStyle {
    /// Fill color for closed shapes and text
    pub fill: Option<Color>,
    /// Stroke color for outlines and arcs
    pub stroke: Option<Color>,
    /// Stroke width in pixels
    pub line_width: Option<f64>,
    /// Color stops of a gradient arc
    pub gradient: Option<Vec<Color>>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub text_align: Option<TextAlign>,
    pub text_baseline: Option<TextBaseline>,
    /// Rotation in degrees, applied about the primitive's rotation center
    pub rotate: Option<f64>,
    /// Scale factors, applied about the primitive's rotation center
    pub scale: Option<DVec2>,
}

impl PrimitiveStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_gradient(mut self, colors: Vec<Color>) -> Self {
        self.gradient = Some(colors);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.text_baseline = Some(baseline);
        self
    }

    pub fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    pub fn with_scale(mut self, scale: DVec2) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Overlay `overrides` onto this style. Set fields in `overrides` win.
    pub fn merged(&self, overrides: &PrimitiveStyle) -> PrimitiveStyle {
        PrimitiveStyle {
            fill: overrides.fill.or(self.fill),
            stroke: overrides.stroke.or(self.stroke),
            line_width: overrides.line_width.or(self.line_width),
            gradient: overrides
                .gradient
                .clone()
                .or_else(|| self.gradient.clone()),
            font_size: overrides.font_size.or(self.font_size),
            font_weight: overrides.font_weight.or(self.font_weight),
            text_align: overrides.text_align.or(self.text_align),
            text_baseline: overrides.text_baseline.or(self.text_baseline),
            rotate: overrides.rotate.or(self.rotate),
            scale: overrides.scale.or(self.scale),
        }
    }

    /// Whether this style moves the geometry it is applied to.
    pub fn has_transform(&self) -> bool {
        self.rotate.is_some_and(|r| r != 0.0) || self.scale.is_some_and(|s| s != DVec2::ONE)
    }

    /// Text placement derived from this style.
    pub fn text_style(&self) -> TextStyle {
        let defaults = TextStyle::default();
        TextStyle {
            font_size: self.font_size.unwrap_or(defaults.font_size),
            font_weight: self.font_weight.unwrap_or(defaults.font_weight),
            align: self.text_align.unwrap_or(defaults.align),
            baseline: self.text_baseline.unwrap_or(defaults.baseline),
        }
    }
}
