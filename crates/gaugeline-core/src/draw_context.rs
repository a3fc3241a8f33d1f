//! The drawing-context seam.
//!
//! Renderers in Gaugeline never touch a concrete canvas. They issue path and
//! paint commands through [`DrawContext`], which a backend (a canvas binding,
//! an SVG writer, a rasterizer, or the recording mock in
//! `gaugeline-test-utils`) implements.
//!
//! The command set mirrors a 2D canvas: a current path built from
//! `move_to`/`line_to`/`arc`, stroked or filled with the current paints.
//!
//! # Example
//!
//! ```rust,no_run
//! use gaugeline_core::{DrawContext, Paint, Color};
//! use gaugeline_core::math::{DVec2, PI};
//!
//! fn half_ring(ctx: &mut dyn DrawContext) {
//!     ctx.begin_path();
//!     ctx.arc(DVec2::new(50.0, 50.0), 40.0, PI, 0.0, false);
//!     ctx.set_stroke(Paint::solid(Color::BLACK));
//!     ctx.set_line_width(4.0);
//!     ctx.stroke();
//! }
//! ```

use crate::Paint;
use crate::math::DVec2;

/// Horizontal anchoring of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the position and runs right.
    #[default]
    Left,
    /// Text ends at the position.
    Right,
    /// Text is centered on the position.
    Center,
}

/// Vertical anchoring of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// Position is the top of the em box.
    #[default]
    Top,
    /// Position is the middle of the em box.
    Middle,
    /// Position is the bottom of the em box.
    Bottom,
}

/// Font weight for text commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Everything a backend needs to place a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            font_weight: FontWeight::Normal,
            align: TextAlign::Left,
            baseline: TextBaseline::Top,
        }
    }
}

/// A canvas-like immediate drawing surface.
///
/// Angles are radians. `arc` follows canvas semantics: with
/// `counter_clockwise == false` the arc is traced from `start_angle` towards
/// increasing angles; a sweep that runs "backwards" is resolved by the
/// backend exactly as a canvas would.
pub trait DrawContext {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Connect the current point back to the start of the sub-path.
    fn close_path(&mut self);

    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: DVec2);

    /// Add a straight segment to `point`.
    fn line_to(&mut self, point: DVec2);

    /// Add a circular arc to the current path.
    fn arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    );

    /// Set the paint used by [`DrawContext::stroke`].
    fn set_stroke(&mut self, paint: Paint);

    /// Set the paint used by [`DrawContext::fill`] and text.
    fn set_fill(&mut self, paint: Paint);

    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Stroke the current path.
    fn stroke(&mut self);

    /// Fill the current path.
    fn fill(&mut self);

    /// Fill a run of text with the current fill paint.
    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle);
}
