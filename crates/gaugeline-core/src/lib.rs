//! Gaugeline Core
//!
//! This crate contains the shared building blocks of the gauge compiler:
//! circle math, colors and paints, the drawing-context seam, render-area
//! dimensions, logging and profiling.

pub mod alloc;
pub mod color;
pub mod draw_context;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod paint;
pub mod profiling;

pub use color::Color;
pub use draw_context::{DrawContext, FontWeight, TextAlign, TextBaseline, TextStyle};
pub use geometry::Area;
pub use paint::{GradientStop, LinearGradient, Paint};
