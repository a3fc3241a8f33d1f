//! Gaugeline Render - primitive descriptors and their canvas renderers
//!
//! This crate provides:
//! - [`Primitive`] descriptors (shape + style + visibility + animation hints)
//! - The gradient arc renderer, which approximates a color gradient along a
//!   circular arc with one linear-gradient stroke per sub-arc
//! - The pie/ring renderer for closed annular sectors
//! - A plain stroked arc renderer
//! - [`Painter`], which draws a list of primitives onto any
//!   [`DrawContext`](gaugeline_core::DrawContext)
//!
//! # Example
//!
//! ```ignore
//! use gaugeline_render::*;
//!
//! let arc = GradientArcShape::new(center, 80.0, start, end);
//! let primitive = Primitive::new(PrimitiveShape::GradientArc(arc))
//!     .with_style(PrimitiveStyle::new().with_line_width(15.0).with_gradient(colors));
//!
//! Painter::draw_all(&mut ctx, &[primitive]);
//! ```

mod arc;
mod error;
mod gradient_arc;
mod painter;
mod pie;
mod primitive;
mod style;
mod transform;

pub use arc::*;
pub use error::*;
pub use gradient_arc::*;
pub use painter::*;
pub use pie::*;
pub use primitive::*;
pub use style::*;
pub use transform::*;
