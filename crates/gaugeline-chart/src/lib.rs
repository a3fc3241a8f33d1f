//! Gaugeline Chart - the gauge instrument compiler
//!
//! Takes declarative [`GaugeOptions`] and the pixel [`Area`](gaugeline_core::Area)
//! of a drawing surface and derives every primitive needed to draw and
//! animate a gauge:
//!
//! 1. [`GaugeOptions::resolve`] merges user options over the defaults and
//!    validates them, producing [`GaugeConfig`]s.
//! 2. The [`layout`] pipeline turns each config into a [`GaugeLayout`]
//!    holding pixel-space geometry and text.
//! 3. The [`layers`] functions map a layout to
//!    [`Primitive`](gaugeline_render::Primitive)s, one list per visual layer.
//! 4. [`GaugeChart`] forwards each layer to an [`Updater`].
//!
//! # Example
//!
//! ```
//! use gaugeline_chart::*;
//! use gaugeline_core::Area;
//!
//! let options = GaugeOptions::new().with_series(
//!     GaugeSeriesOptions::new()
//!         .with_datum(DatumOptions::new("load", 42.0))
//!         .details(|d| d.show(true).formatter(DetailFormatter::template("{name}: {value}"))),
//! );
//!
//! let mut chart = GaugeChart::new(Area::new(400.0, 400.0));
//! let layouts = chart.set_option(&options).unwrap();
//! assert_eq!(layouts[0].details[0].content, "load: 42");
//! ```

mod chart;
mod config;
mod error;
mod formatter;
pub mod layers;
pub mod layout;
mod length;
mod options;
mod updater;

pub use chart::*;
pub use config::*;
pub use error::*;
pub use formatter::*;
pub use layers::Layer;
pub use layout::{
    DatumLayout, DetailLayout, GaugeFrame, GaugeLayout, LabelPlacement, TickLayout,
    layout_gauges,
};
pub use length::*;
pub use options::*;
pub use updater::*;
