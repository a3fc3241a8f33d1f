//! Gaugeline - declarative gauge charts
//!
//! Gaugeline compiles a gauge description (value range, ticks, labels,
//! value arcs, pointer, readouts) plus the size of a drawing surface into
//! canvas primitives:
//!
//! - **Core**: circle math, colors, paints and the [`DrawContext`](core::DrawContext) seam
//! - **Render**: primitive descriptors and their renderers, including the
//!   gradient arc and pie/ring shapes
//! - **Chart**: option resolution, the layout pipeline and per-layer
//!   primitive synthesis
//!
//! # Quick Start
//!
//! ```ignore
//! use gaugeline::prelude::*;
//!
//! let mut chart = GaugeChart::new(Area::new(400.0, 300.0));
//! chart.set_option(&GaugeOptions::new().with_series(
//!     GaugeSeriesOptions::new().with_datum(DatumOptions::new("cpu", 42.0)),
//! ))?;
//!
//! let primitives: Vec<Primitive> = chart.primitives().into_iter().cloned().collect();
//! Painter::draw_all(&mut canvas, &primitives);
//! ```

pub use gaugeline_core as core;
pub use gaugeline_core::{logging, math, profiling};
pub use gaugeline_render as render;

#[cfg(feature = "chart")]
pub use gaugeline_chart as chart;

/// Prelude module for convenient imports
pub mod prelude {
    pub use gaugeline_core::math::DVec2;
    pub use gaugeline_core::{Area, Color, DrawContext, Paint, TextAlign, TextBaseline};

    pub use gaugeline_render::{Painter, Primitive, PrimitiveShape, PrimitiveStyle, ShapeError};

    #[cfg(feature = "chart")]
    pub use gaugeline_chart::{
        ConfigError, DatumOptions, DetailFormatter, DetailPosition, GaugeChart, GaugeOptions,
        GaugeSeriesOptions, LabelFormatter, Layer, Length, RetainedUpdater, Updater,
    };
}
