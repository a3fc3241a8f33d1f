//! Fully resolved gauge configuration.
//!
//! A [`GaugeConfig`] is what the layout pipeline consumes: every default is
//! already filled in, so stages never fall back to sibling fields on their
//! own. User-facing partial options live in [`crate::options`].

use crate::formatter::{DetailFormatter, LabelFormatter, LabelValue};
use crate::length::Length;
use gaugeline_core::math::{DVec2, PI};
use gaugeline_core::{Color, FontWeight, TextAlign, TextBaseline};
use gaugeline_render::{Animation, PrimitiveStyle};

/// Series palette used when neither the datum nor the options set a color.
pub const DEFAULT_PALETTE: [u32; 13] = [
    0x37a2da, 0x32c5e9, 0x67e0e3, 0x9fe6b8, 0xffdb5c, 0xff9f7f, 0xfb7293, 0xe062ae, 0xe690d1,
    0xe7bcf3, 0x9d96f5, 0x8378ea, 0x96bfff,
];

pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.iter().map(|hex| Color::from_hex(*hex)).collect()
}

/// One value entry of a gauge, after palette assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeDatum {
    pub name: String,
    pub value: f64,
    pub color: Color,
    /// Explicit gradient stops. Empty means "use `color`".
    pub gradient: Vec<Color>,
    /// Ring radius; `None` inherits the instrument radius.
    pub radius: Option<Length>,
    /// Stroke width; `None` inherits `arc_line_width`.
    pub line_width: Option<f64>,
    /// Stretch the gradient over this datum's own sweep instead of the
    /// whole instrument span.
    pub local_gradient: bool,
}

impl GaugeDatum {
    pub fn new(name: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            value,
            color,
            gradient: Vec::new(),
            radius: None,
            line_width: None,
            local_gradient: false,
        }
    }
}

/// Tick marks along the inside of the arc.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub show: bool,
    pub tick_length: f64,
    pub style: PrimitiveStyle,
}

impl Default for AxisTick {
    fn default() -> Self {
        Self {
            show: true,
            tick_length: 6.0,
            style: PrimitiveStyle::new()
                .with_stroke(Color::from_hex(0x999999))
                .with_line_width(1.0),
        }
    }
}

/// Labels next to each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub show: bool,
    /// Per-index overrides of the computed tick values; `None` keeps the
    /// computed value at that index.
    pub data: Vec<Option<LabelValue>>,
    pub formatter: Option<LabelFormatter>,
    /// Distance between the tick's inner end and the label anchor.
    pub label_gap: f64,
    pub style: PrimitiveStyle,
}

impl Default for AxisLabel {
    fn default() -> Self {
        Self {
            show: true,
            data: Vec::new(),
            formatter: None,
            label_gap: 5.0,
            style: PrimitiveStyle::new()
                .with_fill(Color::from_hex(0x999999))
                .with_font_size(10.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pointer {
    pub show: bool,
    /// Which datum drives the pointer angle.
    pub value_index: usize,
    pub style: PrimitiveStyle,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            show: true,
            value_index: 0,
            style: PrimitiveStyle::new()
                .with_fill(Color::from_hex(0xfb7293))
                .with_scale(DVec2::ONE),
        }
    }
}

/// Where a datum's readout text is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPosition {
    #[default]
    Center,
    /// Start point of the datum's arc.
    Start,
    /// End point of the datum's arc.
    End,
}

/// Readout text per datum.
#[derive(Debug, Clone, PartialEq)]
pub struct Details {
    pub show: bool,
    pub formatter: Option<DetailFormatter>,
    pub offset: DVec2,
    pub position: DetailPosition,
    pub style: PrimitiveStyle,
}

impl Default for Details {
    fn default() -> Self {
        Self {
            show: false,
            formatter: None,
            offset: DVec2::ZERO,
            position: DetailPosition::Center,
            style: PrimitiveStyle::new()
                .with_font_size(20.0)
                .with_font_weight(FontWeight::Bold)
                .with_text_align(TextAlign::Center)
                .with_text_baseline(TextBaseline::Middle),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundArc {
    pub show: bool,
    pub style: PrimitiveStyle,
}

impl Default for BackgroundArc {
    fn default() -> Self {
        Self {
            show: true,
            style: PrimitiveStyle::new().with_stroke(Color::from_hex(0xe0e0e0)),
        }
    }
}

/// One gauge instrument with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeConfig {
    pub name: String,
    /// Center; percentages resolve against the matching area axis.
    pub center: [Length; 2],
    /// Outer radius; percentages resolve against `min(width, height) / 2`.
    pub radius: Length,
    /// Radians.
    pub start_angle: f64,
    /// Radians.
    pub end_angle: f64,
    pub clock_wise: bool,
    pub min: f64,
    pub max: f64,
    /// Number of ticks, at least 2.
    pub split_num: usize,
    pub arc_line_width: f64,
    pub data: Vec<GaugeDatum>,
    /// Overlaid on every value arc's computed style.
    pub data_item_style: PrimitiveStyle,
    pub axis_tick: AxisTick,
    pub axis_label: AxisLabel,
    pub pointer: Pointer,
    pub details: Details,
    pub background_arc: BackgroundArc,
    pub z_level: u32,
    pub animation: Animation,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            center: [Length::Percent(50.0), Length::Percent(50.0)],
            radius: Length::Percent(60.0),
            start_angle: -PI * 5.0 / 4.0,
            end_angle: PI / 4.0,
            clock_wise: true,
            min: 0.0,
            max: 100.0,
            split_num: 5,
            arc_line_width: 15.0,
            data: Vec::new(),
            data_item_style: PrimitiveStyle::default(),
            axis_tick: AxisTick::default(),
            axis_label: AxisLabel::default(),
            pointer: Pointer::default(),
            details: Details::default(),
            background_arc: BackgroundArc::default(),
            z_level: 10,
            animation: Animation::default(),
        }
    }
}
