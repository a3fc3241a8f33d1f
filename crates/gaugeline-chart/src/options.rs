//! User-facing gauge options.
//!
//! Every field is optional. [`GaugeOptions::resolve`] deep-merges each
//! series over [`GaugeConfig::default`]: nested option structs merge field
//! by field, styles merge with user fields winning, and `Vec`s and scalars
//! replace the default outright.
//!
//! # Example
//!
//! ```
//! use gaugeline_chart::*;
//!
//! let options = GaugeOptions::new().with_series(
//!     GaugeSeriesOptions::new()
//!         .with_range(0.0, 200.0)
//!         .with_datum(DatumOptions::new("speed", 120.0))
//!         .axis_label(|label| label.formatter(LabelFormatter::template("{value} km/h"))),
//! );
//!
//! let configs = options.resolve().unwrap();
//! assert_eq!(configs[0].max, 200.0);
//! ```

use crate::config::{
    AxisLabel, AxisTick, BackgroundArc, DetailPosition, Details, GaugeConfig, GaugeDatum, Pointer,
    default_palette,
};
use crate::error::{ConfigError, ConfigResult};
use crate::formatter::{DetailFormatter, LabelFormatter, LabelValue};
use crate::length::Length;
use gaugeline_core::Color;
use gaugeline_core::math::DVec2;
use gaugeline_render::{Animation, Easing, PrimitiveStyle};

/// Top-level chart options.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeOptions {
    pub series: Vec<GaugeSeriesOptions>,
    /// Palette for data without an explicit color.
    pub color: Vec<Color>,
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            color: default_palette(),
        }
    }
}

impl GaugeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: GaugeSeriesOptions) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_palette(mut self, colors: Vec<Color>) -> Self {
        self.color = colors;
        self
    }

    /// Merge every shown series over the defaults and validate it.
    pub fn resolve(&self) -> ConfigResult<Vec<GaugeConfig>> {
        let mut configs = Vec::with_capacity(self.series.len());

        for (index, series) in self.series.iter().enumerate() {
            if series.show == Some(false) {
                tracing::debug!(series = index, "Skipping hidden gauge series");
                continue;
            }

            let config = series.merge_into(GaugeConfig::default(), &self.color);
            validate(index, &config)?;
            configs.push(config);
        }

        Ok(configs)
    }
}

fn validate(series: usize, config: &GaugeConfig) -> ConfigResult<()> {
    if config.split_num < 2 {
        return Err(ConfigError::SplitNumTooSmall {
            series,
            split_num: config.split_num,
        });
    }

    let span = config.max - config.min;
    if span == 0.0 || !span.is_finite() {
        return Err(ConfigError::DegenerateRange {
            series,
            min: config.min,
            max: config.max,
        });
    }

    Ok(())
}

/// Partial options for one gauge instrument.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GaugeSeriesOptions {
    pub show: Option<bool>,
    pub name: Option<String>,
    pub center: Option<[Length; 2]>,
    pub radius: Option<Length>,
    pub start_angle: Option<f64>,
    pub end_angle: Option<f64>,
    pub clock_wise: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub split_num: Option<usize>,
    pub arc_line_width: Option<f64>,
    pub data: Option<Vec<DatumOptions>>,
    pub data_item_style: PrimitiveStyle,
    pub axis_tick: AxisTickOptions,
    pub axis_label: AxisLabelOptions,
    pub pointer: PointerOptions,
    pub details: DetailsOptions,
    pub background_arc: BackgroundArcOptions,
    pub z_level: Option<u32>,
    pub animation_curve: Option<Easing>,
    pub animation_frames: Option<u32>,
}

impl GaugeSeriesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_center(mut self, x: impl Into<Length>, y: impl Into<Length>) -> Self {
        self.center = Some([x.into(), y.into()]);
        self
    }

    pub fn with_radius(mut self, radius: impl Into<Length>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    /// Angular span in radians.
    pub fn with_angles(mut self, start: f64, end: f64) -> Self {
        self.start_angle = Some(start);
        self.end_angle = Some(end);
        self
    }

    pub fn with_clock_wise(mut self, clock_wise: bool) -> Self {
        self.clock_wise = Some(clock_wise);
        self
    }

    /// Value domain mapped onto the angular span.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_split_num(mut self, split_num: usize) -> Self {
        self.split_num = Some(split_num);
        self
    }

    pub fn with_arc_line_width(mut self, width: f64) -> Self {
        self.arc_line_width = Some(width);
        self
    }

    /// Append one datum.
    pub fn with_datum(mut self, datum: DatumOptions) -> Self {
        self.data.get_or_insert_with(Vec::new).push(datum);
        self
    }

    /// Replace all data.
    pub fn with_data(mut self, data: Vec<DatumOptions>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_data_item_style(mut self, style: PrimitiveStyle) -> Self {
        self.data_item_style = style;
        self
    }

    pub fn with_z_level(mut self, z_level: u32) -> Self {
        self.z_level = Some(z_level);
        self
    }

    pub fn with_animation(mut self, curve: Easing, frames: u32) -> Self {
        self.animation_curve = Some(curve);
        self.animation_frames = Some(frames);
        self
    }

    pub fn axis_tick(mut self, f: impl FnOnce(AxisTickOptions) -> AxisTickOptions) -> Self {
        self.axis_tick = f(self.axis_tick);
        self
    }

    pub fn axis_label(mut self, f: impl FnOnce(AxisLabelOptions) -> AxisLabelOptions) -> Self {
        self.axis_label = f(self.axis_label);
        self
    }

    pub fn pointer(mut self, f: impl FnOnce(PointerOptions) -> PointerOptions) -> Self {
        self.pointer = f(self.pointer);
        self
    }

    pub fn details(mut self, f: impl FnOnce(DetailsOptions) -> DetailsOptions) -> Self {
        self.details = f(self.details);
        self
    }

    pub fn background_arc(
        mut self,
        f: impl FnOnce(BackgroundArcOptions) -> BackgroundArcOptions,
    ) -> Self {
        self.background_arc = f(self.background_arc);
        self
    }

    fn merge_into(&self, base: GaugeConfig, palette: &[Color]) -> GaugeConfig {
        let data = match &self.data {
            Some(data) => data
                .iter()
                .enumerate()
                .map(|(i, datum)| datum.resolve(i, palette))
                .collect(),
            None => base.data,
        };

        let animation = Animation {
            curve: self.animation_curve.unwrap_or(base.animation.curve),
            frames: self.animation_frames.unwrap_or(base.animation.frames),
        };

        GaugeConfig {
            name: self.name.clone().unwrap_or(base.name),
            center: self.center.unwrap_or(base.center),
            radius: self.radius.unwrap_or(base.radius),
            start_angle: self.start_angle.unwrap_or(base.start_angle),
            end_angle: self.end_angle.unwrap_or(base.end_angle),
            clock_wise: self.clock_wise.unwrap_or(base.clock_wise),
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            split_num: self.split_num.unwrap_or(base.split_num),
            arc_line_width: self.arc_line_width.unwrap_or(base.arc_line_width),
            data,
            data_item_style: base.data_item_style.merged(&self.data_item_style),
            axis_tick: self.axis_tick.merge_into(base.axis_tick),
            axis_label: self.axis_label.merge_into(base.axis_label),
            pointer: self.pointer.merge_into(base.pointer),
            details: self.details.merge_into(base.details),
            background_arc: self.background_arc.merge_into(base.background_arc),
            z_level: self.z_level.unwrap_or(base.z_level),
            animation,
        }
    }
}

/// Partial options for one datum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatumOptions {
    pub name: String,
    pub value: f64,
    pub color: Option<Color>,
    pub gradient: Vec<Color>,
    pub radius: Option<Length>,
    pub line_width: Option<f64>,
    pub local_gradient: bool,
}

impl DatumOptions {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_gradient(mut self, colors: Vec<Color>) -> Self {
        self.gradient = colors;
        self
    }

    pub fn with_radius(mut self, radius: impl Into<Length>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_local_gradient(mut self, local: bool) -> Self {
        self.local_gradient = local;
        self
    }

    fn resolve(&self, index: usize, palette: &[Color]) -> GaugeDatum {
        let color = self.color.unwrap_or_else(|| {
            if palette.is_empty() {
                Color::BLACK
            } else {
                palette[index % palette.len()]
            }
        });

        GaugeDatum {
            name: self.name.clone(),
            value: self.value,
            color,
            gradient: self.gradient.clone(),
            radius: self.radius,
            line_width: self.line_width,
            local_gradient: self.local_gradient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTickOptions {
    pub show: Option<bool>,
    pub tick_length: Option<f64>,
    pub style: PrimitiveStyle,
}

impl AxisTickOptions {
    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn tick_length(mut self, length: f64) -> Self {
        self.tick_length = Some(length);
        self
    }

    pub fn style(mut self, style: PrimitiveStyle) -> Self {
        self.style = style;
        self
    }

    fn merge_into(&self, base: AxisTick) -> AxisTick {
        AxisTick {
            show: self.show.unwrap_or(base.show),
            tick_length: self.tick_length.unwrap_or(base.tick_length),
            style: base.style.merged(&self.style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLabelOptions {
    pub show: Option<bool>,
    pub data: Option<Vec<Option<LabelValue>>>,
    pub formatter: Option<LabelFormatter>,
    pub label_gap: Option<f64>,
    pub style: PrimitiveStyle,
}

impl AxisLabelOptions {
    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    /// Sparse per-index label overrides.
    pub fn data(mut self, data: Vec<Option<LabelValue>>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn label_gap(mut self, gap: f64) -> Self {
        self.label_gap = Some(gap);
        self
    }

    pub fn style(mut self, style: PrimitiveStyle) -> Self {
        self.style = style;
        self
    }

    fn merge_into(&self, base: AxisLabel) -> AxisLabel {
        AxisLabel {
            show: self.show.unwrap_or(base.show),
            data: self.data.clone().unwrap_or(base.data),
            formatter: self.formatter.clone().or(base.formatter),
            label_gap: self.label_gap.unwrap_or(base.label_gap),
            style: base.style.merged(&self.style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointerOptions {
    pub show: Option<bool>,
    pub value_index: Option<usize>,
    pub style: PrimitiveStyle,
}

impl PointerOptions {
    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn value_index(mut self, index: usize) -> Self {
        self.value_index = Some(index);
        self
    }

    pub fn style(mut self, style: PrimitiveStyle) -> Self {
        self.style = style;
        self
    }

    fn merge_into(&self, base: Pointer) -> Pointer {
        Pointer {
            show: self.show.unwrap_or(base.show),
            value_index: self.value_index.unwrap_or(base.value_index),
            style: base.style.merged(&self.style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailsOptions {
    pub show: Option<bool>,
    pub formatter: Option<DetailFormatter>,
    pub offset: Option<DVec2>,
    pub position: Option<DetailPosition>,
    pub style: PrimitiveStyle,
}

impl DetailsOptions {
    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn formatter(mut self, formatter: DetailFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn offset(mut self, offset: DVec2) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn position(mut self, position: DetailPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn style(mut self, style: PrimitiveStyle) -> Self {
        self.style = style;
        self
    }

    fn merge_into(&self, base: Details) -> Details {
        Details {
            show: self.show.unwrap_or(base.show),
            formatter: self.formatter.clone().or(base.formatter),
            offset: self.offset.unwrap_or(base.offset),
            position: self.position.unwrap_or(base.position),
            style: base.style.merged(&self.style),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackgroundArcOptions {
    pub show: Option<bool>,
    pub style: PrimitiveStyle,
}

impl BackgroundArcOptions {
    pub fn show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    pub fn style(mut self, style: PrimitiveStyle) -> Self {
        self.style = style;
        self
    }

    fn merge_into(&self, base: BackgroundArc) -> BackgroundArc {
        BackgroundArc {
            show: self.show.unwrap_or(base.show),
            style: base.style.merged(&self.style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaugeline_core::TextAlign;

    #[test]
    fn test_empty_options_resolve_to_nothing() {
        assert!(GaugeOptions::new().resolve().unwrap().is_empty());
    }

    #[test]
    fn test_series_merges_over_defaults() {
        let options = GaugeOptions::new().with_series(
            GaugeSeriesOptions::new()
                .with_radius("80%".parse::<Length>().unwrap())
                .with_split_num(11)
                .axis_tick(|tick| tick.tick_length(10.0)),
        );

        let config = &options.resolve().unwrap()[0];
        assert_eq!(config.radius, Length::Percent(80.0));
        assert_eq!(config.split_num, 11);
        assert_eq!(config.axis_tick.tick_length, 10.0);
        // Untouched nested fields keep their defaults.
        assert!(config.axis_tick.show);
        assert_eq!(config.axis_tick.style.line_width, Some(1.0));
        assert_eq!(config.arc_line_width, 15.0);
    }

    #[test]
    fn test_style_merge_keeps_default_fields() {
        let options = GaugeOptions::new().with_series(GaugeSeriesOptions::new().details(|d| {
            d.show(true)
                .style(PrimitiveStyle::new().with_text_align(TextAlign::Left))
        }));

        let details = &options.resolve().unwrap()[0].details;
        assert!(details.show);
        assert_eq!(details.style.text_align, Some(TextAlign::Left));
        assert_eq!(details.style.font_size, Some(20.0));
    }

    #[test]
    fn test_hidden_series_dropped() {
        let options = GaugeOptions::new()
            .with_series(GaugeSeriesOptions::new().with_name("a").with_show(false))
            .with_series(GaugeSeriesOptions::new().with_name("b"));

        let configs = options.resolve().unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].name, "b");
    }

    #[test]
    fn test_palette_cycles_over_data() {
        let palette = vec![Color::RED, Color::GREEN];
        let options = GaugeOptions::new().with_palette(palette).with_series(
            GaugeSeriesOptions::new().with_data(vec![
                DatumOptions::new("a", 1.0),
                DatumOptions::new("b", 2.0).with_color(Color::BLUE),
                DatumOptions::new("c", 3.0),
            ]),
        );

        let data = &options.resolve().unwrap()[0].data;
        assert_eq!(data[0].color, Color::RED);
        assert_eq!(data[1].color, Color::BLUE);
        assert_eq!(data[2].color, Color::RED);
    }

    #[test]
    fn test_rejects_split_num_below_two() {
        let options = GaugeOptions::new()
            .with_series(GaugeSeriesOptions::new())
            .with_series(GaugeSeriesOptions::new().with_split_num(1));

        assert_eq!(
            options.resolve(),
            Err(ConfigError::SplitNumTooSmall {
                series: 1,
                split_num: 1
            })
        );
    }

    #[test]
    fn test_rejects_empty_range() {
        let options =
            GaugeOptions::new().with_series(GaugeSeriesOptions::new().with_range(5.0, 5.0));

        assert!(matches!(
            options.resolve(),
            Err(ConfigError::DegenerateRange { series: 0, .. })
        ));
    }
}
