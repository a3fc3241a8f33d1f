//! The gauge layout pipeline.
//!
//! Turns a resolved [`GaugeConfig`] plus the render [`Area`] into pixel-space
//! geometry. Each stage is a plain function whose parameters name exactly
//! the earlier outputs it needs, so stages cannot run out of order:
//!
//! | stage | function | needs |
//! |---|---|---|
//! | 1 | [`resolve_center`] | config, area |
//! | 2 | [`resolve_radius`] | config, area |
//! | 3 | [`resolve_datum_size`] | datum, [`GaugeFrame`], area |
//! | 4 | [`datum_angles`] | config, value |
//! | 5 | [`normalize_gradient`] | datum |
//! | 6 | [`layout_ticks`] | config, [`GaugeFrame`] |
//! | 7 | [`place_labels`] | config, [`GaugeFrame`], [`TickLayout`] |
//! | 8 | [`label_contents`] | config |
//! | 9 | [`detail_positions`] | config, [`GaugeFrame`], [`DatumLayout`]s |
//! | 10 | [`detail_contents`] | config, [`DatumLayout`]s |
//!
//! [`GaugeLayout::compute`] runs all of them; primitive synthesis only
//! accepts the finished [`GaugeLayout`].

use crate::config::{DetailPosition, GaugeConfig, GaugeDatum};
use crate::formatter::{LabelValue, format_number};
use gaugeline_core::math::{DVec2, arc_length, point_on_circle};
use gaugeline_core::profiling::{profile_function, profile_scope};
use gaugeline_core::{Area, Color, TextAlign, TextBaseline};

/// Resolved instrument center and outer radius (stages 1 and 2).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeFrame {
    pub center: DVec2,
    pub radius: f64,
}

impl GaugeFrame {
    pub fn resolve(config: &GaugeConfig, area: Area) -> Self {
        Self {
            center: resolve_center(config, area),
            radius: resolve_radius(config, area),
        }
    }
}

/// Stage 1: each center axis resolves against the matching area axis.
pub fn resolve_center(config: &GaugeConfig, area: Area) -> DVec2 {
    DVec2::new(
        config.center[0].resolve(area.axis(0)),
        config.center[1].resolve(area.axis(1)),
    )
}

/// Stage 2: a percentage radius is relative to half the shorter side.
pub fn resolve_radius(config: &GaugeConfig, area: Area) -> f64 {
    config.radius.resolve(area.min_side() / 2.0)
}

/// Ring radius and stroke width of one datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatumSize {
    pub radius: f64,
    pub line_width: f64,
}

/// Stage 3: a datum inherits the instrument radius and arc width unless it
/// overrides them with a non-zero value.
///
/// A percentage datum radius resolves against the full shorter side, unlike
/// the instrument radius which uses half of it.
pub fn resolve_datum_size(
    datum: &GaugeDatum,
    arc_line_width: f64,
    frame: &GaugeFrame,
    area: Area,
) -> DatumSize {
    DatumSize {
        radius: datum
            .radius
            .map(|radius| radius.resolve(area.min_side()))
            .filter(|radius| *radius != 0.0)
            .unwrap_or(frame.radius),
        line_width: datum
            .line_width
            .filter(|width| *width != 0.0)
            .unwrap_or(arc_line_width),
    }
}

/// Stage 4: map `value` onto the span. The sweep starts at `start_angle`
/// and covers `|(value - min) / (max - min) * span|` toward `end_angle`.
pub fn datum_angles(config: &GaugeConfig, value: f64) -> (f64, f64) {
    let span = config.end_angle - config.start_angle;
    let sweep = ((value - config.min) / (config.max - config.min) * span).abs();
    let direction = if span < 0.0 { -1.0 } else { 1.0 };

    (config.start_angle, config.start_angle + direction * sweep)
}

/// Stage 5: a datum without gradient stops uses its solid color.
pub fn normalize_gradient(datum: &GaugeDatum) -> Vec<Color> {
    if datum.gradient.is_empty() {
        vec![datum.color]
    } else {
        datum.gradient.clone()
    }
}

/// Everything derived for one datum.
#[derive(Debug, Clone, PartialEq)]
pub struct DatumLayout {
    pub name: String,
    pub value: f64,
    pub color: Color,
    /// Never empty.
    pub gradient: Vec<Color>,
    pub radius: f64,
    pub line_width: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub local_gradient: bool,
}

/// Stages 3 to 5 over every datum.
pub fn layout_data(config: &GaugeConfig, frame: &GaugeFrame, area: Area) -> Vec<DatumLayout> {
    config
        .data
        .iter()
        .map(|datum| {
            let size = resolve_datum_size(datum, config.arc_line_width, frame, area);
            let (start_angle, end_angle) = datum_angles(config, datum.value);

            DatumLayout {
                name: datum.name.clone(),
                value: datum.value,
                color: datum.color,
                gradient: normalize_gradient(datum),
                radius: size.radius,
                line_width: size.line_width,
                start_angle,
                end_angle,
                local_gradient: datum.local_gradient,
            }
        })
        .collect()
}

/// Tick angles and segments (stage 6).
#[derive(Debug, Clone, PartialEq)]
pub struct TickLayout {
    pub angles: Vec<f64>,
    /// `radius - arc_line_width / 2`
    pub outer_radius: f64,
    /// `outer_radius - tick_length`
    pub inner_radius: f64,
    /// `[outer point, inner point]` per tick.
    pub segments: Vec<[DVec2; 2]>,
}

/// Stage 6: `split_num` evenly spaced ticks; the first and last are pulled
/// inward by half the tick stroke so they do not overhang the arc ends.
pub fn layout_ticks(config: &GaugeConfig, frame: &GaugeFrame) -> TickLayout {
    let span = config.end_angle - config.start_angle;
    let outer_radius = frame.radius - config.arc_line_width / 2.0;
    let inner_radius = outer_radius - config.axis_tick.tick_length;
    let gap = span / (config.split_num - 1) as f64;

    let tick_width = config.axis_tick.style.line_width.unwrap_or(1.0);
    let span_length = arc_length(frame.radius, span);
    let inset = if span_length == 0.0 {
        0.0
    } else {
        // Signed like `span`, so it always points into the arc.
        (tick_width / 2.0).ceil() / span_length.abs() * span
    };

    let last = config.split_num - 1;
    let angles: Vec<f64> = (0..config.split_num)
        .map(|i| {
            let angle = config.start_angle + gap * i as f64;
            if i == 0 {
                angle + inset
            } else if i == last {
                angle - inset
            } else {
                angle
            }
        })
        .collect();

    let segments = angles
        .iter()
        .map(|&angle| {
            [
                point_on_circle(frame.center, outer_radius, angle),
                point_on_circle(frame.center, inner_radius, angle),
            ]
        })
        .collect();

    TickLayout {
        angles,
        outer_radius,
        inner_radius,
        segments,
    }
}

/// Anchor and alignment of one axis label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub position: DVec2,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Stage 7: labels sit `label_gap` inside the tick ends. Text anchored right
/// of center is right-aligned and text below center is bottom-aligned, so
/// it reads toward the middle of the dial.
pub fn place_labels(
    config: &GaugeConfig,
    frame: &GaugeFrame,
    ticks: &TickLayout,
) -> Vec<LabelPlacement> {
    let radius = ticks.inner_radius - config.axis_label.label_gap;

    ticks
        .angles
        .iter()
        .map(|&angle| {
            let position = point_on_circle(frame.center, radius, angle);
            LabelPlacement {
                position,
                align: if position.x > frame.center.x {
                    TextAlign::Right
                } else {
                    TextAlign::Left
                },
                baseline: if position.y > frame.center.y {
                    TextBaseline::Bottom
                } else {
                    TextBaseline::Top
                },
            }
        })
        .collect()
}

/// Evenly spaced values from `min` to `max`, overlaid by the user's sparse
/// label data.
pub fn label_values(config: &GaugeConfig) -> Vec<LabelValue> {
    let gap = (config.max - config.min) / (config.split_num - 1) as f64;
    let overrides = &config.axis_label.data;

    (0..config.split_num)
        .map(|i| match overrides.get(i) {
            Some(Some(value)) => value.clone(),
            _ => LabelValue::Number(config.min + gap * i as f64),
        })
        .collect()
}

/// Stage 8: label text after formatting.
pub fn label_contents(config: &GaugeConfig) -> Vec<String> {
    let formatter = config.axis_label.formatter.as_ref();

    label_values(config)
        .iter()
        .enumerate()
        .map(|(i, value)| match formatter {
            Some(formatter) => formatter.format(value, i),
            None => value.to_string(),
        })
        .collect()
}

/// Stage 9: readout anchors, shifted by the configured offset.
pub fn detail_positions(
    config: &GaugeConfig,
    frame: &GaugeFrame,
    data: &[DatumLayout],
) -> Vec<DVec2> {
    let details = &config.details;

    data.iter()
        .map(|datum| {
            let anchor = match details.position {
                DetailPosition::Center => frame.center,
                DetailPosition::Start => {
                    point_on_circle(frame.center, datum.radius, datum.start_angle)
                }
                DetailPosition::End => point_on_circle(frame.center, datum.radius, datum.end_angle),
            };
            anchor + details.offset
        })
        .collect()
}

/// Stage 10: readout text per datum.
pub fn detail_contents(config: &GaugeConfig, data: &[DatumLayout]) -> Vec<String> {
    data.iter()
        .map(|datum| match &config.details.formatter {
            Some(formatter) => formatter.format(datum),
            None => format_number(datum.value),
        })
        .collect()
}

/// A readout anchor and its text.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailLayout {
    pub position: DVec2,
    pub content: String,
}

/// A gauge with every pipeline stage applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeLayout {
    pub config: GaugeConfig,
    pub frame: GaugeFrame,
    pub data: Vec<DatumLayout>,
    pub ticks: TickLayout,
    pub labels: Vec<LabelPlacement>,
    /// Aligned with `labels`.
    pub label_contents: Vec<String>,
    /// Aligned with `data`.
    pub details: Vec<DetailLayout>,
}

impl GaugeLayout {
    pub fn compute(config: GaugeConfig, area: Area) -> Self {
        profile_function!();

        let frame = GaugeFrame::resolve(&config, area);
        let data = layout_data(&config, &frame, area);
        let ticks = layout_ticks(&config, &frame);
        let labels = place_labels(&config, &frame, &ticks);
        let label_contents = label_contents(&config);

        let details = detail_positions(&config, &frame, &data)
            .into_iter()
            .zip(detail_contents(&config, &data))
            .map(|(position, content)| DetailLayout { position, content })
            .collect();

        Self {
            config,
            frame,
            data,
            ticks,
            labels,
            label_contents,
            details,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.frame.center
    }

    pub fn radius(&self) -> f64 {
        self.frame.radius
    }
}

/// Run the pipeline for every gauge.
pub fn layout_gauges(configs: Vec<GaugeConfig>, area: Area) -> Vec<GaugeLayout> {
    profile_scope!("layout_gauges");

    let layouts: Vec<GaugeLayout> = configs
        .into_iter()
        .map(|config| GaugeLayout::compute(config, area))
        .collect();

    tracing::trace!(
        gauges = layouts.len(),
        width = area.width,
        height = area.height,
        "Gauge layout complete"
    );
    layouts
}
