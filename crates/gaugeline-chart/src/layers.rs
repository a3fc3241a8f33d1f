//! Primitive synthesis for the six gauge layers.
//!
//! Each function maps a finished [`GaugeLayout`] to the primitives of one
//! layer. The background arc, value arc and pointer also have a start
//! variant used as the entrance-animation origin.

use crate::layout::GaugeLayout;
use gaugeline_core::math::{DVec2, FRAC_PI_2, radian_to_degree};
use gaugeline_core::profiling::profile_scope;
use gaugeline_render::{
    ArcShape, GradientArcShape, PolylineShape, Primitive, PrimitiveShape, PrimitiveStyle,
    TextShape,
};

/// The visual layers of a gauge, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    AxisTick,
    AxisLabel,
    BackgroundArc,
    Arc,
    Pointer,
    Details,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::AxisTick,
        Layer::AxisLabel,
        Layer::BackgroundArc,
        Layer::Arc,
        Layer::Pointer,
        Layer::Details,
    ];

    /// Updater key for this layer.
    pub fn key(&self) -> &'static str {
        match self {
            Layer::AxisTick => "gaugeAxisTick",
            Layer::AxisLabel => "gaugeAxisLabel",
            Layer::BackgroundArc => "gaugeBackgroundArc",
            Layer::Arc => "gaugeArc",
            Layer::Pointer => "gaugePointer",
            Layer::Details => "gaugeDetails",
        }
    }

    pub fn primitives(&self, gauge: &GaugeLayout) -> Vec<Primitive> {
        profile_scope!("layer_primitives", self.key());

        match self {
            Layer::AxisTick => axis_tick_primitives(gauge),
            Layer::AxisLabel => axis_label_primitives(gauge),
            Layer::BackgroundArc => background_arc_primitives(gauge),
            Layer::Arc => arc_primitives(gauge),
            Layer::Pointer => pointer_primitives(gauge),
            Layer::Details => details_primitives(gauge),
        }
    }

    /// Entrance-animation origin, for layers that have one.
    pub fn start_primitives(&self, gauge: &GaugeLayout) -> Option<Vec<Primitive>> {
        match self {
            Layer::BackgroundArc => Some(start_background_arc_primitives(gauge)),
            Layer::Arc => Some(start_arc_primitives(gauge)),
            Layer::Pointer => Some(start_pointer_primitives(gauge)),
            _ => None,
        }
    }

    pub fn has_start_state(&self) -> bool {
        matches!(self, Layer::BackgroundArc | Layer::Arc | Layer::Pointer)
    }
}

fn primitive(gauge: &GaugeLayout, shape: PrimitiveShape) -> Primitive {
    Primitive::new(shape)
        .with_animation(gauge.config.animation)
        .with_z_level(gauge.config.z_level)
}

pub fn axis_tick_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let tick = &gauge.config.axis_tick;

    gauge
        .ticks
        .segments
        .iter()
        .map(|segment| {
            primitive(
                gauge,
                PrimitiveShape::Polyline(PolylineShape::new(segment.to_vec(), false)),
            )
            .with_visible(tick.show)
            .with_style(tick.style.clone())
        })
        .collect()
}

pub fn axis_label_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let label = &gauge.config.axis_label;

    gauge
        .labels
        .iter()
        .zip(&gauge.label_contents)
        .map(|(placement, content)| {
            let style = PrimitiveStyle::new()
                .with_text_align(placement.align)
                .with_text_baseline(placement.baseline)
                .merged(&label.style);

            primitive(
                gauge,
                PrimitiveShape::Text(TextShape::new(content.clone(), placement.position)),
            )
            .with_visible(label.show)
            .with_style(style)
        })
        .collect()
}

fn background_arc(gauge: &GaugeLayout) -> Primitive {
    let config = &gauge.config;
    let shape = ArcShape::new(
        gauge.center(),
        gauge.radius(),
        config.start_angle,
        config.end_angle,
    )
    .with_clock_wise(config.clock_wise);

    let style = PrimitiveStyle::new()
        .with_line_width(config.arc_line_width)
        .merged(&config.background_arc.style);

    primitive(gauge, PrimitiveShape::Arc(shape))
        .with_visible(config.background_arc.show)
        .with_style(style)
}

pub fn background_arc_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    vec![background_arc(gauge)]
}

/// Background arc with zero sweep.
pub fn start_background_arc_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let mut arc = background_arc(gauge);
    if let PrimitiveShape::Arc(shape) = &arc.shape {
        arc.shape = PrimitiveShape::Arc(shape.collapsed());
    }
    vec![arc]
}

/// Value arcs, one per datum. These have no visibility switch.
pub fn arc_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let config = &gauge.config;

    gauge
        .data
        .iter()
        .map(|datum| {
            let gradient_end = if datum.local_gradient {
                datum.end_angle
            } else {
                config.end_angle
            };

            let shape = GradientArcShape::new(
                gauge.center(),
                datum.radius,
                datum.start_angle,
                datum.end_angle,
            )
            .with_gradient_range(None, Some(gradient_end));

            let style = PrimitiveStyle::new()
                .with_line_width(datum.line_width)
                .with_gradient(datum.gradient.clone())
                .merged(&config.data_item_style);

            primitive(gauge, PrimitiveShape::GradientArc(shape)).with_style(style)
        })
        .collect()
}

/// Value arcs with zero sweep.
pub fn start_arc_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    arc_primitives(gauge)
        .into_iter()
        .map(|mut arc| {
            if let PrimitiveShape::GradientArc(shape) = &arc.shape {
                arc.shape = PrimitiveShape::GradientArc(shape.collapsed());
            }
            arc
        })
        .collect()
}

/// Arrow outline around `center`, tip pointing up.
pub fn pointer_points(center: DVec2) -> Vec<DVec2> {
    vec![
        center + DVec2::new(0.0, -40.0),
        center + DVec2::new(5.0, 0.0),
        center + DVec2::new(0.0, 10.0),
        center + DVec2::new(-5.0, 0.0),
    ]
}

/// Pointer rotation in degrees for `value`.
///
/// The arrow is drawn pointing up, a quarter turn behind angle zero.
pub fn pointer_rotation(gauge: &GaugeLayout, value: f64) -> f64 {
    let config = &gauge.config;
    let angle = (value - config.min) / (config.max - config.min)
        * (config.end_angle - config.start_angle)
        + config.start_angle
        + FRAC_PI_2;

    radian_to_degree(angle)
}

pub fn pointer_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let pointer = &gauge.config.pointer;
    let value = gauge
        .config
        .data
        .get(pointer.value_index)
        .map(|datum| datum.value)
        .unwrap_or(0.0);

    let style = PrimitiveStyle::new()
        .with_rotate(pointer_rotation(gauge, value))
        .with_scale(DVec2::ONE)
        .merged(&pointer.style);

    let shape = PolylineShape::new(pointer_points(gauge.center()), true);

    vec![
        primitive(gauge, PrimitiveShape::Polyline(shape))
            .with_visible(pointer.show)
            .with_style(style)
            .with_rotation_center(gauge.center()),
    ]
}

/// Pointer resting at the start of the span, whatever the value.
pub fn start_pointer_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let rotate = radian_to_degree(gauge.config.start_angle + FRAC_PI_2);

    pointer_primitives(gauge)
        .into_iter()
        .map(|mut pointer| {
            pointer.style.rotate = Some(rotate);
            pointer
        })
        .collect()
}

pub fn details_primitives(gauge: &GaugeLayout) -> Vec<Primitive> {
    let details = &gauge.config.details;

    gauge
        .details
        .iter()
        .zip(&gauge.data)
        .map(|(detail, datum)| {
            let style = PrimitiveStyle::new()
                .with_fill(datum.color)
                .merged(&details.style);

            primitive(
                gauge,
                PrimitiveShape::Text(TextShape::new(detail.content.clone(), detail.position)),
            )
            .with_visible(details.show)
            .with_style(style)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GaugeConfig, GaugeDatum};
    use gaugeline_core::math::PI;
    use gaugeline_core::{Area, Color};

    fn gauge(value: f64) -> GaugeLayout {
        let config = GaugeConfig {
            start_angle: 0.0,
            end_angle: PI,
            data: vec![GaugeDatum::new("speed", value, Color::RED)],
            ..Default::default()
        };
        GaugeLayout::compute(config, Area::new(200.0, 200.0))
    }

    #[test]
    fn test_layer_keys_in_order() {
        let keys: Vec<&str> = Layer::ALL.iter().map(|l| l.key()).collect();
        assert_eq!(
            keys,
            vec![
                "gaugeAxisTick",
                "gaugeAxisLabel",
                "gaugeBackgroundArc",
                "gaugeArc",
                "gaugePointer",
                "gaugeDetails",
            ]
        );
    }

    #[test]
    fn test_start_state_only_for_animated_layers() {
        let layout = gauge(50.0);
        for layer in Layer::ALL {
            assert_eq!(
                layer.start_primitives(&layout).is_some(),
                layer.has_start_state()
            );
        }
    }

    #[test]
    fn test_primitives_carry_series_settings() {
        let layout = gauge(50.0);
        for layer in Layer::ALL {
            for p in layer.primitives(&layout) {
                assert_eq!(p.z_level, 10);
                assert_eq!(p.animation.frames, 50);
            }
        }
    }

    #[test]
    fn test_tick_count_matches_split_num() {
        let layout = gauge(50.0);
        let ticks = axis_tick_primitives(&layout);
        assert_eq!(ticks.len(), 5);
        assert!(ticks.iter().all(|t| t.visible));
    }

    #[test]
    fn test_label_style_merges_alignment() {
        let layout = gauge(50.0);
        let labels = axis_label_primitives(&layout);
        assert_eq!(labels[0].style.text_align, Some(layout.labels[0].align));
        assert_eq!(labels[0].style.font_size, Some(10.0));
    }

    #[test]
    fn test_start_arc_is_collapsed() {
        let layout = gauge(50.0);
        let start = start_arc_primitives(&layout);
        let PrimitiveShape::GradientArc(shape) = &start[0].shape else {
            panic!("expected gradient arc");
        };
        assert_eq!(shape.start_angle, shape.end_angle);
        // The gradient still stretches across the full span.
        assert_eq!(shape.gradient_end_angle, Some(PI));
    }

    #[test]
    fn test_local_gradient_uses_datum_span() {
        let mut layout = gauge(50.0);
        layout.data[0].local_gradient = true;
        let arcs = arc_primitives(&layout);
        let PrimitiveShape::GradientArc(shape) = &arcs[0].shape else {
            panic!("expected gradient arc");
        };
        assert_eq!(shape.gradient_end_angle, Some(layout.data[0].end_angle));
    }

    #[test]
    fn test_pointer_rotation() {
        let layout = gauge(50.0);
        let pointer = &pointer_primitives(&layout)[0];
        // Half of PI plus a quarter turn.
        assert!((pointer.style.rotate.unwrap() - 180.0).abs() < 1e-9);
        assert_eq!(pointer.rotation_center, Some(layout.center()));

        let start = &start_pointer_primitives(&layout)[0];
        assert!((start.style.rotate.unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_defaults_to_zero_without_data() {
        let mut layout = gauge(50.0);
        layout.config.data.clear();
        let pointer = &pointer_primitives(&layout)[0];
        assert!((pointer.style.rotate.unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_details_fill_with_datum_color() {
        let layout = gauge(42.0);
        let details = details_primitives(&layout);
        assert_eq!(details.len(), 1);
        assert!(!details[0].visible);
        assert_eq!(details[0].style.fill, Some(Color::RED));
    }
}
