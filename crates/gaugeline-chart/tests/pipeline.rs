//! End-to-end tests of option resolution and the layout pipeline.

use gaugeline_chart::layout::{datum_angles, label_values, layout_ticks, resolve_center, resolve_radius};
use gaugeline_chart::*;
use gaugeline_core::Area;
use gaugeline_core::math::{DVec2, FRAC_PI_2, PI};

const EPS: f64 = 1e-9;

fn run(options: &GaugeOptions, area: Area) -> Vec<GaugeLayout> {
    layout_gauges(options.resolve().unwrap(), area)
}

// ====================
// Angles
// ====================

#[test]
fn test_half_value_reaches_midpoint_of_decreasing_span() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_angles(PI, 0.0)
            .with_range(0.0, 100.0)
            .with_datum(DatumOptions::new("v", 50.0)),
    );

    let layouts = run(&options, Area::new(300.0, 300.0));
    let datum = &layouts[0].data[0];
    assert!((datum.start_angle - PI).abs() < EPS);
    assert!((datum.end_angle - FRAC_PI_2).abs() < EPS);
}

#[test]
fn test_value_range_maps_to_span() {
    let config = GaugeConfig {
        start_angle: 0.0,
        end_angle: 2.0,
        min: -50.0,
        max: 50.0,
        ..Default::default()
    };

    assert!((datum_angles(&config, -50.0).1 - 0.0).abs() < EPS);
    assert!((datum_angles(&config, 0.0).1 - 1.0).abs() < EPS);
    assert!((datum_angles(&config, 50.0).1 - 2.0).abs() < EPS);
}

// ====================
// Ticks and labels
// ====================

#[test]
fn test_tick_spacing_is_uniform_between_endpoints() {
    for split_num in [2, 3, 7, 11] {
        let config = GaugeConfig {
            split_num,
            ..Default::default()
        };
        let frame = GaugeFrame {
            center: DVec2::new(100.0, 100.0),
            radius: 80.0,
        };
        let ticks = layout_ticks(&config, &frame);
        let gap = (config.end_angle - config.start_angle) / (split_num - 1) as f64;

        assert_eq!(ticks.angles.len(), split_num);
        assert_eq!(ticks.segments.len(), split_num);
        for i in 1..split_num.saturating_sub(2) {
            let step = ticks.angles[i + 1] - ticks.angles[i];
            assert!((step - gap).abs() < EPS, "split {} step {}", split_num, i);
        }
    }
}

#[test]
fn test_label_values_and_percent_template() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_split_num(5)
            .with_range(0.0, 100.0)
            .axis_label(|l| l.formatter(LabelFormatter::template("{value}%"))),
    );

    let configs = options.resolve().unwrap();
    assert_eq!(
        label_values(&configs[0]),
        vec![0.0, 25.0, 50.0, 75.0, 100.0]
            .into_iter()
            .map(LabelValue::Number)
            .collect::<Vec<_>>()
    );

    let layouts = layout_gauges(configs, Area::new(200.0, 200.0));
    assert_eq!(layouts[0].label_contents, vec!["0%", "25%", "50%", "75%", "100%"]);
}

#[test]
fn test_label_callback_sees_index() {
    let options = GaugeOptions::new().with_series(GaugeSeriesOptions::new().axis_label(|l| {
        l.data(vec![None, None, Some("mid".into())])
            .formatter(LabelFormatter::callback(|ctx| format!("{}:{}", ctx.index, ctx.value)))
    }));

    let layouts = run(&options, Area::new(200.0, 200.0));
    assert_eq!(
        layouts[0].label_contents,
        vec!["0:0", "1:25", "2:mid", "3:75", "4:100"]
    );
}

#[test]
fn test_labels_ignore_entries_past_split_num() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_split_num(2)
            .axis_label(|l| l.data(vec![None, None, Some(7.0.into())])),
    );

    let layouts = run(&options, Area::new(200.0, 200.0));
    assert_eq!(layouts[0].label_contents, vec!["0", "100"]);
    assert_eq!(layouts[0].labels.len(), 2);
}

// ====================
// Details
// ====================

#[test]
fn test_detail_template_with_name_and_value() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_datum(DatumOptions::new("load", 42.0))
            .details(|d| d.formatter(DetailFormatter::template("{name}: {value}"))),
    );

    let layouts = run(&options, Area::new(200.0, 200.0));
    assert_eq!(layouts[0].details[0].content, "load: 42");
}

#[test]
fn test_detail_at_arc_start_with_offset() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_center(100.0, 100.0)
            .with_angles(0.0, PI)
            .with_datum(DatumOptions::new("a", 10.0).with_radius(50.0))
            .details(|d| {
                d.position(DetailPosition::Start)
                    .offset(DVec2::new(-4.0, 2.0))
            }),
    );

    let layouts = run(&options, Area::new(200.0, 200.0));
    let position = layouts[0].details[0].position;
    assert!((position.x - 146.0).abs() < EPS);
    assert!((position.y - 102.0).abs() < EPS);
}

// ====================
// Resolution
// ====================

#[test]
fn test_percent_and_pixel_lengths_agree() {
    let area = Area::new(640.0, 480.0);
    let percent = GaugeConfig {
        center: ["25%".parse().unwrap(), "50%".parse().unwrap()],
        radius: "50%".parse().unwrap(),
        ..Default::default()
    };
    let pixels = GaugeConfig {
        center: [Length::Px(160.0), Length::Px(240.0)],
        radius: Length::Px(120.0),
        ..Default::default()
    };

    assert_eq!(resolve_center(&percent, area), resolve_center(&pixels, area));
    assert_eq!(resolve_radius(&percent, area), resolve_radius(&pixels, area));
    assert_eq!(
        GaugeFrame::resolve(&percent, area),
        GaugeFrame::resolve(&pixels, area)
    );
}

#[test]
fn test_datum_percent_radius_uses_full_shorter_side() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_radius(Length::Percent(100.0))
            .with_datum(DatumOptions::new("outer", 1.0))
            .with_datum(DatumOptions::new("inner", 1.0).with_radius(Length::Percent(25.0))),
    );

    let layouts = run(&options, Area::new(400.0, 200.0));
    assert_eq!(layouts[0].radius(), 100.0);
    assert_eq!(layouts[0].data[0].radius, 100.0);
    assert_eq!(layouts[0].data[1].radius, 50.0);
}

#[test]
fn test_pipeline_is_idempotent() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_datum(DatumOptions::new("a", 33.0).with_gradient(vec![
                gaugeline_core::Color::RED,
                gaugeline_core::Color::BLUE,
            ]))
            .with_datum(DatumOptions::new("b", 66.0).with_line_width(4.0)),
    );
    let area = Area::new(500.0, 300.0);

    assert_eq!(run(&options, area), run(&options, area));
}

#[test]
fn test_every_gradient_is_non_empty() {
    let options = GaugeOptions::new().with_series(
        GaugeSeriesOptions::new()
            .with_datum(DatumOptions::new("a", 10.0))
            .with_datum(DatumOptions::new("b", 20.0).with_gradient(Vec::new())),
    );

    let layouts = run(&options, Area::new(100.0, 100.0));
    assert!(layouts[0].data.iter().all(|d| !d.gradient.is_empty()));
}
