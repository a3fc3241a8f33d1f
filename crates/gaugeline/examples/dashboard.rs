//! Lays out two gauges and paints them through a logging draw context.
//!
//! Every draw command is emitted as a `tracing` event, so the output shows
//! exactly what a canvas backend would receive.
//!
//! Run with: RUST_LOG=debug cargo run -p gaugeline --example dashboard

use gaugeline::core::{FontWeight, TextStyle};
use gaugeline::math::PI;
use gaugeline::prelude::*;

/// Draw context that logs every command.
struct TraceContext {
    commands: usize,
}

impl TraceContext {
    fn log(&mut self, command: &str, detail: String) {
        self.commands += 1;
        tracing::debug!(command, "{}", detail);
    }
}

impl DrawContext for TraceContext {
    fn begin_path(&mut self) {
        self.log("beginPath", String::new());
    }

    fn close_path(&mut self) {
        self.log("closePath", String::new());
    }

    fn move_to(&mut self, point: DVec2) {
        self.log("moveTo", format!("{:.1}, {:.1}", point.x, point.y));
    }

    fn line_to(&mut self, point: DVec2) {
        self.log("lineTo", format!("{:.1}, {:.1}", point.x, point.y));
    }

    fn arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    ) {
        self.log(
            "arc",
            format!(
                "c=({:.1}, {:.1}) r={:.1} {:.3}..{:.3} ccw={}",
                center.x, center.y, radius, start_angle, end_angle, counter_clockwise
            ),
        );
    }

    fn set_stroke(&mut self, paint: Paint) {
        self.log("strokeStyle", format!("{:?}", paint));
    }

    fn set_fill(&mut self, paint: Paint) {
        self.log("fillStyle", format!("{:?}", paint));
    }

    fn set_line_width(&mut self, width: f64) {
        self.log("lineWidth", width.to_string());
    }

    fn stroke(&mut self) {
        self.log("stroke", String::new());
    }

    fn fill(&mut self) {
        self.log("fill", String::new());
    }

    fn fill_text(&mut self, text: &str, position: DVec2, style: &TextStyle) {
        let weight = match style.font_weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        tracing::info!(
            x = position.x,
            y = position.y,
            size = style.font_size,
            weight,
            "text {:?}",
            text
        );
        self.commands += 1;
    }
}

fn main() -> Result<(), ConfigError> {
    gaugeline::logging::init();

    #[cfg(feature = "profiling-http")]
    gaugeline::profiling::init_profiling(gaugeline::profiling::ProfilingBackend::PuffinHttp);
    #[cfg(not(feature = "profiling-http"))]
    gaugeline::profiling::set_enabled(true);

    let options = GaugeOptions::new()
        .with_series(
            GaugeSeriesOptions::new()
                .with_name("speed")
                .with_center("30%".parse::<Length>()?, "50%".parse::<Length>()?)
                .with_range(0.0, 240.0)
                .with_split_num(7)
                .with_datum(
                    DatumOptions::new("speed", 132.0)
                        .with_gradient(vec![Color::from_hex(0x9fe6b8), Color::from_hex(0xfb7293)]),
                )
                .axis_label(|l| l.formatter(LabelFormatter::template("{value}")))
                .details(|d| {
                    d.show(true)
                        .offset(DVec2::new(0.0, 40.0))
                        .formatter(DetailFormatter::template("{value} km/h"))
                }),
        )
        .with_series(
            GaugeSeriesOptions::new()
                .with_name("fuel")
                .with_center("75%".parse::<Length>()?, "50%".parse::<Length>()?)
                .with_radius("40%".parse::<Length>()?)
                .with_angles(PI, 2.0 * PI)
                .with_split_num(3)
                .with_datum(DatumOptions::new("fuel", 35.0).with_local_gradient(true))
                .axis_label(|l| {
                    l.data(vec![Some("E".into()), Some("1/2".into()), Some("F".into())])
                })
                .pointer(|p| p.style(PrimitiveStyle::new().with_fill(Color::from_hex(0x37a2da)))),
        );

    let mut chart = GaugeChart::new(Area::new(800.0, 400.0));
    let layouts = chart.set_option(&options)?;

    for layout in layouts {
        tracing::info!(
            gauge = %layout.config.name,
            cx = layout.center().x,
            cy = layout.center().y,
            radius = layout.radius(),
            sweep_deg = (layout.data[0].end_angle - layout.data[0].start_angle).to_degrees(),
            "Gauge laid out"
        );
    }

    let primitives: Vec<Primitive> = chart.primitives().into_iter().cloned().collect();
    let mut ctx = TraceContext { commands: 0 };
    let drawn = Painter::draw_all(&mut ctx, &primitives);

    gaugeline::profiling::new_frame();

    tracing::info!(
        drawn,
        total = primitives.len(),
        commands = ctx.commands,
        "Dashboard painted"
    );

    Ok(())
}
