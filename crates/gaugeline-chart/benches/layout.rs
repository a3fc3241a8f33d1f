//! Benchmarks for the gauge layout pipeline and primitive synthesis

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gaugeline_chart::*;
use gaugeline_core::Area;

fn options(gauges: usize, data: usize) -> GaugeOptions {
    (0..gauges).fold(GaugeOptions::new(), |options, g| {
        let series = (0..data).fold(
            GaugeSeriesOptions::new()
                .with_split_num(11)
                .axis_label(|l| l.formatter(LabelFormatter::template("{value}%"))),
            |series, d| series.with_datum(DatumOptions::new(format!("d{}", d), (g * 7 + d * 13) as f64 % 100.0)),
        );
        options.with_series(series)
    })
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_gauges");
    let area = Area::new(800.0, 600.0);

    for count in [1, 10, 100] {
        group.throughput(Throughput::Elements(count as u64));

        let configs = options(count, 4).resolve().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &configs, |b, configs| {
            b.iter(|| black_box(layout_gauges(configs.clone(), area)));
        });
    }

    group.finish();
}

fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_primitives");
    let layouts = layout_gauges(options(10, 4).resolve().unwrap(), Area::new(800.0, 600.0));

    for layer in Layer::ALL {
        group.bench_function(layer.key(), |b| {
            b.iter(|| {
                let source = LayerSource::new(layer, &layouts);
                black_box(source.graph_config())
            });
        });
    }

    group.finish();
}

fn bench_chart_run(c: &mut Criterion) {
    let options = options(10, 4);

    c.bench_function("chart_set_option", |b| {
        let mut chart = GaugeChart::new(Area::new(800.0, 600.0));
        b.iter(|| {
            chart.set_option(&options).unwrap();
            black_box(())
        });
    });
}

criterion_group!(benches, bench_layout, bench_synthesis, bench_chart_run);
criterion_main!(benches);
