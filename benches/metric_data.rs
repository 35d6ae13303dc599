//! MetricData benchmarks
//!
//! Counting and viewing must stay copy-free; deep clone is measured to
//! show the cost pipeline stages avoid by moving the container instead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use opentelemetry_proto::tonic::metrics::v1::{
    metric::Data, number_data_point, Gauge, Metric, NumberDataPoint, ResourceMetrics, ScopeMetrics,
};
use otlp_pdata::MetricData;
use std::time::Duration;

// Helper to generate a payload with `resources` x 4 libraries x 25 metrics
fn generate_metric_data(resources: usize) -> MetricData {
    let wire = (0..resources)
        .map(|r| ResourceMetrics {
            scope_metrics: (0..4)
                .map(|l| ScopeMetrics {
                    metrics: (0..25)
                        .map(|m| Metric {
                            name: format!("service_{r}.lib_{l}.metric_{m}"),
                            data: Some(Data::Gauge(Gauge {
                                data_points: vec![NumberDataPoint {
                                    value: Some(number_data_point::Value::AsDouble(m as f64)),
                                    ..Default::default()
                                }],
                            })),
                            ..Default::default()
                        })
                        .collect(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        })
        .collect();
    MetricData::from_wire(wire)
}

/// Benchmark live metric counting
fn bench_metric_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_count");

    for resources in [1, 10, 100].iter() {
        let md = generate_metric_data(*resources);
        group.throughput(Throughput::Elements(md.metric_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}resources", resources)),
            &md,
            |b, md| {
                b.iter(|| black_box(md.metric_count()));
            },
        );
    }

    group.finish();
}

/// Benchmark deep clone against a plain handoff
fn bench_clone_vs_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_vs_move");

    for resources in [1, 10, 100].iter() {
        let md = generate_metric_data(*resources);

        group.bench_with_input(BenchmarkId::new("deep_clone", resources), &md, |b, md| {
            b.iter(|| black_box(md.deep_clone()));
        });

        group.bench_function(BenchmarkId::new("wire_round_trip", resources), |b| {
            b.iter_batched(
                || generate_metric_data(*resources),
                |md| black_box(MetricData::from_wire(md.into_wire())),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group! {
    name = metric_data;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_metric_count,
              bench_clone_vs_move
}

criterion_main!(metric_data);
