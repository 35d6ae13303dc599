//! Common test utilities and fixtures.

#![allow(dead_code)]

use opentelemetry_proto::tonic::{
    collector::metrics::v1::ExportMetricsServiceRequest,
    common::v1::{any_value::Value, AnyValue, InstrumentationScope, KeyValue},
    metrics::v1::{
        metric::Data, number_data_point, AggregationTemporality, Gauge, Metric, NumberDataPoint,
        ResourceMetrics, ScopeMetrics, Sum,
    },
    resource::v1::Resource,
};
use otlp_pdata::MetricData;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_test_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Tests in one binary share the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer().compact())
        .try_init();
}

/// Test fixture builder for creating resource-metrics records with sensible defaults.
pub struct TestResourceBuilder {
    service: String,
    libraries: Vec<(String, usize)>,
}

impl TestResourceBuilder {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
            libraries: Vec::new(),
        }
    }

    /// Adds a library carrying `metric_count` counters
    pub fn library(mut self, name: &str, metric_count: usize) -> Self {
        self.libraries.push((name.to_string(), metric_count));
        self
    }

    pub fn build(self) -> ResourceMetrics {
        let service = self.service;
        ResourceMetrics {
            resource: Some(Resource {
                attributes: vec![string_attribute("service.name", &service)],
                dropped_attributes_count: 0,
            }),
            scope_metrics: self
                .libraries
                .into_iter()
                .map(|(library, metric_count)| ScopeMetrics {
                    scope: Some(InstrumentationScope {
                        name: library.clone(),
                        version: "1.0.0".to_string(),
                        ..Default::default()
                    }),
                    metrics: (0..metric_count)
                        .map(|i| counter(&format!("{library}.counter_{i}"), i as i64))
                        .collect(),
                    schema_url: String::new(),
                })
                .collect(),
            schema_url: String::new(),
        }
    }
}

pub fn string_attribute(key: &str, value: &str) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(AnyValue {
            value: Some(Value::StringValue(value.to_string())),
        }),
    }
}

/// Monotonic cumulative integer sum with a single point
pub fn counter(name: &str, value: i64) -> Metric {
    Metric {
        name: name.to_string(),
        description: format!("{name} total"),
        unit: "1".to_string(),
        metadata: vec![],
        data: Some(Data::Sum(Sum {
            data_points: vec![NumberDataPoint {
                attributes: vec![string_attribute("host", "node-1")],
                start_time_unix_nano: 1_704_067_200_000_000_000,
                time_unix_nano: 1_704_067_260_000_000_000,
                value: Some(number_data_point::Value::AsInt(value)),
                exemplars: vec![],
                flags: 0,
            }],
            aggregation_temporality: AggregationTemporality::Cumulative as i32,
            is_monotonic: true,
        })),
    }
}

/// Double gauge with one point per value
pub fn gauge(name: &str, values: &[f64]) -> Metric {
    Metric {
        name: name.to_string(),
        data: Some(Data::Gauge(Gauge {
            data_points: values
                .iter()
                .map(|&v| NumberDataPoint {
                    value: Some(number_data_point::Value::AsDouble(v)),
                    ..Default::default()
                })
                .collect(),
        })),
        ..Default::default()
    }
}

/// Two services with one library each, carrying 3 and 5 metrics.
pub fn create_test_metric_data() -> MetricData {
    MetricData::from_wire(vec![
        TestResourceBuilder::new("frontend").library("http", 3).build(),
        TestResourceBuilder::new("backend").library("db", 5).build(),
    ])
}

pub fn create_test_export_request(services: usize, metrics_per_service: usize) -> ExportMetricsServiceRequest {
    ExportMetricsServiceRequest {
        resource_metrics: (0..services)
            .map(|i| {
                TestResourceBuilder::new(&format!("service-{i}"))
                    .library("runtime", metrics_per_service)
                    .build()
            })
            .collect(),
    }
}
