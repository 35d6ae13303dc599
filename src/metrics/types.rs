//! Metric descriptor kinds as carried on the wire.
//!
//! Tags are fixed by the OTLP descriptor enum and cross the serialization
//! boundary unchanged.

use crate::core::{DataError, Result};
use opentelemetry_proto::tonic::metrics::v1::{
    metric::Data, number_data_point, AggregationTemporality, Metric,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a metric record
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Kind not set
    #[default]
    Unspecified = 0,
    /// Instantaneous integer measurement
    GaugeInt64 = 1,
    /// Instantaneous floating point measurement
    GaugeDouble = 2,
    /// Histogram of values observed during one interval
    GaugeHistogram = 3,
    /// Monotonic integer counter
    CounterInt64 = 4,
    /// Monotonic floating point counter
    CounterDouble = 5,
    /// Histogram accumulated since process start
    CumulativeHistogram = 6,
    /// Pre-computed quantiles
    Summary = 7,
}

impl MetricType {
    /// Every kind, in tag order
    pub const ALL: [MetricType; 8] = [
        MetricType::Unspecified,
        MetricType::GaugeInt64,
        MetricType::GaugeDouble,
        MetricType::GaugeHistogram,
        MetricType::CounterInt64,
        MetricType::CounterDouble,
        MetricType::CumulativeHistogram,
        MetricType::Summary,
    ];

    /// Returns the wire tag
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Returns the wire enum name
    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Unspecified => "UNSPECIFIED",
            MetricType::GaugeInt64 => "GAUGE_INT64",
            MetricType::GaugeDouble => "GAUGE_DOUBLE",
            MetricType::GaugeHistogram => "GAUGE_HISTOGRAM",
            MetricType::CounterInt64 => "COUNTER_INT64",
            MetricType::CounterDouble => "COUNTER_DOUBLE",
            MetricType::CumulativeHistogram => "CUMULATIVE_HISTOGRAM",
            MetricType::Summary => "SUMMARY",
        }
    }

    /// Identifies the descriptor kind of a wire metric from its data.
    ///
    /// Gauges and non-monotonic sums resolve to a gauge kind, monotonic sums
    /// to a counter kind. The integer/double split follows the first data
    /// point; an empty point list resolves to the double variant. Histograms
    /// are cumulative only when their temporality says so.
    pub fn of(metric: &Metric) -> Self {
        let Some(data) = &metric.data else {
            return MetricType::Unspecified;
        };

        match data {
            Data::Gauge(gauge) => {
                if first_is_int(gauge.data_points.first()) {
                    MetricType::GaugeInt64
                } else {
                    MetricType::GaugeDouble
                }
            },
            Data::Sum(sum) => {
                let is_int = first_is_int(sum.data_points.first());
                match (sum.is_monotonic, is_int) {
                    (true, true) => MetricType::CounterInt64,
                    (true, false) => MetricType::CounterDouble,
                    (false, true) => MetricType::GaugeInt64,
                    (false, false) => MetricType::GaugeDouble,
                }
            },
            Data::Histogram(histogram) => histogram_kind(histogram.aggregation_temporality),
            Data::ExponentialHistogram(histogram) => {
                histogram_kind(histogram.aggregation_temporality)
            },
            Data::Summary(_) => MetricType::Summary,
        }
    }
}

fn first_is_int(
    point: Option<&opentelemetry_proto::tonic::metrics::v1::NumberDataPoint>,
) -> bool {
    matches!(
        point.and_then(|p| p.value.as_ref()),
        Some(number_data_point::Value::AsInt(_))
    )
}

fn histogram_kind(temporality: i32) -> MetricType {
    if temporality == AggregationTemporality::Cumulative as i32 {
        MetricType::CumulativeHistogram
    } else {
        MetricType::GaugeHistogram
    }
}

impl From<MetricType> for i32 {
    fn from(kind: MetricType) -> Self {
        kind.tag()
    }
}

impl TryFrom<i32> for MetricType {
    type Error = DataError;

    fn try_from(tag: i32) -> Result<Self> {
        MetricType::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == tag)
            .ok_or(DataError::UnknownMetricType(tag))
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
