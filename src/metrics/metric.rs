//! Views over individual metric records.

use crate::metrics::slice::{Element, SliceView, SliceViewMut};
use crate::metrics::types::MetricType;
use opentelemetry_proto::tonic::metrics::v1::{metric::Data, Metric};

/// Read-only view over the metrics of one library
pub type MetricSlice<'a> = SliceView<'a, Metric>;

/// Mutable view over the metrics of one library
pub type MetricSliceMut<'a> = SliceViewMut<'a, Metric>;

/// A single named metric and its data points
#[derive(Debug, Clone, Copy)]
pub struct MetricView<'a> {
    orig: &'a Metric,
}

impl<'a> MetricView<'a> {
    pub fn name(&self) -> &'a str {
        &self.orig.name
    }

    pub fn description(&self) -> &'a str {
        &self.orig.description
    }

    pub fn unit(&self) -> &'a str {
        &self.orig.unit
    }

    /// Descriptor kind derived from the data payload
    pub fn metric_type(&self) -> MetricType {
        MetricType::of(self.orig)
    }

    /// Data payload, if set
    pub fn data(&self) -> Option<&'a Data> {
        self.orig.data.as_ref()
    }

    /// Number of data points carried by this metric
    pub fn data_point_count(&self) -> usize {
        match &self.orig.data {
            None => 0,
            Some(Data::Gauge(gauge)) => gauge.data_points.len(),
            Some(Data::Sum(sum)) => sum.data_points.len(),
            Some(Data::Histogram(histogram)) => histogram.data_points.len(),
            Some(Data::ExponentialHistogram(histogram)) => histogram.data_points.len(),
            Some(Data::Summary(summary)) => summary.data_points.len(),
        }
    }

    pub fn as_wire(&self) -> &'a Metric {
        self.orig
    }
}

/// Mutable counterpart of [`MetricView`]
#[derive(Debug)]
pub struct MetricViewMut<'a> {
    orig: &'a mut Metric,
}

impl<'a> MetricViewMut<'a> {
    /// Reborrows as a read-only view
    pub fn as_view(&self) -> MetricView<'_> {
        MetricView { orig: &*self.orig }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.orig.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.orig.description = description.into();
    }

    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.orig.unit = unit.into();
    }

    /// Replaces the data payload
    pub fn set_data(&mut self, data: Data) {
        self.orig.data = Some(data);
    }

    /// Data payload for in-place edits of its points
    pub fn data_mut(&mut self) -> Option<&mut Data> {
        self.orig.data.as_mut()
    }

    pub fn as_wire_mut(&mut self) -> &mut Metric {
        self.orig
    }
}

impl Element for Metric {
    type View<'a> = MetricView<'a>;
    type ViewMut<'a> = MetricViewMut<'a>;

    fn view(&self) -> MetricView<'_> {
        MetricView { orig: self }
    }

    fn view_mut(&mut self) -> MetricViewMut<'_> {
        MetricViewMut { orig: self }
    }
}
