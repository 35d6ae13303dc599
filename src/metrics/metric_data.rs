//! Top-level metrics container propagated through the pipeline.
//!
//! `MetricData` owns the root sequence of the decoded wire graph and hands
//! out borrowed views into it. Moving a `MetricData` between stages moves
//! the graph without copying any record; [`MetricData::deep_clone`] is the
//! only operation that duplicates storage.

use crate::metrics::resource_metrics::{ResourceMetricsSlice, ResourceMetricsSliceMut};
use crate::metrics::slice::{SliceView, SliceViewMut};
use opentelemetry_proto::tonic::collector::metrics::v1::ExportMetricsServiceRequest;
use opentelemetry_proto::tonic::metrics::v1::ResourceMetrics;

/// Field number of `resource_metrics` in the export request
const RESOURCE_METRICS_FIELD: u32 = 1;

/// In-memory view over a metrics payload.
///
/// Instances come from [`MetricData::new`], [`MetricData::from_wire`] or
/// [`MetricData::from_request`]; the backing sequence always exists.
#[derive(Debug, PartialEq, Default)]
pub struct MetricData {
    orig: Vec<ResourceMetrics>,
}

impl MetricData {
    /// Creates an empty container
    pub fn new() -> Self {
        Self { orig: Vec::new() }
    }

    /// Wraps a decoded root sequence without copying it
    pub fn from_wire(orig: Vec<ResourceMetrics>) -> Self {
        Self { orig }
    }

    /// Wraps the payload of a decoded export request
    pub fn from_request(request: ExportMetricsServiceRequest) -> Self {
        tracing::debug!(
            resource_metrics = request.resource_metrics.len(),
            "Wrapping export metrics request"
        );
        Self::from_wire(request.resource_metrics)
    }

    /// Borrows the backing root sequence
    pub fn as_wire(&self) -> &[ResourceMetrics] {
        &self.orig
    }

    /// Borrows the backing root sequence mutably
    pub fn as_wire_mut(&mut self) -> &mut Vec<ResourceMetrics> {
        &mut self.orig
    }

    /// Releases the backing root sequence for serialization or transmission
    pub fn into_wire(self) -> Vec<ResourceMetrics> {
        self.orig
    }

    /// Releases the backing root sequence as an export request
    pub fn into_request(self) -> ExportMetricsServiceRequest {
        ExportMetricsServiceRequest {
            resource_metrics: self.orig,
        }
    }

    /// Returns an independent copy of the whole graph, down to data points
    pub fn deep_clone(&self) -> Self {
        tracing::trace!(
            resource_metrics = self.orig.len(),
            metrics = self.metric_count(),
            "Deep cloning metric data"
        );
        Self {
            orig: self.orig.clone(),
        }
    }

    /// Read-only view over the resource-metrics records
    pub fn resource_metrics(&self) -> ResourceMetricsSlice<'_> {
        SliceView::new(&self.orig)
    }

    /// Mutable view over the resource-metrics records
    pub fn resource_metrics_mut(&mut self) -> ResourceMetricsSliceMut<'_> {
        SliceViewMut::new(&mut self.orig)
    }

    /// Replaces the resource-metrics records.
    ///
    /// The given records move in as they are; their storage becomes the
    /// container's storage.
    pub fn set_resource_metrics(&mut self, resource_metrics: Vec<ResourceMetrics>) {
        tracing::trace!(
            replaced = self.orig.len(),
            resource_metrics = resource_metrics.len(),
            "Replacing resource metrics"
        );
        self.orig = resource_metrics;
    }

    /// Number of resource-metrics records
    pub fn resource_metrics_count(&self) -> usize {
        self.orig.len()
    }

    /// Total number of metric records across every resource and library
    pub fn metric_count(&self) -> usize {
        self.resource_metrics().iter().map(|rm| rm.metric_count()).sum()
    }

    /// Total number of data points across every metric
    pub fn data_point_count(&self) -> usize {
        self.resource_metrics()
            .iter()
            .map(|rm| rm.data_point_count())
            .sum()
    }

    /// Protobuf encoded size of the payload as an export request
    pub fn encoded_len(&self) -> usize {
        prost::encoding::message::encoded_len_repeated(RESOURCE_METRICS_FIELD, &self.orig)
    }
}

impl Clone for MetricData {
    fn clone(&self) -> Self {
        self.deep_clone()
    }
}

impl From<Vec<ResourceMetrics>> for MetricData {
    fn from(orig: Vec<ResourceMetrics>) -> Self {
        Self::from_wire(orig)
    }
}

impl From<MetricData> for Vec<ResourceMetrics> {
    fn from(md: MetricData) -> Self {
        md.into_wire()
    }
}

impl From<ExportMetricsServiceRequest> for MetricData {
    fn from(request: ExportMetricsServiceRequest) -> Self {
        Self::from_request(request)
    }
}

impl From<MetricData> for ExportMetricsServiceRequest {
    fn from(md: MetricData) -> Self {
        md.into_request()
    }
}
