//! Views over instrumentation-library-metrics records.
//!
//! The wire model names these records `ScopeMetrics` and the library an
//! `InstrumentationScope`.

use crate::metrics::metric::{MetricSlice, MetricSliceMut};
use crate::metrics::slice::{Element, SliceView, SliceViewMut};
use opentelemetry_proto::tonic::common::v1::InstrumentationScope;
use opentelemetry_proto::tonic::metrics::v1::ScopeMetrics;

/// Read-only view over the per-library groups of one resource
pub type InstrumentationLibraryMetricsSlice<'a> = SliceView<'a, ScopeMetrics>;

/// Mutable view over the per-library groups of one resource
pub type InstrumentationLibraryMetricsSliceMut<'a> = SliceViewMut<'a, ScopeMetrics>;

/// Metrics grouped by the library that produced them
#[derive(Debug, Clone, Copy)]
pub struct InstrumentationLibraryMetricsView<'a> {
    orig: &'a ScopeMetrics,
}

impl<'a> InstrumentationLibraryMetricsView<'a> {
    /// Producing library, if set
    pub fn instrumentation_library(&self) -> Option<&'a InstrumentationScope> {
        self.orig.scope.as_ref()
    }

    pub fn schema_url(&self) -> &'a str {
        &self.orig.schema_url
    }

    /// Metric records produced by this library
    pub fn metrics(&self) -> MetricSlice<'a> {
        SliceView::new(&self.orig.metrics)
    }

    /// Number of data points across this library's metrics
    pub fn data_point_count(&self) -> usize {
        self.metrics().iter().map(|metric| metric.data_point_count()).sum()
    }

    pub fn as_wire(&self) -> &'a ScopeMetrics {
        self.orig
    }
}

/// Mutable counterpart of [`InstrumentationLibraryMetricsView`]
#[derive(Debug)]
pub struct InstrumentationLibraryMetricsViewMut<'a> {
    orig: &'a mut ScopeMetrics,
}

impl<'a> InstrumentationLibraryMetricsViewMut<'a> {
    /// Reborrows as a read-only view
    pub fn as_view(&self) -> InstrumentationLibraryMetricsView<'_> {
        InstrumentationLibraryMetricsView { orig: &*self.orig }
    }

    /// Replaces the producing library
    pub fn set_instrumentation_library(&mut self, library: InstrumentationScope) {
        self.orig.scope = Some(library);
    }

    pub fn set_schema_url(&mut self, schema_url: impl Into<String>) {
        self.orig.schema_url = schema_url.into();
    }

    /// Mutable view over this library's metrics
    pub fn metrics_mut(&mut self) -> MetricSliceMut<'_> {
        SliceViewMut::new(&mut self.orig.metrics)
    }

    pub fn as_wire_mut(&mut self) -> &mut ScopeMetrics {
        self.orig
    }
}

impl Element for ScopeMetrics {
    type View<'a> = InstrumentationLibraryMetricsView<'a>;
    type ViewMut<'a> = InstrumentationLibraryMetricsViewMut<'a>;

    fn view(&self) -> InstrumentationLibraryMetricsView<'_> {
        InstrumentationLibraryMetricsView { orig: self }
    }

    fn view_mut(&mut self) -> InstrumentationLibraryMetricsViewMut<'_> {
        InstrumentationLibraryMetricsViewMut { orig: self }
    }
}
