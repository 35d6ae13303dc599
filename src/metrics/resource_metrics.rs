//! Views over resource-metrics records.

use crate::metrics::instrumentation_library_metrics::{
    InstrumentationLibraryMetricsSlice, InstrumentationLibraryMetricsSliceMut,
};
use crate::metrics::slice::{Element, SliceView, SliceViewMut};
use opentelemetry_proto::tonic::metrics::v1::ResourceMetrics;
use opentelemetry_proto::tonic::resource::v1::Resource;

/// Read-only view over the top-level repeated field
pub type ResourceMetricsSlice<'a> = SliceView<'a, ResourceMetrics>;

/// Mutable view over the top-level repeated field
pub type ResourceMetricsSliceMut<'a> = SliceViewMut<'a, ResourceMetrics>;

/// Metrics grouped by the resource that produced them
#[derive(Debug, Clone, Copy)]
pub struct ResourceMetricsView<'a> {
    orig: &'a ResourceMetrics,
}

impl<'a> ResourceMetricsView<'a> {
    /// Originating resource, if set
    pub fn resource(&self) -> Option<&'a Resource> {
        self.orig.resource.as_ref()
    }

    /// Schema URL of the resource
    pub fn schema_url(&self) -> &'a str {
        &self.orig.schema_url
    }

    /// Per-library groups nested under this resource
    pub fn instrumentation_library_metrics(&self) -> InstrumentationLibraryMetricsSlice<'a> {
        SliceView::new(&self.orig.scope_metrics)
    }

    /// Number of metric records under this resource
    pub fn metric_count(&self) -> usize {
        self.instrumentation_library_metrics()
            .iter()
            .map(|ilm| ilm.metrics().len())
            .sum()
    }

    /// Number of data points under this resource
    pub fn data_point_count(&self) -> usize {
        self.instrumentation_library_metrics()
            .iter()
            .map(|ilm| ilm.data_point_count())
            .sum()
    }

    /// Borrows the wire record
    pub fn as_wire(&self) -> &'a ResourceMetrics {
        self.orig
    }
}

/// Mutable counterpart of [`ResourceMetricsView`]
#[derive(Debug)]
pub struct ResourceMetricsViewMut<'a> {
    orig: &'a mut ResourceMetrics,
}

impl<'a> ResourceMetricsViewMut<'a> {
    /// Reborrows as a read-only view
    pub fn as_view(&self) -> ResourceMetricsView<'_> {
        ResourceMetricsView { orig: &*self.orig }
    }

    /// Resource of this record, created empty if it was unset
    pub fn resource_mut(&mut self) -> &mut Resource {
        self.orig.resource.get_or_insert_with(Resource::default)
    }

    /// Replaces the resource
    pub fn set_resource(&mut self, resource: Resource) {
        self.orig.resource = Some(resource);
    }

    /// Replaces the schema URL
    pub fn set_schema_url(&mut self, schema_url: impl Into<String>) {
        self.orig.schema_url = schema_url.into();
    }

    /// Mutable view over the per-library groups
    pub fn instrumentation_library_metrics_mut(
        &mut self,
    ) -> InstrumentationLibraryMetricsSliceMut<'_> {
        SliceViewMut::new(&mut self.orig.scope_metrics)
    }

    /// Borrows the wire record mutably
    pub fn as_wire_mut(&mut self) -> &mut ResourceMetrics {
        self.orig
    }
}

impl Element for ResourceMetrics {
    type View<'a> = ResourceMetricsView<'a>;
    type ViewMut<'a> = ResourceMetricsViewMut<'a>;

    fn view(&self) -> ResourceMetricsView<'_> {
        ResourceMetricsView { orig: self }
    }

    fn view_mut(&mut self) -> ResourceMetricsViewMut<'_> {
        ResourceMetricsViewMut { orig: self }
    }
}
