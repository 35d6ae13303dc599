//! In-memory metrics data model over the OTLP wire graph.
//!
//! Layout mirrors the wire schema:
//! - [`MetricData`]: root sequence of resource-metrics records
//! - [`ResourceMetricsView`]: metrics of one resource
//! - [`InstrumentationLibraryMetricsView`]: metrics of one library
//! - [`MetricView`]: one metric and its data points
//!
//! Repeated fields are exposed through [`SliceView`] / [`SliceViewMut`],
//! which borrow the wire storage instead of copying it.

pub mod instrumentation_library_metrics;
pub mod metric;
pub mod metric_data;
pub mod resource_metrics;
pub mod slice;
pub mod types;

pub use instrumentation_library_metrics::{
    InstrumentationLibraryMetricsSlice, InstrumentationLibraryMetricsSliceMut,
    InstrumentationLibraryMetricsView, InstrumentationLibraryMetricsViewMut,
};
pub use metric::{MetricSlice, MetricSliceMut, MetricView, MetricViewMut};
pub use metric_data::MetricData;
pub use resource_metrics::{
    ResourceMetricsSlice, ResourceMetricsSliceMut, ResourceMetricsView, ResourceMetricsViewMut,
};
pub use slice::{Element, SliceView, SliceViewMut};
pub use types::MetricType;
