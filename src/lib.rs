//! otlp-pdata - In-memory view over OTLP metrics payloads.
//!
//! Pipeline stages that transform metrics work on [`MetricData`] instead of
//! the wire encoding. The container wraps an already-decoded OTLP object
//! graph, exposes its nested repeated fields through borrowed slice views,
//! and hands the same graph back out for re-encoding.
//!
//! # Features
//!
//! - **No hidden copies**: wrapping, unwrapping and viewing never duplicate records
//! - **Explicit deep clone**: `clone()` is the single copying operation
//! - **Live counts**: metric and data point counts always reflect current state
//!
//! # Architecture
//!
//! - `metrics`: container, slice views and element views
//! - `core`: error types
//!
//! # Example
//!
//! ```
//! use otlp_pdata::MetricData;
//! use opentelemetry_proto::tonic::metrics::v1::{Metric, ResourceMetrics, ScopeMetrics};
//!
//! let mut md = MetricData::new();
//! md.resource_metrics_mut().push(ResourceMetrics {
//!     scope_metrics: vec![ScopeMetrics {
//!         metrics: vec![Metric::default(), Metric::default()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! });
//!
//! assert_eq!(md.metric_count(), 2);
//! let wire = md.into_wire();
//! assert_eq!(wire.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod core;
pub mod metrics;

// Re-export core types for convenience
pub use crate::core::{DataError, Result};
pub use crate::metrics::{MetricData, MetricType, SliceView, SliceViewMut};
