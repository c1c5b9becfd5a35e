//! Core data types and I/O operations.

pub mod loaders;
pub mod metrics;

pub use loaders::{MetricTable, RawMetricTable};
pub use metrics::{MetricDef, MetricGroup, METRIC_PANELS};
