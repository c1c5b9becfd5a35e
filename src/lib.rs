//! LiDAR vegetation metric box-plot rendering pipeline.
//!
//! This crate provides tools for:
//! - Loading whitespace-delimited vegetation metric tables (25 columns per row)
//! - Removing rows carrying the invalid-value sentinel and converting to floats
//! - Rendering a 5x5 grid of box plots comparing each metric across pulse densities
//!
//! # Example
//!
//! ```no_run
//! use veg_metrics_plot::core::loaders::load_metric_table;
//! use veg_metrics_plot::processors::cleaning::clean_table;
//!
//! let raw = load_metric_table("metrics_dunes.txt").unwrap();
//! let cleaned = clean_table(&raw).unwrap();
//! ```

pub mod config;
pub mod core;
pub mod processors;
pub mod visualization;

pub use config::{FigureConfig, PlotJobConfig, StyleConfig};
pub use core::loaders::{MetricTable, RawMetricTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
