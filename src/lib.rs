//! Scatterswitch - an interactive terminal scatter plot with a switchable x axis.
//!
//! A dataset of per-state census records is plotted with healthcare coverage
//! on the vertical axis. Clicking one of the labels below the plot switches
//! the horizontal axis between poverty, median age and median household
//! income, animating the axis and every mark to the new scale.
//!
//! # Features
//!
//! - CSV loading with strict numeric coercion
//! - Pure selection state machine emitting render commands
//! - Clock-driven, retargetable transitions
//! - Mouse hover tooltips and clickable axis labels
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use scatterswitch::chart::Chart;
//! use scatterswitch::config::ChartConfig;
//! use scatterswitch::data::{DataReader, XField};
//! use std::path::Path;
//! use std::time::Instant;
//!
//! let dataset = DataReader::read_file(Path::new("data.csv"))?;
//! let mut chart = Chart::new(dataset, ChartConfig::default(), XField::Poverty, Instant::now())?;
//! chart.select(XField::Age, Instant::now());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;

pub use error::{Result, ScatterError};
