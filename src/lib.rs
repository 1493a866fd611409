//! Latency decomposition for ROS2/DDS path traces.
//!
//! A recorded path trace is a [`RecordSet`]: rows of nanosecond timestamps
//! keyed by raw trace column names. [`StackedBar`] classifies those columns
//! into node/topic stages, differences consecutive stages row by row and
//! reshapes the result into a [`StackedBarTable`] ready for a stacked-bar chart.

pub mod diagnostics;
pub mod error;
pub mod input;
pub mod markers;
pub mod record;
pub mod stacked_bar;
pub mod view;

pub use error::{Error, Result};
pub use markers::{StageMarkers, StageRules};
pub use record::{Latency, Record, RecordSet};
pub use stacked_bar::{StackedBar, StackedBarTable, START_TIME};
