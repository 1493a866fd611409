//! Timestamped record sets and per-row latency differencing.

pub mod latency;
pub mod set;

pub use latency::{LATENCY_COLUMN, Latency};
pub use set::{Record, RecordSet};
