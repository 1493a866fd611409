//! Serializable report built from a [`StackedBar`].

use crate::stacked_bar::{Series, StackedBar, TimeUnit};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    /// Stage labels keying a latency series, in path order.
    pub columns: Vec<String>,
    pub unit: TimeUnit,
    /// `"start time"` (always nanoseconds) followed by one series per stage.
    pub table: IndexMap<String, Series>,
    pub totals: TotalsView,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub rows: usize,
    pub stages: usize,
    pub dropped_columns: Vec<String>,
}

pub fn build_report_data(stacked: &StackedBar, unit: TimeUnit) -> ReportData {
    let table = stacked.table();
    ReportData {
        columns: stacked.columns().to_vec(),
        unit,
        table: table.scaled(unit),
        totals: TotalsView {
            rows: table.rows(),
            // The end stage has no series of its own.
            stages: stacked.columns().len() + 1,
            dropped_columns: stacked.dropped_columns().to_vec(),
        },
    }
}
