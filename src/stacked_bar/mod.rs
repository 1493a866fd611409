//! Stacked-bar assembly: classify, rename, difference, reshape.

pub mod classify;
pub mod rename;
pub mod table;

pub use classify::{ColumnMap, classify_column, classify_columns};
pub use rename::rename_stages;
pub use table::{START_TIME, Series, StackedBarTable, TimeUnit};

use crate::markers::{StageMarkers, StageRules};
use crate::record::{Latency, Record, RecordSet};
use crate::{Error, Result};

/// Per-stage latency breakdown of a path's records.
#[derive(Debug, Clone)]
pub struct StackedBar {
    table: StackedBarTable,
    columns: Vec<String>,
    dropped: Vec<String>,
}

impl StackedBar {
    /// Build with the default ROS2 stage markers.
    pub fn new(records: RecordSet) -> Result<Self> {
        Self::with_rules(records, &StageRules::defaults()?)
    }

    /// Build with markers loaded from configuration.
    pub fn with_markers(records: RecordSet, markers: &StageMarkers) -> Result<Self> {
        Self::with_rules(records, &markers.compile()?)
    }

    /// Build the table for `records`:
    /// - `"start time"`: raw values of the first stage
    /// - one latency series per stage, to the next stage
    ///
    /// Fails if fewer than two stages are found or any series does not cover
    /// every row.
    pub fn with_rules(mut records: RecordSet, rules: &StageRules) -> Result<Self> {
        let map = classify_columns(records.columns(), rules);
        if map.len() < 2 {
            return Err(Error::Validation { count: map.len() });
        }
        let dropped = records
            .columns()
            .iter()
            .filter(|c| !map.contains_key(*c))
            .cloned()
            .collect();

        let labels = rename_stages(&mut records, &map)?;
        let row_count = records.len();

        let mut table = StackedBarTable::default();
        let start_time = records.column_series(&labels[0]);
        check_rows(START_TIME, row_count, start_time.len())?;
        table.insert(START_TIME, start_time);

        for pair in labels.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let latency = Latency::new(&records, Some(from.as_str()), Some(to.as_str()))?;
            check_rows(from, row_count, latency.len())?;
            table.insert(from.clone(), latency.to_series());
        }

        let mut columns = labels;
        columns.pop();

        Ok(Self {
            table,
            columns,
            dropped,
        })
    }

    pub fn table(&self) -> &StackedBarTable {
        &self.table
    }

    /// Stage labels that key a latency series, in path order. The final
    /// stage only ends the last latency and is not included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Raw columns that matched no stage rule.
    pub fn dropped_columns(&self) -> &[String] {
        &self.dropped
    }

    /// Row-oriented view: one record per input row, stage columns first then
    /// `"start time"`.
    pub fn to_records(&self) -> RecordSet {
        let rows = (0..self.table.rows())
            .map(|i| {
                let mut r = Record::new();
                for column in self.columns.iter().map(String::as_str).chain([START_TIME]) {
                    r.insert(column, self.table.get(column).map(|s| s[i]));
                }
                r
            })
            .collect();
        RecordSet::from_rows(rows)
    }
}

fn check_rows(column: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::RowCountMismatch {
            column: column.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}
