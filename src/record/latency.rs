use crate::record::{Record, RecordSet};
use crate::{Error, Result};

/// Column name of the difference in [`Latency::to_records`].
pub const LATENCY_COLUMN: &str = "latency";

/// Per-row `end - start` between two timestamp columns.
///
/// Rows lacking either column are skipped rather than zero-filled, so the
/// result can be shorter than the input. Callers that need one value per row
/// compare [`Latency::len`] with the input length.
#[derive(Debug, Clone)]
pub struct Latency {
    start_column: String,
    end_column: String,
    start_timestamps: Vec<i64>,
    latencies: Vec<i64>,
    skipped: usize,
}

impl Latency {
    /// `start`/`end` default to the first/last column of `records`.
    ///
    /// Fails with [`Error::Overflow`] if a difference does not fit in an `i64`.
    pub fn new(records: &RecordSet, start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let columns = records.columns();
        let start_column = match start {
            Some(s) => s.to_string(),
            None => columns.first().ok_or(Error::NoColumns)?.clone(),
        };
        let end_column = match end {
            Some(e) => e.to_string(),
            None => columns.last().ok_or(Error::NoColumns)?.clone(),
        };

        let mut start_timestamps = Vec::with_capacity(records.len());
        let mut latencies = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let (Some(start_ts), Some(end_ts)) =
                (record.get(&start_column), record.get(&end_column))
            else {
                continue;
            };
            let latency = end_ts.checked_sub(start_ts).ok_or_else(|| Error::Overflow {
                column: start_column.clone(),
                row,
            })?;
            start_timestamps.push(start_ts);
            latencies.push(latency);
        }

        Ok(Self {
            skipped: records.len() - start_timestamps.len(),
            start_column,
            end_column,
            start_timestamps,
            latencies,
        })
    }

    pub fn start_column(&self) -> &str {
        &self.start_column
    }

    pub fn end_column(&self) -> &str {
        &self.end_column
    }

    /// Number of rows that carried both timestamps.
    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }

    /// Number of input rows missing either timestamp.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Latency values in row order.
    pub fn to_series(&self) -> Vec<i64> {
        self.latencies.clone()
    }

    /// Two-column records: `{start column, "latency"}`.
    pub fn to_records(&self) -> RecordSet {
        let rows = self
            .start_timestamps
            .iter()
            .zip(&self.latencies)
            .map(|(start, latency)| {
                let mut r = Record::new();
                r.insert(self.start_column.clone(), Some(*start));
                r.insert(LATENCY_COLUMN, Some(*latency));
                r
            })
            .collect();
        RecordSet::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records() -> RecordSet {
        let mut partial = Record::new();
        partial.insert("pub", Some(20));
        partial.insert("sub", None);
        partial.insert("cb", Some(31));

        RecordSet::new(
            vec!["pub".into(), "sub".into(), "cb".into()],
            vec![
                [("pub", 0), ("sub", 4), ("cb", 9)].into_iter().collect(),
                partial,
                [("pub", 40), ("sub", 47), ("cb", 50)].into_iter().collect(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn differences_named_columns_in_row_order() {
        let latency = Latency::new(&records(), Some("pub"), Some("cb")).unwrap();
        assert_eq!(latency.to_series(), vec![9, 11, 10]);
        assert_eq!(latency.len(), 3);
    }

    #[test]
    fn rows_missing_a_column_are_skipped() {
        let latency = Latency::new(&records(), Some("pub"), Some("sub")).unwrap();
        assert_eq!(latency.to_series(), vec![4, 7]);
        assert_eq!(latency.len(), 2);
        assert_eq!(latency.skipped(), 1);
    }

    #[test]
    fn defaults_to_first_and_last_columns() {
        let latency = Latency::new(&records(), None, None).unwrap();
        assert_eq!(latency.start_column(), "pub");
        assert_eq!(latency.end_column(), "cb");
    }

    #[test]
    fn default_columns_need_at_least_one_column() {
        let err = Latency::new(&RecordSet::default(), None, None).unwrap_err();
        assert!(matches!(err, Error::NoColumns));
    }

    #[test]
    fn records_carry_start_and_latency() {
        let out = Latency::new(&records(), Some("sub"), Some("cb"))
            .unwrap()
            .to_records();
        assert_eq!(out.columns(), ["sub", LATENCY_COLUMN]);
        assert_eq!(out.column_series("sub"), vec![4, 47]);
        assert_eq!(out.column_series(LATENCY_COLUMN), vec![5, 3]);
    }

    #[test]
    fn overflowing_difference_is_an_error() {
        let records = RecordSet::from_rows(vec![
            [("pub", 0), ("cb", 5)].into_iter().collect(),
            [("pub", -10), ("cb", i64::MAX)].into_iter().collect(),
        ]);
        let err = Latency::new(&records, Some("pub"), Some("cb")).unwrap_err();
        assert!(matches!(err, Error::Overflow { ref column, row: 1 } if column == "pub"));
    }
}
