use indexmap::IndexMap;
use serde::Serialize;

/// Reserved key holding the x-axis values of a [`StackedBarTable`].
pub const START_TIME: &str = "start time";

/// Column-oriented stacked-bar data: label -> one value per input row.
///
/// Keys keep insertion order: `"start time"` first, then stage labels in path
/// order. All series have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StackedBarTable(IndexMap<String, Vec<i64>>);

impl StackedBarTable {
    pub(crate) fn insert(&mut self, label: impl Into<String>, series: Vec<i64>) {
        self.0.insert(label.into(), series);
    }

    pub fn get(&self, label: &str) -> Option<&[i64]> {
        self.0.get(label).map(Vec::as_slice)
    }

    pub fn start_time(&self) -> Option<&[i64]> {
        self.get(START_TIME)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of rows (length of every series).
    pub fn rows(&self) -> usize {
        self.0.values().next().map_or(0, Vec::len)
    }

    /// Convert the stage series to `unit`, leaving `"start time"` as raw
    /// nanoseconds.
    pub fn scaled(&self, unit: TimeUnit) -> IndexMap<String, Series> {
        self.0
            .iter()
            .map(|(label, values)| {
                let series = if label == START_TIME {
                    Series::Nanos(values.clone())
                } else {
                    unit.convert(values)
                };
                (label.clone(), series)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Ns,
    Ms,
}

impl TimeUnit {
    fn convert(self, values: &[i64]) -> Series {
        match self {
            TimeUnit::Ns => Series::Nanos(values.to_vec()),
            TimeUnit::Ms => Series::Millis(values.iter().map(|v| *v as f64 / 1e6).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Nanos(Vec<i64>),
    Millis(Vec<f64>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> StackedBarTable {
        let mut t = StackedBarTable::default();
        t.insert(START_TIME, vec![1_000_000_000, 1_002_000_000]);
        t.insert("/topic", vec![2_000_000, 500_000]);
        t
    }

    #[test]
    fn millis_leave_start_time_untouched() {
        let scaled = table().scaled(TimeUnit::Ms);
        assert_eq!(scaled[START_TIME], Series::Nanos(vec![1_000_000_000, 1_002_000_000]));
        assert_eq!(scaled["/topic"], Series::Millis(vec![2.0, 0.5]));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let json = serde_json::to_string(&table()).unwrap();
        assert_eq!(
            json,
            r#"{"start time":[1000000000,1002000000],"/topic":[2000000,500000]}"#
        );
    }

    #[test]
    fn rows_of_empty_table_is_zero() {
        assert_eq!(StackedBarTable::default().rows(), 0);
        assert_eq!(table().rows(), 2);
    }
}
