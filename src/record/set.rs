use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A single trace row: column name -> nanosecond timestamp.
///
/// `None` and an absent column are the same thing: the column does not apply
/// to this row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Option<i64>>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<i64> {
        self.0.get(column).copied().flatten()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Option<i64>) {
        self.0.insert(column.into(), value);
    }

    /// Column names carried by this row, in insertion order (nulls included).
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn rename(&mut self, map: &IndexMap<String, String>) {
        self.0 = std::mem::take(&mut self.0)
            .into_iter()
            .map(|(k, v)| match map.get(&k) {
                Some(to) => (to.clone(), v),
                None => (k, v),
            })
            .collect();
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, i64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect())
    }
}

/// Ordered rows plus the ordered column list describing them.
///
/// Row order matches the original trace and is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl RecordSet {
    /// Build a record set, checking column names are unique and every row
    /// only uses known columns.
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Result<Self> {
        let mut known: IndexSet<&str> = IndexSet::with_capacity(columns.len());
        for column in &columns {
            if !known.insert(column.as_str()) {
                return Err(Error::DuplicateColumn {
                    column: column.clone(),
                });
            }
        }
        for (idx, row) in rows.iter().enumerate() {
            if let Some(col) = row.columns().find(|c| !known.contains(c)) {
                return Err(Error::UnknownColumn {
                    row: idx,
                    column: col.to_string(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a record set whose columns are the union of the row keys, in
    /// first-seen order.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        let mut columns: IndexSet<String> = IndexSet::new();
        for row in &rows {
            for col in row.columns() {
                if !columns.contains(col) {
                    columns.insert(col.to_string());
                }
            }
        }
        Self {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.rows.iter()
    }

    pub fn push(&mut self, row: Record) -> Result<()> {
        if let Some(col) = row.columns().find(|c| !self.columns.iter().any(|k| k == c)) {
            return Err(Error::UnknownColumn {
                row: self.rows.len(),
                column: col.to_string(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Non-null values of `column`, in row order.
    pub fn column_series(&self, column: &str) -> Vec<i64> {
        self.rows.iter().filter_map(|r| r.get(column)).collect()
    }

    /// Rename columns in place (`from -> to`). Columns not in `map` are kept.
    ///
    /// Fails without modifying anything if a rename would produce two columns
    /// with the same name.
    pub fn rename_columns(&mut self, map: &IndexMap<String, String>) -> Result<()> {
        let mut renamed: IndexSet<String> = IndexSet::with_capacity(self.columns.len());
        for col in &self.columns {
            let to = map.get(col).unwrap_or(col);
            if !renamed.insert(to.clone()) {
                return Err(Error::RenameCollision {
                    from: col.clone(),
                    to: to.clone(),
                });
            }
        }

        self.columns = renamed.into_iter().collect();
        for row in &mut self.rows {
            row.rename(map);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
