use crate::diagnostics::at_line;
use crate::markers::StageMarkers;
use crate::record::{Record, RecordSet};
use anyhow::{Context, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted JSON shapes for a record file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRecords {
    // { "columns": [...], "rows": [{...}, ...] }
    Table {
        #[serde(default)]
        columns: Option<Vec<String>>,
        rows: Vec<Record>,
    },
    // [{...}, ...]
    Rows(Vec<Record>),
}

/// Read a record file. `.json` files are parsed as JSON, anything else as a
/// whitespace-separated table.
pub fn parse_records_file(path: &str) -> anyhow::Result<RecordSet> {
    let text = fs::read_to_string(path).with_context(|| format!("read records file {}", path))?;

    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_records_json(&text).with_context(|| format!("parse records file {}", path))
    } else {
        parse_records_text(path, &text)
    }
}

pub fn parse_records_json(text: &str) -> anyhow::Result<RecordSet> {
    let raw: RawRecords = serde_json::from_str(text)?;
    let set = match raw {
        RawRecords::Table {
            columns: Some(columns),
            rows,
        } => RecordSet::new(columns, rows)?,
        RawRecords::Table {
            columns: None,
            rows,
        }
        | RawRecords::Rows(rows) => RecordSet::from_rows(rows),
    };
    Ok(set)
}

/// Parse a whitespace-separated record table.
///
/// The first non-empty, non-`#` line names the columns; every following line
/// holds one integer per column, `-` for a missing value.
///
/// Example:
/// /t/rclcpp_publish_timestamp/0_min   /n/cb/callback_start_timestamp/0
/// 100                                 250
/// 200                                 -
pub fn parse_records_text(path: &str, text: &str) -> anyhow::Result<RecordSet> {
    let mut columns: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some(header) = &columns else {
            let mut names: Vec<String> = Vec::new();
            for name in line.split_whitespace() {
                if names.iter().any(|n| n == name) {
                    bail!("{}", at_line(path, lno, format!("duplicate column {}", name)));
                }
                names.push(name.to_string());
            }
            columns = Some(names);
            continue;
        };

        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != header.len() {
            bail!(
                "{}",
                at_line(
                    path,
                    lno,
                    format!("expected {} values, found {}", header.len(), cells.len())
                )
            );
        }

        let mut row = Record::new();
        for (column, cell) in header.iter().zip(cells) {
            let value = match cell {
                "-" => None,
                v => Some(v.parse::<i64>().with_context(|| {
                    at_line(path, lno, format!("bad timestamp {:?} in column {}", v, column))
                })?),
            };
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    Ok(RecordSet::new(columns.unwrap_or_default(), rows)?)
}

/// Read a JSON [`StageMarkers`] file.
pub fn load_markers(path: &str) -> anyhow::Result<StageMarkers> {
    let text = fs::read_to_string(path).with_context(|| format!("read markers file {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parse markers file {}", path))
}
