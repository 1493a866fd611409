use crate::record::RecordSet;
use crate::stacked_bar::classify::ColumnMap;
use crate::{Error, Result};
use indexmap::IndexMap;

/// Rename classified columns to their stage labels.
///
/// Returns the stage labels in classification order. Columns that were not
/// classified keep their raw names.
pub fn rename_stages(records: &mut RecordSet, map: &ColumnMap) -> Result<Vec<String>> {
    let mut seen: IndexMap<&str, &str> = IndexMap::with_capacity(map.len());
    for (raw, label) in map {
        if let Some(first) = seen.insert(label.as_str(), raw.as_str()) {
            return Err(Error::DuplicateLabel {
                label: label.clone(),
                first: first.to_string(),
                second: raw.clone(),
            });
        }
    }

    records.rename_columns(map)?;
    Ok(map.values().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, &str)]) -> ColumnMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn renames_and_returns_labels_in_order() {
        let row: Record = [("/t/pub/0", 1), ("/x/other", 2), ("/n/cb/start/0", 3)]
            .into_iter()
            .collect();
        let mut records = RecordSet::from_rows(vec![row]);

        let labels = rename_stages(
            &mut records,
            &map(&[("/t/pub/0", "/t"), ("/n/cb/start/0", "/n/cb")]),
        )
        .unwrap();

        assert_eq!(labels, vec!["/t", "/n/cb"]);
        assert_eq!(records.columns(), ["/t", "/x/other", "/n/cb"]);
        assert_eq!(records.rows()[0].get("/n/cb"), Some(3));
    }

    #[test]
    fn two_columns_on_one_label_is_an_error() {
        let row: Record = [("/t/pub/0", 1), ("/t/pub/1", 2)].into_iter().collect();
        let mut records = RecordSet::from_rows(vec![row]);

        let err = rename_stages(&mut records, &map(&[("/t/pub/0", "/t"), ("/t/pub/1", "/t")]))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateLabel { ref label, .. } if label == "/t"));
    }
}
