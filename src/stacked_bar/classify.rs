use crate::markers::{StageKind, StageRules};
use indexmap::IndexMap;

/// Raw column name -> canonical stage label, in raw column order.
pub type ColumnMap = IndexMap<String, String>;

/// Classify raw trace columns into stage labels.
///
/// Rules are tried in order and the first match wins; columns no rule
/// matches are left out of the map.
pub fn classify_columns<S: AsRef<str>>(raw_columns: &[S], rules: &StageRules) -> ColumnMap {
    let mut map = ColumnMap::new();
    for column in raw_columns {
        let column = column.as_ref();
        if let Some(label) = classify_column(column, rules) {
            map.insert(column.to_string(), label);
        }
    }
    map
}

pub fn classify_column(column: &str, rules: &StageRules) -> Option<String> {
    match rules.kind_of(column)? {
        StageKind::ResponseTimeStart => Some(rules.response_time_label().to_string()),
        // Topic name for publishes, node name for callbacks.
        StageKind::Publish | StageKind::CallbackStart => Some(strip_last_two_segments(column)),
    }
}

/// "/node/cb/callback_start_timestamp/0" -> "/node/cb"
fn strip_last_two_segments(column: &str) -> String {
    let parts: Vec<&str> = column.split('/').collect();
    parts[..parts.len().saturating_sub(2)].join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::DEFAULT_RESPONSE_TIME_LABEL;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_tracepoint_and_index_segments() {
        assert_eq!(strip_last_two_segments("/topic/rclcpp_publish_timestamp/0_max"), "/topic");
        assert_eq!(strip_last_two_segments("/ns/node/cb/callback_start_timestamp/0"), "/ns/node/cb");
        assert_eq!(strip_last_two_segments("rclcpp_publish/0"), "");
        assert_eq!(strip_last_two_segments("rclcpp_publish"), "");
    }

    #[test]
    fn keeps_match_order_and_drops_unmatched() {
        let rules = StageRules::defaults().unwrap();
        let map = classify_columns(
            &[
                "/c0/rclcpp_publish_timestamp/0_min",
                "/c1/rclcpp_publish_timestamp/0_max",
                "/c2/rcl_publish_timestamp/0",
                "/c3/dds_write_timestamp/0",
                "/c4/cb/callback_start_timestamp/0",
            ],
            &rules,
        );

        let pairs: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("/c0/rclcpp_publish_timestamp/0_min", DEFAULT_RESPONSE_TIME_LABEL),
                ("/c1/rclcpp_publish_timestamp/0_max", "/c1"),
                ("/c4/cb/callback_start_timestamp/0", "/c4/cb"),
            ]
        );
    }

    #[test]
    fn labels_do_not_classify_again() {
        let rules = StageRules::defaults().unwrap();
        let first = classify_columns(
            &[
                "/a/rclcpp_publish_timestamp/0_min",
                "/a/rclcpp_publish_timestamp/0_max",
                "/node/cb/callback_start_timestamp/0",
            ],
            &rules,
        );
        let labels: Vec<&String> = first.values().collect();
        assert!(classify_columns(&labels, &rules).is_empty());
    }

    #[test]
    fn empty_input_classifies_to_nothing() {
        let rules = StageRules::defaults().unwrap();
        assert!(classify_columns::<&str>(&[], &rules).is_empty());
    }
}
