use std::collections::HashMap;

use serde_json::Value;

/// Parse the `{base}/type-counts` payload into a category → count map.
///
/// The endpoint returns a JSON array of `{key, value}` pairs. Parsing is
/// deliberately lenient: entries that are not objects or that lack a
/// non-empty string `key` are dropped, and a missing or non-integer `value`
/// counts as 0. A category absent from the map is rendered as 0 by the
/// caller.
pub fn parse_type_counts(payload: &Value) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    let Some(entries) = payload.as_array() else {
        return counts;
    };
    for entry in entries {
        let Some(key) = entry.get("key").and_then(Value::as_str) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let value = entry.get("value").and_then(Value::as_i64).unwrap_or(0);
        counts.insert(key.to_string(), value);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_entries() {
        let payload = json!([
            {"key": "Front-End", "value": 3},
            {"key": "Database", "value": 0},
        ]);
        let counts = parse_type_counts(&payload);
        assert_eq!(counts.get("Front-End"), Some(&3));
        assert_eq!(counts.get("Database"), Some(&0));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn malformed_entries_are_dropped_not_errors() {
        let payload = json!([
            {"key": "Cloud", "value": 2},
            {"value": 9},
            {"key": "", "value": 4},
            {"key": 12, "value": 1},
            "not an object",
            {"key": "Back-End"},
            {"key": "IDE", "value": "five"},
        ]);
        let counts = parse_type_counts(&payload);
        assert_eq!(counts.get("Cloud"), Some(&2));
        assert_eq!(counts.get("Back-End"), Some(&0));
        assert_eq!(counts.get("IDE"), Some(&0));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn non_array_payload_yields_empty_map() {
        assert!(parse_type_counts(&json!({"key": "x"})).is_empty());
        assert!(parse_type_counts(&json!(null)).is_empty());
    }
}
