//! Total field decoders for loosely-shaped posting and profile records.
//!
//! Records arrive from the portal with optional, sometimes mistyped fields. Each helper
//! decodes into its empty default instead of failing, so a malformed field never rejects
//! the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A string field; anything that is not a JSON string decodes to `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A list of strings. Numbers and booleans are stringified, other elements dropped.
/// A non-array value decodes to an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

/// A nested object; a non-object value (or one that fails to decode) becomes `None`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// A list of objects. Elements that are not objects decode to `T::default()` so the
/// list keeps its length and order.
pub fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
                _ => T::default(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Entry {
        #[serde(default, deserialize_with = "opt_string")]
        label: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "opt_string")]
        title: Option<String>,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "object")]
        nested: Option<Entry>,
        #[serde(default, deserialize_with = "object_list")]
        entries: Vec<Entry>,
    }

    #[test]
    fn test_missing_fields_default() {
        let record: Record = serde_json::from_str("{}").unwrap();
        assert!(record.title.is_none());
        assert!(record.tags.is_empty());
        assert!(record.nested.is_none());
        assert!(record.entries.is_empty());
    }

    #[test]
    fn test_wrong_types_degrade() {
        let record: Record = serde_json::from_str(
            r#"{"title": 42, "tags": "react", "nested": [1], "entries": {"label": "x"}}"#,
        )
        .unwrap();
        assert!(record.title.is_none());
        assert!(record.tags.is_empty());
        assert!(record.nested.is_none());
        assert!(record.entries.is_empty());
    }

    #[test]
    fn test_mixed_list_elements() {
        let record: Record = serde_json::from_str(
            r#"{"tags": ["Rust", 7, true, null, {"a": 1}], "entries": [{"label": "a"}, "junk", null]}"#,
        )
        .unwrap();
        assert_eq!(record.tags, vec!["Rust", "7", "true"]);
        assert_eq!(record.entries.len(), 3);
        assert_eq!(record.entries[0].label.as_deref(), Some("a"));
        assert!(record.entries[1].label.is_none());
    }
}
