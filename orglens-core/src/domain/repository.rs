//! Repository domain types

use serde::{Deserialize, Deserializer, Serialize};

/// A repository as listed by the upstream organization endpoint
///
/// Only the fields Orglens exposes are decoded; everything else the upstream
/// returns is ignored. Missing or `null` fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep the records whose name contains `needle`, ignoring case
///
/// An empty needle returns the records untouched. Upstream ordering is
/// preserved and no record is duplicated.
pub fn filter_by_name(records: Vec<RepositoryRecord>, needle: &str) -> Vec<RepositoryRecord> {
    if needle.is_empty() {
        return records;
    }

    let needle = needle.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            full_name: format!("acme/{}", name),
            ..Default::default()
        }
    }

    fn names(records: &[RepositoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_needle_is_identity() {
        let records = vec![record("go"), record("tools"), record("goland")];
        assert_eq!(filter_by_name(records.clone(), ""), records);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = vec![record("MyRepo")];
        assert_eq!(filter_by_name(records.clone(), "myrepo").len(), 1);
        assert_eq!(filter_by_name(records.clone(), "REPO").len(), 1);
        assert_eq!(filter_by_name(records, "yR").len(), 1);
    }

    #[test]
    fn test_filter_matches_substring_in_order() {
        let records = vec![
            record("golang"),
            record("tools"),
            record("cargo"),
            record("go"),
        ];

        let filtered = filter_by_name(records, "go");
        assert_eq!(names(&filtered), vec!["golang", "cargo", "go"]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let records = vec![record("go"), record("goland")];
        assert!(filter_by_name(records, "xyz").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![record("Go"), record("rust"), record("GOLAND"), record("hugo")];

        let once = filter_by_name(records, "go");
        let twice = filter_by_name(once.clone(), "go");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_decode_ignores_unknown_and_defaults_missing() {
        let body = r#"[
            {"name":"go","stargazers_count":100,"id":23096959,"private":false},
            {"name":"tools","full_name":"golang/tools","description":null,"language":null,
             "html_url":"https://github.com/golang/tools","stargazers_count":7000}
        ]"#;

        let records: Vec<RepositoryRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "go");
        assert_eq!(records[0].stargazers_count, 100);
        assert_eq!(records[0].full_name, "");
        assert_eq!(records[1].description, "");
        assert_eq!(records[1].language, "");
        assert_eq!(records[1].html_url, "https://github.com/golang/tools");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let result = serde_json::from_str::<Vec<RepositoryRecord>>(r#"{"message":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_all_fields() {
        let value = serde_json::to_value(record("go")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "go",
                "full_name": "acme/go",
                "description": "",
                "html_url": "",
                "stargazers_count": 0,
                "language": ""
            })
        );
    }
}
