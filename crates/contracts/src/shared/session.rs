use serde::{Deserialize, Serialize};

/// Storage key of the persisted session record
pub const SESSION_STORAGE_KEY: &str = "mwi-companion.session";

/// Bump whenever `StoredSession` changes incompatibly; older records are discarded.
pub const SESSION_FORMAT_VERSION: u32 = 1;

/// Persisted session record.
///
/// `active_tab` stays a plain string so a record written by a build with a
/// different tab set still parses and can be rejected explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    /// Absent in records written before the format was versioned
    #[serde(default)]
    pub version: Option<u32>,
    pub active_tab: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_layout() {
        let record = StoredSession {
            version: Some(SESSION_FORMAT_VERSION),
            active_tab: "combat".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"version":1,"activeTab":"combat"}"#);
    }

    #[test]
    fn test_record_without_version_parses() {
        let record: StoredSession = serde_json::from_str(r#"{"activeTab":"combat"}"#).unwrap();
        assert_eq!(record.version, None);
    }
}
