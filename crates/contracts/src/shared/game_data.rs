use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Shared game data payload served by the data endpoint.
///
/// Only the fields the shell itself reads are typed; everything else is
/// kept verbatim in `extra` and handed to the panels untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub game_version: String,
    #[serde(default, deserialize_with = "lenient_market_time")]
    pub market_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GameData {
    /// Look up an opaque top-level section, e.g. `itemDetailMap`
    pub fn section(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

/// Accept an RFC 3339 string; anything else becomes `None` instead of failing
/// the whole payload.
fn lenient_market_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => match DateTime::parse_from_rfc3339(&s) {
            Ok(t) => Some(t.with_timezone(&Utc)),
            Err(e) => {
                log::warn!("ignoring unparseable marketTime '{}': {}", s, e);
                None
            }
        },
        Some(other) => {
            log::warn!("ignoring marketTime of unexpected shape: {}", other);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_market_time() {
        let data: GameData =
            serde_json::from_str(r#"{"gameVersion": "1.2.3", "marketTime": null}"#).unwrap();
        assert_eq!(data.game_version, "1.2.3");
        assert!(data.market_time.is_none());
        assert!(data.extra.is_empty());
    }

    #[test]
    fn test_parse_keeps_unknown_sections() {
        let data: GameData = serde_json::from_str(
            r#"{
                "gameVersion": "0.4.1",
                "marketTime": "2024-03-15T14:02:26Z",
                "itemDetailMap": {"/items/milk": {"name": "Milk"}}
            }"#,
        )
        .unwrap();
        assert_eq!(
            data.market_time.map(|t| t.to_rfc3339()),
            Some("2024-03-15T14:02:26+00:00".to_string())
        );
        assert_eq!(
            data.section("itemDetailMap").and_then(|m| m["/items/milk"]["name"].as_str()),
            Some("Milk")
        );
    }

    #[test]
    fn test_unparseable_market_time_is_dropped() {
        let data: GameData =
            serde_json::from_str(r#"{"gameVersion": "1.2.3", "marketTime": 1710511346}"#).unwrap();
        assert_eq!(data.game_version, "1.2.3");
        assert!(data.market_time.is_none());

        let data: GameData =
            serde_json::from_str(r#"{"gameVersion": "1.2.3", "marketTime": "yesterday"}"#).unwrap();
        assert!(data.market_time.is_none());
        assert!(data.extra.is_empty());
    }

    #[test]
    fn test_absent_market_time() {
        let data: GameData = serde_json::from_str(r#"{"gameVersion": "1.2.3"}"#).unwrap();
        assert!(data.market_time.is_none());
    }

    #[test]
    fn test_missing_version_is_rejected() {
        let result: Result<GameData, _> = serde_json::from_str(r#"{"marketTime": null}"#);
        assert!(result.is_err());
    }
}
