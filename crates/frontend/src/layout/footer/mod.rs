use crate::game_data::GameDataSignal;
use crate::shared::date_utils::format_local_datetime;
use contracts::shared::game_data::GameData;
use leptos::prelude::*;

const NO_MARKET_DATA: &str = "No data";

/// Label/value pairs shown in the footer
pub fn footer_entries(data: &GameData) -> [(&'static str, String); 2] {
    let market_date = data
        .market_time
        .as_ref()
        .map(format_local_datetime)
        .unwrap_or_else(|| NO_MARKET_DATA.to_string());

    [
        ("Game Version", data.game_version.clone()),
        ("Market Date", market_date),
    ]
}

#[component]
pub fn Footer(data: GameDataSignal) -> impl IntoView {
    view! {
        <footer data-zone="footer" class="status-bar">
            {move || {
                data.get()
                    .map(|d| {
                        footer_entries(&d)
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="status-bar__entry">
                                        {label} ": " <code>{value}</code>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(data: &GameData) -> Vec<String> {
        footer_entries(data)
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }

    #[test]
    fn test_footer_without_market_time() {
        let data: GameData =
            serde_json::from_str(r#"{"gameVersion": "1.2.3", "marketTime": null}"#).unwrap();
        assert_eq!(
            rendered_text(&data),
            vec!["Game Version: 1.2.3", "Market Date: No data"]
        );
    }

    #[test]
    fn test_footer_with_market_time() {
        let data: GameData = serde_json::from_str(
            r#"{"gameVersion": "1.2.3", "marketTime": "2024-03-15T14:02:26Z"}"#,
        )
        .unwrap();
        let [_, (label, value)] = footer_entries(&data);
        assert_eq!(label, "Market Date");
        assert_ne!(value, NO_MARKET_DATA);
        assert!(value.contains("2024"));
    }
}
