use contracts::shared::game_data::GameData;
use gloo_net::http::Request;

/// Fetch the game data payload from `url`
pub async fn fetch_game_data(url: &str) -> Result<GameData, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_game_data(&body)
}

pub fn parse_game_data(body: &str) -> Result<GameData, String> {
    serde_json::from_str(body).map_err(|e| format!("Failed to parse response: {}", e))
}
