use super::api;
use contracts::shared::game_data::GameData;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use std::time::Duration;

/// Latest fetch outcome.
///
/// `data` survives later failed refreshes; `error` reflects the latest attempt only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub data: Option<Arc<GameData>>,
    pub error: Option<String>,
    /// Number of fetch attempts completed
    pub revision: u64,
}

impl FeedState {
    pub fn apply(&mut self, result: Result<GameData, String>) {
        self.revision += 1;
        match result {
            Ok(data) => {
                self.data = Some(Arc::new(data));
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.revision == 0
    }
}

/// Periodically refreshed game data
#[derive(Clone, Copy)]
pub struct GameDataFeed {
    state: RwSignal<FeedState>,
}

impl GameDataFeed {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FeedState::default()),
        }
    }

    pub fn state(&self) -> RwSignal<FeedState> {
        self.state
    }

    pub fn data(&self) -> Option<Arc<GameData>> {
        self.state.with(|s| s.data.clone())
    }

    /// Fetch now, then again every `interval` until the owning scope is disposed.
    pub fn start(&self, url: String, interval: Duration) {
        let state = self.state;
        let delay_ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);

        spawn_local(async move {
            loop {
                let result = api::fetch_game_data(&url).await;
                match &result {
                    Ok(data) => log::debug!("game data fetched, version {}", data.game_version),
                    Err(e) => log::warn!("game data fetch from '{}' failed: {}", url, e),
                }

                if state.try_update(|s| s.apply(result)).is_none() {
                    log::debug!("game data feed disposed, stopping refresh");
                    break;
                }

                TimeoutFuture::new(delay_ms).await;
            }
        });
    }
}

impl Default for GameDataFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_data(version: &str) -> GameData {
        GameData {
            game_version: version.to_string(),
            market_time: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_starts_pending() {
        let state = FeedState::default();
        assert!(state.is_pending());
        assert!(state.data.is_none());
    }

    #[test]
    fn test_success_replaces_data() {
        let mut state = FeedState::default();
        state.apply(Ok(game_data("1.0.0")));
        state.apply(Ok(game_data("1.0.1")));
        assert_eq!(state.data.as_ref().map(|d| d.game_version.as_str()), Some("1.0.1"));
        assert_eq!(state.revision, 2);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_data() {
        let mut state = FeedState::default();
        state.apply(Ok(game_data("1.0.0")));
        state.apply(Err("HTTP error: 502".to_string()));
        assert_eq!(state.data.as_ref().map(|d| d.game_version.as_str()), Some("1.0.0"));
        assert_eq!(state.error.as_deref(), Some("HTTP error: 502"));
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = FeedState::default();
        state.apply(Err("Request failed".to_string()));
        state.apply(Ok(game_data("1.0.0")));
        assert!(state.error.is_none());
        assert!(!state.is_pending());
    }
}
