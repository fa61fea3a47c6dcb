//! Shared game data: fetching and periodic refresh.

pub mod api;
pub mod feed;

pub use feed::{FeedState, GameDataFeed};

use contracts::shared::game_data::GameData;
use leptos::prelude::Signal;
use std::sync::Arc;

/// Read-only view of the latest game data handed to panels
pub type GameDataSignal = Signal<Option<Arc<GameData>>>;
