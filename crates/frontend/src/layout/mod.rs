pub mod footer;
pub mod header;
pub mod tabs;

use crate::game_data::{FeedState, GameDataFeed, GameDataSignal};
use crate::shared::theme::ThemeContext;
use crate::system::session::SessionContext;
use footer::Footer;
use header::Header;
use leptos::prelude::*;
use tabs::TabHost;
use thaw::{MessageBar, MessageBarIntent, Spinner};

/// What the main area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellPhase {
    Loading,
    Failed(String),
    Ready,
}

/// Decide the main area from session readiness and the feed state.
///
/// Panels render only once the session is restored and data arrived at least
/// once. A failed refresh after that keeps the panels.
pub fn shell_phase(session_ready: bool, feed: &FeedState) -> ShellPhase {
    match (&feed.data, &feed.error) {
        (Some(_), _) if session_ready => ShellPhase::Ready,
        (None, Some(e)) => ShellPhase::Failed(e.clone()),
        _ => ShellPhase::Loading,
    }
}

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, color scheme toggle)     |
/// +------------------------------------------+
/// |  Loader / error / TabHost                |
/// +------------------------------------------+
/// |  Footer (game version, market date)      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    session: SessionContext,
    feed: GameDataFeed,
    theme: ThemeContext,
    /// Seconds between refetches, shown in the error message
    refresh_interval_secs: u64,
) -> impl IntoView {
    let feed_state = feed.state();
    let phase = Memo::new(move |_| feed_state.with(|s| shell_phase(session.is_ready(), s)));
    let data: GameDataSignal = Signal::derive(move || feed.data());

    view! {
        <div class="app-layout">
            <Header theme=theme />

            <main class="app-main">
                {move || match phase.get() {
                    ShellPhase::Loading => view! {
                        <div class="app-main__loader">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    ShellPhase::Failed(message) => view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <span>
                                {format!(
                                    "Failed to load game data: {}. Retrying in {} seconds.",
                                    message, refresh_interval_secs
                                )}
                            </span>
                        </MessageBar>
                    }
                    .into_any(),
                    ShellPhase::Ready => view! { <TabHost session=session data=data /> }.into_any(),
                }}
            </main>

            <Show when=move || phase.get() == ShellPhase::Ready>
                <Footer data=data />
            </Show>
        </div>
    }
}
