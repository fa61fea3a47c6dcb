use crate::game_data::GameDataFeed;
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::theme::ThemeContext;
use crate::system::session::{BrowserStorage, SessionContext};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Session and feed are created here and handed down explicitly.
    let session = SessionContext::new(config.enabled_tabs());
    let feed = GameDataFeed::new();
    let theme = ThemeContext::restore(&BrowserStorage);

    feed.start(config.data.url.clone(), config.refresh_interval());

    // Restore the session after mount; panels wait for it.
    Effect::new(move |_| {
        session.hydrate(&BrowserStorage);
    });

    view! {
        <ConfigProvider>
            <Shell
                session=session
                feed=feed
                theme=theme
                refresh_interval_secs=config.data.refresh_interval_secs
            />
        </ConfigProvider>
    }
}
