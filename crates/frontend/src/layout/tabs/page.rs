//! TabPage component - wrapper around the content of one opened tab

use crate::game_data::GameDataSignal;
use crate::panels::render_panel;
use crate::system::session::SessionContext;
use contracts::enums::TabId;
use contracts::shared::panel::PanelSpec;
use leptos::prelude::*;

/// Renders the panel once and toggles visibility through the
/// `tabs__item--hidden` class, so switching away keeps its state.
#[component]
pub fn TabPage(
    tab: TabId,
    spec: PanelSpec,
    session: SessionContext,
    data: GameDataSignal,
) -> impl IntoView {
    let is_active = move || session.active_tab() == tab;

    log::debug!("TabPage created for '{}'", tab);
    on_cleanup(move || {
        log::debug!("TabPage destroyed for '{}'", tab);
    });

    let content = render_panel(spec, data);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.as_str()
        >
            {content}
        </div>
    }
}
