use super::page::TabPage;
use super::registry::{open_panel, PanelRegistry};
use crate::game_data::GameDataSignal;
use crate::system::session::{BrowserStorage, SessionContext};
use contracts::enums::TabId;
use leptos::prelude::*;
use thaw::{Tab, TabList};

/// Tab strip and the panels opened so far.
///
/// Only the active panel is visible. A panel is built the first time its tab
/// becomes active and stays mounted for the rest of the session.
#[component]
pub fn TabHost(session: SessionContext, data: GameDataSignal) -> impl IntoView {
    let tabs = session.enabled_tabs();
    let initial = session.active_tab_untracked();

    let mut registry = PanelRegistry::new();
    open_panel(&mut registry, initial);
    let opened = RwSignal::new(registry);

    let selected_tab_value = RwSignal::new(initial.as_str().to_string());

    // Open the active panel on first selection
    Effect::new(move |_| {
        let active = session.active_tab();
        if !opened.with_untracked(|r| r.is_initialized(active)) {
            opened.update(|r| {
                open_panel(r, active);
            });
        }
    });

    // Sync selected_tab_value -> session, persisting each switch
    Effect::new(move |prev: Option<String>| {
        let current = selected_tab_value.get();
        if prev.is_some() {
            match TabId::from_key(&current) {
                Some(tab) => session.switch_tab(tab, &BrowserStorage),
                None => log::warn!("tab strip selected unknown key '{}'", current),
            }
        }
        current
    });

    view! {
        <div class="tab-host">
            <TabList selected_value=selected_tab_value>
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! { <Tab value=tab.as_str()>{tab.label()}</Tab> }
                    })
                    .collect_view()}
            </TabList>

            <div class="tab-host__panels">
                <For
                    each=move || opened.get().entries()
                    key=|(tab, _)| *tab
                    children=move |(tab, spec)| {
                        view! { <TabPage tab=tab spec=spec session=session data=data /> }
                    }
                />
            </div>
        </div>
    }
}
