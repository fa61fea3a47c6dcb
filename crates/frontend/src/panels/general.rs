use super::lookup::{
    find_items, section_len, ACTION_DETAIL_MAP, COMBAT_MONSTER_DETAIL_MAP, ITEM_DETAIL_MAP,
};
use super::PanelFrame;
use crate::game_data::GameDataSignal;
use leptos::prelude::*;

const ITEM_LOOKUP_LIMIT: usize = 50;

#[component]
pub fn Calculator(data: GameDataSignal) -> impl IntoView {
    let summary = move || {
        data.get()
            .map(|d| {
                format!(
                    "{} actions across {} items",
                    section_len(&d, ACTION_DETAIL_MAP),
                    section_len(&d, ITEM_DETAIL_MAP)
                )
            })
            .unwrap_or_default()
    };

    view! {
        <PanelFrame panel_id="production".to_string() title="Production".to_string()>
            <p>{summary}</p>
        </PanelFrame>
    }
}

/// Search items by name
#[component]
pub fn ItemLookup(data: GameDataSignal) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let matches = Memo::new(move |_| {
        let query = query.get();
        if query.trim().is_empty() {
            return Vec::new();
        }
        data.get()
            .map(|d| find_items(&d, &query, ITEM_LOOKUP_LIMIT))
            .unwrap_or_default()
    });

    view! {
        <PanelFrame panel_id="item-lookup".to_string() title="Item Lookup".to_string()>
            <input
                class="panel__search"
                type="search"
                placeholder="Item name"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ul class="panel__list">
                {move || {
                    matches
                        .get()
                        .into_iter()
                        .map(|name| view! { <li>{name}</li> })
                        .collect_view()
                }}
            </ul>
        </PanelFrame>
    }
}

#[component]
pub fn Enhancing(data: GameDataSignal) -> impl IntoView {
    let items = move || data.get().map(|d| section_len(&d, ITEM_DETAIL_MAP)).unwrap_or(0);

    view! {
        <PanelFrame panel_id="enhancing".to_string() title="Enhancing".to_string()>
            <p>{move || format!("{} items available", items())}</p>
        </PanelFrame>
    }
}

#[component]
pub fn Combat(data: GameDataSignal) -> impl IntoView {
    let monsters = move || {
        data.get()
            .map(|d| section_len(&d, COMBAT_MONSTER_DETAIL_MAP))
            .unwrap_or(0)
    };

    view! {
        <PanelFrame panel_id="combat".to_string() title="Combat".to_string()>
            <p>{move || format!("{} monsters", monsters())}</p>
        </PanelFrame>
    }
}

#[component]
pub fn Character(data: GameDataSignal) -> impl IntoView {
    let version = move || data.get().map(|d| d.game_version.clone()).unwrap_or_default();

    view! {
        <PanelFrame panel_id="character".to_string() title="Character".to_string()>
            <p>{move || format!("Character data for game version {}", version())}</p>
        </PanelFrame>
    }
}

/// Market panel. Takes no game data; market prices come from their own feed.
#[component]
pub fn Market() -> impl IntoView {
    view! {
        <PanelFrame panel_id="market".to_string() title="Market".to_string()>
            <p>"Market prices are loaded separately from the game data."</p>
        </PanelFrame>
    }
}
