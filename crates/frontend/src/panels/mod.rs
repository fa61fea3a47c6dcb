//! Panels rendered inside the tabs.
//!
//! Each panel receives the shared game data read-only. Skill panels are
//! parametric: one component serves several tabs.

pub mod general;
pub mod lookup;
pub mod skill;

use crate::game_data::GameDataSignal;
use contracts::shared::panel::PanelSpec;
use leptos::prelude::*;

pub use general::{Calculator, Character, Combat, Enhancing, ItemLookup, Market};
pub use skill::{ActionCategorySelector, Gathering};

/// Build the view for a panel spec
pub fn render_panel(spec: PanelSpec, data: GameDataSignal) -> AnyView {
    match spec {
        PanelSpec::Character => view! { <Character data=data /> }.into_any(),
        PanelSpec::Production => view! { <Calculator data=data /> }.into_any(),
        PanelSpec::ItemLookup => view! { <ItemLookup data=data /> }.into_any(),
        PanelSpec::Gathering { skill, action_type } => {
            view! { <Gathering skill=skill action_type=action_type data=data /> }.into_any()
        }
        PanelSpec::ActionCategory { skill } => {
            view! { <ActionCategorySelector skill=skill data=data /> }.into_any()
        }
        PanelSpec::Enhancing => view! { <Enhancing data=data /> }.into_any(),
        PanelSpec::Combat => view! { <Combat data=data /> }.into_any(),
        PanelSpec::Market => view! { <Market /> }.into_any(),
    }
}

/// Root wrapper of every panel, sets `id="panel--{key}"`.
#[component]
pub fn PanelFrame(
    /// Panel key, e.g. `"gathering-milking"`
    panel_id: String,
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=format!("panel--{}", panel_id) class="panel">
            <h2 class="panel__title">{title}</h2>
            <div class="panel__content">{children()}</div>
        </section>
    }
}
