use super::lookup::{action_categories, action_names, actions_in_category, hrid_tail};
use super::PanelFrame;
use crate::game_data::GameDataSignal;
use contracts::enums::{ActionType, Skill};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Gathering skill panel, shared by milking, foraging and woodcutting.
#[component]
pub fn Gathering(skill: Skill, action_type: ActionType, data: GameDataSignal) -> impl IntoView {
    let actions = Memo::new(move |_| {
        data.get()
            .map(|d| action_names(&d, action_type.hrid()))
            .unwrap_or_default()
    });

    view! {
        <PanelFrame
            panel_id=format!("gathering-{}", hrid_tail(skill.hrid()))
            title=skill.display_name().to_string()
        >
            <Show
                when=move || !actions.get().is_empty()
                fallback=|| view! { <p class="panel__empty">"No actions for this skill"</p> }
            >
                <ul class="panel__list">
                    {move || {
                        actions
                            .get()
                            .into_iter()
                            .map(|name| view! { <li>{name}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </PanelFrame>
    }
}

/// Production skill panel: pick an action category, list its actions.
///
/// Keyed by skill only; the action type is derived from the skill hrid.
#[component]
pub fn ActionCategorySelector(skill: Skill, data: GameDataSignal) -> impl IntoView {
    let type_hrid = format!("/action_types/{}", hrid_tail(skill.hrid()));
    let selected = RwSignal::new(None::<String>);

    let categories = {
        let type_hrid = type_hrid.clone();
        Memo::new(move |_| {
            data.get()
                .map(|d| action_categories(&d, &type_hrid))
                .unwrap_or_default()
        })
    };

    // Selection falls back to the first category when unset or gone after a refresh
    let current = Memo::new(move |_| {
        let categories = categories.get();
        selected
            .get()
            .filter(|c| categories.contains(c))
            .or_else(|| categories.first().cloned())
    });

    let actions = Memo::new(move |_| match (data.get(), current.get()) {
        (Some(d), Some(category)) => actions_in_category(&d, &type_hrid, &category),
        _ => Vec::new(),
    });

    view! {
        <PanelFrame
            panel_id=format!("production-{}", hrid_tail(skill.hrid()))
            title=skill.display_name().to_string()
        >
            <div class="panel__toolbar">
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|category| {
                            let is_current = current.get().as_deref() == Some(category.as_str());
                            let label = hrid_tail(&category).replace('_', " ");
                            let on_pick = category.clone();
                            let appearance = if is_current {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            };
                            view! {
                                <Button
                                    appearance=appearance
                                    size=ButtonSize::Small
                                    on_click=move |_| selected.set(Some(on_pick.clone()))
                                >
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <ul class="panel__list">
                {move || {
                    actions
                        .get()
                        .into_iter()
                        .map(|name| view! { <li>{name}</li> })
                        .collect_view()
                }}
            </ul>
        </PanelFrame>
    }
}
