use crate::shared::theme::{ColorSchemeToggle, ThemeContext};
use leptos::prelude::*;

#[component]
pub fn Header(theme: ThemeContext) -> impl IntoView {
    view! {
        <header data-zone="header" class="app-header">
            <span class="app-header__title">"MWI Companion"</span>
            <ColorSchemeToggle theme=theme />
        </header>
    }
}
