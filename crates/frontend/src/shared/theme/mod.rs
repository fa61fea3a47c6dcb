//! Color scheme preference.
//!
//! Persisted under its own storage key, separate from the session record,
//! and applied as a `data-theme` attribute on `<body>`.

use crate::system::session::{KeyValueStore, SessionError};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};
use web_sys::window;

const COLOR_SCHEME_STORAGE_KEY: &str = "mwi-companion.color-scheme";

/// Available color schemes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    /// Name used for the `data-theme` attribute and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    /// Parse a stored value; anything unknown maps to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => ColorScheme::Light,
            _ => ColorScheme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    /// Label for the toggle button (names the scheme it switches to)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Light mode",
            ColorScheme::Light => "Dark mode",
        }
    }
}

pub fn load_color_scheme<S: KeyValueStore + ?Sized>(store: &S) -> ColorScheme {
    match store.get_item(COLOR_SCHEME_STORAGE_KEY) {
        Ok(Some(value)) => ColorScheme::from_str(&value),
        Ok(None) => ColorScheme::default(),
        Err(e) => {
            log::warn!("failed to read color scheme: {}", e);
            ColorScheme::default()
        }
    }
}

pub fn save_color_scheme<S: KeyValueStore + ?Sized>(
    store: &S,
    scheme: ColorScheme,
) -> Result<(), SessionError> {
    store.set_item(COLOR_SCHEME_STORAGE_KEY, scheme.as_str())
}

/// Set `data-theme` on `<body>`
fn apply_color_scheme(scheme: ColorScheme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", scheme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub scheme: RwSignal<ColorScheme>,
}

impl ThemeContext {
    /// Restore the stored scheme and apply it to the document.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let scheme = load_color_scheme(store);
        apply_color_scheme(scheme);
        Self {
            scheme: RwSignal::new(scheme),
        }
    }

    /// Switch to the other scheme and persist it.
    pub fn toggle<S: KeyValueStore + ?Sized>(&self, store: &S) {
        let next = self.scheme.get_untracked().toggled();
        self.scheme.set(next);
        apply_color_scheme(next);
        if let Err(e) = save_color_scheme(store, next) {
            log::error!("failed to persist color scheme: {}", e);
        }
    }
}

/// Button switching between dark and light.
#[component]
pub fn ColorSchemeToggle(theme: ThemeContext) -> impl IntoView {
    use crate::system::session::BrowserStorage;

    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            size=ButtonSize::Small
            on_click=move |_| theme.toggle(&BrowserStorage)
        >
            {move || theme.scheme.get().toggle_label()}
        </Button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::MemoryStorage;

    #[test]
    fn test_from_str_unknown_is_default() {
        assert_eq!(ColorScheme::from_str("light"), ColorScheme::Light);
        assert_eq!(ColorScheme::from_str("forest"), ColorScheme::Dark);
    }

    #[test]
    fn test_saved_scheme_loads_back() {
        let store = MemoryStorage::new();
        assert_eq!(load_color_scheme(&store), ColorScheme::Dark);
        save_color_scheme(&store, ColorScheme::Light).unwrap();
        assert_eq!(load_color_scheme(&store), ColorScheme::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ColorScheme::Dark.toggled().toggled(), ColorScheme::Dark);
    }
}
