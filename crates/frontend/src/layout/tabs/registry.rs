//! Registry of opened tabs.
//!
//! Records which tabs have been selected at least once, in first-open order.
//! `TabHost` feeds its entries to a keyed `<For>`, which builds each `TabPage`
//! once and keeps it mounted; the registry itself holds no views.

use contracts::enums::TabId;
use contracts::shared::panel::PanelSpec;

/// Insertion-ordered cache whose factory runs at most once per key.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyRegistry<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialEq + Copy, V: Clone> LazyRegistry<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Cached value for `key`, calling `factory` only if it was never built.
    pub fn get_or_init(&mut self, key: K, factory: impl FnOnce(K) -> V) -> V {
        if let Some((_, value)) = self.entries.iter().find(|(k, _)| *k == key) {
            return value.clone();
        }
        let value = factory(key);
        self.entries.push((key, value.clone()));
        value
    }

    pub fn is_initialized(&self, key: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were first initialized
    pub fn entries(&self) -> Vec<(K, V)> {
        self.entries.clone()
    }
}

impl<K: PartialEq + Copy, V: Clone> Default for LazyRegistry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Opened tabs with the panel each one renders
pub type PanelRegistry = LazyRegistry<TabId, PanelSpec>;

/// Mark `tab` as opened, resolving its panel spec on first use
pub fn open_panel(registry: &mut PanelRegistry, tab: TabId) -> PanelSpec {
    registry.get_or_init(tab, |key| {
        log::debug!("initializing panel for tab '{}'", key);
        PanelSpec::for_tab(key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_factory_runs_once_per_key() {
        let calls = Cell::new(0);
        let mut registry: LazyRegistry<u8, String> = LazyRegistry::new();

        let first = registry.get_or_init(1, |k| {
            calls.set(calls.get() + 1);
            format!("panel-{}", k)
        });
        let second = registry.get_or_init(1, |_| {
            calls.set(calls.get() + 1);
            "rebuilt".to_string()
        });

        assert_eq!(first, "panel-1");
        assert_eq!(second, "panel-1");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_entries_keep_first_open_order() {
        let mut registry = PanelRegistry::new();
        open_panel(&mut registry, TabId::Combat);
        open_panel(&mut registry, TabId::Milking);
        open_panel(&mut registry, TabId::Combat);

        let keys: Vec<_> = registry.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![TabId::Combat, TabId::Milking]);
    }

    #[test]
    fn test_unselected_tabs_not_initialized() {
        let mut registry = PanelRegistry::new();
        assert!(registry.is_empty());
        open_panel(&mut registry, TabId::Production);
        assert!(registry.is_initialized(TabId::Production));
        assert!(!registry.is_initialized(TabId::Market));
        assert_eq!(registry.len(), 1);
    }
}
