use super::holder::{SessionHolder, SessionPhase};
use super::storage::KeyValueStore;
use contracts::enums::TabId;
use leptos::prelude::*;

/// Reactive handle around `SessionHolder`.
///
/// Created once in `App` and passed down explicitly; no global lookup.
#[derive(Clone, Copy)]
pub struct SessionContext {
    holder: RwSignal<SessionHolder>,
}

impl SessionContext {
    pub fn new(enabled_tabs: Vec<TabId>) -> Self {
        Self {
            holder: RwSignal::new(SessionHolder::new(enabled_tabs)),
        }
    }

    /// Load the stored record. Returns whether a usable record was found.
    pub fn hydrate<S: KeyValueStore + ?Sized>(&self, store: &S) -> bool {
        let mut found = false;
        self.holder.update(|holder| {
            found = holder.load_data(store);
        });
        if !found {
            log::info!("starting with default session, tab '{}'", TabId::default());
        }
        found
    }

    pub fn is_ready(&self) -> bool {
        self.holder.with(|h| h.phase() == SessionPhase::Ready)
    }

    /// Tab to render (falls back to the default for disabled tabs)
    pub fn active_tab(&self) -> TabId {
        self.holder.with(|h| h.effective_tab())
    }

    pub fn active_tab_untracked(&self) -> TabId {
        self.holder.with_untracked(|h| h.effective_tab())
    }

    pub fn enabled_tabs(&self) -> Vec<TabId> {
        self.holder.with_untracked(|h| h.enabled_tabs().to_vec())
    }

    /// Switch to `tab` and persist. Re-selecting the current tab is a no-op.
    ///
    /// A failed write is logged; the in-memory switch still applies.
    pub fn switch_tab<S: KeyValueStore + ?Sized>(&self, tab: TabId, store: &S) {
        let unchanged = self.holder.with_untracked(|h| h.active_tab() == tab);
        if unchanged {
            return;
        }
        if !self.holder.with_untracked(|h| h.is_enabled(tab)) {
            log::warn!("ignoring switch to disabled tab '{}'", tab);
            return;
        }

        self.holder.update(|holder| {
            if let Err(e) = holder.next_tab(tab).save_data(store) {
                log::error!("failed to persist session: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::MemoryStorage;
    use contracts::shared::session::SESSION_STORAGE_KEY;

    fn context_without_character() -> SessionContext {
        Owner::new().set();
        SessionContext::new(
            TabId::ALL
                .into_iter()
                .filter(|t| !t.is_optional())
                .collect(),
        )
    }

    #[test]
    fn test_hydrate_restores_combat() {
        let session = context_without_character();
        let store =
            MemoryStorage::with_item(SESSION_STORAGE_KEY, r#"{"version":1,"activeTab":"combat"}"#);

        assert!(!session.is_ready());
        assert!(session.hydrate(&store));
        assert!(session.is_ready());
        assert_eq!(session.active_tab_untracked(), TabId::Combat);
    }

    #[test]
    fn test_hydrate_without_version_uses_default() {
        let session = context_without_character();
        let store = MemoryStorage::with_item(SESSION_STORAGE_KEY, r#"{"activeTab":"combat"}"#);

        assert!(!session.hydrate(&store));
        assert!(session.is_ready());
        assert_eq!(session.active_tab_untracked(), TabId::Production);
    }

    #[test]
    fn test_reselecting_active_tab_does_not_write() {
        let session = context_without_character();
        let store = MemoryStorage::new();
        session.hydrate(&store);

        session.switch_tab(TabId::Production, &store);

        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_switch_writes_once() {
        let session = context_without_character();
        let store = MemoryStorage::new();
        session.hydrate(&store);

        session.switch_tab(TabId::Combat, &store);

        assert_eq!(store.write_count(), 1);
        assert_eq!(
            store.get_item(SESSION_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"version":1,"activeTab":"combat"}"#)
        );
        assert_eq!(session.active_tab_untracked(), TabId::Combat);
    }

    #[test]
    fn test_disabled_tab_is_refused() {
        let session = context_without_character();
        let store = MemoryStorage::new();
        session.hydrate(&store);
        session.switch_tab(TabId::Combat, &store);

        session.switch_tab(TabId::Character, &store);

        assert_eq!(store.write_count(), 1);
        assert_eq!(session.active_tab_untracked(), TabId::Combat);
    }
}
