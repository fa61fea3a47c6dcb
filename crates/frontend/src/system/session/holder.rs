use super::storage::{KeyValueStore, SessionError};
use contracts::enums::TabId;
use contracts::shared::session::{StoredSession, SESSION_FORMAT_VERSION, SESSION_STORAGE_KEY};

/// Lifecycle of the holder. `Ready` is entered once, on the first `load_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Ready,
}

/// In-memory session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub active_tab: TabId,
}

/// Why a stored record was not used
#[derive(Debug)]
enum LoadMiss {
    Missing,
    Unavailable(SessionError),
    Corrupt(serde_json::Error),
    /// Format marker differs from `SESSION_FORMAT_VERSION` or is absent
    Outdated(Option<u32>),
    UnknownTab(String),
}

/// Holds the session state and moves it to and from a `KeyValueStore`.
///
/// Constructed explicitly with the set of tabs the current build shows, so a
/// restored tab is always one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHolder {
    state: SessionState,
    enabled_tabs: Vec<TabId>,
    phase: SessionPhase,
}

impl SessionHolder {
    pub fn new(enabled_tabs: Vec<TabId>) -> Self {
        Self {
            state: SessionState::default(),
            enabled_tabs,
            phase: SessionPhase::Uninitialized,
        }
    }

    pub fn active_tab(&self) -> TabId {
        self.state.active_tab
    }

    pub fn enabled_tabs(&self) -> &[TabId] {
        &self.enabled_tabs
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_enabled(&self, tab: TabId) -> bool {
        self.enabled_tabs.contains(&tab)
    }

    /// Restore the session record from `store`.
    ///
    /// Returns `true` only for a present, parseable, current-version record that
    /// names an enabled tab. Anything else resets the state to defaults.
    pub fn load_data<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> bool {
        self.phase = SessionPhase::Ready;

        match self.read_record(store) {
            Ok(tab) => {
                log::debug!("session restored, active tab '{}'", tab);
                self.state = SessionState { active_tab: tab };
                true
            }
            Err(miss) => {
                match &miss {
                    LoadMiss::Missing => log::info!("User data not found"),
                    LoadMiss::Outdated(Some(version)) => log::info!(
                        "User data out of date (format {}, expected {})",
                        version,
                        SESSION_FORMAT_VERSION
                    ),
                    LoadMiss::Outdated(None) => {
                        log::info!("User data has no format version, treating as not found")
                    }
                    LoadMiss::Unavailable(e) => log::warn!("session storage unavailable: {}", e),
                    LoadMiss::Corrupt(e) => log::warn!("session record is corrupt: {}", e),
                    LoadMiss::UnknownTab(key) => {
                        log::warn!("session record names unknown tab '{}', using default", key)
                    }
                }
                self.state = SessionState::default();
                false
            }
        }
    }

    fn read_record<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<TabId, LoadMiss> {
        let raw = store
            .get_item(SESSION_STORAGE_KEY)
            .map_err(LoadMiss::Unavailable)?
            .ok_or(LoadMiss::Missing)?;

        let record: StoredSession = serde_json::from_str(&raw).map_err(LoadMiss::Corrupt)?;
        if record.version != Some(SESSION_FORMAT_VERSION) {
            return Err(LoadMiss::Outdated(record.version));
        }

        TabId::from_key(&record.active_tab)
            .filter(|tab| self.is_enabled(*tab))
            .ok_or(LoadMiss::UnknownTab(record.active_tab))
    }

    /// Switch the active tab. Chain with `save_data` to persist.
    pub fn next_tab(&mut self, tab: TabId) -> &mut Self {
        self.state.active_tab = tab;
        self
    }

    /// Overwrite the stored record with the current state.
    pub fn save_data<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), SessionError> {
        let record = StoredSession {
            version: Some(SESSION_FORMAT_VERSION),
            active_tab: self.state.active_tab.as_str().to_string(),
        };
        let json = serde_json::to_string(&record)?;
        store.set_item(SESSION_STORAGE_KEY, &json)
    }

    /// Tab to actually render: the active one, or the default if it is not enabled.
    pub fn effective_tab(&self) -> TabId {
        let active = self.state.active_tab;
        if self.is_enabled(active) {
            active
        } else {
            TabId::default()
        }
    }
}
