//! Per-user session state: which tab was open last.
//!
//! - `storage` - key-value storage backends (browser localStorage, in-memory)
//! - `holder` - `SessionHolder`, load/switch/save of the session record
//! - `context` - reactive wrapper used by the layout

pub mod context;
pub mod holder;
pub mod storage;

pub use context::SessionContext;
pub use holder::{SessionHolder, SessionPhase};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, SessionError};
