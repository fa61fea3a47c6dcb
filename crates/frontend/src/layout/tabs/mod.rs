//! Tab management module
//!
//! - `host` - `TabHost`, the tab strip plus the opened panels
//! - `page` - `TabPage` wrapper showing/hiding one panel
//! - `registry` - which tabs have been opened so far

pub mod host;
pub mod page;
pub mod registry;

pub use host::TabHost;
pub use page::TabPage;
