//! Tab management.
//!
//! - `page` — TabPage wrapper showing/hiding a tab's content
//! - `registry` — the single source of truth mapping tab.key → View
//! - `tab_labels` — the single source of truth for tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
