//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (address bar, storage, media
//! queries) from page and component logic to keep them testable.

pub mod page_query;
pub mod theme;
