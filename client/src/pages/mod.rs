//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data loading and delegates rendering details
//! to `components`.

pub mod catalog;
pub mod item;
