//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own remote I/O and caching so route handlers can stay
//! focused on protocol translation.

pub mod catalog;
