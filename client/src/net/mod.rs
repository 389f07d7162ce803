//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` calls the storefront's own JSON endpoints; the server owns the
//! upstream catalog and its cache.

pub mod api;
