//! Shared catalog model for the storefront server and client.
//!
//! This crate owns the item representation used on both sides of the
//! `/api/items` boundary. The server maps the remote product schema into
//! [`CatalogItem`] once; the client only ever sees the shaped form.

pub mod item;
pub mod price;

pub use item::{CatalogItem, ItemRating, ProductList, RawItem};
pub use price::format_price;
