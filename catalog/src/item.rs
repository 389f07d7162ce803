//! Catalog items and the raw product schema they are mapped from.
//!
//! DESIGN
//! ======
//! Mapping is total. Every optional raw field deserializes to `None` when it
//! is missing or `null`, and `CatalogItem::from` fills the shaped model with
//! `0` or an empty string, so nothing partial leaks past this module.
//! Numeric fields accept any JSON value: one malformed record degrades to
//! defaults instead of failing the whole product list.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

/// Product record as returned by the remote catalog API.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "whole_or_zero")]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "finite")]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "finite")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "whole")]
    pub stock: Option<u64>,
}

/// Any JSON value in a numeric slot.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Whole(u64),
    Real(f64),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl LooseNumber {
    #[allow(clippy::cast_precision_loss)]
    fn real(self) -> Option<f64> {
        match self {
            Self::Whole(n) => Some(n as f64),
            Self::Real(f) if f.is_finite() => Some(f),
            Self::Real(_) | Self::Other(_) => None,
        }
    }

    /// Whole non-negative values only; `5.0` counts, `5.5` and `-1` do not.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn whole(self) -> Option<u64> {
        match self {
            Self::Whole(n) => Some(n),
            Self::Real(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Some(f as u64),
            Self::Real(_) | Self::Other(_) => None,
        }
    }
}

fn finite<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    LooseNumber::deserialize(deserializer).map(LooseNumber::real)
}

fn whole<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    LooseNumber::deserialize(deserializer).map(LooseNumber::whole)
}

fn whole_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    whole(deserializer).map(Option::unwrap_or_default)
}

/// Envelope returned by the catalog list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<RawItem>,
}

/// Rating block shown on item cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRating {
    pub rate: f64,
    /// Units in stock.
    pub count: u64,
}

/// A product shaped for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    /// URL identifier used by `/item/<slug>`.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub rating: ItemRating,
}

impl CatalogItem {
    /// Detail page path for this item.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/item/{}", self.slug)
    }
}

impl From<RawItem> for CatalogItem {
    fn from(raw: RawItem) -> Self {
        let image = pick_image(raw.thumbnail, raw.images);
        Self {
            id: raw.id,
            slug: raw.id.to_string(),
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            category: raw.category.unwrap_or_default(),
            price: raw.price.unwrap_or_default(),
            image,
            rating: ItemRating { rate: raw.rating.unwrap_or_default(), count: raw.stock.unwrap_or_default() },
        }
    }
}

fn pick_image(thumbnail: Option<String>, images: Option<Vec<String>>) -> String {
    thumbnail
        .filter(|t| !t.is_empty())
        .or_else(|| images.and_then(|list| list.into_iter().next()))
        .unwrap_or_default()
}
