//! Grid card for one catalog item.
//!
//! DESIGN
//! ======
//! The whole card is a link to the item detail page. Labels are built by
//! small pure helpers so their wording is tested without a DOM.

#[cfg(test)]
#[path = "item_card_test.rs"]
mod item_card_test;

use catalog::{CatalogItem, format_price};
use leptos::prelude::*;

/// Stock line shown under the rating.
pub fn stock_label(count: u64) -> String {
    if count == 0 {
        "No stock data".to_owned()
    } else {
        format!("{count} available")
    }
}

/// Rating to one decimal place.
pub fn rating_label(rate: f64) -> String {
    format!("{rate:.1}")
}

#[component]
pub fn ItemCard(item: CatalogItem) -> impl IntoView {
    let href = item.href();
    let price = format_price(item.price);
    let rating = rating_label(item.rating.rate);
    let stock = stock_label(item.rating.count);
    let image = (!item.image.is_empty()).then(|| {
        view! { <img class="item-card__image" src=item.image.clone() alt=item.title.clone() loading="lazy"/> }
    });

    view! {
        <a class="item-card" href=href>
            {image}
            <span class="item-card__meta">
                <span class="item-card__category">{item.category}</span>
                <span class="item-card__price">{price}</span>
            </span>
            <h3 class="item-card__title">{item.title}</h3>
            <p class="item-card__description">{item.description}</p>
            <span class="item-card__footer">
                <span class="item-card__rating" title="Rating">{format!("★ {rating}")}</span>
                <span class="item-card__stock">{stock}</span>
            </span>
        </a>
    }
}
