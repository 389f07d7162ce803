//! Item detail page at `/item/:slug`.

use catalog::{CatalogItem, format_price};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::item_card::{rating_label, stock_label};
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::fetch_item;

#[component]
pub fn ItemPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let item = LocalResource::new(move || {
        let slug = slug();
        async move { fetch_item(&slug).await }
    });

    view! {
        <div class="item-page">
            <header class="catalog-page__header">
                <a class="item-page__back" href="/">"← Back to catalog"</a>
                <span class="catalog-page__spacer"></span>
                <ThemeToggle/>
            </header>

            <main class="item-page__content">
                <Suspense fallback=move || view! { <p class="item-page__loading">"Loading product..."</p> }>
                    {move || {
                        item.get()
                            .map(|found| match found {
                                Some(item) => render_item(item).into_any(),
                                None => view! { <p class="item-page__missing">"Product not found."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

fn render_item(item: CatalogItem) -> impl IntoView {
    let image = (!item.image.is_empty()).then(|| {
        view! { <img class="item-page__image" src=item.image.clone() alt=item.title.clone()/> }
    });
    view! {
        <article class="item-page__detail">
            {image}
            <div class="item-page__body">
                <span class="item-card__category">{item.category}</span>
                <h1 class="item-page__title">{item.title}</h1>
                <p class="item-page__price">{format_price(item.price)}</p>
                <p class="item-page__description">{item.description}</p>
                <p class="item-page__rating">{format!("★ {}", rating_label(item.rating.rate))}</p>
                <p class="item-page__stock">{stock_label(item.rating.count)}</p>
            </div>
        </article>
    }
}
