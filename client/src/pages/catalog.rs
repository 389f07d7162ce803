//! Catalog landing page: header with theme toggle plus the item grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Items load from `/api/items` after hydration. The starting page comes from
//! the `page` query parameter and keeps following it as the router navigates.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::items_list::ItemsList;
use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::fetch_items;
use crate::util::page_query::{PAGE_PARAM, parse_page};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let query = use_query_map();
    let initial_page = Signal::derive(move || parse_page(query.read().get(PAGE_PARAM).as_deref()));
    let items = LocalResource::new(fetch_items);

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <a class="catalog-page__brand" href="/">"Storefront"</a>
                <span class="catalog-page__spacer"></span>
                <ThemeToggle/>
            </header>

            <main class="catalog-page__content">
                <Suspense fallback=move || view! { <p class="catalog-page__loading">"Loading products..."</p> }>
                    {move || {
                        items
                            .get()
                            .map(|result| match result {
                                Ok(list) => view! { <ItemsList items=Signal::stored(list) initial_page/> }.into_any(),
                                Err(message) => {
                                    view! { <p class="catalog-page__error">{message}</p> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
