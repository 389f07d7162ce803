//! Catalog grid with search, category filter, and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog page hands this component the loaded item list and the page
//! read from the `page` query parameter. All filtering and paging rules live
//! in `ListingState`; this component only wires inputs and renders.
//!
//! DESIGN
//! ======
//! Page changes made here (filter reset, clamping) are mirrored into the
//! address bar as replace-navigations through the router, so the router's
//! query and the grid never disagree. Page links are plain anchors carrying
//! the current query string; the router handles them and the new
//! `initial_page` flows back in.

#[cfg(test)]
#[path = "items_list_test.rs"]
mod items_list_test;

use catalog::CatalogItem;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::item_card::ItemCard;
use crate::state::listing::{DEFAULT_PAGE_SIZE, ListingState, PageLink};
use crate::util::page_query::sync_target;

/// "Results: X of Y products." line.
pub fn results_summary(visible: usize, total: usize) -> String {
    format!("Results: {visible} of {total} products.")
}

/// "Page X of Y" indicator in the pagination bar.
pub fn page_status(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {total_pages}")
}

#[component]
pub fn ItemsList(
    #[prop(into)] items: Signal<Vec<CatalogItem>>,
    #[prop(into)] initial_page: Signal<usize>,
    #[prop(default = DEFAULT_PAGE_SIZE)] page_size: usize,
) -> impl IntoView {
    let listing = RwSignal::new(ListingState::new(
        items.get_untracked(),
        initial_page.get_untracked(),
        page_size,
    ));
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);

    Effect::new(move || {
        let next = items.get();
        listing.update(|state| state.replace_items(next));
    });

    // URL -> state when the `page` parameter changes (links, back/forward),
    // then state -> URL through the router so both always agree.
    let navigate = use_navigate();
    let page = Memo::new(move |_| listing.with(ListingState::page));
    Effect::new(move |previous_url_page: Option<usize>| {
        let url_page = initial_page.get();
        if previous_url_page != Some(url_page) {
            listing.update(|state| state.set_page(url_page));
        }
        let current = page.get();
        if let Some(href) = sync_target(&pathname.get_untracked(), &search.get_untracked(), current) {
            navigate(&href, NavigateOptions { replace: true, scroll: false, ..NavigateOptions::default() });
        }
        url_page
    });

    let categories = move || listing.with(ListingState::categories);
    let summary = move || listing.with(|state| results_summary(state.filtered_items().len(), state.items().len()));
    let links = move || listing.with(|state| state.page_links(&pathname.get(), &search.get()));

    view! {
        <section class="items-list">
            <div class="items-list__controls">
                <input
                    class="items-list__search"
                    type="search"
                    placeholder="Search products"
                    aria-label="Search products"
                    prop:value=move || listing.with(|state| state.query().to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        listing.update(|state| state.set_query(value));
                    }
                />
                <select
                    class="items-list__category"
                    aria-label="Category"
                    prop:value=move || listing.with(|state| state.category().to_owned())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        listing.update(|state| state.set_category(value));
                    }
                >
                    {move || {
                        categories()
                            .into_iter()
                            .map(|category| {
                                let value = category.clone();
                                let selected = move || listing.with(|state| state.category() == value);
                                view! { <option value=category.clone() selected=selected>{category.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <p class="items-list__summary">{summary}</p>

            <Show
                when=move || !listing.with(ListingState::is_empty)
                fallback=|| view! { <p class="items-list__empty">"No products match your search."</p> }
            >
                <div class="items-list__grid">
                    <For
                        each=move || listing.with(|state| state.paginated_items().to_vec())
                        key=|item| item.id
                        children=|item| view! { <ItemCard item/> }
                    />
                </div>

                <nav class="pagination" aria-label="Pagination">
                    {move || {
                        let links = links();
                        view! {
                            {page_anchor(links.previous, "Previous".to_owned(), "pagination__link pagination__link--previous")}
                            {links
                                .pages
                                .into_iter()
                                .map(|link| {
                                    let label = link.page.to_string();
                                    page_anchor(link, label, "pagination__link")
                                })
                                .collect_view()}
                            {page_anchor(links.next, "Next".to_owned(), "pagination__link pagination__link--next")}
                        }
                    }}
                    <span class="pagination__status">
                        {move || listing.with(|state| page_status(state.page(), state.total_pages()))}
                    </span>
                </nav>
            </Show>
        </section>
    }
}

/// Disabled anchors stay in the DOM but ignore clicks and keyboard focus.
fn page_anchor(link: PageLink, label: String, class: &'static str) -> impl IntoView {
    let disabled = link.disabled;
    view! {
        <a
            class=class
            class:pagination__link--current=link.current
            class:pagination__link--disabled=disabled
            href=link.href
            aria-current=link.current.then_some("page")
            aria-disabled=disabled.then_some("true")
            tabindex=disabled.then_some("-1")
            on:click=move |ev: leptos::ev::MouseEvent| {
                if disabled {
                    ev.prevent_default();
                }
            }
        >
            {label}
        </a>
    }
}
