//! Catalog grid state: search, category facet, and pagination.
//!
//! DESIGN
//! ======
//! `ListingState` is a plain struct held in an `RwSignal` by the grid
//! component. Every mutator restores the same invariants before returning:
//! the filtered set matches the current query and category, and
//! `1 <= page <= total_pages`. Filtering is recomputed only when the item
//! list, the query, or the category changes; page navigation just re-slices.
//!
//! Changing the query or the category sends the user back to page 1, since
//! the previous page position no longer refers to the same results.

use catalog::CatalogItem;

use crate::util::page_query::page_href;

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Synthetic facet that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Number of pages needed for `count` results, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Category options in display order: `"all"`, then first-seen order.
pub fn category_facets(items: &[CatalogItem]) -> Vec<String> {
    let mut facets = vec![ALL_CATEGORIES.to_owned()];
    for item in items {
        if !facets[1..].contains(&item.category) {
            facets.push(item.category.clone());
        }
    }
    facets
}

/// Whether `item` is visible for a lowercased, trimmed `needle` and `category`.
pub fn matches(item: &CatalogItem, needle: &str, category: &str) -> bool {
    let category_ok = category == ALL_CATEGORIES || item.category == category;
    let query_ok = needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.category.to_lowercase().contains(needle);
    category_ok && query_ok
}

/// One pagination anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
    /// Rendered but not activatable.
    pub disabled: bool,
    pub current: bool,
}

/// Previous/next anchors plus one anchor per page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLinks {
    pub previous: PageLink,
    pub next: PageLink,
    pub pages: Vec<PageLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    items: Vec<CatalogItem>,
    query: String,
    category: String,
    page: usize,
    page_size: usize,
    filtered: Vec<CatalogItem>,
    total_pages: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(Vec::new(), 1, DEFAULT_PAGE_SIZE)
    }
}

impl ListingState {
    /// Build state for `items`, starting at `initial_page` (clamped).
    pub fn new(items: Vec<CatalogItem>, initial_page: usize, page_size: usize) -> Self {
        let mut state = Self {
            items,
            query: String::new(),
            category: ALL_CATEGORIES.to_owned(),
            page: initial_page,
            page_size: page_size.max(1),
            filtered: Vec::new(),
            total_pages: 1,
        };
        state.refilter();
        state
    }

    /// Swap in a new item list, keeping query, category, and page (clamped).
    pub fn replace_items(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.page = 1;
        self.refilter();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category == self.category {
            return;
        }
        self.category = category;
        self.page = 1;
        self.refilter();
    }

    /// Jump to `page`, clamped to the available range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages);
    }

    fn refilter(&mut self) {
        let needle = self.query.trim().to_lowercase();
        self.filtered = self
            .items
            .iter()
            .filter(|item| matches(item, &needle, &self.category))
            .cloned()
            .collect();
        self.total_pages = total_pages(self.filtered.len(), self.page_size);
        self.page = self.page.clamp(1, self.total_pages);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn filtered_items(&self) -> &[CatalogItem] {
        &self.filtered
    }

    /// The slice of filtered items on the current page.
    pub fn paginated_items(&self) -> &[CatalogItem] {
        let start = ((self.page - 1) * self.page_size).min(self.filtered.len());
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn categories(&self) -> Vec<String> {
        category_facets(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Pagination anchors for the grid at `path` with the current `query` string.
    pub fn page_links(&self, path: &str, query: &str) -> PageLinks {
        let link = |page: usize, disabled: bool| PageLink {
            page,
            href: page_href(path, query, page),
            disabled,
            current: page == self.page,
        };
        PageLinks {
            previous: link(self.page.saturating_sub(1).max(1), self.page == 1),
            next: link((self.page + 1).min(self.total_pages), self.page == self.total_pages),
            pages: (1..=self.total_pages).map(|page| link(page, false)).collect(),
        }
    }
}
