//! `page` query-parameter helpers for the catalog grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pagination state lives in the listing engine; the address bar only mirrors
//! it, always through the router so its query map stays current. Page 1 is the canonical state and never appears in the URL. Every other
//! query parameter is carried through untouched.

#[cfg(test)]
#[path = "page_query_test.rs"]
mod page_query_test;

pub const PAGE_PARAM: &str = "page";

/// Read a page number from the raw `page` parameter value.
///
/// Absent, unparsable, or zero values select the first page. No upper bound is
/// applied here; the listing engine clamps once data is loaded.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Rewrite `query` so it selects `page`, preserving every other parameter.
///
/// `query` may carry a leading `?`; the result never does.
pub fn with_page(query: &str, page: usize) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut placed = false;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if key == PAGE_PARAM {
            if page > 1 && !placed {
                serializer.append_pair(PAGE_PARAM, &page.to_string());
                placed = true;
            }
            continue;
        }
        serializer.append_pair(&key, &value);
    }
    if page > 1 && !placed {
        serializer.append_pair(PAGE_PARAM, &page.to_string());
    }
    serializer.finish()
}

/// Link target for `page` under `path` with the current `query`.
pub fn page_href(path: &str, query: &str, page: usize) -> String {
    let query = with_page(query, page);
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

/// Address the router should replace the current URL with so it shows
/// `page`, or `None` when `path` + `search` already does.
///
/// Every parameter other than `page` is kept, so a filter reset from page N
/// drops `page` and leaves the rest of the query alone.
pub fn sync_target(path: &str, search: &str, page: usize) -> Option<String> {
    let target = page_href(path, search, page);
    let search = search.strip_prefix('?').unwrap_or(search);
    let current = if search.is_empty() { path.to_owned() } else { format!("{path}?{search}") };
    (target != current).then_some(target)
}
