use super::*;

#[test]
fn parse_page_defaults_to_first_page() {
    assert_eq!(parse_page(None), 1);
    assert_eq!(parse_page(Some("")), 1);
    assert_eq!(parse_page(Some("abc")), 1);
    assert_eq!(parse_page(Some("0")), 1);
    assert_eq!(parse_page(Some("-2")), 1);
}

#[test]
fn parse_page_reads_positive_integers_without_upper_bound() {
    assert_eq!(parse_page(Some("1")), 1);
    assert_eq!(parse_page(Some("3")), 3);
    assert_eq!(parse_page(Some("999")), 999);
}

#[test]
fn with_page_omits_first_page() {
    assert_eq!(with_page("", 1), "");
    assert_eq!(with_page("page=4", 1), "");
    assert_eq!(with_page("?page=4", 0), "");
}

#[test]
fn with_page_sets_later_pages() {
    assert_eq!(with_page("", 2), "page=2");
    assert_eq!(with_page("?page=2", 5), "page=5");
}

#[test]
fn with_page_preserves_other_parameters_in_order() {
    assert_eq!(with_page("?sort=price&page=3&view=grid", 4), "sort=price&page=4&view=grid");
    assert_eq!(with_page("sort=price&page=3&view=grid", 1), "sort=price&view=grid");
    assert_eq!(with_page("sort=price", 2), "sort=price&page=2");
}

#[test]
fn with_page_collapses_duplicate_page_parameters() {
    assert_eq!(with_page("page=2&a=1&page=3", 6), "page=6&a=1");
    assert_eq!(with_page("page=2&a=1&page=3", 1), "a=1");
}

#[test]
fn with_page_keeps_encoded_values() {
    assert_eq!(with_page("q=blue+shirt&tag=a%26b", 2), "q=blue+shirt&tag=a%26b&page=2");
}

#[test]
fn page_href_keeps_path_and_drops_empty_query() {
    assert_eq!(page_href("/", "", 1), "/");
    assert_eq!(page_href("/", "?page=3", 1), "/");
    assert_eq!(page_href("/", "", 2), "/?page=2");
    assert_eq!(page_href("/shop", "?ref=mail", 3), "/shop?ref=mail&page=3");
}

#[test]
fn sync_target_is_none_when_url_already_matches() {
    assert_eq!(sync_target("/", "", 1), None);
    assert_eq!(sync_target("/", "?page=2", 2), None);
    assert_eq!(sync_target("/", "sort=price&page=4", 4), None);
}

#[test]
fn sync_target_drops_page_and_keeps_other_parameters() {
    assert_eq!(sync_target("/", "sort=price&page=3&view=grid", 1).as_deref(), Some("/?sort=price&view=grid"));
    assert_eq!(sync_target("/", "?page=3", 1).as_deref(), Some("/"));
    assert_eq!(sync_target("/", "page=1", 1).as_deref(), Some("/"));
}

#[test]
fn sync_target_writes_new_page() {
    assert_eq!(sync_target("/", "page=9", 2).as_deref(), Some("/?page=2"));
    assert_eq!(sync_target("/shop", "ref=mail", 3).as_deref(), Some("/shop?ref=mail&page=3"));
}
