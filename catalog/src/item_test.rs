use super::*;

fn raw(json: serde_json::Value) -> RawItem {
    serde_json::from_value(json).expect("raw item")
}

#[test]
fn maps_missing_rating_and_stock_to_zero_and_falls_back_to_first_image() {
    let item = CatalogItem::from(raw(serde_json::json!({
        "id": 7,
        "title": "Shirt",
        "price": 19.99,
        "thumbnail": "",
        "images": ["a.jpg"]
    })));
    assert_eq!(item.id, 7);
    assert_eq!(item.slug, "7");
    assert_eq!(item.title, "Shirt");
    assert_eq!(item.price, 19.99);
    assert_eq!(item.image, "a.jpg");
    assert_eq!(item.rating, ItemRating { rate: 0.0, count: 0 });
}

#[test]
fn prefers_thumbnail_when_present() {
    let item = CatalogItem::from(raw(serde_json::json!({
        "id": 1,
        "thumbnail": "thumb.png",
        "images": ["other.png"]
    })));
    assert_eq!(item.image, "thumb.png");
}

#[test]
fn image_is_empty_without_thumbnail_or_images() {
    let item = CatalogItem::from(raw(serde_json::json!({ "id": 2, "images": [] })));
    assert_eq!(item.image, "");
}

#[test]
fn null_fields_degrade_to_defaults() {
    let item = CatalogItem::from(raw(serde_json::json!({
        "id": 3,
        "title": null,
        "description": null,
        "category": null,
        "price": null,
        "thumbnail": null,
        "images": null,
        "rating": null,
        "stock": null
    })));
    assert_eq!(item.title, "");
    assert_eq!(item.description, "");
    assert_eq!(item.category, "");
    assert_eq!(item.price, 0.0);
    assert_eq!(item.image, "");
    assert_eq!(item.rating, ItemRating::default());
}

#[test]
fn rating_and_stock_pass_through() {
    let item = CatalogItem::from(raw(serde_json::json!({
        "id": 9,
        "title": "Lamp",
        "description": "Warm light",
        "category": "home-decoration",
        "price": 42.5,
        "rating": 4.56,
        "stock": 12
    })));
    assert_eq!(item.category, "home-decoration");
    assert_eq!(item.description, "Warm light");
    assert_eq!(item.rating, ItemRating { rate: 4.56, count: 12 });
}

#[test]
fn product_list_ignores_unknown_envelope_fields() {
    let list: ProductList = serde_json::from_value(serde_json::json!({
        "products": [{ "id": 1 }, { "id": 2 }],
        "total": 194,
        "skip": 0,
        "limit": 100
    }))
    .expect("list");
    assert_eq!(list.products.len(), 2);
    assert_eq!(list.products[1].id, 2);
}

#[test]
fn href_points_at_detail_page() {
    let item = CatalogItem::from(raw(serde_json::json!({ "id": 15 })));
    assert_eq!(item.href(), "/item/15");
}

#[test]
fn shaped_item_serializes_for_the_json_api() {
    let item = CatalogItem::from(raw(serde_json::json!({ "id": 4, "title": "Mug", "stock": 3 })));
    let value = serde_json::to_value(&item).expect("serialize");
    assert_eq!(value["slug"], "4");
    assert_eq!(value["rating"]["count"], 3);
    let back: CatalogItem = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, item);
}

#[test]
fn malformed_numbers_degrade_without_failing_the_list() {
    let list: ProductList = serde_json::from_value(serde_json::json!({
        "products": [
            { "id": 1, "title": "Fine", "stock": 5 },
            { "id": null, "title": "No id" },
            { "id": 3, "stock": 5.5, "price": "cheap", "rating": "n/a" },
            { "id": 4, "stock": -2, "price": 10 },
            { "id": 5.0, "stock": 7.0, "rating": 4 }
        ]
    }))
    .expect("list");
    let items: Vec<CatalogItem> = list.products.into_iter().map(CatalogItem::from).collect();

    assert_eq!(items.len(), 5);
    assert_eq!(items[0].rating.count, 5);
    assert_eq!(items[1].id, 0);
    assert_eq!(items[1].title, "No id");
    assert_eq!(items[2].rating, ItemRating::default());
    assert_eq!(items[2].price, 0.0);
    assert_eq!(items[3].rating.count, 0);
    assert_eq!(items[3].price, 10.0);
    assert_eq!(items[4].id, 5);
    assert_eq!(items[4].rating, ItemRating { rate: 4.0, count: 7 });
}
