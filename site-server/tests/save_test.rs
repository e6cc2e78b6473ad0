//! Batched admin save against an in-memory store

use serde_json::json;
use shared::admin::{RecordChanges, SaveRequest};
use shared::error::ErrorCode;
use shared::models::{
    Category, Collection, Destination, Editable, HomeContent, Package, Page, is_temp_id, temp_id,
};
use site_server::admin::{load_snapshot, save_page};
use site_server::db::{DbService, DocumentStore, WriteBatch};

async fn store() -> DocumentStore {
    DbService::in_memory().await.unwrap().documents()
}

fn package(id: &str, title: &str, category_id: &str) -> Package {
    Package {
        id: id.to_string(),
        title: title.to_string(),
        category_id: category_id.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_new_destination_becomes_one_document() {
    let store = store().await;
    let tmp = temp_id(Destination::TEMP_KIND);
    let mut dest = Destination::placeholder(tmp.clone());
    dest.name = "Kyoto".to_string();

    let outcome = save_page(
        &store,
        Page::Destinations,
        SaveRequest {
            destinations: Some(RecordChanges::new(vec![dest], vec![])),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let real = outcome.id_map.get(&tmp).unwrap();
    assert!(!is_temp_id(real));

    let stored: Vec<Destination> = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, *real);
    assert_eq!(stored[0].name, "Kyoto");
    assert!(store.get::<Destination>(&tmp).await.unwrap().is_none());
}

#[tokio::test]
async fn test_child_package_points_at_real_category() {
    let store = store().await;
    let cat_tmp = temp_id(Category::TEMP_KIND);
    let pkg_tmp = temp_id(Package::TEMP_KIND);

    let mut safaris = Category::placeholder(cat_tmp.clone());
    safaris.name = "Safaris".to_string();

    let outcome = save_page(
        &store,
        Page::Packages,
        SaveRequest {
            categories: Some(RecordChanges::new(vec![safaris], vec![])),
            packages: Some(RecordChanges::new(
                vec![package(&pkg_tmp, "Serengeti Migration", &cat_tmp)],
                vec![],
            )),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let cat_id = outcome.resolve(&cat_tmp).to_string();
    let pkg_id = outcome.resolve(&pkg_tmp).to_string();
    assert_ne!(cat_id, cat_tmp);
    assert_ne!(pkg_id, pkg_tmp);

    let stored = store.get::<Package>(&pkg_id).await.unwrap().unwrap();
    assert_eq!(stored.category_id, cat_id);
    assert_eq!(
        store.get::<Category>(&cat_id).await.unwrap().unwrap().name,
        "Safaris"
    );
}

#[tokio::test]
async fn test_delete_removes_exactly_one_document() {
    let store = store().await;
    let mut batch = WriteBatch::new();
    for (id, title) in [("p1", "Alps"), ("p2", "Andes"), ("p3", "Atlas")] {
        batch.set(&package(id, title, "")).unwrap();
    }
    store.commit(batch).await.unwrap();

    let outcome = save_page(
        &store,
        Page::Packages,
        SaveRequest {
            packages: Some(RecordChanges::new(
                vec![package("p1", "Alps", ""), package("p3", "Atlas", "")],
                vec!["p2".to_string(), temp_id(Package::TEMP_KIND)],
            )),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.deleted, 1);
    let remaining: Vec<Package> = store.list().await.unwrap();
    let ids: Vec<&str> = remaining.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p3"]);
}

#[tokio::test]
async fn test_slug_starting_with_new_is_kept_and_deletable() {
    let store = store().await;
    let mut batch = WriteBatch::new();
    batch
        .set(&Destination {
            id: "new-zealand".to_string(),
            name: "New Zealand".to_string(),
            ..Default::default()
        })
        .unwrap();
    store.commit(batch).await.unwrap();

    let snapshot = load_snapshot(&store, Page::Destinations).await.unwrap();
    let unchanged = snapshot.destinations.unwrap();
    let outcome = save_page(
        &store,
        Page::Destinations,
        SaveRequest {
            destinations: Some(RecordChanges::new(unchanged, vec![])),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(outcome.id_map.is_empty());
    let stored: Vec<Destination> = store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, "new-zealand");

    let outcome = save_page(
        &store,
        Page::Destinations,
        SaveRequest {
            destinations: Some(RecordChanges::new(vec![], vec!["new-zealand".to_string()])),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome.deleted, 1);
    assert!(store.get::<Destination>("new-zealand").await.unwrap().is_none());
}

#[tokio::test]
async fn test_rejected_save_writes_nothing() {
    let store = store().await;
    let err = save_page(
        &store,
        Page::Packages,
        SaveRequest {
            content: Some(json!({ "hero": { "title": "Packages" } })),
            packages: Some(RecordChanges::new(
                vec![package(&temp_id("pkg"), "Orphan", &temp_id("cat"))],
                vec![],
            )),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::UnresolvedReference);
    assert_eq!(store.count(Collection::Packages).await.unwrap(), 0);
    assert_eq!(store.count(Collection::Content).await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_batch_rolls_back_earlier_writes() {
    let store = store().await;
    let mut batch = WriteBatch::new();
    batch.set(&package("p1", "Alps", "")).unwrap();
    batch.merge(Collection::Content, "home", json!({ "hero": { "title": "x" } }));
    // empty ids violate the table's CHECK constraint
    batch.set(&package("", "Broken", "")).unwrap();

    assert!(store.commit(batch).await.is_err());
    assert_eq!(store.count(Collection::Packages).await.unwrap(), 0);
    assert_eq!(store.count(Collection::Content).await.unwrap(), 0);
}

#[tokio::test]
async fn test_content_merge_keeps_untouched_fields() {
    let store = store().await;
    save_page(
        &store,
        Page::Home,
        SaveRequest {
            content: Some(json!({ "hero": { "title": "Go Further" } })),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    save_page(
        &store,
        Page::Home,
        SaveRequest {
            content: Some(json!({ "hero": { "subtitle": "Quietly extraordinary" } })),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let home = store.content::<HomeContent>().await.unwrap().unwrap();
    assert_eq!(home.hero.title, "Go Further");
    assert_eq!(home.hero.subtitle, "Quietly extraordinary");

    let snapshot = load_snapshot(&store, Page::Home).await.unwrap();
    assert_eq!(snapshot.content["hero"]["title"], "Go Further");
    // fields never saved come from defaults
    assert_eq!(
        snapshot.content["intro"]["title"],
        HomeContent::default().intro.title.as_str()
    );
    assert_eq!(snapshot.destinations.as_deref().map(<[_]>::len), Some(0));
}
