//! Postgres catalog tests.
//!
//! These need a disposable database: `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
//! Each test clears the `catalog_items` table.

use arcade_api::store::{CatalogStore, PgCatalog};
use arcade_shared::{default_catalog, CatalogChanges, ItemId};
use tokio::sync::Mutex;

// Tests share one table, so they run one at a time
static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn fresh_catalog() -> PgCatalog {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let catalog = PgCatalog::connect(&url, 2).await.unwrap();
    catalog.migrate().await.unwrap();
    catalog.clear().await.unwrap();
    catalog
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn seeding_twice_keeps_original_count() {
    let _guard = DB_LOCK.lock().await;
    let catalog = fresh_catalog().await;

    assert_eq!(catalog.seed_if_empty(default_catalog()).await.unwrap(), 9);
    assert_eq!(catalog.seed_if_empty(default_catalog()).await.unwrap(), 0);
    assert_eq!(catalog.count().await.unwrap(), 9);

    let items = catalog.list().await.unwrap();
    assert_eq!(items[0].name, "HellDivers 2");
    assert_eq!(items[8].name, "Elgato Stream Deck");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn malformed_ids_are_not_found() {
    let _guard = DB_LOCK.lock().await;
    let catalog = fresh_catalog().await;
    catalog.seed_if_empty(default_catalog()).await.unwrap();

    assert!(catalog.get("1").await.unwrap().is_none());
    assert!(catalog.get("64b7f0c2e1a2b3c4d5e6f708").await.unwrap().is_none());
    assert!(!catalog.remove("not-a-uuid").await.unwrap());
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn update_preserves_image_without_upload() {
    let _guard = DB_LOCK.lock().await;
    let catalog = fresh_catalog().await;
    catalog.seed_if_empty(default_catalog()).await.unwrap();

    let first = catalog.list().await.unwrap().remove(0);
    assert!(matches!(first.id, ItemId::Doc(_)));
    let id = first.id.to_string();

    let changes = |img: Option<&str>| CatalogChanges {
        name: "HellDivers 2: Super Earth Edition".into(),
        img: img.map(str::to_string),
        price: "$59.99".into(),
        description: first.description.clone(),
        rating: "4.4".into(),
        reviews: vec![],
    };

    let updated = catalog.update(&id, changes(None)).await.unwrap().unwrap();
    assert_eq!(updated.img, "helldivers2.png");
    assert!(updated.reviews.is_empty());

    let updated = catalog.update(&id, changes(Some("hd2-deluxe.png"))).await.unwrap().unwrap();
    assert_eq!(updated.img, "hd2-deluxe.png");

    assert!(catalog.remove(&id).await.unwrap());
    assert!(catalog.get(&id).await.unwrap().is_none());
    assert_eq!(catalog.count().await.unwrap(), 8);
}
