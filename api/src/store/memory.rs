use arcade_shared::{default_catalog, CatalogChanges, CatalogItem, ItemId, NewCatalogItem};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CatalogStore, IdAllocator, StoreResult};

/// Catalog held in an ordered vector.
///
/// Items keep their insertion position across updates and removal closes the
/// gap. Identifiers come from an `IdAllocator`, so a removed id never returns.
pub struct MemoryCatalog {
    items: RwLock<Vec<CatalogItem>>,
    ids: IdAllocator,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            ids: IdAllocator::default(),
        }
    }

    /// Catalog preloaded with the built-in items, numbered from 1
    pub fn seeded() -> Self {
        let ids = IdAllocator::default();
        let items = default_catalog()
            .into_iter()
            .map(|item| item.with_id(ItemId::Seq(ids.next())))
            .collect();

        Self {
            items: RwLock::new(items),
            ids,
        }
    }

    fn parse_id(id: &str) -> Option<ItemId> {
        id.trim().parse::<u64>().ok().map(ItemId::Seq)
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<CatalogItem>> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, item: NewCatalogItem) -> StoreResult<CatalogItem> {
        let mut items = self.items.write().await;
        let stored = item.with_id(ItemId::Seq(self.ids.next()));
        items.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, changes: CatalogChanges) -> StoreResult<Option<CatalogItem>> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };
        let mut items = self.items.write().await;
        Ok(items.iter_mut().find(|item| item.id == id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    async fn remove(&self, id: &str) -> StoreResult<bool> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(false);
        };
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn seed_if_empty(&self, seed: Vec<NewCatalogItem>) -> StoreResult<usize> {
        let mut items = self.items.write().await;
        if !items.is_empty() {
            return Ok(0);
        }
        let inserted = seed.len();
        items.extend(
            seed.into_iter()
                .map(|item| item.with_id(ItemId::Seq(self.ids.next()))),
        );
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_shared::PLACEHOLDER_IMAGE;

    fn new_item(name: &str) -> NewCatalogItem {
        NewCatalogItem {
            name: name.to_string(),
            img: PLACEHOLDER_IMAGE.to_string(),
            price: "$9.99".to_string(),
            description: "Test item".to_string(),
            rating: "4.0".to_string(),
            reviews: vec![],
        }
    }

    fn changes(name: &str, img: Option<&str>) -> CatalogChanges {
        CatalogChanges {
            name: name.to_string(),
            img: img.map(str::to_string),
            price: "$19.99".to_string(),
            description: "Changed".to_string(),
            rating: "5.0".to_string(),
            reviews: vec!["Nice".to_string()],
        }
    }

    #[tokio::test]
    async fn test_seeded_catalog_numbers_from_one() {
        let catalog = MemoryCatalog::seeded();
        let items = catalog.list().await.unwrap();
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].id, ItemId::Seq(1));
        assert_eq!(items[8].id, ItemId::Seq(9));

        let created = catalog.create(new_item("Tenth")).await.unwrap();
        assert_eq!(created.id, ItemId::Seq(10));
    }

    #[tokio::test]
    async fn test_get_with_malformed_id_is_absent() {
        let catalog = MemoryCatalog::seeded();
        assert!(catalog.get("not-a-number").await.unwrap().is_none());
        assert!(catalog.get("-1").await.unwrap().is_none());
        assert!(catalog.get("42").await.unwrap().is_none());
        assert_eq!(catalog.get("3").await.unwrap().unwrap().name, "Steel Series Gaming Headset");
    }

    #[tokio::test]
    async fn test_update_keeps_position_and_image() {
        let catalog = MemoryCatalog::seeded();

        let updated = catalog.update("2", changes("Rivals", None)).await.unwrap().unwrap();
        assert_eq!(updated.img, "marvelrivals.png");
        assert_eq!(updated.reviews, vec!["Nice".to_string()]);

        let items = catalog.list().await.unwrap();
        assert_eq!(items[1].name, "Rivals");

        let replaced = catalog
            .update("2", changes("Rivals", Some("rivals.png")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced.img, "rivals.png");
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.update("1", changes("x", None)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_collapses_and_never_reuses_id() {
        let catalog = MemoryCatalog::new();
        catalog.create(new_item("a")).await.unwrap();
        catalog.create(new_item("b")).await.unwrap();

        assert!(catalog.remove("1").await.unwrap());
        assert!(!catalog.remove("1").await.unwrap());
        assert!(!catalog.remove("abc").await.unwrap());

        let items = catalog.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "b");

        let c = catalog.create(new_item("c")).await.unwrap();
        assert_eq!(c.id, ItemId::Seq(3));
    }

    #[tokio::test]
    async fn test_seed_if_empty_is_idempotent() {
        let catalog = MemoryCatalog::new();
        assert_eq!(catalog.seed_if_empty(default_catalog()).await.unwrap(), 9);
        assert_eq!(catalog.seed_if_empty(default_catalog()).await.unwrap(), 0);
        assert_eq!(catalog.count().await.unwrap(), 9);
    }
}
