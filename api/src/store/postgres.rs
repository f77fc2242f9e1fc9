use arcade_shared::{CatalogChanges, CatalogItem, ItemId, NewCatalogItem};
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

use super::{CatalogStore, StoreResult};

const ITEM_COLUMNS: &str = "id, name, img, price, description, rating, reviews";

#[derive(Debug, FromRow)]
struct CatalogRow {
    id: Uuid,
    name: String,
    img: String,
    price: String,
    description: String,
    rating: String,
    reviews: Vec<String>,
}

impl From<CatalogRow> for CatalogItem {
    fn from(row: CatalogRow) -> Self {
        CatalogItem {
            id: ItemId::Doc(row.id),
            name: row.name,
            img: row.img,
            price: row.price,
            description: row.description,
            rating: row.rating,
            reviews: row.reviews,
        }
    }
}

/// Catalog persisted in the `catalog_items` table.
///
/// Identifiers are UUIDs generated on insert. Path segments that do not
/// parse as a UUID are answered as "not found" without touching the database.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("../database/migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Delete every catalog item. Used by the seeder's `--force` mode.
    pub async fn clear(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM catalog_items")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    fn parse_id(id: &str) -> Option<Uuid> {
        Uuid::parse_str(id.trim()).ok()
    }
}

async fn insert_item<'e, E>(executor: E, item: NewCatalogItem) -> sqlx::Result<CatalogRow>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, CatalogRow>(&format!(
        "INSERT INTO catalog_items (id, name, img, price, description, rating, reviews)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING {ITEM_COLUMNS}"
    ))
    .bind(Uuid::new_v4())
    .bind(item.name)
    .bind(item.img)
    .bind(item.price)
    .bind(item.description)
    .bind(item.rating)
    .bind(item.reviews)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl CatalogStore for PgCatalog {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        let rows = sqlx::query_as::<_, CatalogRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM catalog_items ORDER BY position"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(CatalogItem::from).collect())
    }

    async fn get(&self, id: &str) -> StoreResult<Option<CatalogItem>> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, CatalogRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM catalog_items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CatalogItem::from))
    }

    async fn create(&self, item: NewCatalogItem) -> StoreResult<CatalogItem> {
        let row = insert_item(&self.pool, item).await?;
        Ok(row.into())
    }

    async fn update(&self, id: &str, changes: CatalogChanges) -> StoreResult<Option<CatalogItem>> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, CatalogRow>(&format!(
            "UPDATE catalog_items
             SET name = $2, img = COALESCE($3, img), price = $4,
                 description = $5, rating = $6, reviews = $7, updated_at = NOW()
             WHERE id = $1
             RETURNING {ITEM_COLUMNS}"
        ))
        .bind(id)
        .bind(changes.name)
        .bind(changes.img)
        .bind(changes.price)
        .bind(changes.description)
        .bind(changes.rating)
        .bind(changes.reviews)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CatalogItem::from))
    }

    async fn remove(&self, id: &str) -> StoreResult<bool> {
        let Some(id) = Self::parse_id(id) else {
            return Ok(false);
        };
        let result = sqlx::query("DELETE FROM catalog_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn seed_if_empty(&self, items: Vec<NewCatalogItem>) -> StoreResult<usize> {
        let mut tx = self.pool.begin().await?;

        // Blocks a concurrent seeder until this transaction commits
        sqlx::query("LOCK TABLE catalog_items IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_items")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.rollback().await?;
            tracing::debug!(existing, "catalog already populated, skipping seed");
            return Ok(0);
        }

        let inserted = items.len();
        for item in items {
            insert_item(&mut *tx, item).await?;
        }
        tx.commit().await?;

        tracing::info!(inserted, "catalog seeded");
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_malformed_values() {
        assert!(PgCatalog::parse_id("5").is_none());
        assert!(PgCatalog::parse_id("64b7f0c2e1a2").is_none());
        assert!(PgCatalog::parse_id("").is_none());

        let id = Uuid::new_v4();
        assert_eq!(PgCatalog::parse_id(&id.to_string()), Some(id));
    }
}
