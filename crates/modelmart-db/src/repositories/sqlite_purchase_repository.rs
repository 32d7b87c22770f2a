//! `SQLite` implementation of the `PurchaseRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};

use modelmart_core::{
    DocumentId, Model, NewPurchase, Purchase, PurchaseRepository, RepositoryError,
};

use super::row_mappers::{PURCHASE_COLUMNS, row_to_purchase, storage_error};
use super::sqlite_model_repository::increment_purchased_on;

/// `SQLite` implementation of the append-only purchase log.
pub struct SqlitePurchaseRepository {
    pool: SqlitePool,
}

impl SqlitePurchaseRepository {
    /// Create a new `SQLite` purchase repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn insert_purchase<'c, E>(
    executor: E,
    purchase: &NewPurchase,
) -> Result<Purchase, RepositoryError>
where
    E: Executor<'c, Database = Sqlite>,
{
    let row = sqlx::query(
        "INSERT INTO purchases (id, model_id, buyer_email, purchased_at) VALUES (?, ?, ?, ?) \
         RETURNING id, model_id, buyer_email, purchased_at",
    )
    .bind(DocumentId::generate().to_string())
    .bind(purchase.model_id.clone())
    .bind(purchase.buyer_email.clone())
    .bind(Utc::now())
    .fetch_one(executor)
    .await
    .map_err(storage_error)?;

    row_to_purchase(&row)
}

#[async_trait]
impl PurchaseRepository for SqlitePurchaseRepository {
    async fn append(&self, purchase: &NewPurchase) -> Result<Purchase, RepositoryError> {
        insert_purchase(&self.pool, purchase).await
    }

    async fn list(&self) -> Result<Vec<Purchase>, RepositoryError> {
        let query = format!("SELECT {PURCHASE_COLUMNS} FROM purchases ORDER BY seq");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_purchase).collect()
    }

    async fn record(
        &self,
        model_id: &DocumentId,
        purchase: &NewPurchase,
    ) -> Result<(Model, Purchase), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        // Dropping `tx` on the early return rolls the transaction back.
        let model = increment_purchased_on(&mut *tx, model_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Model with ID {model_id}")))?;
        let recorded = insert_purchase(&mut *tx, purchase).await?;

        tx.commit().await.map_err(storage_error)?;
        Ok((model, recorded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteModelRepository;
    use crate::setup::setup_test_database;
    use modelmart_core::{Fields, GUEST_BUYER_EMAIL, ModelRepository, NewModel};

    async fn repos() -> (SqliteModelRepository, SqlitePurchaseRepository) {
        let pool = setup_test_database().await.unwrap();
        (
            SqliteModelRepository::new(pool.clone()),
            SqlitePurchaseRepository::new(pool),
        )
    }

    async fn insert_model(models: &SqliteModelRepository) -> Model {
        models
            .insert(&NewModel {
                fields: Fields::new(),
                purchased: 0,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_append_assigns_id_and_date() {
        let (_, purchases) = repos().await;
        let before = Utc::now();
        let model_id = DocumentId::generate();

        let recorded = purchases
            .append(&NewPurchase::new(&model_id, None))
            .await
            .unwrap();

        assert_eq!(recorded.model_id, model_id.to_string());
        assert_eq!(recorded.buyer_email, GUEST_BUYER_EMAIL);
        assert!(recorded.date >= before);
        assert_eq!(purchases.list().await.unwrap(), vec![recorded]);
    }

    #[tokio::test]
    async fn test_record_increments_and_appends() {
        let (models, purchases) = repos().await;
        let model = insert_model(&models).await;

        for n in 1..=3 {
            let purchase = NewPurchase::new(&model.id, Some("ana@example.com".to_string()));
            let (updated, recorded) = purchases.record(&model.id, &purchase).await.unwrap();
            assert_eq!(updated.purchased, n);
            assert_eq!(recorded.buyer_email, "ana@example.com");
        }

        let log = purchases.list().await.unwrap();
        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|p| p.model_id == model.id.to_string()));
    }

    #[tokio::test]
    async fn test_record_unknown_model_writes_nothing() {
        let (_, purchases) = repos().await;
        let model_id = DocumentId::generate();

        let result = purchases
            .record(&model_id, &NewPurchase::new(&model_id, None))
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert!(purchases.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_survives_model_deletion() {
        let (models, purchases) = repos().await;
        let model = insert_model(&models).await;
        purchases
            .record(&model.id, &NewPurchase::new(&model.id, None))
            .await
            .unwrap();

        models.delete(&model.id).await.unwrap();

        let log = purchases.list().await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].model_id, model.id.to_string());
    }

    #[tokio::test]
    async fn test_record_at_counter_ceiling_writes_nothing() {
        let (models, purchases) = repos().await;
        let ceiling = u64::try_from(i64::MAX).unwrap();
        let model = models
            .insert(&NewModel {
                fields: Fields::new(),
                purchased: ceiling,
            })
            .await
            .unwrap();

        let result = purchases
            .record(&model.id, &NewPurchase::new(&model.id, None))
            .await;

        assert!(matches!(result, Err(RepositoryError::Storage(_))));
        assert!(purchases.list().await.unwrap().is_empty());
        assert_eq!(models.get_by_id(&model.id).await.unwrap().purchased, ceiling);
    }
}
