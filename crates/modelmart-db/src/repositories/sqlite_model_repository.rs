//! `SQLite` implementation of the `ModelRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use modelmart_core::{DocumentId, Model, ModelPatch, ModelRepository, NewModel, RepositoryError};

use super::row_mappers::{
    MODEL_COLUMNS, encode_count, encode_fields, row_to_model, storage_error,
};

/// `SQLite` implementation of the `ModelRepository` trait.
///
/// Attributes live as a JSON object in the `fields` column; the counter has
/// its own column so increments stay a single atomic statement.
pub struct SqliteModelRepository {
    pool: SqlitePool,
}

impl SqliteModelRepository {
    /// Create a new `SQLite` model repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Atomically bump a model's counter on a pooled or transaction connection.
///
/// A counter already at `i64::MAX` is left untouched and reported as a storage
/// error; SQLite would otherwise store the overflowed sum as a REAL.
pub(super) async fn increment_purchased_on(
    conn: &mut SqliteConnection,
    id: &DocumentId,
) -> Result<Option<Model>, RepositoryError> {
    let row = sqlx::query(
        "UPDATE models SET purchased = purchased + 1 WHERE id = ? AND purchased < ? \
         RETURNING id, fields, purchased",
    )
    .bind(id.to_string())
    .bind(i64::MAX)
    .fetch_optional(&mut *conn)
    .await
    .map_err(storage_error)?;

    if let Some(row) = row {
        return row_to_model(&row).map(Some);
    }

    let exists = sqlx::query("SELECT 1 FROM models WHERE id = ?")
        .bind(id.to_string())
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)?
        .is_some();

    if exists {
        return Err(RepositoryError::Storage(format!(
            "purchased count of model {id} is at its maximum"
        )));
    }
    Ok(None)
}

#[async_trait]
impl ModelRepository for SqliteModelRepository {
    async fn list(&self) -> Result<Vec<Model>, RepositoryError> {
        let query = format!("SELECT {MODEL_COLUMNS} FROM models ORDER BY seq");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_model).collect()
    }

    async fn get_by_id(&self, id: &DocumentId) -> Result<Model, RepositoryError> {
        let query = format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Model with ID {id}")))?;

        row_to_model(&row)
    }

    async fn insert(&self, model: &NewModel) -> Result<Model, RepositoryError> {
        let id = DocumentId::generate();
        let query = format!(
            "INSERT INTO models (id, fields, purchased) VALUES (?, ?, ?) RETURNING {MODEL_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .bind(encode_fields(&model.fields)?)
            .bind(encode_count(model.purchased)?)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        row_to_model(&row)
    }

    async fn update(&self, id: &DocumentId, patch: &ModelPatch) -> Result<Model, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        // Write first so the transaction holds the write lock before the
        // stored fields are read back and merged.
        let query = format!(
            "UPDATE models SET purchased = COALESCE(?, purchased) WHERE id = ? RETURNING {MODEL_COLUMNS}"
        );
        let row = sqlx::query(&query)
            .bind(patch.purchased.map(encode_count).transpose()?)
            .bind(id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Model with ID {id}")))?;

        let mut model = row_to_model(&row)?;
        patch.apply_to(&mut model);

        sqlx::query("UPDATE models SET fields = ? WHERE id = ?")
            .bind(encode_fields(&model.fields)?)
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;
        Ok(model)
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM models WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Model with ID {id}")));
        }

        Ok(())
    }

    async fn increment_purchased(&self, id: &DocumentId) -> Result<Option<Model>, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(storage_error)?;
        increment_purchased_on(&mut conn, id).await
    }
}
