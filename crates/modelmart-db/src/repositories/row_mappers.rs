//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use modelmart_core::{DocumentId, Fields, Model, Purchase, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for model queries.
pub const MODEL_COLUMNS: &str = "id, fields, purchased";

/// Shared SELECT column list for purchase queries.
pub const PURCHASE_COLUMNS: &str = "id, model_id, buyer_email, purchased_at";

pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

/// Encode model attributes for the `fields` column.
pub fn encode_fields(fields: &Fields) -> Result<String, RepositoryError> {
    serde_json::to_string(fields).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Convert a counter to the column's integer type.
pub fn encode_count(count: u64) -> Result<i64, RepositoryError> {
    i64::try_from(count)
        .map_err(|_| RepositoryError::Serialization(format!("purchased count {count} too large")))
}

fn parse_id(raw: &str) -> Result<DocumentId, RepositoryError> {
    raw.parse::<DocumentId>()
        .map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse a database row into a Model.
pub fn row_to_model(row: &SqliteRow) -> Result<Model, RepositoryError> {
    let id: String = row.try_get("id").map_err(storage_error)?;
    let fields_json: String = row.try_get("fields").map_err(storage_error)?;
    let purchased: i64 = row.try_get("purchased").map_err(storage_error)?;

    Ok(Model {
        id: parse_id(&id)?,
        purchased: u64::try_from(purchased).map_err(|_| {
            RepositoryError::Serialization(format!("negative purchased count {purchased}"))
        })?,
        fields: serde_json::from_str(&fields_json)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?,
    })
}

/// Parse a database row into a Purchase.
pub fn row_to_purchase(row: &SqliteRow) -> Result<Purchase, RepositoryError> {
    let id: String = row.try_get("id").map_err(storage_error)?;
    let date: DateTime<Utc> = row.try_get("purchased_at").map_err(storage_error)?;

    Ok(Purchase {
        id: parse_id(&id)?,
        model_id: row.try_get("model_id").map_err(storage_error)?,
        buyer_email: row.try_get("buyer_email").map_err(storage_error)?,
        date,
    })
}
