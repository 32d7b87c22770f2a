//! Model handlers - CRUD operations on the catalog.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use modelmart_core::{Model, validate_model_patch, validate_new_model};

use crate::dto::{MessageResponse, json_body};
use crate::error::{HttpError, OrHttpError};
use crate::state::AppState;

/// List all models.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Model>>, HttpError> {
    let models = state
        .core
        .models()
        .list()
        .await
        .or_http_error("Failed to fetch models")?;
    Ok(Json(models))
}

/// Get a single model by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Model>, HttpError> {
    let model = state
        .core
        .models()
        .get(&id)
        .await
        .or_http_error("Failed to fetch model")?;
    Ok(Json(model))
}

/// Create a model from an arbitrary JSON object.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Model>), HttpError> {
    let model = validate_new_model(json_body(&body)?)?;
    let created = state
        .core
        .models()
        .create(model)
        .await
        .or_http_error("Failed to create model")?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Merge the supplied fields into an existing model.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Model>, HttpError> {
    let patch = validate_model_patch(json_body(&body)?)?;
    let updated = state
        .core
        .models()
        .update(&id, patch)
        .await
        .or_http_error("Failed to update model")?;
    Ok(Json(updated))
}

/// Remove a model. Its purchase records are kept.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    state
        .core
        .models()
        .delete(&id)
        .await
        .or_http_error("Failed to delete model")?;
    Ok(Json(MessageResponse::new("Model deleted successfully")))
}
