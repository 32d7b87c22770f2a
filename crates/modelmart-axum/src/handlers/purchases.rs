//! Purchase handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use modelmart_core::{Purchase, PurchaseReceipt};

use crate::dto::PurchaseRequest;
use crate::error::{HttpError, OrHttpError};
use crate::state::AppState;

/// Purchase a model. The body is optional.
pub async fn purchase(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<PurchaseReceipt>, HttpError> {
    let request = PurchaseRequest::from_body(&body)?;
    let receipt = state
        .core
        .purchases()
        .purchase(&id, request.buyer_email)
        .await
        .or_http_error("Error purchasing model")?;
    Ok(Json(receipt))
}

/// List the purchase log.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Purchase>>, HttpError> {
    let purchases = state
        .core
        .purchases()
        .list()
        .await
        .or_http_error("Failed to fetch purchases")?;
    Ok(Json(purchases))
}
