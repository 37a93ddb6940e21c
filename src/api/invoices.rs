//! CRUD handlers for the `invoices` resource.
//!
//! `paid` and `paid_date` are intentionally untouched here: they only ever
//! hold the column defaults from insert time. No endpoint transitions an
//! invoice to paid.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::models::{
    InvoiceDeletedResponse, InvoiceDetailResponse, InvoiceResponse, InvoiceUpdate,
    InvoicesResponse, NewInvoice,
};
use crate::state::AppState;

pub fn create_invoices_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

/// GET /invoices - `{id, comp_code}` pairs ordered by comp_code, then id.
async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoicesResponse>, AppError> {
    let invoices = state.store.list_invoices().await?;
    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/:id - joined read, company row nested under `company`.
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<InvoiceDetailResponse>, AppError> {
    let invoice = state
        .store
        .get_invoice(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no invoice with id: {}", id)))?;

    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// POST /invoices - insert with column defaults for paid/add_date/paid_date.
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewInvoice>, JsonRejection>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::bad_request("request body is required"))?;

    let invoice = state.store.create_invoice(payload).await?;
    info!("invoice created: {} for company {}", invoice.id, invoice.comp_code);

    Ok(Json(InvoiceResponse { invoice }))
}

/// PUT /invoices/:id - only `amt` is mutable.
async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    payload: Result<Json<InvoiceUpdate>, JsonRejection>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::bad_request("request body is required"))?;

    let invoice = state
        .store
        .update_invoice(id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no invoice with id: {}", id)))?;

    info!("invoice updated: {}", invoice.id);

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/:id.
async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<InvoiceDeletedResponse>, AppError> {
    let removed = state.store.delete_invoice(id).await?;
    if !removed {
        return Err(AppError::not_found(format!("no invoice with id: {}", id)));
    }

    info!("invoice deleted: {}", id);

    Ok(Json(InvoiceDeletedResponse::new(id)))
}
