//! CRUD handlers for the `companies` resource.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::models::{
    CompaniesResponse, CompanyDeletedResponse, CompanyDetail, CompanyDetailResponse,
    CompanyResponse, CompanyUpdate, NewCompany,
};
use crate::state::AppState;

pub fn create_companies_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/:code",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// GET /companies - all companies, ordered by code.
async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompaniesResponse>, AppError> {
    let companies = state.store.list_companies().await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/:code - one company plus the ids of its invoices.
async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDetailResponse>, AppError> {
    let company = state
        .store
        .get_company(&code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no company with code: {}", code)))?;

    let invoices = state.store.invoice_ids_for_company(&code).await?;

    Ok(Json(CompanyDetailResponse {
        company: CompanyDetail { company, invoices },
    }))
}

/// POST /companies - insert a company with a client-supplied code.
async fn create_company(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::bad_request("request body is required"))?;

    let company = state.store.create_company(payload).await?;
    info!("company created: {}", company.code);

    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/:code - replace name and description; code is immutable.
async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    payload: Result<Json<CompanyUpdate>, JsonRejection>,
) -> Result<Json<CompanyResponse>, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::bad_request("request body is required"))?;

    let company = state
        .store
        .update_company(&code, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no company with code: {}", code)))?;

    info!("company updated: {}", company.code);

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/:code - echoes only the removed code back.
async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyDeletedResponse>, AppError> {
    let removed = state.store.delete_company(&code).await?;
    if !removed {
        return Err(AppError::not_found(format!("no company with code: {}", code)));
    }

    info!("company deleted: {}", code);

    Ok(Json(CompanyDeletedResponse::new(code)))
}
