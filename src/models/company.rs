//! Company rows, request payloads and response envelopes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Body of `POST /companies`. The code is client-supplied, not generated.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Body of `PUT /companies/:code`. The code itself is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyUpdate {
    pub name: String,
    pub description: String,
}

/// Single-company read, enriched with the ids of its invoices.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Debug, Serialize)]
pub struct CompanyDeletedResponse {
    pub status: String,
    pub removed: String,
}

impl CompanyDeletedResponse {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            status: "deleted".to_string(),
            removed: code.into(),
        }
    }
}
