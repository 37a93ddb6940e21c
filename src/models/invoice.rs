//! Invoice rows, request payloads and response envelopes.

use crate::models::company::Company;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full invoice row as persisted. `paid`, `add_date` and `paid_date` are
/// database-assigned on insert and never mutated through this API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// `{id, comp_code}` pair returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Body of `POST /invoices`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: Decimal,
}

/// Body of `PUT /invoices/:id`. Only the amount is mutable.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceUpdate {
    pub amt: Decimal,
}

/// Single-invoice read: invoice columns stay top-level, the joined company
/// row nests under `company`. Note there is no top-level `comp_code`.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDeletedResponse {
    pub status: String,
    pub invoice: i32,
}

impl InvoiceDeletedResponse {
    pub fn new(id: i32) -> Self {
        Self {
            status: "deleted".to_string(),
            invoice: id,
        }
    }
}
