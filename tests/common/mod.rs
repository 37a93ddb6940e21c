#![allow(dead_code)]

//! In-memory store double plus request helpers for driving the router.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use biztime_ws::create_app_router;
use biztime_ws::models::{
    Company, CompanyUpdate, Invoice, InvoiceDetail, InvoiceSummary, InvoiceUpdate, NewCompany,
    NewInvoice,
};
use biztime_ws::state::AppState;
use biztime_ws::store::BiztimeStore;
use biztime_ws::Result;

#[derive(Default)]
struct MockState {
    companies: Vec<Company>,
    invoices: Vec<Invoice>,
    next_id: i32,
}

/// Mock of the query executor, mimicking the database semantics the
/// handlers rely on: column defaults on insert, cascade on company delete,
/// deterministic ordering on reads.
pub struct MockStore {
    state: Mutex<MockState>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                companies: Vec::new(),
                invoices: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub fn seed_company(&self, code: &str, name: &str, description: &str) {
        let mut state = self.state.lock().unwrap();
        state.companies.push(Company {
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        });
    }

    pub fn seed_invoice(&self, comp_code: &str, amt: i64) -> i32 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.invoices.push(Invoice {
            id,
            comp_code: comp_code.to_string(),
            amt: Decimal::from(amt),
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        });
        id
    }

    pub fn company_count(&self) -> usize {
        self.state.lock().unwrap().companies.len()
    }

    pub fn invoice_count(&self) -> usize {
        self.state.lock().unwrap().invoices.len()
    }

    pub fn invoice(&self, id: i32) -> Option<Invoice> {
        let state = self.state.lock().unwrap();
        state.invoices.iter().find(|i| i.id == id).cloned()
    }
}

#[async_trait]
impl BiztimeStore for MockStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let state = self.state.lock().unwrap();
        let mut companies = state.companies.clone();
        companies.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(companies)
    }

    async fn get_company(&self, code: &str) -> Result<Option<Company>> {
        let state = self.state.lock().unwrap();
        Ok(state.companies.iter().find(|c| c.code == code).cloned())
    }

    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<i32> = state
            .invoices
            .iter()
            .filter(|i| i.comp_code == code)
            .map(|i| i.id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn create_company(&self, new: NewCompany) -> Result<Company> {
        let company = Company {
            code: new.code,
            name: new.name,
            description: new.description,
        };
        let mut state = self.state.lock().unwrap();
        state.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(&self, code: &str, update: CompanyUpdate) -> Result<Option<Company>> {
        let mut state = self.state.lock().unwrap();
        let Some(company) = state.companies.iter_mut().find(|c| c.code == code) else {
            return Ok(None);
        };
        company.name = update.name;
        company.description = update.description;
        Ok(Some(company.clone()))
    }

    async fn delete_company(&self, code: &str) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.companies.len();
        state.companies.retain(|c| c.code != code);
        let removed = state.companies.len() < before;
        if removed {
            // ON DELETE CASCADE
            state.invoices.retain(|i| i.comp_code != code);
        }
        Ok(removed)
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>> {
        let state = self.state.lock().unwrap();
        let mut invoices: Vec<InvoiceSummary> = state
            .invoices
            .iter()
            .map(|i| InvoiceSummary {
                id: i.id,
                comp_code: i.comp_code.clone(),
            })
            .collect();
        invoices.sort_by(|a, b| a.comp_code.cmp(&b.comp_code).then(a.id.cmp(&b.id)));
        Ok(invoices)
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<InvoiceDetail>> {
        let state = self.state.lock().unwrap();
        let Some(invoice) = state.invoices.iter().find(|i| i.id == id) else {
            return Ok(None);
        };
        let Some(company) = state
            .companies
            .iter()
            .find(|c| c.code == invoice.comp_code)
        else {
            // JOIN produces no row without a matching company
            return Ok(None);
        };
        Ok(Some(InvoiceDetail {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company: company.clone(),
        }))
    }

    async fn create_invoice(&self, new: NewInvoice) -> Result<Invoice> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let invoice = Invoice {
            id,
            comp_code: new.comp_code,
            amt: new.amt,
            paid: false,
            add_date: Utc::now().date_naive(),
            paid_date: None,
        };
        state.invoices.push(invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice(&self, id: i32, update: InvoiceUpdate) -> Result<Option<Invoice>> {
        let mut state = self.state.lock().unwrap();
        let Some(invoice) = state.invoices.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        invoice.amt = update.amt;
        Ok(Some(invoice.clone()))
    }

    async fn delete_invoice(&self, id: i32) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.invoices.len();
        state.invoices.retain(|i| i.id != id);
        Ok(state.invoices.len() < before)
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

pub fn test_app(store: Arc<MockStore>) -> Router {
    create_app_router(Arc::new(AppState::with_store(store)))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Request with no body at all, for the missing-body failure paths.
pub async fn send_empty(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
