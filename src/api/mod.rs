pub mod companies;
pub mod invoices;
pub mod system;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

/// Assemble the routers of every resource module.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(companies::create_companies_router())
        .merge(invoices::create_invoices_router())
        .merge(system::create_system_router())
}
