//! Query executor for the `companies` and `invoices` tables.
//!
//! Handlers talk to the [`BiztimeStore`] trait so they can be exercised
//! against an in-memory double without a live database. [`PgStore`] is the
//! production implementation; every method is a single parameterized
//! statement (the not-found decision is made by the caller from the
//! returned `Option`/`bool`).

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::models::{
    Company, CompanyUpdate, Invoice, InvoiceDetail, InvoiceSummary, InvoiceUpdate, NewCompany,
    NewInvoice,
};
use crate::Result;

#[async_trait]
pub trait BiztimeStore: Send + Sync {
    async fn list_companies(&self) -> Result<Vec<Company>>;
    async fn get_company(&self, code: &str) -> Result<Option<Company>>;
    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>>;
    async fn create_company(&self, new: NewCompany) -> Result<Company>;
    async fn update_company(&self, code: &str, update: CompanyUpdate) -> Result<Option<Company>>;
    async fn delete_company(&self, code: &str) -> Result<bool>;

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>>;
    async fn get_invoice(&self, id: i32) -> Result<Option<InvoiceDetail>>;
    async fn create_invoice(&self, new: NewInvoice) -> Result<Invoice>;
    async fn update_invoice(&self, id: i32, update: InvoiceUpdate) -> Result<Option<Invoice>>;
    async fn delete_invoice(&self, id: i32) -> Result<bool>;

    async fn health_check(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Flat row produced by the invoice/company join; reshaped into
/// [`InvoiceDetail`] before it leaves the store.
#[derive(Debug, FromRow)]
struct InvoiceCompanyRow {
    id: i32,
    amt: Decimal,
    paid: bool,
    add_date: chrono::NaiveDate,
    paid_date: Option<chrono::NaiveDate>,
    code: String,
    name: String,
    description: String,
}

impl From<InvoiceCompanyRow> for InvoiceDetail {
    fn from(row: InvoiceCompanyRow) -> Self {
        InvoiceDetail {
            id: row.id,
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
            company: Company {
                code: row.code,
                name: row.name,
                description: row.description,
            },
        }
    }
}

#[async_trait]
impl BiztimeStore for PgStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    async fn get_company(&self, code: &str) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn invoice_ids_for_company(&self, code: &str) -> Result<Vec<i32>> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    async fn create_company(&self, new: NewCompany) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&new.code)
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    async fn update_company(&self, code: &str, update: CompanyUpdate) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $2, description = $3 \
             WHERE code = $1 \
             RETURNING code, name, description",
        )
        .bind(code)
        .bind(&update.name)
        .bind(&update.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    async fn delete_company(&self, code: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>> {
        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            "SELECT id, comp_code FROM invoices ORDER BY comp_code, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    async fn get_invoice(&self, id: i32) -> Result<Option<InvoiceDetail>> {
        let row = sqlx::query_as::<_, InvoiceCompanyRow>(
            "SELECT i.id, i.amt, i.paid, i.add_date, i.paid_date, \
                    c.code, c.name, c.description \
             FROM invoices AS i \
             JOIN companies AS c ON i.comp_code = c.code \
             WHERE i.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(InvoiceDetail::from))
    }

    async fn create_invoice(&self, new: NewInvoice) -> Result<Invoice> {
        // paid, add_date and paid_date come from the column defaults
        let invoice = sqlx::query_as::<_, Invoice>(
            "INSERT INTO invoices (comp_code, amt) \
             VALUES ($1, $2) \
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(&new.comp_code)
        .bind(new.amt)
        .fetch_one(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn update_invoice(&self, id: i32, update: InvoiceUpdate) -> Result<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "UPDATE invoices SET amt = $2 \
             WHERE id = $1 \
             RETURNING id, comp_code, amt, paid, add_date, paid_date",
        )
        .bind(id)
        .bind(update.amt)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    async fn delete_invoice(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
