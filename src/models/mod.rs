pub mod company;
pub mod invoice;

pub use company::{
    CompaniesResponse, Company, CompanyDeletedResponse, CompanyDetail, CompanyDetailResponse,
    CompanyResponse, CompanyUpdate, NewCompany,
};
pub use invoice::{
    Invoice, InvoiceDeletedResponse, InvoiceDetail, InvoiceDetailResponse, InvoiceResponse,
    InvoiceSummary, InvoiceUpdate, InvoicesResponse, NewInvoice,
};
