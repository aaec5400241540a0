use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod company;
pub mod document;
pub mod verification;

pub use company::{
    CompaniesResponse, Company, CompanyFilter, CompanyLocation, CompanyOwner, CompanyStats,
    Pagination, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT,
};
pub use document::{
    CompanyDocument, CompanyDocumentsResponse, ComplianceReport, ComplianceStatus, DocumentType,
    DocumentVerificationStatus,
};
pub use verification::{
    BulkActionKind, BulkActionResult, BulkCompanyAction, BulkItemFailure, UserRole,
    VerificationDecision,
};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}
