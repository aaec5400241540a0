pub mod sqlite_store;

pub use sqlite_store::SqliteCompanyStore;

use anyhow::Result;
use async_trait::async_trait;
use shared_types::{Company, CompanyDocument, CompanyFilter, CompanyStats};

/// Persistence collaborator behind the verification service.
///
/// Implementations only store and fetch. Validation, access checks and
/// pagination metadata belong to the service.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Matching companies for the filter's page, and the total match count
    async fn list_companies(&self, filter: &CompanyFilter) -> Result<(Vec<Company>, i64)>;
    async fn get_company(&self, id: i64) -> Result<Option<Company>>;
    async fn get_company_documents(&self, company_id: i64) -> Result<Vec<CompanyDocument>>;

    /// Persist the verification flag and return the updated company, or
    /// `None` when the id is unknown
    async fn set_verified(&self, id: i64, is_verified: bool) -> Result<Option<Company>>;

    async fn company_stats(&self) -> Result<CompanyStats>;
}
