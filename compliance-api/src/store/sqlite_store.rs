use super::CompanyStore;
use crate::database::{companies, documents, AsyncDbConnection};
use async_trait::async_trait;
use shared_types::{Company, CompanyDocument, CompanyFilter, CompanyStats};

pub struct SqliteCompanyStore {
    conn: AsyncDbConnection,
}

impl SqliteCompanyStore {
    pub fn new(conn: AsyncDbConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CompanyStore for SqliteCompanyStore {
    async fn list_companies(&self, filter: &CompanyFilter) -> anyhow::Result<(Vec<Company>, i64)> {
        companies::list_companies(self.conn.clone(), filter).await
    }

    async fn get_company(&self, id: i64) -> anyhow::Result<Option<Company>> {
        companies::get_company(self.conn.clone(), id).await
    }

    async fn get_company_documents(&self, company_id: i64) -> anyhow::Result<Vec<CompanyDocument>> {
        documents::list_company_documents(self.conn.clone(), company_id).await
    }

    async fn set_verified(&self, id: i64, is_verified: bool) -> anyhow::Result<Option<Company>> {
        if !companies::set_verified(self.conn.clone(), id, is_verified).await? {
            return Ok(None);
        }

        companies::get_company(self.conn.clone(), id).await
    }

    async fn company_stats(&self) -> anyhow::Result<CompanyStats> {
        companies::company_stats(self.conn.clone()).await
    }
}
