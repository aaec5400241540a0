use super::access::require_reviewer;
use super::{compliance_report, VerificationError, VerificationService};
use crate::store::CompanyStore;
use shared_types::{
    CompaniesResponse, Company, CompanyDocumentsResponse, CompanyFilter, CompanyStats, Pagination,
    UserRole,
};

impl<S: CompanyStore> VerificationService<S> {
    /// One page of companies matching every provided filter.
    ///
    /// Pagination metadata is derived here from the store's match count, and
    /// a page past the end is an empty page.
    pub async fn list_companies(
        &self,
        role: UserRole,
        filter: &CompanyFilter,
    ) -> Result<CompaniesResponse, VerificationError> {
        require_reviewer(role)?;

        let filter = normalize_filter(filter);
        let (mut companies, total) = self
            .store
            .list_companies(&filter)
            .await
            .map_err(VerificationError::persistence)?;

        let pagination = Pagination::for_filter(&filter, total);
        companies.truncate(pagination.limit as usize);

        tracing::debug!(
            page = pagination.page,
            limit = pagination.limit,
            total = pagination.total,
            returned = companies.len(),
            "Listed companies"
        );

        Ok(CompaniesResponse {
            companies,
            pagination,
        })
    }

    pub async fn get_company(&self, role: UserRole, id: i64) -> Result<Company, VerificationError> {
        require_reviewer(role)?;

        self.store
            .get_company(id)
            .await
            .map_err(VerificationError::persistence)?
            .ok_or(VerificationError::NotFound(id))
    }

    /// Documents on file for a company with their compliance classification
    pub async fn get_company_documents(
        &self,
        role: UserRole,
        company_id: i64,
    ) -> Result<CompanyDocumentsResponse, VerificationError> {
        let company = self.get_company(role, company_id).await?;

        let documents = self
            .store
            .get_company_documents(company_id)
            .await
            .map_err(VerificationError::persistence)?;

        let compliance = compliance_report(company.is_verified, &documents);

        Ok(CompanyDocumentsResponse {
            company_id,
            documents,
            compliance,
        })
    }

    pub async fn company_stats(&self, role: UserRole) -> Result<CompanyStats, VerificationError> {
        require_reviewer(role)?;

        self.store
            .company_stats()
            .await
            .map_err(VerificationError::persistence)
    }
}

/// Trim text filters, drop blank ones and make page/limit explicit
fn normalize_filter(filter: &CompanyFilter) -> CompanyFilter {
    CompanyFilter {
        search: filter.search_term().map(str::to_string),
        verified: filter.verified,
        industry: filter.industry_term().map(str::to_string),
        city: filter.city_term().map(str::to_string),
        country: filter.country_term().map(str::to_string),
        page: Some(filter.page()),
        limit: Some(filter.limit()),
    }
}
