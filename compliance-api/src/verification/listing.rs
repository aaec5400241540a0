use shared_types::{CompaniesResponse, Company, Pagination};

/// Snapshot of one page of companies as last queried
#[derive(Debug, Clone)]
pub struct CompanyListing {
    companies: Vec<Company>,
    pagination: Pagination,
}

impl CompanyListing {
    pub fn new(response: CompaniesResponse) -> Self {
        Self {
            companies: response.companies,
            pagination: response.pagination,
        }
    }

    pub fn empty() -> Self {
        Self {
            companies: Vec::new(),
            pagination: Pagination::new(1, 0, 0),
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn get(&self, id: i64) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Replace the company with the same id in place, or append it.
    /// Pagination metadata is left alone.
    pub fn upsert(&mut self, company: Company) {
        match self.companies.iter_mut().find(|c| c.id == company.id) {
            Some(existing) => *existing = company,
            None => self.companies.push(company),
        }
    }
}
