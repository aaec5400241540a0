//! In-memory store and fixtures shared by the unit tests.

use crate::store::CompanyStore;
use async_trait::async_trait;
use shared_types::{
    Company, CompanyDocument, CompanyFilter, CompanyLocation, CompanyOwner, CompanyStats,
    DocumentType, DocumentVerificationStatus,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn sample_company(name: &str, is_verified: bool, created_at: i64) -> Company {
    Company {
        id: 0,
        name: name.to_string(),
        industry: "Technology".to_string(),
        size: "11-50".to_string(),
        founded_year: Some(2015),
        website: Some(format!("https://{}.example.com", name.to_lowercase())),
        description: Some(format!("{} builds software", name)),
        logo: None,
        owner: CompanyOwner {
            name: "Jane Owner".to_string(),
            email: "owner@example.com".to_string(),
        },
        locations: vec![
            CompanyLocation {
                address: "1 Kenyatta Ave".to_string(),
                city: "Nairobi".to_string(),
                state: None,
                country: "Kenya".to_string(),
                postal_code: Some("00100".to_string()),
            },
            CompanyLocation {
                address: "20 Main St".to_string(),
                city: "Kampala".to_string(),
                state: None,
                country: "Uganda".to_string(),
                postal_code: None,
            },
        ],
        is_verified,
        created_at,
    }
}

pub fn document(
    company_id: i64,
    document_type: DocumentType,
    verification_status: DocumentVerificationStatus,
) -> CompanyDocument {
    CompanyDocument {
        id: 0,
        company_id,
        document_type,
        original_name: format!("{}.pdf", document_type.as_str().to_lowercase()),
        file_url: format!("https://files.example.com/{}/{}", company_id, document_type),
        uploaded_at: 1_700_000_000,
        verification_status,
        verification_notes: None,
    }
}

/// Store backed by a vector. Ids listed in `failing_ids` make `set_verified`
/// fail, and every call is counted.
#[derive(Default)]
pub struct MemoryStore {
    companies: Mutex<Vec<Company>>,
    documents: Mutex<Vec<CompanyDocument>>,
    failing_ids: HashSet<i64>,
    write_delay: Option<Duration>,
    last_filter: Mutex<Option<CompanyFilter>>,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with_companies(companies: Vec<Company>) -> Self {
        let companies = companies
            .into_iter()
            .enumerate()
            .map(|(i, mut c)| {
                c.id = i as i64 + 1;
                c
            })
            .collect();
        Self {
            companies: Mutex::new(companies),
            ..Default::default()
        }
    }

    pub fn failing_on(mut self, ids: &[i64]) -> Self {
        self.failing_ids = ids.iter().copied().collect();
        self
    }

    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    pub fn add_document(&self, document: CompanyDocument) {
        let mut documents = self.documents.lock().unwrap();
        let mut document = document;
        document.id = documents.len() as i64 + 1;
        documents.push(document);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn is_verified(&self, id: i64) -> Option<bool> {
        self.companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.is_verified)
    }

    /// Filter passed to the most recent `list_companies` call
    pub fn last_filter(&self) -> Option<CompanyFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_filter(company: &Company, filter: &CompanyFilter) -> bool {
    let search = filter.search_term().map_or(true, |term| {
        contains_folded(&company.name, term)
            || company
                .description
                .as_deref()
                .map_or(false, |d| contains_folded(d, term))
    });
    let city = filter.city_term().map_or(true, |term| {
        company.locations.iter().any(|l| contains_folded(&l.city, term))
    });
    let country = filter.country_term().map_or(true, |term| {
        company.locations.iter().any(|l| contains_folded(&l.country, term))
    });

    search
        && city
        && country
        && filter.verified.map_or(true, |v| company.is_verified == v)
        && filter
            .industry_term()
            .map_or(true, |term| contains_folded(&company.industry, term))
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn list_companies(&self, filter: &CompanyFilter) -> anyhow::Result<(Vec<Company>, i64)> {
        self.record_call();
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        let companies = self.companies.lock().unwrap();
        let matching: Vec<Company> = companies
            .iter()
            .filter(|c| matches_filter(c, filter))
            .cloned()
            .collect();
        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.limit() as usize)
            .collect();
        Ok((page, total))
    }

    async fn get_company(&self, id: i64) -> anyhow::Result<Option<Company>> {
        self.record_call();
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn get_company_documents(&self, company_id: i64) -> anyhow::Result<Vec<CompanyDocument>> {
        self.record_call();
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn set_verified(&self, id: i64, is_verified: bool) -> anyhow::Result<Option<Company>> {
        self.record_call();
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_ids.contains(&id) {
            anyhow::bail!("connection reset while updating company {}", id);
        }

        let mut companies = self.companies.lock().unwrap();
        Ok(companies.iter_mut().find(|c| c.id == id).map(|c| {
            c.is_verified = is_verified;
            c.clone()
        }))
    }

    async fn company_stats(&self) -> anyhow::Result<CompanyStats> {
        self.record_call();
        let companies = self.companies.lock().unwrap();
        let verified = companies.iter().filter(|c| c.is_verified).count() as i64;
        let total = companies.len() as i64;
        Ok(CompanyStats {
            total,
            verified,
            unverified: total - verified,
        })
    }
}
