use anyhow::Context;
use serde::Deserialize;
use shared_types::{
    Company, CompanyDocument, CompanyLocation, CompanyOwner, DocumentType,
    DocumentVerificationStatus,
};
use std::path::Path;

use crate::database::{companies, documents, AsyncDbConnection};

/// Fixture file format: a list of companies, each with its documents
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub companies: Vec<SeedCompany>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCompany {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub founded_year: Option<i32>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub owner: CompanyOwner,
    #[serde(default)]
    pub locations: Vec<CompanyLocation>,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: Option<i64>,
    #[serde(default)]
    pub documents: Vec<SeedDocument>,
}

#[derive(Debug, Deserialize)]
pub struct SeedDocument {
    pub document_type: DocumentType,
    pub original_name: String,
    pub file_url: String,
    pub uploaded_at: Option<i64>,
    #[serde(default = "default_status")]
    pub verification_status: DocumentVerificationStatus,
    pub verification_notes: Option<String>,
}

fn default_status() -> DocumentVerificationStatus {
    DocumentVerificationStatus::Pending
}

/// Import fixtures into an empty database. Returns how many companies were
/// inserted; a database that already has companies is left alone.
pub async fn seed_from_file(conn: AsyncDbConnection, path: &Path) -> anyhow::Result<usize> {
    let existing = companies::count_companies(conn.clone()).await?;
    if existing > 0 {
        tracing::info!(existing, "Database already has companies, skipping seed");
        return Ok(0);
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed: SeedFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    seed_companies(conn, seed).await
}

/// Insert every company and document from the seed in one transaction, so a
/// failure leaves the database empty and a later run can retry.
pub async fn seed_companies(conn: AsyncDbConnection, seed: SeedFile) -> anyhow::Result<usize> {
    let now = chrono::Utc::now().timestamp();
    let mut conn = conn.lock().await?;
    let tx = conn.transaction()?;
    let mut inserted = 0;

    for entry in seed.companies {
        let company = Company {
            id: 0,
            name: entry.name,
            industry: entry.industry,
            size: entry.size,
            founded_year: entry.founded_year,
            website: entry.website,
            description: entry.description,
            logo: entry.logo,
            owner: entry.owner,
            locations: entry.locations,
            is_verified: entry.is_verified,
            created_at: entry.created_at.unwrap_or(now),
        };
        let company_id = companies::write_company(&tx, &company)
            .with_context(|| format!("Failed to seed company {}", company.name))?;

        for doc in entry.documents {
            let document = CompanyDocument {
                id: 0,
                company_id,
                document_type: doc.document_type,
                original_name: doc.original_name,
                file_url: doc.file_url,
                uploaded_at: doc.uploaded_at.unwrap_or(now),
                verification_status: doc.verification_status,
                verification_notes: doc.verification_notes,
            };
            documents::write_document(&tx, &document).with_context(|| {
                format!(
                    "Failed to seed document {} for {}",
                    document.original_name, company.name
                )
            })?;
        }

        inserted += 1;
    }

    tx.commit()?;
    tracing::info!(inserted, "Seeded companies");
    Ok(inserted)
}
