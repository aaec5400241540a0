use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Compliance document uploaded by an employer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyDocument {
    pub id: i64,
    pub company_id: i64,
    pub document_type: DocumentType,
    pub original_name: String,
    pub file_url: String,
    pub uploaded_at: i64,
    pub verification_status: DocumentVerificationStatus,
    pub verification_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    BusinessLicense,
    CompanyRegistration,
    IdDocument,
    TaxCertificate,
    ProofOfAddress,
    Other,
}

impl DocumentType {
    /// Types that must all be on file before a company can be reviewed
    pub const REQUIRED: [DocumentType; 3] = [
        DocumentType::BusinessLicense,
        DocumentType::CompanyRegistration,
        DocumentType::IdDocument,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::BusinessLicense => "BUSINESS_LICENSE",
            DocumentType::CompanyRegistration => "COMPANY_REGISTRATION",
            DocumentType::IdDocument => "ID_DOCUMENT",
            DocumentType::TaxCertificate => "TAX_CERTIFICATE",
            DocumentType::ProofOfAddress => "PROOF_OF_ADDRESS",
            DocumentType::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUSINESS_LICENSE" => Ok(DocumentType::BusinessLicense),
            "COMPANY_REGISTRATION" => Ok(DocumentType::CompanyRegistration),
            "ID_DOCUMENT" => Ok(DocumentType::IdDocument),
            "TAX_CERTIFICATE" => Ok(DocumentType::TaxCertificate),
            "PROOF_OF_ADDRESS" => Ok(DocumentType::ProofOfAddress),
            "OTHER" => Ok(DocumentType::Other),
            _ => Err(format!("Unknown document type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentVerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentVerificationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentVerificationStatus::Pending => "PENDING",
            DocumentVerificationStatus::Approved => "APPROVED",
            DocumentVerificationStatus::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for DocumentVerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(DocumentVerificationStatus::Pending),
            "APPROVED" => Ok(DocumentVerificationStatus::Approved),
            "REJECTED" => Ok(DocumentVerificationStatus::Rejected),
            _ => Err(format!("Unknown verification status: {}", s)),
        }
    }
}

/// Review state derived from a company's verification flag and documents.
/// Display only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Verified,
    Incomplete,
    PendingReview,
    NonCompliant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComplianceReport {
    pub status: ComplianceStatus,
    pub missing_documents: Vec<DocumentType>,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyDocumentsResponse {
    pub company_id: i64,
    pub documents: Vec<CompanyDocument>,
    pub compliance: ComplianceReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_type_serialization() {
        let json = serde_json::to_string(&DocumentType::BusinessLicense).unwrap();
        assert_eq!(json, "\"BUSINESS_LICENSE\"");

        let parsed: DocumentType = "ID_DOCUMENT".parse().unwrap();
        assert_eq!(parsed, DocumentType::IdDocument);
        assert!("PASSPORT".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_only_three_types_are_required() {
        let required: Vec<_> = [
            DocumentType::BusinessLicense,
            DocumentType::CompanyRegistration,
            DocumentType::IdDocument,
            DocumentType::TaxCertificate,
            DocumentType::ProofOfAddress,
            DocumentType::Other,
        ]
        .into_iter()
        .filter(DocumentType::is_required)
        .collect();
        assert_eq!(required, DocumentType::REQUIRED.to_vec());
    }

    #[test]
    fn test_enum_declarations_use_wire_names() {
        assert!(DocumentType::decl().contains("\"COMPANY_REGISTRATION\""));
        assert!(DocumentVerificationStatus::decl().contains("\"REJECTED\""));
        assert!(ComplianceStatus::decl().contains("\"NON_COMPLIANT\""));
    }

    #[test]
    fn test_compliance_status_serialization() {
        let json = serde_json::to_string(&ComplianceStatus::PendingReview).unwrap();
        assert_eq!(json, "\"PENDING_REVIEW\"");
    }
}
