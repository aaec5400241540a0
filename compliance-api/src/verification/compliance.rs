use shared_types::{
    CompanyDocument, ComplianceReport, ComplianceStatus, DocumentType, DocumentVerificationStatus,
};

/// Classify a company's review state. First matching rule wins:
/// verified, then fewer than three required documents, then any required
/// document pending, otherwise non-compliant.
///
/// The last rule covers both rejected documents and fully approved
/// documents awaiting sign-off.
pub fn evaluate_compliance(is_verified: bool, documents: &[CompanyDocument]) -> ComplianceStatus {
    if is_verified {
        return ComplianceStatus::Verified;
    }

    let required: Vec<&CompanyDocument> = documents
        .iter()
        .filter(|d| d.document_type.is_required())
        .collect();

    if required.len() < DocumentType::REQUIRED.len() {
        return ComplianceStatus::Incomplete;
    }

    if required
        .iter()
        .any(|d| d.verification_status == DocumentVerificationStatus::Pending)
    {
        return ComplianceStatus::PendingReview;
    }

    ComplianceStatus::NonCompliant
}

/// Classification plus the details a reviewer needs next to it
pub fn compliance_report(is_verified: bool, documents: &[CompanyDocument]) -> ComplianceReport {
    let missing_documents = DocumentType::REQUIRED
        .iter()
        .filter(|t| !documents.iter().any(|d| d.document_type == **t))
        .copied()
        .collect();

    let count = |status: DocumentVerificationStatus| {
        documents
            .iter()
            .filter(|d| d.document_type.is_required() && d.verification_status == status)
            .count()
    };

    ComplianceReport {
        status: evaluate_compliance(is_verified, documents),
        missing_documents,
        pending_count: count(DocumentVerificationStatus::Pending),
        approved_count: count(DocumentVerificationStatus::Approved),
        rejected_count: count(DocumentVerificationStatus::Rejected),
    }
}
