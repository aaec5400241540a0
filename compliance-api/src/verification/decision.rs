use super::access::require_reviewer;
use super::{VerificationError, VerificationService};
use crate::store::CompanyStore;
use shared_types::{Company, UserRole, VerificationDecision};

/// A rejection must state its reason. Approval notes are optional.
pub fn validate_decision(decision: &VerificationDecision) -> Result<(), VerificationError> {
    if !decision.is_approved && decision.notes.trim().is_empty() {
        return Err(VerificationError::Validation(
            "Rejection notes are required".to_string(),
        ));
    }

    Ok(())
}

impl<S: CompanyStore> VerificationService<S> {
    /// Approve or reject a company and return the updated record.
    ///
    /// Only `is_verified` changes; documents are left untouched.
    pub async fn decide_verification(
        &self,
        role: UserRole,
        company_id: i64,
        decision: &VerificationDecision,
    ) -> Result<Company, VerificationError> {
        require_reviewer(role)?;
        validate_decision(decision)?;

        self.apply_decision(company_id, decision).await
    }

    /// Persist a decision without validating its notes
    pub(crate) async fn apply_decision(
        &self,
        company_id: i64,
        decision: &VerificationDecision,
    ) -> Result<Company, VerificationError> {
        let company = self
            .store
            .set_verified(company_id, decision.is_approved)
            .await
            .map_err(VerificationError::persistence)?
            .ok_or(VerificationError::NotFound(company_id))?;

        tracing::info!(
            company_id,
            approved = decision.is_approved,
            notes = %decision.notes,
            "Applied verification decision"
        );

        Ok(company)
    }
}
