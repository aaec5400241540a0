use super::VerificationError;
use shared_types::UserRole;

/// Only administrators may review companies
pub fn require_reviewer(role: UserRole) -> Result<(), VerificationError> {
    if role.can_review_companies() {
        Ok(())
    } else {
        tracing::warn!(role = %role, "Rejected company review access");
        Err(VerificationError::Authorization(format!(
            "Role {} may not review companies",
            role
        )))
    }
}
