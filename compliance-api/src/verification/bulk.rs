use super::access::require_reviewer;
use super::{VerificationError, VerificationService};
use crate::store::CompanyStore;
use shared_types::{BulkActionResult, BulkCompanyAction, BulkItemFailure, UserRole};

impl<S: CompanyStore> VerificationService<S> {
    /// Apply one decision to every distinct company in the action.
    ///
    /// A failing item is recorded and the batch moves on. Shared notes are
    /// not required for a bulk rejection, unlike a single rejection.
    pub async fn apply_bulk_action(
        &self,
        role: UserRole,
        action: &BulkCompanyAction,
    ) -> Result<BulkActionResult, VerificationError> {
        require_reviewer(role)?;

        let company_ids = action.distinct_ids();
        if company_ids.is_empty() {
            return Err(VerificationError::Validation(
                "At least one company must be selected".to_string(),
            ));
        }

        let decision = action.decision();
        let mut succeeded = 0;
        let mut failures = Vec::new();

        for company_id in company_ids {
            match self.apply_decision(company_id, &decision).await {
                Ok(_) => succeeded += 1,
                Err(e) => {
                    tracing::warn!(company_id, error = %e, "Bulk verification item failed");
                    failures.push(BulkItemFailure {
                        company_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        let result = BulkActionResult {
            message: summary_message(action, succeeded, failures.len()),
            succeeded,
            failed: failures.len(),
            failures,
        };

        tracing::info!(
            action = action.action.as_str(),
            succeeded = result.succeeded,
            failed = result.failed,
            "Bulk verification finished"
        );

        Ok(result)
    }
}

fn summary_message(action: &BulkCompanyAction, succeeded: usize, failed: usize) -> String {
    let verb = if action.action.is_approval() {
        "approved"
    } else {
        "rejected"
    };
    let noun = |n: usize| if n == 1 { "company" } else { "companies" };

    if failed == 0 {
        format!("Successfully {} {} {}", verb, succeeded, noun(succeeded))
    } else {
        format!(
            "{} {} {}, {} failed",
            capitalize(verb),
            succeeded,
            noun(succeeded),
            failed
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
