use super::{CompanyListing, VerificationError, VerificationService};
use crate::store::CompanyStore;
use shared_types::{
    BulkActionResult, BulkCompanyAction, Company, CompanyFilter, UserRole, VerificationDecision,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A reviewer's view over one company listing.
///
/// At most one decision or bulk action runs at a time; a call made while
/// another is pending returns `Ok(None)` without touching the store.
pub struct ReviewSession<S: CompanyStore> {
    service: Arc<VerificationService<S>>,
    role: UserRole,
    listing: Mutex<CompanyListing>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the call finishes or is dropped
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<S: CompanyStore> ReviewSession<S> {
    pub fn new(service: Arc<VerificationService<S>>, role: UserRole) -> Self {
        Self {
            service,
            role,
            listing: Mutex::new(CompanyListing::empty()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Current snapshot. Decisions made elsewhere show up after `refresh`.
    pub fn listing(&self) -> CompanyListing {
        self.lock_listing().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn refresh(&self, filter: &CompanyFilter) -> Result<(), VerificationError> {
        let response = self.service.list_companies(self.role, filter).await?;
        *self.lock_listing() = CompanyListing::new(response);
        Ok(())
    }

    pub async fn decide(
        &self,
        company_id: i64,
        decision: &VerificationDecision,
    ) -> Result<Option<Company>, VerificationError> {
        let Some(_guard) = self.begin() else {
            tracing::debug!(company_id, "Decision ignored, another call is in flight");
            return Ok(None);
        };

        let company = self
            .service
            .decide_verification(self.role, company_id, decision)
            .await?;
        self.lock_listing().upsert(company.clone());

        Ok(Some(company))
    }

    pub async fn bulk(
        &self,
        action: &BulkCompanyAction,
    ) -> Result<Option<BulkActionResult>, VerificationError> {
        let Some(_guard) = self.begin() else {
            tracing::debug!("Bulk action ignored, another call is in flight");
            return Ok(None);
        };

        let result = self.service.apply_bulk_action(self.role, action).await?;
        Ok(Some(result))
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(InFlight(&self.in_flight))
        }
    }

    fn lock_listing(&self) -> std::sync::MutexGuard<'_, CompanyListing> {
        // A poisoned snapshot is still a valid snapshot
        self.listing
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
