//! Company verification and compliance review.
//!
//! Every entry point on [`VerificationService`] takes the caller's role and
//! rejects non-administrators before touching the store.

pub mod access;
pub mod bulk;
pub mod compliance;
pub mod decision;
pub mod error;
pub mod listing;
pub mod query;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use compliance::{compliance_report, evaluate_compliance};
pub use error::VerificationError;
pub use listing::CompanyListing;
pub use session::ReviewSession;

use crate::store::CompanyStore;

pub struct VerificationService<S: CompanyStore> {
    store: S,
}

impl<S: CompanyStore> VerificationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
