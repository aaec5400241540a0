pub mod config;
pub mod database;
pub mod handlers;
pub mod helpers;
pub mod store;
pub mod verification;

pub use database::Database;
pub use store::{CompanyStore, SqliteCompanyStore};
pub use verification::{ReviewSession, VerificationError, VerificationService};
