use std::path::PathBuf;
use std::sync::Arc;

use crate::database::Database;

/// Returns the default path of the review database
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/company-verification/db.sqlite`
/// - **Linux**: `~/.local/share/company-verification/db.sqlite`
/// - **Windows**: `%LOCALAPPDATA%\company-verification\db.sqlite`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("company-verification").join("db.sqlite"))
}

/// Open (and migrate) the database at `path`, or at the default location
pub fn initialize_database(path: Option<PathBuf>) -> anyhow::Result<(Arc<Database>, PathBuf)> {
    let db_path = match path {
        Some(path) => path,
        None => get_db_path()?,
    };

    let db = Database::new(&db_path)?;
    Ok((Arc::new(db), db_path))
}
