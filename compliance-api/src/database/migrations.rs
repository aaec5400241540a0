use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS companies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR NOT NULL,
            industry VARCHAR NOT NULL,
            size VARCHAR NOT NULL,
            founded_year INTEGER,
            website VARCHAR,
            description VARCHAR,
            logo VARCHAR,
            owner_name VARCHAR NOT NULL,
            owner_email VARCHAR NOT NULL,
            is_verified BOOLEAN NOT NULL DEFAULT false,
            created_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_companies_verified_created
            ON companies(is_verified, created_at)",
        [],
    )?;

    // Position 0 is the primary location
    conn.execute(
        "CREATE TABLE IF NOT EXISTS company_locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            address VARCHAR NOT NULL,
            city VARCHAR NOT NULL,
            state VARCHAR,
            country VARCHAR NOT NULL,
            postal_code VARCHAR,
            FOREIGN KEY (company_id) REFERENCES companies (id),
            UNIQUE (company_id, position)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS company_documents (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER NOT NULL,
            document_type VARCHAR NOT NULL CHECK (document_type IN (
                'BUSINESS_LICENSE', 'COMPANY_REGISTRATION', 'ID_DOCUMENT',
                'TAX_CERTIFICATE', 'PROOF_OF_ADDRESS', 'OTHER')),
            original_name VARCHAR NOT NULL,
            file_url VARCHAR NOT NULL,
            uploaded_at BIGINT NOT NULL,
            verification_status VARCHAR NOT NULL DEFAULT 'PENDING'
                CHECK (verification_status IN ('PENDING', 'APPROVED', 'REJECTED')),
            verification_notes VARCHAR,
            FOREIGN KEY (company_id) REFERENCES companies (id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_company_documents_company
            ON company_documents(company_id, uploaded_at)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('companies', 'company_locations', 'company_documents')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }
}
