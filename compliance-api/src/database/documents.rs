use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::Connection;
use shared_types::{CompanyDocument, DocumentType, DocumentVerificationStatus};

pub async fn insert_document(conn: AsyncDbConnection, document: &CompanyDocument) -> Result<i64> {
    let conn = conn.lock().await?;
    Ok(write_document(&conn, document)?)
}

/// Write a document row on the caller's connection
pub fn write_document(conn: &Connection, document: &CompanyDocument) -> rusqlite::Result<i64> {
    conn.query_row(
        "INSERT INTO company_documents
         (company_id, document_type, original_name, file_url, uploaded_at,
          verification_status, verification_notes)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            document.company_id,
            document.document_type.as_str(),
            &document.original_name,
            &document.file_url,
            document.uploaded_at,
            document.verification_status.as_str(),
            document.verification_notes.as_ref(),
        ],
        |row| row.get(0),
    )
}

pub async fn list_company_documents(
    conn: AsyncDbConnection,
    company_id: i64,
) -> Result<Vec<CompanyDocument>> {
    let conn = conn.lock().await?;

    let mut stmt = conn.prepare(
        "SELECT id, company_id, document_type, original_name, file_url, uploaded_at,
                verification_status, verification_notes
         FROM company_documents
         WHERE company_id = ?
         ORDER BY uploaded_at DESC, id DESC",
    )?;

    let rows = stmt
        .query_map([company_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, i64>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, Option<String>>(7)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut documents = Vec::with_capacity(rows.len());
    for (id, company_id, document_type, original_name, file_url, uploaded_at, status, notes) in
        rows
    {
        documents.push(CompanyDocument {
            id,
            company_id,
            document_type: document_type
                .parse::<DocumentType>()
                .map_err(|e| anyhow::anyhow!(e))?,
            original_name,
            file_url,
            uploaded_at,
            verification_status: status
                .parse::<DocumentVerificationStatus>()
                .map_err(|e| anyhow::anyhow!(e))?,
            verification_notes: notes,
        });
    }

    Ok(documents)
}
