use crate::database::AsyncDbConnection;
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension};
use shared_types::{Company, CompanyFilter, CompanyLocation, CompanyOwner, CompanyStats};

const COMPANY_COLUMNS: &str = "id, name, industry, size, founded_year, website, description, logo,
     owner_name, owner_email, is_verified, created_at";

/// Insert a company and its locations. `company.id` is ignored and the
/// generated id is returned.
pub async fn insert_company(conn: AsyncDbConnection, company: &Company) -> Result<i64> {
    let mut conn = conn.lock().await?;
    let tx = conn.transaction()?;
    let id = write_company(&tx, company)?;
    tx.commit()?;
    Ok(id)
}

/// Write a company row and its locations on the caller's connection.
/// Callers own the surrounding transaction.
pub fn write_company(conn: &Connection, company: &Company) -> rusqlite::Result<i64> {
    let id: i64 = conn.query_row(
        "INSERT INTO companies
         (name, industry, size, founded_year, website, description, logo,
          owner_name, owner_email, is_verified, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
        rusqlite::params![
            &company.name,
            &company.industry,
            &company.size,
            company.founded_year,
            company.website.as_ref(),
            company.description.as_ref(),
            company.logo.as_ref(),
            &company.owner.name,
            &company.owner.email,
            company.is_verified,
            company.created_at,
        ],
        |row| row.get(0),
    )?;

    for (position, location) in company.locations.iter().enumerate() {
        conn.execute(
            "INSERT INTO company_locations
             (company_id, position, address, city, state, country, postal_code)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                id,
                position as i64,
                &location.address,
                &location.city,
                location.state.as_ref(),
                &location.country,
                location.postal_code.as_ref(),
            ],
        )?;
    }

    Ok(id)
}

pub async fn get_company(conn: AsyncDbConnection, id: i64) -> Result<Option<Company>> {
    let conn = conn.lock().await?;
    read_company(&conn, id).map_err(|e| anyhow::anyhow!("Failed to get company: {}", e))
}

/// Filtered page of companies, newest first, plus the unpaginated match count
pub async fn list_companies(
    conn: AsyncDbConnection,
    filter: &CompanyFilter,
) -> Result<(Vec<Company>, i64)> {
    let conn = conn.lock().await?;
    let (where_clause, mut params) = filter_clause(filter);

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM companies c{}", where_clause),
        rusqlite::params_from_iter(params.iter()),
        |row| row.get(0),
    )?;

    params.push(Value::Integer(filter.limit()));
    params.push(Value::Integer(filter.offset()));

    let mut stmt = conn.prepare(&format!(
        "SELECT c.id FROM companies c{}
         ORDER BY c.created_at DESC, c.id DESC
         LIMIT ? OFFSET ?",
        where_clause
    ))?;

    let ids: Vec<i64> = stmt
        .query_map(rusqlite::params_from_iter(params.iter()), |row| row.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    let mut companies = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(company) = read_company(&conn, id)? {
            companies.push(company);
        }
    }

    Ok((companies, total))
}

/// Set the verification flag. Returns false when no company has this id.
pub async fn set_verified(conn: AsyncDbConnection, id: i64, is_verified: bool) -> Result<bool> {
    let conn = conn.lock().await?;
    let changed = conn.execute(
        "UPDATE companies SET is_verified = ? WHERE id = ?",
        rusqlite::params![is_verified, id],
    )?;

    Ok(changed > 0)
}

pub async fn company_stats(conn: AsyncDbConnection) -> Result<CompanyStats> {
    let conn = conn.lock().await?;
    let (total, verified): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN is_verified THEN 1 ELSE 0 END), 0)
         FROM companies",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(CompanyStats {
        total,
        verified,
        unverified: total - verified,
    })
}

pub async fn count_companies(conn: AsyncDbConnection) -> Result<i64> {
    let conn = conn.lock().await?;
    let count = conn.query_row("SELECT COUNT(*) FROM companies", [], |row| row.get(0))?;
    Ok(count)
}

fn read_company(conn: &Connection, id: i64) -> rusqlite::Result<Option<Company>> {
    let company = conn
        .query_row(
            &format!("SELECT {} FROM companies WHERE id = ?", COMPANY_COLUMNS),
            [id],
            |row| {
                Ok(Company {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    industry: row.get(2)?,
                    size: row.get(3)?,
                    founded_year: row.get(4)?,
                    website: row.get(5)?,
                    description: row.get(6)?,
                    logo: row.get(7)?,
                    owner: CompanyOwner {
                        name: row.get(8)?,
                        email: row.get(9)?,
                    },
                    locations: Vec::new(),
                    is_verified: row.get(10)?,
                    created_at: row.get(11)?,
                })
            },
        )
        .optional()?;

    match company {
        Some(mut company) => {
            company.locations = read_locations(conn, id)?;
            Ok(Some(company))
        }
        None => Ok(None),
    }
}

fn read_locations(conn: &Connection, company_id: i64) -> rusqlite::Result<Vec<CompanyLocation>> {
    let mut stmt = conn.prepare(
        "SELECT address, city, state, country, postal_code
         FROM company_locations
         WHERE company_id = ?
         ORDER BY position",
    )?;

    let locations = stmt
        .query_map([company_id], |row| {
            Ok(CompanyLocation {
                address: row.get(0)?,
                city: row.get(1)?,
                state: row.get(2)?,
                country: row.get(3)?,
                postal_code: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>();

    locations
}

/// WHERE clause (with leading space, or empty) and its positional params.
/// Every provided filter is ANDed.
fn filter_clause(filter: &CompanyFilter) -> (String, Vec<Value>) {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    if let Some(term) = filter.search_term() {
        let pattern = like_pattern(term);
        conditions.push(
            "(fold_case(c.name) LIKE ? ESCAPE '\\'
              OR fold_case(COALESCE(c.description, '')) LIKE ? ESCAPE '\\')"
                .to_string(),
        );
        params.push(Value::Text(pattern.clone()));
        params.push(Value::Text(pattern));
    }

    if let Some(verified) = filter.verified {
        conditions.push("c.is_verified = ?".to_string());
        params.push(Value::Integer(verified as i64));
    }

    if let Some(industry) = filter.industry_term() {
        conditions.push("fold_case(c.industry) LIKE ? ESCAPE '\\'".to_string());
        params.push(Value::Text(like_pattern(industry)));
    }

    for (column, term) in [("city", filter.city_term()), ("country", filter.country_term())] {
        if let Some(term) = term {
            conditions.push(format!(
                "EXISTS (SELECT 1 FROM company_locations l
                         WHERE l.company_id = c.id AND fold_case(l.{}) LIKE ? ESCAPE '\\')",
                column
            ));
            params.push(Value::Text(like_pattern(term)));
        }
    }

    if conditions.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), params)
    }
}

/// Substring pattern folded like `fold_case`, with LIKE wildcards escaped
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
