//! SQLite persistence for distribution records.
//!
//! Records are written once and never mutated; history reads return them
//! newest first. A row that fails to map is skipped with a warning so one
//! bad record cannot take down a whole listing.

use chrono::Utc;
use rusqlite::{Connection, params};
use serde::Serialize;
use tracing::warn;

use taxlens_core::Allocation;

/// One persisted distribution, in the shape history responses use.
#[derive(Debug, Clone, Serialize)]
pub struct TaxRecord {
    pub total_tax_paid: f64,
    pub education: f64,
    pub healthcare: f64,
    pub defense: f64,
    pub infrastructure: f64,
    pub other: f64,
    pub created_at: String,
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS tax_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT NOT NULL,
            total_tax_paid REAL NOT NULL,
            education REAL NOT NULL,
            healthcare REAL NOT NULL,
            defense REAL NOT NULL,
            infrastructure REAL NOT NULL,
            other REAL NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn sector_amount(allocation: &Allocation, sector: &str) -> f64 {
    allocation.amounts.get(sector).copied().unwrap_or(0.0)
}

/// Persists one fixed-table distribution for `identity`.
pub fn insert_record(
    conn: &Connection,
    identity: &str,
    allocation: &Allocation,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO tax_records
            (user_id, total_tax_paid, education, healthcare, defense,
             infrastructure, other, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            identity,
            allocation.total,
            sector_amount(allocation, "Education"),
            sector_amount(allocation, "Healthcare"),
            sector_amount(allocation, "Defense"),
            sector_amount(allocation, "Infrastructure"),
            sector_amount(allocation, "Other"),
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// All records for `identity`, newest first. An identity with no records
/// yields an empty list, not an error.
pub fn records_for_user(conn: &Connection, identity: &str) -> rusqlite::Result<Vec<TaxRecord>> {
    let mut stmt = conn.prepare(
        "SELECT total_tax_paid, education, healthcare, defense,
                infrastructure, other, created_at
         FROM tax_records
         WHERE user_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![identity], |row| {
        Ok(TaxRecord {
            total_tax_paid: row.get(0)?,
            education: row.get(1)?,
            healthcare: row.get(2)?,
            defense: row.get(3)?,
            infrastructure: row.get(4)?,
            other: row.get(5)?,
            created_at: row.get(6)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        match row {
            Ok(record) => records.push(record),
            Err(e) => warn!(identity, error = %e, "skipping unreadable tax record"),
        }
    }
    Ok(records)
}
