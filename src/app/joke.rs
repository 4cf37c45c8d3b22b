//! Joke use cases.

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Joke {
    pub id: i64,
    pub text: String,
    /// `None` when the row predates the column default.
    pub created_at: Option<NaiveDateTime>,
}

impl Joke {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Joke {
            id: row.get(0)?,
            text: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

// Newest first; rows stored in the same second fall back to insertion order, newest first.
const ORDER_BY: &str = "ORDER BY created_at DESC, id DESC";

pub fn joke_list(pool: &DbPool) -> Result<Vec<Joke>, AppError> {
    let conn = get_connection(pool);
    let sql = format!("SELECT id, text, created_at FROM jokes {}", ORDER_BY);
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| AppError::QueryFailure(e.to_string()))?;
    let rows = stmt
        .query_map([], Joke::from_row)
        .map_err(|e| AppError::QueryFailure(e.to_string()))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::QueryFailure(e.to_string()))?);
    }
    Ok(out)
}

/// Joke texts only, newest first. `created_at` is sorted on but never decoded.
pub fn joke_texts(pool: &DbPool) -> Result<Vec<String>, AppError> {
    let conn = get_connection(pool);
    let sql = format!("SELECT text FROM jokes {}", ORDER_BY);
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| AppError::QueryFailure(e.to_string()))?;
    let rows = stmt
        .query_map([], |r| r.get(0))
        .map_err(|e| AppError::QueryFailure(e.to_string()))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::QueryFailure(e.to_string()))?);
    }
    Ok(out)
}

pub fn joke_count(pool: &DbPool) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    count_rows(&conn).map_err(|e| AppError::QueryFailure(e.to_string()))
}

pub(crate) fn count_rows(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM jokes", [], |r| r.get(0))
}

/// Insert one joke; id and created_at are assigned by the store.
pub(crate) fn insert_row(conn: &Connection, text: &str) -> rusqlite::Result<i64> {
    conn.execute("INSERT INTO jokes (text) VALUES (?1)", params![text])?;
    Ok(conn.last_insert_rowid())
}
