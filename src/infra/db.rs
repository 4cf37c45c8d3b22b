//! SQLite connection and migrations.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

pub struct DbPool(pub Mutex<Connection>);

const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

/// Initialize DB at path, run migrations, return the shared handle.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::StoreUnavailable(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }
    let mut conn = Connection::open(db_path).map_err(|e| {
        AppError::StoreUnavailable(format!("cannot open {}: {}", db_path.display(), e))
    })?;
    run_migrations(&mut conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

/// Re-run pending migrations on an open store. Safe to call repeatedly.
pub fn ensure_schema(pool: &DbPool) -> Result<(), AppError> {
    let mut conn = get_connection(pool);
    run_migrations(&mut conn)
}

/// In-memory store with the schema applied.
#[doc(hidden)]
pub fn init_test_db() -> DbPool {
    let mut conn = Connection::open_in_memory().expect("open in-memory db");
    run_migrations(&mut conn).expect("migrate in-memory db");
    DbPool(Mutex::new(conn))
}

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let db_err = |e: rusqlite::Error| AppError::StoreUnavailable(e.to_string());

    let tx = conn.transaction().map_err(db_err)?;

    // Ensure schema_migrations exists (first run, or a store created before the ledger)
    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )
    .map_err(db_err)?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")
        .map_err(db_err)?
        .query_map([], |r| r.get(0))
        .map_err(db_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(db_err)?;

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        let statements = sql.split(';').map(strip_comments).filter(|s| !s.is_empty());
        for stmt in statements {
            tx.execute(&stmt, []).map_err(db_err)?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )
        .map_err(db_err)?;
        log::info!("Applied schema migration {}", version);
    }

    tx.commit().map_err(db_err)?;
    Ok(())
}

fn strip_comments(stmt: &str) -> String {
    stmt.lines()
        .filter(|l| !l.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Get connection from pool (for use in use cases).
pub fn get_connection(pool: &DbPool) -> std::sync::MutexGuard<'_, Connection> {
    // A panic while holding the lock leaves the connection itself usable.
    pool.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
