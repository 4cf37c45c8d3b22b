//! First-run seeding of the jokes table.
//!
//! The emptiness check and the inserts are not wrapped in a transaction:
//! two processes starting together against an empty store can both see
//! zero rows and both insert. An interrupted run leaves a partial set that
//! later runs will not top up.

use super::joke::{count_rows, insert_row};
use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;

/// Jokes inserted into a fresh store, oldest first.
pub const DEFAULT_JOKES: [&str; 5] = [
    "Hvorfor kan ikke syklister stå opp? Fordi de er to-hjulte!",
    "Hva sier en datamus når den er lei seg? Jeg føler meg så klikket...",
    "Hvorfor gikk JavaScript til psykologen? Fordi den hadde for mange callbacks!",
    "Hva sa HTML til CSS? Du styler meg!",
    "Hvorfor er programmører alltid kalde? De jobber med Windows!",
];

/// Seed [`DEFAULT_JOKES`] if the table is empty. Returns the number of rows inserted.
pub fn seed_if_empty(pool: &DbPool) -> Result<usize, AppError> {
    seed_with(pool, &DEFAULT_JOKES)
}

pub fn seed_with(pool: &DbPool, jokes: &[&str]) -> Result<usize, AppError> {
    let conn = get_connection(pool);

    let count = count_rows(&conn).map_err(|e| AppError::SeedFailure(e.to_string()))?;
    if count > 0 {
        log::info!("Database already seeded");
        return Ok(0);
    }

    for joke in jokes {
        insert_row(&conn, joke).map_err(|e| AppError::SeedFailure(e.to_string()))?;
    }

    log::info!("Seeded {} jokes into database", jokes.len());
    Ok(jokes.len())
}
