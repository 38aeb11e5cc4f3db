//! In-memory backing collection for the shows service.
//!
//! The store is a single ordered table behind an async `RwLock`. Access goes
//! through the repositories in [`repositories`]; handlers never touch the
//! lock directly.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use shows_core::error::CoreError;
use shows_core::types::DbId;

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

pub use store::MemoryStore;

/// Shared handle to the store, cloned into every request.
pub type DbPool = Arc<MemoryStore>;

/// Errors raised by the store and seed loading.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode seed data: {0}")]
    SeedDecode(#[from] serde_json::Error),

    #[error("Duplicate id {0} in seed data")]
    DuplicateId(DbId),

    #[error("Invalid seed row {id}: {source}")]
    InvalidSeed {
        id: DbId,
        #[source]
        source: CoreError,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Create an empty store.
pub fn create_pool() -> DbPool {
    Arc::new(MemoryStore::default())
}

/// Create a store pre-populated with `rows`.
///
/// Rows are validated and must have unique ids. The id counter starts after
/// the highest seeded id.
pub fn create_seeded_pool(rows: Vec<models::show::Show>) -> Result<DbPool, DbError> {
    Ok(Arc::new(MemoryStore::with_rows(rows)?))
}

/// Verify the store answers within `timeout` and return its row count.
///
/// A writer that holds the table lock for longer than `timeout` makes the
/// store report [`DbError::Unavailable`].
pub async fn health_check(pool: &MemoryStore, timeout: Duration) -> Result<usize, DbError> {
    let table = tokio::time::timeout(timeout, pool.read())
        .await
        .map_err(|_| DbError::Unavailable("timed out waiting for table lock".to_string()))?;
    Ok(table.rows.len())
}
