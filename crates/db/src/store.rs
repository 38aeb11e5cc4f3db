use std::collections::BTreeMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shows_core::show::{validate_name, validate_rating};
use shows_core::types::DbId;

use crate::models::show::Show;
use crate::DbError;

/// The shows table: rows keyed by id, plus the highest id ever handed out.
#[derive(Debug, Default)]
pub(crate) struct ShowTable {
    pub(crate) rows: BTreeMap<DbId, Show>,
    /// Survives deletes so retired ids are never reassigned.
    pub(crate) highest_id: Option<DbId>,
}

/// In-memory store. One lock guards the whole table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    shows: RwLock<ShowTable>,
}

impl MemoryStore {
    /// Build a store from pre-existing rows (seed data).
    pub fn with_rows(rows: Vec<Show>) -> Result<Self, DbError> {
        let mut table = ShowTable::default();

        for row in rows {
            validate_name(&row.name)
                .and_then(|()| validate_rating(row.rating))
                .map_err(|source| DbError::InvalidSeed { id: row.id, source })?;

            let id = row.id;
            if table.rows.insert(id, row).is_some() {
                return Err(DbError::DuplicateId(id));
            }
            table.highest_id = Some(table.highest_id.map_or(id, |h| h.max(id)));
        }

        tracing::debug!(rows = table.rows.len(), "Show table seeded");

        Ok(Self {
            shows: RwLock::new(table),
        })
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, ShowTable> {
        self.shows.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, ShowTable> {
        self.shows.write().await
    }
}
