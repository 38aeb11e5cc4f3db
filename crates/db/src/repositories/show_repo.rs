//! Repository for the shows table.
//!
//! Reads share the table lock; create, update and delete hold it exclusively
//! for the whole operation, so id assignment never races.

use shows_core::show::next_id;
use shows_core::types::DbId;

use crate::models::show::{CreateShow, Show, UpdateShow};
use crate::{DbError, MemoryStore};

/// Provides data access for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// List every show, ordered by id.
    pub async fn list(pool: &MemoryStore) -> Vec<Show> {
        pool.read().await.rows.values().cloned().collect()
    }

    /// Find a show by its ID.
    pub async fn find_by_id(pool: &MemoryStore, id: DbId) -> Option<Show> {
        pool.read().await.rows.get(&id).cloned()
    }

    /// Number of stored shows.
    pub async fn count(pool: &MemoryStore) -> usize {
        pool.read().await.rows.len()
    }

    /// Insert a new show under a freshly assigned id.
    pub async fn create(pool: &MemoryStore, dto: &CreateShow) -> Result<Show, DbError> {
        let mut table = pool.write().await;

        let id = next_id(table.highest_id)?;
        let show = Show {
            id,
            name: dto.name.clone(),
            genre: dto.genre.clone(),
            rating: dto.rating,
            explicit: dto.explicit,
        };

        table.highest_id = Some(id);
        table.rows.insert(id, show.clone());

        Ok(show)
    }

    /// Partially update a show.
    ///
    /// Returns `Ok(None)` if no show has this id. The payload is validated
    /// only after the row is found, under the same lock.
    pub async fn update(
        pool: &MemoryStore,
        id: DbId,
        dto: &UpdateShow,
    ) -> Result<Option<Show>, DbError> {
        let mut table = pool.write().await;
        let Some(show) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        dto.validate()?;
        show.apply(dto);
        Ok(Some(show.clone()))
    }

    /// Delete a show, returning the removed row.
    ///
    /// Returns `None` if no show has this id.
    pub async fn delete(pool: &MemoryStore, id: DbId) -> Option<Show> {
        pool.write().await.rows.remove(&id)
    }
}
