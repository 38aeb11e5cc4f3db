//! Show model and DTOs.

use serde::{Deserialize, Serialize};
use shows_core::error::CoreError;
use shows_core::show::validate_name;
use shows_core::types::DbId;

// ---------------------------------------------------------------------------
// Entity struct
// ---------------------------------------------------------------------------

/// A row from the shows table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub rating: f64,
    pub explicit: bool,
}

impl Show {
    /// Apply a partial update in place. Absent fields keep their value.
    pub fn apply(&mut self, dto: &UpdateShow) {
        if let Some(name) = &dto.name {
            self.name.clone_from(name);
        }
        if let Some(genre) = &dto.genre {
            self.genre.clone_from(genre);
        }
        if let Some(rating) = dto.rating {
            self.rating = rating;
        }
        if let Some(explicit) = dto.explicit {
            self.explicit = explicit;
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a show. Every field is required; any `id` sent by the
/// client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub name: String,
    pub genre: String,
    pub rating: f64,
    pub explicit: bool,
}

/// DTO for partially updating a show. `null` and absent both mean "keep".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateShow {
    pub name: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub explicit: Option<bool>,
}

impl UpdateShow {
    /// Check the supplied fields. A supplied name must not be blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }
}
