//! Seed data loading.
//!
//! A seed is a JSON array of complete show rows, ids included.

use std::path::Path;

use crate::models::show::Show;
use crate::DbError;

/// Seed bundled with the binary.
pub const BUNDLED_SEED: &str = include_str!("../seeds/shows.json");

/// Decode a seed document.
pub fn parse_seed(json: &str) -> Result<Vec<Show>, DbError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode a seed document from disk.
pub fn load_seed_file(path: &Path) -> Result<Vec<Show>, DbError> {
    let json = std::fs::read_to_string(path).map_err(|source| DbError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

/// Decode the bundled seed.
pub fn bundled() -> Result<Vec<Show>, DbError> {
    parse_seed(BUNDLED_SEED)
}
