//! Wire types exchanged with the shows API.

use serde::{Deserialize, Serialize};
use shows_core::types::DbId;

/// A show as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub rating: f64,
    pub explicit: bool,
}

/// Payload for creating a show.
#[derive(Debug, Clone, Serialize)]
pub struct NewShow {
    pub name: String,
    pub genre: String,
    pub rating: f64,
    pub explicit: bool,
}

/// Payload for partially updating a show. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShowPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,
}

/// Envelope `status` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// The `{status, data|message}` wrapper around every API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    pub data: Option<Vec<Show>>,
    pub message: Option<String>,
}
