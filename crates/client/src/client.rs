use reqwest::Method;
use shows_core::types::DbId;

use crate::error::ClientError;
use crate::model::{Envelope, EnvelopeStatus, NewShow, Show, ShowPatch};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Collection path of the shows resource.
pub const SHOWS_PATH: &str = "/api/v1/shows";

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;

/// Client for the shows API.
pub struct ShowsClient<T = HttpTransport> {
    transport: T,
}

impl ShowsClient<HttpTransport> {
    /// Create a client talking HTTP to `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(HttpTransport::new(base_url))
    }
}

impl<T: Transport> ShowsClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/v1/shows`
    pub async fn list(&self) -> Result<Vec<Show>, ClientError> {
        self.call(Method::GET, SHOWS_PATH.to_string(), None, STATUS_OK)
            .await
    }

    /// `GET /api/v1/shows/{id}`
    pub async fn get(&self, id: DbId) -> Result<Show, ClientError> {
        let rows = self
            .call(Method::GET, show_path(id), None, STATUS_OK)
            .await?;
        first(rows)
    }

    /// `POST /api/v1/shows`. Expects 201.
    pub async fn create(&self, show: &NewShow) -> Result<Show, ClientError> {
        let body = serde_json::to_value(show)?;
        let rows = self
            .call(Method::POST, SHOWS_PATH.to_string(), Some(body), STATUS_CREATED)
            .await?;
        first(rows)
    }

    /// `PUT /api/v1/shows/{id}` with only the fields set in `patch`.
    pub async fn update(&self, id: DbId, patch: &ShowPatch) -> Result<Show, ClientError> {
        let body = serde_json::to_value(patch)?;
        let rows = self
            .call(Method::PUT, show_path(id), Some(body), STATUS_OK)
            .await?;
        first(rows)
    }

    /// `DELETE /api/v1/shows/{id}`. Returns the removed show.
    pub async fn delete(&self, id: DbId) -> Result<Show, ClientError> {
        let rows = self
            .call(Method::DELETE, show_path(id), None, STATUS_OK)
            .await?;
        first(rows)
    }

    async fn call(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
        expected_status: u16,
    ) -> Result<Vec<Show>, ClientError> {
        let request = TransportRequest { method, path, body };

        tracing::debug!(method = %request.method, path = %request.path, "Sending shows request");

        let response = self.transport.send(&request).await?;
        decode(response, expected_status)
    }
}

fn show_path(id: DbId) -> String {
    format!("{SHOWS_PATH}/{id}")
}

fn first(rows: Vec<Show>) -> Result<Show, ClientError> {
    rows.into_iter().next().ok_or(ClientError::EmptyData)
}

/// Check the content type, unwrap the envelope and verify the status code.
fn decode(response: TransportResponse, expected_status: u16) -> Result<Vec<Show>, ClientError> {
    let content_type = response.content_type.unwrap_or_default();
    if !content_type.contains("application/json") {
        return Err(ClientError::UnexpectedContentType {
            status: response.status,
            content_type,
        });
    }

    let envelope: Envelope = serde_json::from_str(&response.body)?;

    match envelope.status {
        EnvelopeStatus::Error => Err(ClientError::Api {
            status: response.status,
            message: envelope.message.unwrap_or_default(),
        }),
        EnvelopeStatus::Success if response.status != expected_status => {
            Err(ClientError::UnexpectedStatus {
                expected: expected_status,
                actual: response.status,
            })
        }
        EnvelopeStatus::Success => Ok(envelope.data.unwrap_or_default()),
    }
}
