/// Errors from the shows client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with an error envelope.
    #[error("Shows API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The envelope's `message`.
        message: String,
    },

    /// A success envelope arrived with an unexpected status code.
    #[error("Expected HTTP {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    /// The response was not labelled as JSON.
    #[error("Expected a JSON response (HTTP {status}), got content-type '{content_type}'")]
    UnexpectedContentType { status: u16, content_type: String },

    /// The body was not a valid envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A single-record operation returned no rows.
    #[error("Response carried no data")]
    EmptyData,

    /// The stub transport has nothing registered for this request.
    #[error("No fixture registered for {method} {path}")]
    NoFixture { method: String, path: String },
}

impl ClientError {
    /// Whether the API reported the requested show as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Whether the API rejected the request payload.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, ClientError::Api { status: 400, .. })
    }
}
