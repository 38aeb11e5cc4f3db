//! Typed HTTP client for the shows API.
//!
//! [`ShowsClient`] speaks the `{status, data|message}` envelope and checks
//! status codes and content types. Requests go through a [`Transport`]:
//! [`HttpTransport`] performs real I/O, [`StubTransport`] answers from
//! canned [`ShowFixtures`] without touching the network.

pub mod client;
pub mod error;
pub mod model;
pub mod stub;
pub mod transport;

pub use client::ShowsClient;
pub use error::ClientError;
pub use model::{NewShow, Show, ShowPatch};
pub use stub::{Fixture, ShowFixtures, StubTransport};
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
