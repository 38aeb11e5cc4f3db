//! Fixture-driven stub transport.
//!
//! A fixture document mirrors what a live server would send: for each
//! operation (`all`, `single`, `add`, `update`, `delete`) a `success` and an
//! optional `failure` case, each holding the response head (`res`) and the
//! JSON `body`. [`StubTransport`] replays registered fixtures per
//! (method, path) and records every request it receives.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

use crate::error::ClientError;
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Fixture document shipped with the crate.
pub const BUNDLED_FIXTURES: &str = include_str!("../fixtures/shows.json");

// ---------------------------------------------------------------------------
// Fixture documents
// ---------------------------------------------------------------------------

/// Response head of a fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// One canned response.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub res: FixtureResponse,
    pub body: serde_json::Value,
}

impl Fixture {
    /// Render the fixture as a transport response.
    pub fn to_response(&self) -> TransportResponse {
        let content_type = self
            .res
            .headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .map(|(_, value)| value.clone());

        TransportResponse {
            status: self.res.status_code,
            content_type,
            body: self.body.to_string(),
        }
    }
}

/// Success and failure cases for one operation.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureOutcomes {
    pub success: Fixture,
    #[serde(default)]
    pub failure: Option<Fixture>,
}

/// The full fixture document for the shows resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowFixtures {
    pub all: FixtureOutcomes,
    pub single: FixtureOutcomes,
    pub add: FixtureOutcomes,
    pub update: FixtureOutcomes,
    pub delete: FixtureOutcomes,
}

impl ShowFixtures {
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode [`BUNDLED_FIXTURES`].
    pub fn bundled() -> Result<Self, ClientError> {
        Self::from_json(BUNDLED_FIXTURES)
    }
}

// ---------------------------------------------------------------------------
// StubTransport
// ---------------------------------------------------------------------------

/// Transport that answers from registered fixtures instead of the network.
#[derive(Default)]
pub struct StubTransport {
    routes: HashMap<(Method, String), TransportResponse>,
    seen: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `fixture`. A later registration for the same
    /// route replaces the earlier one.
    pub fn on(mut self, method: Method, path: impl Into<String>, fixture: &Fixture) -> Self {
        self.routes
            .insert((method, path.into()), fixture.to_response());
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, ClientError> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        self.routes
            .get(&(request.method.clone(), request.path.clone()))
            .cloned()
            .ok_or_else(|| ClientError::NoFixture {
                method: request.method.to_string(),
                path: request.path.clone(),
            })
    }
}
