//! REST client for the insurance record store
//!
//! The read endpoint wraps the record in an envelope whose `body` is a
//! JSON-encoded string, so every fetch decodes twice. This mirrors the
//! upstream API exactly and must not be "fixed" here.

use super::traits::RecordStore;
use crate::sync::merge::RecordMap;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error, status: {0}")]
    Status(u16),
    #[error("no data body in response")]
    MissingBody,
    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}

/// Read-endpoint envelope: the record itself is a JSON string inside.
#[derive(Debug, Deserialize)]
struct Envelope {
    body: Option<String>,
}

/// Failure-response envelope for the write endpoint.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    body: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the record store's `Seguro` resource.
pub struct RecordClient {
    http: Client,
    base_url: String,
}

impl RecordClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RecordStore for RecordClient {
    async fn fetch_record(&self, id: &str) -> Result<RecordMap, ApiError> {
        let response = self
            .http
            .get(format!("{}/Seguro", self.base_url))
            .query(&[("id", id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        parse_record_envelope(&text)
    }

    async fn patch_record(&self, payload: &RecordMap) -> Result<(), ApiError> {
        let response = self
            .http
            .patch(format!("{}/Seguro", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        match extract_error_message(&text) {
            Some(message) => Err(ApiError::Rejected(message)),
            None => Err(ApiError::Status(status.as_u16())),
        }
    }
}

/// Decode the double-encoded read response: envelope first, then the
/// record from the inner string.
fn parse_record_envelope(text: &str) -> Result<RecordMap, ApiError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    let body = envelope.body.ok_or(ApiError::MissingBody)?;
    let record: RecordMap = serde_json::from_str(&body)?;
    Ok(record)
}

/// Pull the server's error message out of a failure response, when the
/// body follows the `{ "body": { "error": ... } }` shape.
fn extract_error_message(text: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(text)
        .ok()
        .and_then(|envelope| envelope.body)
        .and_then(|body| body.error)
}
