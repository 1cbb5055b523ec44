//! Trait abstraction for the record store client to enable mocking in tests

use super::client::ApiError;
use crate::sync::merge::RecordMap;
use async_trait::async_trait;

/// Operations against the remote record store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the record for an application id, decoding the
    /// double-encoded response body.
    async fn fetch_record(&self, id: &str) -> Result<RecordMap, ApiError>;

    /// Send a partial update for the record.
    async fn patch_record(&self, payload: &RecordMap) -> Result<(), ApiError>;
}
