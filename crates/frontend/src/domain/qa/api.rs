//! Remote record store client.
//!
//! The store is the single source of truth: a successful `create` does not
//! touch any local collection, callers re-fetch the list and the counts to
//! observe the new record.

use std::collections::HashMap;

use async_trait::async_trait;
use contracts::domain::qa::{parse_type_counts, QaRecord};
use contracts::StoreError;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, counts_url};

/// Operations exposed by the remote record store.
#[async_trait(?Send)]
pub trait RecordStore {
    /// Fetch the full collection; all filtering happens client-side.
    async fn list_all(&self) -> Result<Vec<QaRecord>, StoreError>;

    /// Fetch the independently-derived category counts. Eventually
    /// consistent with `list_all`.
    async fn category_counts(&self) -> Result<HashMap<String, i64>, StoreError>;

    /// Persist a draft (no id). Validates client-side before any network
    /// traffic.
    async fn create(&self, draft: &QaRecord) -> Result<QaRecord, StoreError>;
}

/// Production store over HTTP.
#[derive(Clone, Copy, Default)]
pub struct HttpStore;

#[async_trait(?Send)]
impl RecordStore for HttpStore {
    async fn list_all(&self) -> Result<Vec<QaRecord>, StoreError> {
        let resp = Request::get(&api_base())
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(StoreError::network(format!("HTTP {}", resp.status())));
        }
        resp.json::<Vec<QaRecord>>()
            .await
            .map_err(|e| StoreError::network(format!("invalid list payload: {}", e)))
    }

    async fn category_counts(&self) -> Result<HashMap<String, i64>, StoreError> {
        let resp = Request::get(&counts_url())
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(StoreError::network(format!("HTTP {}", resp.status())));
        }
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| StoreError::network(format!("invalid counts payload: {}", e)))?;
        Ok(parse_type_counts(&payload))
    }

    async fn create(&self, draft: &QaRecord) -> Result<QaRecord, StoreError> {
        draft.validate()?;

        let resp = Request::post(&api_base())
            .json(draft)
            .map_err(|e| StoreError::network(format!("failed to serialize draft: {}", e)))?
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;

        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let detail = if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            };
            return Err(StoreError::Remote { status, detail });
        }

        resp.json::<QaRecord>()
            .await
            .map_err(|e| StoreError::network(format!("invalid create response: {}", e)))
    }
}
