use thiserror::Error;

/// Failure taxonomy for remote store operations.
///
/// `Validation` never reaches the network; `Network` covers transport
/// failures and non-success read responses; `Remote` is a write rejected by
/// the store, carrying the response body as detail when present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("store rejected request (HTTP {status}): {detail}")]
    Remote { status: u16, detail: String },
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}
