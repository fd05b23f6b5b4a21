//! API endpoint configuration.
//!
//! The record store base URL is read once at startup from the
//! `window.INTERVIEWHUB_API_URL` global (set by the hosting page) and falls
//! back to the local development default. The counts endpoint is derived by
//! appending a fixed suffix.

use once_cell::sync::OnceCell;

/// Fallback used when the hosting page does not configure an endpoint.
pub const DEFAULT_API_URL: &str = "http://localhost:8089/api/qas";

const COUNTS_SUFFIX: &str = "/type-counts";

static API_BASE: OnceCell<String> = OnceCell::new();

/// Capture the configured endpoint. Called once from the wasm entry point;
/// later calls are no-ops.
pub fn init_api_base() {
    let configured = window_configured_url().unwrap_or_else(|| DEFAULT_API_URL.to_string());
    _ = API_BASE.set(configured);
}

fn window_configured_url() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &"INTERVIEWHUB_API_URL".into()).ok()?;
    let url = value.as_string()?;
    if url.trim().is_empty() {
        None
    } else {
        Some(url)
    }
}

/// Base URL of the record store.
pub fn api_base() -> String {
    API_BASE
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// URL of the category counts endpoint, derived from the base.
pub fn counts_url() -> String {
    format!("{}{}", api_base().trim_end_matches('/'), COUNTS_SUFFIX)
}
