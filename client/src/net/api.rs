//! REST client for the research-brief backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only ever called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Non-2xx responses keep the
//! status plus the backend's `detail` message when one is present, so pages
//! can show the server's wording and fall back to a generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Brief, BriefListItem, HealthStatus};

#[cfg(any(test, feature = "hydrate"))]
const BRIEFS_PATH: &str = "/api/briefs";
#[cfg(any(test, feature = "hydrate"))]
const HEALTH_PATH: &str = "/api/health";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{}", describe_status(.status, .detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build an error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: extract_detail(body),
        }
    }

    /// Message to show the user: the server's detail when it sent one,
    /// otherwise a generic transport message.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_status(status: &u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_owned(),
        None => generic_status_message(*status),
    }
}

fn generic_status_message(status: u16) -> String {
    format!("Request failed with status code {status}")
}

/// Pull a display message out of a `{"detail": ...}` error body.
///
/// A string detail is used as-is; a validation-error list is joined from
/// its `msg` entries.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn join_endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn brief_path(id: i64) -> String {
    format!("{BRIEFS_PATH}/{id}")
}

/// Thin typed wrapper over the backend's four JSON endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client pointed at the build-time configured backend.
    pub fn from_env() -> Self {
        Self::new(crate::config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        join_endpoint(&self.base_url, path)
    }

    /// Submit URLs for analysis via `POST /api/briefs`.
    ///
    /// This runs the whole fetch + LLM pipeline on the backend and may take
    /// several seconds. No timeout beyond the browser default is applied.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the backend rejects the
    /// URLs, or the response is not a brief.
    pub async fn create_brief(&self, urls: &[String]) -> Result<Brief, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::CreateBriefRequest { urls: urls.to_vec() };
            let request = gloo_net::http::Request::post(&self.endpoint(BRIEFS_PATH)).json(&payload)?;
            send_json(request, "POST", BRIEFS_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = urls;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the most recent briefs via `GET /api/briefs`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body does not decode.
    pub async fn list_briefs(&self) -> Result<Vec<BriefListItem>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.endpoint(BRIEFS_PATH)).build()?;
            send_json(request, "GET", BRIEFS_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch one brief via `GET /api/briefs/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`]; a missing brief yields a 404 status error.
    pub async fn get_brief(&self, id: i64) -> Result<Brief, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = brief_path(id);
            let request = gloo_net::http::Request::get(&self.endpoint(&path)).build()?;
            send_json(request, "GET", &path).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the tri-field liveness report via `GET /api/health`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the backend cannot be reached.
    pub async fn get_health(&self) -> Result<HealthStatus, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.endpoint(HEALTH_PATH)).build()?;
            send_json(request, "GET", HEALTH_PATH).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_json<T>(request: gloo_net::http::Request, method: &str, path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("{method} {path} failed: {e}");
            return Err(e.into());
        }
    };
    let status = resp.status();
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        log::warn!("{method} {path} -> {status}: {err}");
        return Err(err);
    }
    log::info!("{method} {path} -> {status}");
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
