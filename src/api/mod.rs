//! Backend API
//!
//! Endpoint traits the stateful modules call into, organized by domain,
//! and the reqwest client implementing them.

mod auth;
mod task;
mod user;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::session::SessionStore;

// Re-export all endpoint traits
pub use auth::AuthApi;
pub use task::TaskApi;
pub use user::UserApi;

/// HTTP client for the task backend
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request. The token is read now, not when the request is sent.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Send and turn transport errors and non-2xx statuses into `ApiError`
async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: server_detail(&body),
    })
}

async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    send(builder)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Human-readable detail from an error body: `message` if the server sent JSON, the raw text otherwise
fn server_detail(body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| match json.get("message")? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(parts) => Some(
                parts
                    .iter()
                    .filter_map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        });
    message.unwrap_or_else(|| body.trim().to_string())
}
