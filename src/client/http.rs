//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

use super::{ApiRequest, AuthState, Method, Transport};
use crate::error::{AppError, AppResult};

/// HTTP client bound to one API base URL
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth: AuthState,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth: AuthState, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, auth))
    }

    /// Build a client that reuses an existing connection pool
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, auth: AuthState) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: ApiRequest) -> AppResult<Value> {
        let url = self.url(&request.path);
        let request_id = Uuid::new_v4();

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        }
        .header("x-request-id", request_id.to_string())
        .header("Accept", "application/json");

        if let Some(token) = self.auth.token().await {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(%request_id, "API: {} {}", request.method, url);

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(%request_id, "API response: {} for {} {}", status, request.method, url);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%request_id, "API: {} {} failed with {}: {}", request.method, url, status, body);
            return Err(AppError::Status { status: status.as_u16(), url });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
