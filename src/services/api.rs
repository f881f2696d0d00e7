//! HR API request helper
//!
//! Wraps a single `reqwest::Client` and turns one HTTP exchange into either a
//! raw [`ApiResponse`] (`send`) or a classified [`Outcome`] (`request`).
//! Classification never fails: transport errors become a failed outcome
//! labelled `Request failed: ...`.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::utils::errors::{ProbeError, Result};
use crate::utils::helpers::{api_url, bearer, json_len};
use crate::utils::logging::{log_api_error, log_exchange};

/// Response body, parsed as JSON when possible
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Parse a body, keeping the raw text when it is not JSON
    pub fn parse(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(text),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// Look up a top-level key of a JSON object body
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }

    /// Whether a top-level key is present in a JSON object body
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Element count of the body (list length, object key count, text length)
    pub(crate) fn len(&self) -> usize {
        match self {
            Payload::Json(value) => json_len(value),
            Payload::Text(text) => text.chars().count(),
        }
    }

    /// Substring test against the rendered payload
    pub fn contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Json(value) => write!(f, "{}", value),
            Payload::Text(text) => f.write_str(text),
        }
    }
}

/// Unclassified HTTP response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Payload,
}

impl ApiResponse {
    pub fn json(&self) -> Option<&Value> {
        self.body.as_json()
    }

    /// Deserialize the body into a typed model
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            Payload::Json(value) => Ok(serde_json::from_value(value.clone())?),
            Payload::Text(text) => Ok(serde_json::from_str(text)?),
        }
    }
}

/// Result of a request checked against an expected status.
///
/// `payload` is the response body when `success` is true, and a
/// human-readable failure message otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub success: bool,
    pub status: Option<u16>,
    pub payload: Payload,
}

impl Outcome {
    /// Classify a received response against the expected status code
    pub fn classify(status: u16, body: Payload, expected_status: u16) -> Self {
        if status == expected_status {
            return Self {
                success: true,
                status: Some(status),
                payload: body,
            };
        }

        // only an object body can carry an `error` field; anything else is quoted as-is
        let reason = match &body {
            Payload::Json(Value::Object(map)) => match map.get("error") {
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
                None => "Unknown error".to_string(),
            },
            Payload::Json(other) => other.to_string(),
            Payload::Text(text) => text.clone(),
        };

        Self {
            success: false,
            status: Some(status),
            payload: Payload::Text(format!("Status {}: {}", status, reason)),
        }
    }

    /// Failure that never reached the server (or never produced a response)
    pub fn transport_failure(error: &ProbeError) -> Self {
        Self {
            success: false,
            status: None,
            payload: Payload::Text(format!("Request failed: {}", error)),
        }
    }

    /// Failure message, empty on success
    pub fn details(&self) -> String {
        if self.success {
            String::new()
        } else {
            self.payload.to_string()
        }
    }
}

/// HTTP client bound to one HR API deployment
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(ProbeError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return the raw status and body.
    ///
    /// `token`, when given, is sent verbatim as a bearer credential.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<ApiResponse> {
        let url = api_url(&self.base_url, endpoint)?;
        debug!(method = %method, url = %url, authorized = token.is_some(), "Sending HR API request");

        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, bearer(token));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        log_exchange(
            method.as_str(),
            url.as_str(),
            status.as_u16(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(ApiResponse {
            status,
            body: Payload::parse(text),
        })
    }

    /// Send one request and classify it against `expected_status`
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        token: Option<&str>,
        expected_status: u16,
    ) -> Outcome {
        match self.send(method, endpoint, body, token).await {
            Ok(response) => Outcome::classify(response.status.as_u16(), response.body, expected_status),
            Err(e) => {
                log_api_error(endpoint, &e.to_string(), Some("no response received"));
                Outcome::transport_failure(&e)
            }
        }
    }

    pub async fn get(&self, endpoint: &str, token: Option<&str>) -> Result<ApiResponse> {
        self.send(Method::GET, endpoint, None, token).await
    }

    pub async fn post(&self, endpoint: &str, body: Option<&Value>, token: Option<&str>) -> Result<ApiResponse> {
        self.send(Method::POST, endpoint, body, token).await
    }
}
