//! Client core: one HTTP call in, one uniform result out.

use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, warn};
use uuid::Uuid;

use super::classify::{classify, Failure};
use crate::config::{ClientBuilder, ClientConfig};
use crate::error::{ApiError, ConfigError, RequestContext};
use crate::resources::{
    ApiTokens, AuditLogs, Databases, Groups, Locations, Organizations,
};

/// Client for the Stratus platform API.
///
/// Holds an immutable [`ClientConfig`] and a preconfigured transport. Cheap
/// to share across call sites; no call mutates it.
#[derive(Debug)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Build a client from a finished configuration.
    pub fn new(config: ClientConfig) -> crate::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Start a configuration builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn default_organization(&self) -> Option<&str> {
        self.config.organization()
    }

    /// Database operations.
    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }

    /// Group (placement) operations.
    pub fn groups(&self) -> Groups<'_> {
        Groups { client: self }
    }

    /// Organization operations.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations { client: self }
    }

    /// Platform API token operations.
    pub fn api_tokens(&self) -> ApiTokens<'_> {
        ApiTokens { client: self }
    }

    /// Audit-log operations (cursor paginated).
    pub fn audit_logs(&self) -> AuditLogs<'_> {
        AuditLogs { client: self }
    }

    /// Placement-region discovery.
    pub fn locations(&self) -> Locations<'_> {
        Locations { client: self }
    }

    /// Execute one HTTP call and reduce the outcome to a uniform result.
    ///
    /// Exactly one network call per invocation; no implicit retry. All
    /// failure shapes are funneled through the classifier so callers only
    /// ever see [`ApiError`] for remote trouble.
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.config.base_url(), path);
        let request_id = Uuid::new_v4().to_string();
        let context = RequestContext::new(method.as_str(), path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(self.config.token())
            .header("x-request-id", &request_id);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(query) = query {
            request = request.query(query);
        }

        debug!(method = %method, path, request_id = %request_id, "dispatching request");
        let start = Instant::now();

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = classify(transport_failure(&e), context);
                warn!(
                    kind = %err.kind,
                    method = %method,
                    path,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "transport failure"
                );
                return Err(err);
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body = parse_body(&text);

        if status.is_success() {
            debug!(
                status = status.as_u16(),
                path,
                duration_ms = start.elapsed().as_millis() as u64,
                "request completed"
            );
            return Ok(body);
        }

        let err = classify(
            Failure::Status {
                status: status.as_u16(),
                error: format_error_body(body),
            },
            context,
        );
        warn!(
            status = status.as_u16(),
            kind = %err.kind,
            method = %method,
            path,
            duration_ms = start.elapsed().as_millis() as u64,
            "request failed"
        );
        Err(err)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<Value, ApiError> {
        self.dispatch(Method::GET, path, None, query).await
    }

    pub(crate) async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.dispatch(Method::POST, path, body, None).await
    }

    pub(crate) async fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.dispatch(Method::PATCH, path, Some(body), None).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch(Method::DELETE, path, None, None).await
    }
}

/// Narrow a transport error into a failure shape.
fn transport_failure(err: &reqwest::Error) -> Failure {
    if err.is_timeout() {
        Failure::Timeout(err.to_string())
    } else if err.is_connect() || err.is_body() {
        Failure::ConnectionClosed(err.to_string())
    } else {
        Failure::Reason(err.to_string())
    }
}

/// Decode a response body: JSON when it parses, the raw text otherwise,
/// null for an empty body.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Normalize an arbitrary error body into `{message, ...}` form.
///
/// Priority: nested `error` object, string `error` field, top-level
/// `message` field, then a wrapped fallback.
pub(crate) fn format_error_body(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            match map.remove("error") {
                Some(Value::Object(error)) => return Value::Object(error),
                Some(Value::String(message)) => return serde_json::json!({ "message": message }),
                Some(other) => {
                    // Put an unusable `error` field back; the fallback keeps it.
                    map.insert("error".to_string(), other);
                }
                None => {}
            }
            if map.contains_key("message") {
                let message = map.remove("message").unwrap_or_default();
                return serde_json::json!({ "message": message });
            }
            serde_json::json!({
                "message": "Unknown error",
                "details": Value::Object(map),
            })
        }
        Value::String(message) => serde_json::json!({ "message": message }),
        other => serde_json::json!({
            "message": "Unknown error format",
            "details": other.to_string(),
        }),
    }
}
