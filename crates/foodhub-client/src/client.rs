//! # API Client
//!
//! The HTTP plumbing shared by every endpoint module.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ApiClient Request                               │
//! │                                                                         │
//! │  client.meals(&filters)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  request(GET, "/api/meals")      base_url + path, session cookie       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send_for::<Vec<Meal>>("meals")                                        │
//! │       │                                                                 │
//! │       ├── 2xx ──► body["meals"] ──► Vec<Meal>                          │
//! │       │                                                                 │
//! │       └── error ──► { "error": "..." } ──► ClientError                 │
//! │                     401/403 → Unauthorized                             │
//! │                     404     → NotFound                                 │
//! │                     other   → Api { status, message }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Responses wrap their payload in a single named field (`{ "meal": {...} }`).

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use foodhub_core::validation::validate_id;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, FALLBACK_MESSAGE};

/// Marketplace API client.
///
/// Cheap to clone; clones share the connection pool and cookie jar.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    /// Creates a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// fails to build.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(cookie) = &config.api.session_cookie {
            let mut value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::Config(format!("Invalid session cookie: {e}")))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url: config.api.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Builds a path with one id segment, rejecting ids that would change
    /// the route.
    pub(crate) fn path_with_id(prefix: &str, id: &str, suffix: &str) -> ClientResult<String> {
        validate_id(id)?;
        Ok(format!("{prefix}/{id}{suffix}"))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = method.as_str(), path, "API request");
        let url = format!("{}{}", self.inner.base_url, path);
        self.inner.http.request(method, url)
    }

    /// Sends the request and returns the payload under `key`.
    pub(crate) async fn send_for<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        key: &str,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        let body: serde_json::Value = self.handle_response(response).await?;
        take_field(body, key)
    }

    /// Sends the request and ignores any success body.
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> ClientResult<()> {
        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.parse_error(response).await)
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(self.parse_error(response).await)
    }

    /// Turns a failed response into a [`ClientError`] carrying the server's
    /// `error` message.
    async fn parse_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

        debug!(status = status.as_u16(), message = %message, "API error response");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

fn take_field<T: DeserializeOwned>(body: serde_json::Value, key: &str) -> ClientResult<T> {
    let serde_json::Value::Object(mut map) = body else {
        return Err(ClientError::Parse(format!(
            "expected a JSON object with '{key}'"
        )));
    };
    let value = map
        .remove(key)
        .ok_or_else(|| ClientError::Parse(format!("response is missing '{key}'")))?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::Parse(format!("invalid '{key}' in response: {e}")))
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use wiremock::MockServer;

    pub fn client_for(server: &MockServer) -> ApiClient {
        let mut config = ClientConfig::default();
        config.api.base_url = server.uri();
        ApiClient::new(&config).unwrap()
    }

    pub fn meal_json(id: &str, price: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "providerId": "prov-1",
            "name": format!("Meal {id}"),
            "price": price,
            "isAvailable": true,
            "isVegetarian": false,
            "isVegan": false,
            "createdAt": "2024-05-01T10:00:00Z"
        })
    }

    pub fn order_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "customerId": "cust-1",
            "providerId": "prov-1",
            "status": status,
            "deliveryAddress": "House 12, Road 5, Dhanmondi",
            "totalAmount": "200.00",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_error_message_comes_from_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Account suspended" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.orders().await.unwrap_err();

        assert!(matches!(err, ClientError::Api { status: 400, .. }));
        assert_eq!(err.user_message(), "Account suspended");
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).orders().await.unwrap_err();
        assert_eq!(err.user_message(), "Something went wrong");
    }

    #[tokio::test]
    async fn test_auth_and_not_found_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/meals/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Meal not found" })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.orders().await,
            Err(ClientError::Unauthorized(_))
        ));
        match client.meal("nope").await {
            Err(ClientError::NotFound(msg)) => assert_eq!(msg, "Meal not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_envelope_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/meals"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .meals(&Default::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/orders"))
            .and(header("cookie", "session=abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orders": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = ClientConfig::default();
        config.api.base_url = format!("{}/", server.uri());
        config.api.session_cookie = Some("session=abc".to_string());
        let client = ApiClient::new(&config).unwrap();

        assert!(client.orders().await.unwrap().is_empty());
        assert_eq!(client.base_url(), server.uri());
    }

    #[test]
    fn test_path_with_id_rejects_route_changes() {
        assert_eq!(
            ApiClient::path_with_id("/api/orders", "ord-1", "/cancel").unwrap(),
            "/api/orders/ord-1/cancel"
        );
        assert!(matches!(
            ApiClient::path_with_id("/api/orders", "../admin", ""),
            Err(ClientError::Validation(_))
        ));
        for id in ["..", ".", "x?all=1", "x#y", "x%2e"] {
            assert!(
                matches!(
                    ApiClient::path_with_id("/api/orders", id, "/cancel"),
                    Err(ClientError::Validation(_))
                ),
                "{id:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_dot_segment_id_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "order": order_json("x", "cancelled") })),
            )
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.cancel_order("..").await,
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            client.update_meal("m1?force=1", &Default::default()).await,
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ClientConfig::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(ApiClient::new(&config), Err(ClientError::Config(_))));
    }
}
