//! Authenticated HTTP client for the OPanel API.
//!
//! Every panel endpoint is reached as `<base URL><route>` (plain
//! concatenation, the panel mounts its API under whatever path the base URL
//! carries) with a `Authorization: Bearer <token>` header. Write endpoints
//! accept either a raw string or JSON text, always under content-type
//! `text/plain` — a panel quirk, not an accident.
//!
//! Requests are single-shot: no retry, no backoff, no timeout override. A
//! transport failure or non-2xx status is the final outcome of that call.

use reqwest::{Method, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::config::PanelConfig;

/// Errors raised by panel requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the JSON shape the caller expected.
    #[error("invalid response body: {0}")]
    Body(#[from] serde_json::Error),

    /// Invalid client configuration (e.g. a token that cannot be carried in
    /// a header).
    #[error("configuration error: {0}")]
    Config(String),
}

/// The uniform response shape returned by every panel endpoint: a status
/// `code` and `error` message merged with endpoint-specific payload fields.
///
/// Neither this client nor any handler inspects `code`/`error` on a 2xx
/// response; a panel-reported logical failure under HTTP 200 is passed
/// through as success, matching the upstream panel clients. Callers that
/// want the payload read `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Panel status code; zero on success.
    #[serde(default)]
    pub code: i64,

    /// Panel error message; empty on success.
    #[serde(default)]
    pub error: String,

    /// Endpoint-specific payload fields, flattened alongside code/error.
    #[serde(flatten)]
    pub data: T,
}

/// Empty payload for endpoints whose response carries nothing beyond the
/// envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct NoPayload {}

/// Body of a write request.
///
/// The panel expects `text/plain` for both variants: raw strings go out
/// verbatim, structured bodies as JSON text.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Text(String),
    Json(serde_json::Value),
}

impl RequestBody {
    /// Build a raw text body.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Build a JSON body from any serializable value.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, ClientError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    fn into_text(self) -> Result<String, ClientError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

/// HTTP client for the panel API.
#[derive(Debug, Clone)]
pub struct PanelClient {
    http: reqwest::Client,
    base_url: String,
}

impl PanelClient {
    /// Create a client for the given panel, installing the bearer token as a
    /// default header.
    pub fn new(panel: &PanelConfig) -> Result<Self, ClientError> {
        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", panel.token))
            .map_err(|_| ClientError::Config("token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: panel.base_url.clone(),
        })
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Execute a GET request and decode the envelope.
    pub async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<Envelope<T>, ClientError> {
        let url = self.url(route);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute a GET request and return the raw body (log-content endpoints
    /// answer with plain text rather than an envelope).
    pub async fn get_text(&self, route: &str) -> Result<String, ClientError> {
        let url = self.url(route);
        debug!(url = %url, "GET (text)");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Execute a POST request and decode the envelope.
    pub async fn post<T: DeserializeOwned>(
        &self,
        route: &str,
        body: Option<RequestBody>,
    ) -> Result<Envelope<T>, ClientError> {
        self.send(Method::POST, route, body).await
    }

    /// Execute a PATCH request and decode the envelope.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        route: &str,
        body: Option<RequestBody>,
    ) -> Result<Envelope<T>, ClientError> {
        self.send(Method::PATCH, route, body).await
    }

    /// Execute a DELETE request and decode the envelope.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        route: &str,
        body: Option<RequestBody>,
    ) -> Result<Envelope<T>, ClientError> {
        self.send(Method::DELETE, route, body).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        route: &str,
        body: Option<RequestBody>,
    ) -> Result<Envelope<T>, ClientError> {
        let url = self.url(route);
        debug!(method = %method, url = %url, "panel request");

        let text = match body {
            Some(body) => body.into_text()?,
            None => String::new(),
        };

        let response = self
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "text/plain")
            .body(text)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PanelConfig;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct TestPayload {
        message: String,
    }

    fn test_client(base_url: &str) -> PanelClient {
        PanelClient::new(&PanelConfig {
            base_url: base_url.to_string(),
            token: format!("o-{}", "a".repeat(48)),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_decodes_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "error": "",
                "message": "hello"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let envelope: Envelope<TestPayload> = client.get("/api/test").await.unwrap();
        assert_eq!(envelope.code, 0);
        assert_eq!(envelope.data.message, "hello");
    }

    #[tokio::test]
    async fn test_bearer_token_header() {
        let server = MockServer::start().await;
        let token = format!("o-{}", "a".repeat(48));

        Mock::given(method("GET"))
            .and(path("/api/protected"))
            .and(header("Authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "error": ""
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result: Result<Envelope<NoPayload>, _> = client.get("/api/protected").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_post_sends_json_as_text_plain() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(header("Content-Type", "text/plain"))
            .and(body_string(r#"{"name":"backup"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "error": ""
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let body = RequestBody::Json(serde_json::json!({ "name": "backup" }));
        let result: Result<Envelope<NoPayload>, _> = client.post("/api/tasks", Some(body)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_post_without_body_sends_empty_string() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/whitelist/enable"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 0,
                "error": ""
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result: Result<Envelope<NoPayload>, _> =
            client.post("/api/whitelist/enable", None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result: Result<Envelope<NoPayload>, _> = client.get("/api/broken").await;
        assert!(matches!(result, Err(ClientError::Http(_))));
    }

    #[tokio::test]
    async fn code_field_is_not_inspected() {
        // A panel-reported logical failure under HTTP 200 passes through as
        // success; only the transport status matters here.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "code": 1,
                "error": "something the panel disliked",
                "message": "partial"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let envelope: Envelope<TestPayload> = client.get("/api/test").await.unwrap();
        assert_eq!(envelope.code, 1);
        assert_eq!(envelope.data.message, "partial");
    }

    #[tokio::test]
    async fn test_get_text_returns_raw_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/logs/latest.log"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[12:00:00] Server started"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let content = client.get_text("/api/logs/latest.log").await.unwrap();
        assert_eq!(content, "[12:00:00] Server started");
    }

    #[test]
    fn test_url_is_plain_concatenation() {
        let client = test_client("http://localhost:8080/panel");
        assert_eq!(
            client.url("/api/info"),
            "http://localhost:8080/panel/api/info"
        );
    }
}
