use crate::{ClientError, ClientResult};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";
const MAX_RAW_ERROR_LEN: usize = 200;

/// HTTP client for the back-office REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root including any path prefix (e.g., "http://127.0.0.1:5000/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build a request with the bearer token attached
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.authorize(self.client.request(method, url))
    }

    /// Build a request with URL-encoded query parameters
    pub(crate) fn request_with_query(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> ClientResult<RequestBuilder> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            ClientError::api_error(0, "INVALID_URL".to_string(), e.to_string())
        })?;

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(self.authorize(self.client.request(method, url)))
    }

    /// Build a mutating request carrying `body` and an `Idempotency-Key`.
    ///
    /// The key is derived from the method, path, body and `scope`, so
    /// resending the same submission repeats the same key and the server can
    /// recognize it. `scope` separates otherwise identical submissions, such
    /// as two equal installments against different balances.
    pub(crate) fn idempotent_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        scope: &str,
    ) -> ClientResult<RequestBuilder> {
        let payload = serde_json::to_vec(body)?;
        let key = idempotency_key(&method, path, &payload, scope);

        Ok(self
            .request(method, path)
            .header(IDEMPOTENCY_HEADER, key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Execute request and handle errors
    pub(crate) async fn execute(&self, req: RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::Null);
            return Err(api_error_from_body(status, &body, &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Execute and decode the payload, unwrapping a `{ "<key>": ... }` or
    /// `{ "data": ... }` envelope when present
    pub(crate) async fn execute_as<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        key: &str,
    ) -> ClientResult<T> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_value(unwrap_envelope(body, key))?)
    }
}

/// Name-based (v5) UUID over everything that identifies one submission
pub(crate) fn idempotency_key(method: &Method, path: &str, payload: &[u8], scope: &str) -> String {
    let mut material = Vec::with_capacity(payload.len() + path.len() + scope.len() + 16);
    material.extend_from_slice(method.as_str().as_bytes());
    material.push(b' ');
    material.extend_from_slice(path.as_bytes());
    material.push(b'\n');
    material.extend_from_slice(scope.as_bytes());
    material.push(b'\n');
    material.extend_from_slice(payload);

    Uuid::new_v5(&Uuid::NAMESPACE_URL, &material).to_string()
}

/// Strip a response envelope around the payload
pub(crate) fn unwrap_envelope(body: Value, key: &str) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        Value::Object(mut map) if map.contains_key("data") => {
            let data = map.remove("data").unwrap_or(Value::Null);
            match data {
                Value::Object(mut inner) if inner.contains_key(key) => {
                    inner.remove(key).unwrap_or(Value::Null)
                }
                other => other,
            }
        }
        other => other,
    }
}

/// Map an error response onto `ClientError::Api`.
///
/// Understands `{"error": {"code", "message"}}`, `{"code", "message"}` and
/// `{"error": "text"}`; anything else falls back to the raw body.
#[track_caller]
pub(crate) fn api_error_from_body(status: StatusCode, body: &Value, raw: &str) -> ClientError {
    let error = body.get("error");

    let code = error
        .and_then(|e| e.get("code"))
        .or_else(|| body.get("code"))
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()));

    let message = error
        .and_then(|e| e.get("message"))
        .or_else(|| body.get("message"))
        .or(error)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| {
            let raw = raw.trim();
            if raw.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                raw.chars().take(MAX_RAW_ERROR_LEN).collect()
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        code,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
