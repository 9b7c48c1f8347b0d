//! Fetch wrapper over `gloo-net`.
//!
//! Client-side (hydrate): real HTTP calls. Server-side (SSR): stubs
//! returning errors, since the admin API is only reachable from the browser
//! session.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` with the parsed envelope
//! attached so callers can inspect per-field submit errors. Transport and
//! decode failures get their own variants; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::net::types::Envelope;
use crate::util::case::camel_to_snake;

/// Header echoing the CSRF token injected into the page at load time.
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Errors produced by the fetch layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Parsed JSON envelope, when the error body was one.
        body: Option<Envelope>,
    },
    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Per-field error messages from a failed submit, empty for other kinds.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        match self {
            Self::Status { body: Some(env), .. } => env.field_errors(),
            _ => Vec::new(),
        }
    }

    /// Message suitable for a toast or page-level error state.
    pub fn user_message(&self) -> String {
        if let Self::Status { body: Some(env), .. } = self {
            if let Some(message) = &env.message {
                return message.clone();
            }
        }
        self.to_string()
    }
}

/// Build a query string from key/value pairs, converting camelCase keys to
/// snake_case. Returns the empty string for no pairs, otherwise `?a_b=c&...`.
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", camel_to_snake(key), percent_encode(value)))
        .collect();
    format!("?{}", parts.join("&"))
}

/// Percent-encode a query value (RFC 3986 unreserved characters pass through).
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Read the CSRF token the server injects as a `window.CSRF_TOKEN` global.
#[cfg(feature = "hydrate")]
fn csrf_token() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(window.as_ref(), &wasm_bindgen::JsValue::from_str("CSRF_TOKEN"))
        .ok()?
        .as_string()
}

#[cfg(feature = "hydrate")]
async fn read_envelope(resp: gloo_net::http::Response) -> ApiResult<Envelope> {
    let status = resp.status();
    if !resp.ok() {
        let body = resp.json::<Envelope>().await.ok();
        return Err(ApiError::Status { status, body });
    }
    resp.json::<Envelope>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn decode_data<T: DeserializeOwned>(env: Envelope) -> ApiResult<T> {
    serde_json::from_value(env.data.unwrap_or(serde_json::Value::Null))
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` with an optional query and decode the envelope `data` as `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str, query: &[(&str, String)]) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{path}{}", encode_query(query));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_data(read_envelope(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// POST a JSON body with the CSRF header and decode `data` as `T`.
pub async fn post_json<T: DeserializeOwned>(
    path: &str,
    body: &serde_json::Value,
) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(path);
        if let Some(token) = csrf_token() {
            req = req.header(CSRF_HEADER, &token);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_data(read_envelope(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// PUT a JSON body with the CSRF header and decode `data` as `T`.
pub async fn put_json<T: DeserializeOwned>(path: &str, body: &serde_json::Value) -> ApiResult<T> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::put(path);
        if let Some(token) = csrf_token() {
            req = req.header(CSRF_HEADER, &token);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_data(read_envelope(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// DELETE `path` with the CSRF header.
pub async fn delete(path: &str) -> ApiResult<Envelope> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::delete(path);
        if let Some(token) = csrf_token() {
            req = req.header(CSRF_HEADER, &token);
        }
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// POST a `FormData` body (multipart) with the CSRF header.
///
/// The browser sets the multipart boundary itself, so no content-type header
/// is attached here.
#[cfg(feature = "hydrate")]
pub async fn post_form_data(path: &str, form: web_sys::FormData) -> ApiResult<Envelope> {
    let mut req = gloo_net::http::Request::post(path);
    if let Some(token) = csrf_token() {
        req = req.header(CSRF_HEADER, &token);
    }
    let resp = req
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_envelope(resp).await
}
