//! Same-origin forwarding of `/api/*` to the property backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Requests under `/api` are
//! replayed against `BACKEND_URL` with the caller's bearer credential, and the
//! backend's status and body are returned unchanged. The host never inspects
//! or stores credentials.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::config::HostConfig;

/// Request headers replayed to the backend.
const FORWARDED_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns the `reqwest` builder error when the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(config.backend_timeout_secs)).build()?;
        Ok(Self { http, backend_url: config.backend_url.clone() })
    }
}

/// Backend URL for a proxied `path` and raw query string.
pub fn backend_target(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// The subset of `headers` replayed to the backend.
pub fn forwarded_headers(headers: &HeaderMap) -> Vec<(HeaderName, HeaderValue)> {
    FORWARDED_HEADERS
        .iter()
        .filter_map(|name| headers.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

pub async fn forward(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let target = backend_target(&state.backend_url, &path, query.as_deref());
    let mut request = state.http.request(method.clone(), &target);
    for (name, value) in forwarded_headers(&headers) {
        request = request.header(name, value);
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(%method, %target, error = %e, "backend request failed");
            let status = if e.is_timeout() { StatusCode::GATEWAY_TIMEOUT } else { StatusCode::BAD_GATEWAY };
            return (status, "backend unavailable").into_response();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    tracing::debug!(%method, %target, %status, "proxied");
    match upstream.bytes().await {
        Ok(bytes) => {
            let mut response = (status, bytes).into_response();
            if let Some(content_type) = content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, content_type);
            }
            response
        }
        Err(e) => {
            tracing::warn!(%method, %target, error = %e, "backend body read failed");
            (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
        }
    }
}
