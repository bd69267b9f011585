//! Thin JSON-over-HTTP client for the plan API.
//!
//! ARCHITECTURE
//! ============
//! `ApiClient` builds a fully-formed `HttpRequest` (URL, headers, body) and
//! hands it to a `Transport`. The browser build uses `FetchTransport`
//! (`gloo-net`); tests substitute an in-memory transport. The client owns a
//! snapshot of the bearer token taken when it was built, so the header
//! reflects the session at call time.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A request ready to go on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status plus the body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can execute an `HttpRequest`.
///
/// Only transport-level failures are errors here; any HTTP status counts as
/// a response.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// Build the header list for a request.
///
/// `Content-Type` is always JSON; `Authorization` is present if and only if a
/// token is.
pub fn build_headers(token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    headers
}

/// Join a base URL and a relative path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}

#[derive(Clone, Debug)]
pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    token: Option<String>,
    transport: T,
}

impl ApiClient<FetchTransport> {
    /// Client against the configured API base URL using browser fetch.
    pub fn browser(token: Option<String>) -> Self {
        Self::new(crate::config::api_base_url(), token, FetchTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, token: Option<String>, transport: T) -> Self {
        Self { base_url: base_url.into(), token, transport }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Assemble the wire request for `path` without sending it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body cannot be serialized.
    pub fn prepare<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(HttpRequest {
            method,
            url: join_url(&self.base_url, path),
            headers: build_headers(self.token()),
            body,
        })
    }

    /// Send a request and decode the JSON success body.
    ///
    /// # Errors
    ///
    /// `Transport` when no response arrived, `Status` for non-2xx responses,
    /// `Decode` when the success body does not match `R`.
    pub async fn request<R, B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.prepare(method, path, body)?;
        log::debug!("{} {}", method.as_str(), request.url);
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            log::warn!("{} {} -> {}", method.as_str(), path, resp.status);
            return Err(ApiError::from_status(resp.status, &resp.body));
        }
        // 204-style empty bodies decode as JSON null.
        let body = if resp.body.trim().is_empty() { "null" } else { resp.body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(HttpMethod::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<R, B>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Post, path, Some(body)).await
    }
}
