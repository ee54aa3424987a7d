use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::http::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

/// `reqwest`-based implementation of [`HttpTransport`].
///
/// ## Responsibilities
///
/// - Maps the transport-agnostic [`HttpRequest`] onto a `reqwest` request
/// - Dispatches it once and decodes the response body as text
///
/// ## What this type does *not* do
///
/// - Retry, cache, or time out requests
/// - Interpret status codes (a delivered 4xx/5xx is still a delivered
///   response; the application layer decides what that means)
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Constructs a transport with a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps an [`HttpRequest`] onto a `reqwest::RequestBuilder`.
    ///
    /// Kept separate from [`HttpTransport::request`] so the mapping can be
    /// unit tested without performing network I/O.
    fn build(&self, req: HttpRequest) -> reqwest::RequestBuilder {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = req;

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse> {
        debug!("HTTP dispatch: method={:?} url={}", req.method, req.url);

        let url = req.url.clone();
        let response = self
            .build(req)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("reading response body from {url} failed"))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_post_request_with_headers_and_body() {
        let transport = ReqwestTransport::new();

        let req = HttpRequest::post("https://example.com/v1/clock-ins")
            .header("Content-Type", "application/json")
            .body(r#"{"clockInDateTime":"0"}"#);

        let built = transport.build(req).build().expect("request should build");

        assert_eq!(built.method(), &reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "https://example.com/v1/clock-ins");
        assert_eq!(
            built.headers().get("Content-Type").unwrap(),
            "application/json"
        );
        let body = built.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"clockInDateTime":"0"}"#);
    }

    #[test]
    fn maps_get_request_without_body() {
        let transport = ReqwestTransport::new();

        let req = HttpRequest::get("https://example.com/v1/gps")
            .header("Content-Type", "application/json");

        let built = transport.build(req).build().expect("request should build");

        assert_eq!(built.method(), &reqwest::Method::GET);
        assert_eq!(built.url().as_str(), "https://example.com/v1/gps");
        assert!(built.body().is_none());
    }
}
