use anyhow::Result;
use async_trait::async_trait;

/// The HTTP methods the transport port supports.
///
/// Kept deliberately small: the services in this crate only ever issue
/// `GET` and `POST` requests. Adding a method here means a new call shape
/// exists somewhere, which should be a conscious decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A transport-agnostic description of a single HTTP request.
///
/// This is a Value Object in the same spirit as a mail message:
/// it describes *what* should be sent, and knows nothing about the
/// concrete client (reqwest, a test double, ...) that will send it.
///
/// Headers are plain name/value string pairs; validation against any
/// particular header grammar is the adapter's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,

    /// Absolute request URL.
    pub url: String,

    /// Header name/value pairs, applied in order.
    pub headers: Vec<(String, String)>,

    /// Optional request body. `None` means no body is transmitted.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Starts a `GET` request to the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Starts a `POST` request to the given URL.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// A response delivered by the transport.
///
/// The services in this crate treat *any* delivered response as success;
/// only a transport-level failure (connection refused, protocol error,
/// thrown endpoint error in a test double) is an `Err`. The status and
/// body are still carried for callers that want to inspect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body, decoded as text.
    pub body: String,
}

/// Port trait for dispatching HTTP requests.
///
/// This trait represents an **abstraction over the HTTP client**.
/// Implementations may dispatch requests via:
///
/// - `reqwest` (production)
/// - An in-memory recorder (tests)
///
/// ## Design notes
///
/// - Exactly one attempt per call: no retries, no caching, no timeout
///   semantics. A hung request hangs the caller.
/// - The trait does **not** decide what counts as an application-level
///   failure; it only reports whether a response was delivered at all.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared via `Arc`
/// across tasks; each call's request and outcome are local to that call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Dispatches a single request and resolves exactly once.
    ///
    /// - `Ok(response)` if any response was delivered
    /// - `Err(_)` on transport failure
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse>;
}
