// HTTP transport module: describes requests and responses as plain data
// and hides the actual network call behind the `Transport` trait. The
// client only ever sees an `HttpResponse`, so tests can swap in an
// in-memory transport while `main` uses the reqwest one.

use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request built by `ApiClient`. `body` is sent as JSON when present.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

/// What came back over the wire. `reason` is the status reason phrase
/// when the transport knows one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

/// Failure before any HTTP status was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// For transports that are not built on reqwest.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Executes a single request. Non-2xx statuses are returned as ordinary
/// responses; only connection-level faults become `Err`.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by `reqwest::blocking::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(ReqwestTransport { client })
    }

    /// Wrap an already configured client (proxy, TLS, headers).
    pub fn from_client(client: Client) -> Self {
        ReqwestTransport { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let res = req.send()?;
        let status = res.status();
        // reqwest does not keep the wire reason phrase, use the canonical one
        let reason = status.canonical_reason().map(str::to_string);
        let body = res.text()?;
        Ok(HttpResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
