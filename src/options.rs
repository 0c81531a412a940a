use std::net::{IpAddr, SocketAddr};

/// HTTP methods accepted by the request helper.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Method {
    #[default]
    Get,
    Head,
    Delete,
    Patch,
    Post,
    Put,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Head => reqwest::Method::HEAD,
            Self::Delete => reqwest::Method::DELETE,
            Self::Patch => reqwest::Method::PATCH,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
        }
    }
}

/// Configures a single request issued by [`request`](crate::request()).
#[derive(Clone, Debug)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Extra query parameters appended to the URL, in order. Values are
    /// percent-encoded; keys pass through as provided.
    pub params: Vec<(String, String)>,
    /// Request headers, applied as provided. Name normalization, if any, is
    /// the transport's own behavior.
    pub headers: Vec<(String, String)>,
    /// Request payload. When present, `Content-Length` is set to its byte
    /// length.
    pub body: Option<Vec<u8>>,
    /// Per-request timeout in milliseconds. `0` disables the timeout.
    pub timeout_ms: u64,
    /// Parse the response body as JSON, keeping the raw text when the body
    /// is not valid JSON.
    pub json: bool,
    /// Local address to bind, which also pins the address family.
    pub local_address: Option<IpAddr>,
    /// Static DNS override for one host, passed through to the transport.
    pub resolve: Option<(String, SocketAddr)>,
    /// Reusable connection-pooling transport. When absent, a fresh
    /// single-use transport is built for the call.
    pub client: Option<reqwest::Client>,
}

impl RequestOptions {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            json: false,
            local_address: None,
            resolve: None,
            client: None,
        }
    }
}
