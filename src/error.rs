/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RelfetchError {
    /// The target URL does not parse as an absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The target URL uses a scheme other than `http` or `https`.
    #[error("unsupported url scheme '{0}'")]
    UnsupportedScheme(String),
    /// The configured timeout elapsed before the request completed.
    #[error("Request timeout")]
    Timeout,
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Manifest or descriptor shape validation error.
    #[error("decode error: {0}")]
    Decode(String),
    /// Manifest file I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
