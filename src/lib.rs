//! `relfetch` is a small build-time helper: it fetches the published release
//! descriptor over HTTP(S), retrying transient failures, and stamps the
//! resulting version into the local package manifest.
//!
//! The crate exposes the pieces the binary composes:
//! - [`request()`] / [`fetch()`] — one-shot HTTP request helper with a timeout
//! - [`fetch_with_retry`] — bounded retry wrapper around [`fetch()`]
//! - [`stamp_manifest`] — manifest read/amend/rewrite

mod error;
mod manifest;
mod options;
mod request;
mod retry;
mod types;

pub use error::RelfetchError;
pub use manifest::{stamp_manifest, VersionDescriptor};
pub use options::{Method, RequestOptions};
pub use request::{fetch, request};
pub use retry::{fetch_with_retry, MAX_ATTEMPTS};
pub use types::{Body, Response};

pub type Result<T> = std::result::Result<T, RelfetchError>;
