use std::collections::HashMap;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use url::Url;

use crate::{Body, RelfetchError, RequestOptions, Response, Result};

/// Percent-encoding set for query parameter values. Matches JavaScript's
/// `encodeURIComponent`: ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass
/// through, everything else is encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Performs one HTTP(S) request and returns the structured response.
///
/// Non-success status codes are delivered as responses, not errors; only
/// transport failures and the timeout surface as [`RelfetchError`]. Retrying
/// is the caller's business — see [`fetch_with_retry`](crate::fetch_with_retry).
pub async fn request(url: &str, options: RequestOptions) -> Result<Response> {
    let mut target = parse_target(url)?;
    append_query_params(&mut target, &options.params);

    let transport = build_transport(&options)?;
    let mut builder = transport.request(options.method.as_reqwest(), target);

    for (name, value) in &options.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(payload) = &options.body {
        builder = builder
            .header(CONTENT_LENGTH, payload.len())
            .body(payload.clone());
    }
    if options.timeout_ms > 0 {
        // Bounds the whole exchange, connect through body completion; the
        // transport aborts the in-flight request when it elapses.
        builder = builder.timeout(Duration::from_millis(options.timeout_ms));
    }

    let mut response = builder.send().await.map_err(classify)?;
    let status = response.status();
    let status_message = status.canonical_reason().unwrap_or_default().to_owned();
    let headers = collect_headers(response.headers());

    let mut buffer = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(classify)? {
        buffer.extend_from_slice(&chunk);
    }
    let text = String::from_utf8_lossy(&buffer).into_owned();

    Ok(Response {
        headers,
        body: Body::decode(text, options.json),
        status: status.as_u16(),
        status_message,
    })
}

/// Body-only variant of [`request`] with identical semantics.
pub async fn fetch(url: &str, options: RequestOptions) -> Result<Body> {
    Ok(request(url, options).await?.body)
}

fn parse_target(url: &str) -> Result<Url> {
    let target = Url::parse(url)?;
    match target.scheme() {
        "http" | "https" => Ok(target),
        other => Err(RelfetchError::UnsupportedScheme(other.to_owned())),
    }
}

/// Appends `params` to the URL query as `key=value` pairs joined by `&`,
/// preserving pair order. Joined to an existing query with `&`, started with
/// `?` otherwise.
fn append_query_params(target: &mut Url, params: &[(String, String)]) {
    if params.is_empty() {
        return;
    }
    let extra = params
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");
    let merged = match target.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{extra}"),
        _ => extra,
    };
    target.set_query(Some(&merged));
}

fn build_transport(options: &RequestOptions) -> Result<reqwest::Client> {
    if let Some(client) = &options.client {
        return Ok(client.clone());
    }
    // Redirects are not followed; callers get the response as served.
    let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
    if let Some(address) = options.local_address {
        builder = builder.local_address(address);
    }
    if let Some((host, socket)) = &options.resolve {
        builder = builder.resolve(host, *socket);
    }
    builder.build().map_err(RelfetchError::Transport)
}

fn classify(err: reqwest::Error) -> RelfetchError {
    if err.is_timeout() {
        RelfetchError::Timeout
    } else {
        RelfetchError::Transport(err)
    }
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        // Repeated headers collapse into one comma-joined entry.
        if let Some(existing) = map.get_mut(name.as_str()) {
            existing.push_str(", ");
            existing.push_str(&value);
        } else {
            map.insert(name.as_str().to_owned(), value.into_owned());
        }
    }
    map
}
