use crate::{fetch, Body, RequestOptions, Result};

/// Total attempt budget, the initial call included.
pub const MAX_ATTEMPTS: u32 = 3;

/// Calls [`fetch`] and retries failed attempts until the budget is spent.
///
/// Every failure retries the same way — timeouts, connection errors and DNS
/// failures are not told apart, and there is no delay between attempts. Once
/// the budget is exhausted the most recent error propagates unchanged.
pub async fn fetch_with_retry(url: &str, options: RequestOptions) -> Result<Body> {
    let mut attempt = 0u32;
    loop {
        match fetch(url, options.clone()).await {
            Ok(body) => return Ok(body),
            Err(err) => {
                attempt += 1;
                if attempt >= MAX_ATTEMPTS {
                    return Err(err);
                }
                tracing::debug!(attempt, error = %err, "retrying fetch");
            }
        }
    }
}
