//! Shared HTTP response checks for provider clients.

use crate::error::ProviderError;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest response body kept in an [`ProviderError::Api`] message.
const MAX_ERROR_BODY: usize = 500;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. A 429 becomes
/// [`ProviderError::RateLimited`]; any other non-success status becomes
/// [`ProviderError::Api`] carrying the (truncated) body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ProviderError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let mut message = resp.text().await.unwrap_or_default();
        if message.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| message.is_char_boundary(i))
                .unwrap_or(0);
            message.truncate(cut);
        }
        return Err(ProviderError::Api { status, message });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
