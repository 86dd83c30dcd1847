use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Send one request and return the raw body of a successful response.
///
/// The error string is what ends up inside a `ClientError` variant: the
/// server's body text on a non-success status, or the transport failure.
pub(crate) async fn exchange_text(
    http: &Client,
    builder: RequestBuilder,
) -> Result<String, String> {
    let mut request = builder
        .build()
        .map_err(|e| format!("Invalid request: {}", e))?;

    // `.json()` already set it on requests with a body
    request
        .headers_mut()
        .entry(CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));

    let method = request.method().clone();
    let url = request.url().clone();
    debug!("{} {}", method, url);

    let resp = http
        .execute(request)
        .await
        .map_err(|e| format!("Request to {} failed: {}", url, e))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| format!("Failed to read response from {}: {}", url, e))?;

    if !status.is_success() {
        warn!("{} {} returned {}", method, url, status);
        let body = body.trim_end();
        if body.is_empty() {
            return Err(status.to_string());
        }
        return Err(body.to_string());
    }

    Ok(body)
}

/// [`exchange_text`] followed by JSON decoding of the body.
pub(crate) async fn exchange<T: DeserializeOwned>(
    http: &Client,
    builder: RequestBuilder,
) -> Result<T, String> {
    let body = exchange_text(http, builder).await?;
    serde_json::from_str(&body).map_err(|e| format!("Invalid response body: {}", e))
}
