// SPDX-License-Identifier: MPL-2.0
//! HTTP retrieval of avatar images.
//!
//! All requests go through one client that never sends a `Referer` header,
//! follows a bounded number of redirects and identifies itself with the
//! application user agent. Bodies are streamed and rejected as soon as they
//! exceed the configured size cap.

use crate::error::FetchError;
use futures_util::StreamExt;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("AvatarGallery/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns `FetchError::Request` if the TLS backend cannot be initialized.
pub fn build_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .referer(false)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Request(e.to_string()))
}

/// Downloads the image at `url` into memory.
///
/// # Errors
///
/// - `FetchError::Request` if the request cannot be sent
/// - `FetchError::Status` for non-2xx answers
/// - `FetchError::TooLarge` if the declared or streamed size exceeds `max_bytes`
/// - `FetchError::Body` if the body stream breaks
pub async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
    max_bytes: u64,
) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let declared = response.content_length();
    check_size(declared.unwrap_or(0), max_bytes)?;

    let mut bytes = Vec::with_capacity(declared.unwrap_or(0) as usize);
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::Body(e.to_string()))?;
        check_size((bytes.len() + chunk.len()) as u64, max_bytes)?;
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

/// Fails with `TooLarge` once `size` goes past `max_bytes`.
fn check_size(size: u64, max_bytes: u64) -> Result<(), FetchError> {
    if size > max_bytes {
        Err(FetchError::TooLarge {
            size,
            max: max_bytes,
        })
    } else {
        Ok(())
    }
}
