//! Single-gateway HTTP GET.
//!
//! Uses the curl crate (libcurl) to fetch the full response body into
//! memory, bounded by a total timeout. Exactly HTTP 200 counts as success;
//! everything else is an inspectable `FetchError` so the resolver can
//! continue to the next gateway.

use std::str;
use std::time::Duration;
use thiserror::Error;

/// Error from a single gateway attempt (transport failure or bad status).
/// Kept as an enum so callers can tell the causes apart; the fallback
/// policy treats both the same way (skip to the next gateway).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connect, TLS, recv, ...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// A response arrived but its final status was not 200.
    #[error("HTTP {0}")]
    HttpStatus(u32),
}

impl FetchError {
    /// True when the failure happened below HTTP (no usable response).
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}

/// Body and declared content type of a successful (HTTP 200) fetch.
#[derive(Debug, Clone)]
pub struct FetchedContent {
    /// Raw response body, byte-exact.
    pub bytes: Vec<u8>,
    /// `Content-Type` header value if the server sent one.
    pub content_type: Option<String>,
}

/// Performs one GET against `url`, collecting the whole body in memory.
///
/// Follows redirects; success means the final status is exactly 200.
/// Runs in the current thread; call from `spawn_blocking` if used from
/// async code.
pub fn fetch_url(url: &str, timeout: Duration) -> Result<FetchedContent, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeout.min(Duration::from_secs(15)))?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::HttpStatus(code));
    }

    Ok(FetchedContent {
        content_type: content_type_from_headers(&header_lines),
        bytes: body,
    })
}

/// Extract the `Content-Type` value from collected header lines.
///
/// Redirect hops emit their own header blocks before the final response,
/// so the last occurrence wins.
fn content_type_from_headers(lines: &[String]) -> Option<String> {
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }
    content_type
}
