//! Gateway fallback: try each configured gateway in order, first HTTP 200
//! wins, hash the body.
//!
//! Every per-gateway failure is non-fatal; the cause is recorded and the
//! next gateway is tried. No gateway is retried within one resolution and
//! there is no backoff, so worst-case blocking time is
//! `timeout x gateway_count`.

use std::time::Duration;

use crate::digest;
use crate::fetch::{self, FetchError};
use crate::gateway::GatewayTemplate;

/// A failed gateway attempt, kept so callers and tests can inspect causes.
#[derive(Debug)]
pub struct GatewayAttempt {
    /// Full URL that was tried.
    pub url: String,
    /// Why this gateway was skipped.
    pub error: FetchError,
}

/// Content successfully retrieved from one gateway.
#[derive(Debug)]
pub struct FetchSuccess {
    /// URL the content came from.
    pub url: String,
    /// Raw response body.
    pub bytes: Vec<u8>,
    /// Declared `Content-Type`, if any.
    pub content_type: Option<String>,
    /// SHA-256 of `bytes`, lowercase hex.
    pub digest: String,
}

/// Outcome of one resolution: at most one success plus the trail of failed
/// attempts that preceded it. An exhausted gateway list leaves `success`
/// empty with every attempt recorded.
#[derive(Debug)]
pub struct Resolution {
    pub success: Option<FetchSuccess>,
    pub attempts: Vec<GatewayAttempt>,
}

impl Resolution {
    /// Digest of the fetched content, if any gateway succeeded.
    pub fn digest(&self) -> Option<&str> {
        self.success.as_ref().map(|s| s.digest.as_str())
    }
}

/// Resolves an inscription ID to its content via the gateway list.
///
/// Gateways are tried strictly in order with a fresh connection per
/// attempt; the first final-status-200 response short-circuits the rest.
pub fn resolve(
    inscription_id: &str,
    gateways: &[GatewayTemplate],
    timeout: Duration,
) -> Resolution {
    let mut attempts = Vec::new();

    for gateway in gateways {
        let url = gateway.url_for(inscription_id);
        tracing::info!("trying {}", url);

        match fetch::fetch_url(&url, timeout) {
            Ok(content) => {
                let digest = digest::sha256_hex(&content.bytes);
                tracing::info!(
                    "fetched {} bytes ({}) from {}, sha256 {}",
                    content.bytes.len(),
                    content.content_type.as_deref().unwrap_or("unknown"),
                    url,
                    digest
                );
                return Resolution {
                    success: Some(FetchSuccess {
                        url,
                        bytes: content.bytes,
                        content_type: content.content_type,
                        digest,
                    }),
                    attempts,
                };
            }
            Err(error) => {
                match &error {
                    FetchError::HttpStatus(code) => {
                        tracing::warn!("{} returned HTTP {}", url, code)
                    }
                    FetchError::Transport(e) => tracing::warn!("{} failed: {}", url, e),
                }
                attempts.push(GatewayAttempt { url, error });
            }
        }
    }

    tracing::warn!(
        "failed to retrieve content for {} from all {} gateways",
        inscription_id,
        gateways.len()
    );
    Resolution {
        success: None,
        attempts,
    }
}

/// Thin wrapper over [`resolve`]: just the digest, or `None` when every
/// gateway failed.
pub fn fetch_content_hash(
    inscription_id: &str,
    gateways: &[GatewayTemplate],
    timeout: Duration,
) -> Option<String> {
    resolve(inscription_id, gateways, timeout)
        .success
        .map(|s| s.digest)
}
