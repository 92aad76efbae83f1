//! `ordhash hash <inscription-id>` – fetch content and print its digest.

use anyhow::Result;
use ordhash_core::config::OrdhashConfig;
use ordhash_core::resolver;

/// Runs the gateway fallback for one inscription ID and prints the outcome.
///
/// Completes normally even when every gateway fails; the failure is
/// reported on stdout, not as a process error.
pub async fn run_hash(cfg: &OrdhashConfig, inscription_id: &str) -> Result<()> {
    let gateways = cfg.gateway_templates();
    let timeout = cfg.timeout();
    let id = inscription_id.to_string();

    // The fetch blocks on curl; keep it off the async runtime threads.
    let resolution =
        tokio::task::spawn_blocking(move || resolver::resolve(&id, &gateways, timeout)).await?;

    for attempt in &resolution.attempts {
        println!("{}: {}", attempt.url, attempt.error);
    }

    match resolution.success {
        Some(success) => {
            println!("Fetched: {}", success.url);
            println!("Content length: {} bytes", success.bytes.len());
            println!(
                "Content type: {}",
                success.content_type.as_deref().unwrap_or("unknown")
            );
            println!("SHA-256: {}", success.digest);
        }
        None => println!("Failed to retrieve content from all gateways."),
    }

    Ok(())
}
