//! `ordhash gateways` – list configured gateways in fallback order.

use ordhash_core::config::OrdhashConfig;

pub fn run_gateways(cfg: &OrdhashConfig) {
    for (i, template) in cfg.gateway_templates().iter().enumerate() {
        let host = template.host().unwrap_or_else(|| "<invalid url>".into());
        println!("{}. {} ({})", i + 1, template.as_str(), host);
    }
}
