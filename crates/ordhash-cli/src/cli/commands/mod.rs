//! CLI command handlers. Each command is in its own file for clarity.

mod checksum;
mod completions;
mod gateways;
mod hash;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use gateways::run_gateways;
pub use hash::run_hash;
