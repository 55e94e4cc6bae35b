//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: graph store, events, palette, ports
//! - usecase: run loop, stats, validation
//! - infrastructure: algorithm engines + NDJSON event sink
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    graph_sandbox::interface::cli::run().await
}
