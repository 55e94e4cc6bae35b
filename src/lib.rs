//! Step-by-step graph algorithm engine.
//!
//! Layers:
//! - domain: graph store, event vocabulary, palette, ports
//! - infrastructure: BFS/DFS, greedy coloring, Kosaraju SCC, NDJSON sink
//! - usecase: run loop with cancellation, stats, validation
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
