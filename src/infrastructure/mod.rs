// Infrastructure layer: algorithm engines and the NDJSON event sink
pub mod coloring;
pub mod event_ndjson;
pub mod scc_kosaraju;
pub mod traversal;
