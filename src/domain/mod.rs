//! Domain layer: graph store, event vocabulary and ports. No IO, no async.

pub mod algorithm;
pub mod error;
pub mod event;
pub mod graph;
pub mod palette;
pub mod traits;
