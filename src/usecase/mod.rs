//! Usecase layer: running engines, run events, post-run checks.

pub mod event;
pub mod run;
pub mod stats;
pub mod validate;
