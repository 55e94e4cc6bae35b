use crate::domain::algorithm::Algorithm;
use crate::domain::event::AlgorithmEvent;
use crate::usecase::stats::RunStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    RunStarted {
        algorithm: Algorithm,
        vertices: usize,
        edges: usize,
    },

    Step {
        index: usize,
        event: AlgorithmEvent,
    },

    RunFinished {
        stats: RunStats,
    },

    RunCancelled {
        stats: RunStats,
    },

    /// Renderer should drop all highlight colors.
    Reset,
}
