use crate::domain::palette::Rgb;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitPhase {
    /// The traversal is now processing this vertex.
    Entered,
    /// Found from the vertex being processed: queued by BFS, descended into by DFS.
    Discovered,
    /// All neighbors handled; the vertex leaves the frontier.
    Settled,
}

/// One observable state change produced by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    Visit {
        vertex: usize,
        phase: VisitPhase,
    },

    Colored {
        vertex: usize,
        color: usize,
        swatch: Option<Rgb>,
    },

    ComponentDiscovered {
        component: usize,
        members: Vec<usize>,
        /// Indices into the graph's edge list with both endpoints in `members`.
        edges: Vec<usize>,
        color: Rgb,
    },
}

impl AlgorithmEvent {
    pub fn entered(vertex: usize) -> Self {
        Self::Visit {
            vertex,
            phase: VisitPhase::Entered,
        }
    }

    pub fn discovered(vertex: usize) -> Self {
        Self::Visit {
            vertex,
            phase: VisitPhase::Discovered,
        }
    }

    pub fn settled(vertex: usize) -> Self {
        Self::Visit {
            vertex,
            phase: VisitPhase::Settled,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Visit { .. } => "visit",
            Self::Colored { .. } => "colored",
            Self::ComponentDiscovered { .. } => "component_discovered",
        }
    }
}
