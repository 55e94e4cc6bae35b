use crate::domain::algorithm::Algorithm;
use crate::domain::event::{AlgorithmEvent, VisitPhase};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub algorithm: Option<Algorithm>,
    pub events: usize,
    pub vertices_entered: usize,
    pub vertices_settled: usize,
    pub vertices_colored: usize,
    pub colors_used: usize,
    pub components: usize,
    pub largest_component: usize,
}

impl RunStats {
    pub fn for_algorithm(algorithm: Algorithm) -> Self {
        Self {
            algorithm: Some(algorithm),
            ..Self::default()
        }
    }

    pub fn record(&mut self, ev: &AlgorithmEvent) {
        self.events += 1;
        match ev {
            AlgorithmEvent::Visit { phase, .. } => match phase {
                VisitPhase::Entered => self.vertices_entered += 1,
                VisitPhase::Settled => self.vertices_settled += 1,
                VisitPhase::Discovered => {}
            },
            AlgorithmEvent::Colored { color, .. } => {
                self.vertices_colored += 1;
                self.colors_used = self.colors_used.max(color + 1);
            }
            AlgorithmEvent::ComponentDiscovered { members, .. } => {
                self.components += 1;
                self.largest_component = self.largest_component.max(members.len());
            }
        }
    }
}
