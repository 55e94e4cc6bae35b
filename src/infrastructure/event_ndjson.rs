use crate::domain::event::{AlgorithmEvent, VisitPhase};
use crate::domain::palette::{ACTIVE_VERTEX, PASSIVE_EDGE, PASSIVE_VERTEX, PROCESSED_VERTEX};
use crate::usecase::event::AppEvent;
use serde_json::json;
use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn phase_fill(phase: VisitPhase) -> String {
    match phase {
        VisitPhase::Entered => ACTIVE_VERTEX.to_string(),
        VisitPhase::Discovered | VisitPhase::Settled => PROCESSED_VERTEX.to_string(),
    }
}

fn algorithm_event_to_json(step: usize, ev: &AlgorithmEvent) -> serde_json::Value {
    match ev {
        AlgorithmEvent::Visit { vertex, phase } => {
            json!({"type":"visit","step":step,"vertex":vertex,"phase":phase,"fill":phase_fill(*phase)})
        }
        AlgorithmEvent::Colored {
            vertex,
            color,
            swatch,
        } => {
            json!({"type":"colored","step":step,"vertex":vertex,"color":color,"fill":swatch.map(|s| s.to_string())})
        }
        AlgorithmEvent::ComponentDiscovered {
            component,
            members,
            edges,
            color,
        } => {
            json!({"type":"component_discovered","step":step,"component":component,"members":members,"edges":edges,"fill":color.to_string()})
        }
    }
}

pub fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::RunStarted {
            algorithm,
            vertices,
            edges,
        } => {
            json!({"type":"run_started","algorithm":algorithm,"vertices":vertices,"edges":edges})
        }
        AppEvent::Step { index, event } => algorithm_event_to_json(*index, event),
        AppEvent::RunFinished { stats } => json!({"type":"run_finished","stats":stats}),
        AppEvent::RunCancelled { stats } => json!({"type":"run_cancelled","stats":stats}),
        AppEvent::Reset => {
            json!({"type":"reset","vertex_fill":PASSIVE_VERTEX.to_string(),"edge_fill":PASSIVE_EDGE.to_string()})
        }
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout, flushed per line so a pipe sees each step as it happens.
            let written = {
                let mut out = std::io::stdout().lock();
                writeln!(out, "{line}").and_then(|()| out.flush())
            };
            if written.is_err() {
                break;
            }
        }
    })
}
