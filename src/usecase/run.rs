use crate::domain::algorithm::{Algorithm, RunRequest};
use crate::domain::event::AlgorithmEvent;
use crate::domain::graph::Graph;
use crate::domain::palette::Palette;
use crate::infrastructure::coloring::GreedyColoring;
use crate::infrastructure::scc_kosaraju::KosarajuComponents;
use crate::infrastructure::traversal::{Bfs, Dfs};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::RunStats;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info};

/// Cooperative stop signal, checked between two events.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Pause after each event, the animation clock.
    pub step_delay: Duration,
    /// Stop after this many events, as if cancelled.
    pub max_events: Option<usize>,
    /// Keep a copy of every event in the outcome.
    pub record_events: bool,
    pub palette: Palette,
}

#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub stats: RunStats,
    pub cancelled: bool,
    pub events: Vec<AlgorithmEvent>,
}

/// Builds the lazy event stream for a request.
pub fn engine<'g>(
    graph: &'g Graph,
    request: &RunRequest,
    palette: &Palette,
) -> Box<dyn Iterator<Item = AlgorithmEvent> + Send + 'g> {
    match request.algorithm {
        Algorithm::Bfs => Box::new(Bfs::new(graph, request.start)),
        Algorithm::Dfs => Box::new(Dfs::new(graph, request.start)),
        Algorithm::Coloring => Box::new(GreedyColoring::new(graph, palette, request.seed)),
        Algorithm::Components => Box::new(KosarajuComponents::new(graph, request.seed)),
    }
}

/// Drives one algorithm run, forwarding events to `sink` one at a time.
///
/// With a bounded channel the engine never runs ahead of the consumer by more
/// than the channel capacity. A closed sink stops the run like a cancel.
pub async fn run_algorithm(
    graph: &Graph,
    request: &RunRequest,
    options: &RunOptions,
    cancel: &CancelFlag,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> RunOutcome {
    let mut outcome = RunOutcome {
        stats: RunStats::for_algorithm(request.algorithm),
        ..RunOutcome::default()
    };

    debug!(
        algorithm = %request.algorithm,
        start = request.start,
        seed = request.seed,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "run started"
    );
    let started = emit(
        &sink,
        AppEvent::RunStarted {
            algorithm: request.algorithm,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        },
    )
    .await;
    if !started {
        debug!("event sink closed before the first step");
        outcome.cancelled = true;
    }

    let mut events = engine(graph, request, &options.palette);
    while !outcome.cancelled {
        if cancel.is_cancelled() || options.max_events.is_some_and(|m| outcome.stats.events >= m) {
            outcome.cancelled = true;
            break;
        }

        let Some(ev) = events.next() else {
            break;
        };

        let index = outcome.stats.events;
        let step = AppEvent::Step {
            index,
            event: ev.clone(),
        };
        if !emit(&sink, step).await {
            debug!("event sink closed, stopping run");
            outcome.cancelled = true;
            break;
        }

        // Only delivered events are counted.
        outcome.stats.record(&ev);
        if options.record_events {
            outcome.events.push(ev);
        }

        if !options.step_delay.is_zero() {
            time::sleep(options.step_delay).await;
        }
    }

    if outcome.cancelled {
        info!(
            algorithm = %request.algorithm,
            events = outcome.stats.events,
            "run cancelled"
        );
        emit(
            &sink,
            AppEvent::RunCancelled {
                stats: outcome.stats.clone(),
            },
        )
        .await;
    } else {
        debug!(algorithm = %request.algorithm, events = outcome.stats.events, "run finished");
        emit(
            &sink,
            AppEvent::RunFinished {
                stats: outcome.stats.clone(),
            },
        )
        .await;
    }
    emit(&sink, AppEvent::Reset).await;

    outcome
}

/// Returns false once the receiving side is gone.
async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) -> bool {
    match sink {
        Some(tx) => tx.send(ev).await.is_ok(),
        None => true,
    }
}
