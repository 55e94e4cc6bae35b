use graph_sandbox::domain::algorithm::{Algorithm, RunRequest};
use graph_sandbox::domain::event::AlgorithmEvent;
use graph_sandbox::domain::graph::Graph;
use graph_sandbox::usecase::event::AppEvent;
use graph_sandbox::usecase::run::{run_algorithm, CancelFlag, RunOptions};
use graph_sandbox::usecase::validate::validate_run;
use std::time::Duration;
use tokio::sync::mpsc;

fn sample_graph() -> Graph {
    // labels 1..4: 1<->2, 2->3, 3<->4
    Graph::new(4, [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).expect("graph")
}

#[tokio::test]
async fn every_algorithm_completes_and_validates() {
    let g = sample_graph();
    let opts = RunOptions {
        record_events: true,
        ..RunOptions::default()
    };

    for algo in Algorithm::ALL {
        let req = RunRequest::new(algo).with_start(2).with_seed(11);
        let out = run_algorithm(&g, &req, &opts, &CancelFlag::new(), None).await;

        assert!(!out.cancelled, "{algo} cancelled");
        validate_run(&g, &req, &out.events).unwrap_or_else(|e| panic!("{algo}: {e:#}"));
    }
}

#[tokio::test]
async fn components_stream_matches_the_documented_scenario() {
    let g = sample_graph();
    let (tx, mut rx) = mpsc::channel::<AppEvent>(1);

    let consumer = tokio::spawn(async move {
        let mut components = Vec::new();
        while let Some(ev) = rx.recv().await {
            if let AppEvent::Step {
                event: AlgorithmEvent::ComponentDiscovered { members, .. },
                ..
            } = ev
            {
                components.push(members);
            }
        }
        components
    });

    let out = run_algorithm(
        &g,
        &RunRequest::new(Algorithm::Components),
        &RunOptions::default(),
        &CancelFlag::new(),
        Some(tx),
    )
    .await;

    let components = consumer.await.expect("join");
    assert_eq!(components, vec![vec![0, 1], vec![2, 3]]);
    assert_eq!(out.stats.components, 2);
    assert_eq!(out.stats.largest_component, 2);
}

#[tokio::test]
async fn consumer_can_cancel_between_events() {
    let g = Graph::new(6, (0..5).map(|v| (v, v + 1))).expect("graph");
    let before = g.edges().to_vec();
    let cancel = CancelFlag::new();
    let (tx, mut rx) = mpsc::channel::<AppEvent>(1);

    let consumer_cancel = cancel.clone();
    let consumer = tokio::spawn(async move {
        let mut steps = 0;
        let mut last = None;
        while let Some(ev) = rx.recv().await {
            match ev {
                AppEvent::Step { .. } => {
                    steps += 1;
                    if steps == 2 {
                        consumer_cancel.cancel();
                    }
                }
                other => last = Some(other),
            }
        }
        (steps, last)
    });

    let out = run_algorithm(
        &g,
        &RunRequest::new(Algorithm::Components),
        &RunOptions {
            step_delay: Duration::from_millis(5),
            ..RunOptions::default()
        },
        &cancel,
        Some(tx),
    )
    .await;

    let (steps, last) = consumer.await.expect("join");
    assert!(out.cancelled);
    assert!(steps < 6, "run kept going after cancel: {steps} steps");
    assert!(matches!(last, Some(AppEvent::Reset)));
    assert_eq!(g.edges(), before.as_slice());
}

#[tokio::test]
async fn lifecycle_events_wrap_the_steps() {
    let g = sample_graph();
    let (tx, mut rx) = mpsc::channel::<AppEvent>(64);

    run_algorithm(
        &g,
        &RunRequest::new(Algorithm::Coloring),
        &RunOptions::default(),
        &CancelFlag::new(),
        Some(tx),
    )
    .await;

    let mut evs = Vec::new();
    while let Some(ev) = rx.recv().await {
        evs.push(ev);
    }

    assert!(matches!(
        evs.first(),
        Some(AppEvent::RunStarted {
            algorithm: Algorithm::Coloring,
            vertices: 4,
            edges: 5
        })
    ));
    assert!(matches!(evs[evs.len() - 2], AppEvent::RunFinished { .. }));
    assert!(matches!(evs.last(), Some(AppEvent::Reset)));
    let steps = evs
        .iter()
        .filter(|e| matches!(e, AppEvent::Step { .. }))
        .count();
    assert_eq!(steps, 4);
}

#[tokio::test]
async fn invalid_start_runs_to_an_empty_finish() {
    let g = sample_graph();
    for start in [0, 5] {
        let out = run_algorithm(
            &g,
            &RunRequest::new(Algorithm::Bfs).with_start(start),
            &RunOptions::default(),
            &CancelFlag::new(),
            None,
        )
        .await;
        assert!(!out.cancelled);
        assert_eq!(out.stats.events, 0);
    }
}
