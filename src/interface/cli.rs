use crate::domain::algorithm::{Algorithm, RunRequest, DEFAULT_SEED};
use crate::domain::graph::Graph;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::usecase::event::AppEvent;
use crate::usecase::run::{run_algorithm, CancelFlag, RunOptions};
use crate::usecase::validate::validate_run;
use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Algorithms => {
            for algo in Algorithm::ALL {
                let start = if algo.needs_start() { " (uses --start)" } else { "" };
                println!("{algo}{start}");
            }
            Ok(())
        }

        Cli::Run(opts) => {
            setup_logging(opts.verbose, opts.quiet);

            let graph = build_graph(opts.vertices, &opts.edges)?;
            let request = RunRequest::new(opts.algorithm)
                .with_start(opts.start)
                .with_seed(opts.seed);
            let run_opts = RunOptions {
                step_delay: Duration::from_millis(opts.delay_ms),
                max_events: opts.max_events,
                record_events: opts.verify,
                ..RunOptions::default()
            };

            // Capacity 1: the engine stays at most one event ahead of the printer.
            let (tx, rx) = mpsc::channel::<AppEvent>(1);
            let (sink, printer) = if opts.emit_events {
                (Some(tx), Some(spawn_ndjson_printer(rx)))
            } else {
                drop(rx);
                drop(tx);
                (None, None)
            };

            let outcome = run_algorithm(&graph, &request, &run_opts, &CancelFlag::new(), sink).await;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            let stats = &outcome.stats;
            eprintln!(
                "summary: algorithm={} events={} entered={} settled={} colored={} colors_used={} components={} cancelled={}",
                opts.algorithm,
                stats.events,
                stats.vertices_entered,
                stats.vertices_settled,
                stats.vertices_colored,
                stats.colors_used,
                stats.components,
                outcome.cancelled
            );

            if opts.verify {
                if outcome.cancelled {
                    eprintln!("verify skipped: run stopped early");
                } else {
                    validate_run(&graph, &request, &outcome.events)
                        .with_context(|| format!("verifying {} run", opts.algorithm))?;
                    eprintln!("ok: invariants validated");
                }
            }

            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunArgs {
    algorithm: Algorithm,
    vertices: usize,
    /// 1-based labels, as typed.
    edges: Vec<(usize, usize)>,
    start: usize,
    seed: u64,
    delay_ms: u64,
    max_events: Option<usize>,
    emit_events: bool,
    verify: bool,
    verbose: bool,
    quiet: bool,
}

#[derive(Debug)]
enum Cli {
    Run(RunArgs),
    Algorithms,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> run --algorithm <name> --vertices <n> [--edge <a>:<b>]... [options]
        // <bin> algorithms
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "run" => Self::parse_run(args),
            "algorithms" => Ok(Cli::Algorithms),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_run(args: &[String]) -> Result<Self> {
        let mut algorithm: Option<Algorithm> = None;
        let mut vertices: Option<usize> = None;
        let mut edges = Vec::new();
        let mut start = 1;
        let mut seed = DEFAULT_SEED;
        let mut delay_ms = 0;
        let mut max_events = None;
        let mut emit_events = false;
        let mut verify = false;
        let mut verbose = false;
        let mut quiet = false;

        let mut i = 2;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--algorithm" | "-a" => {
                    i += 1;
                    algorithm = Some(value(args, i, flag)?.parse()?);
                }
                "--vertices" | "-n" => {
                    i += 1;
                    vertices = Some(number(args, i, flag)?);
                }
                "--edge" | "-e" => {
                    i += 1;
                    edges.push(parse_edge(value(args, i, flag)?)?);
                }
                "--start" | "-s" => {
                    i += 1;
                    start = number(args, i, flag)?;
                }
                "--seed" => {
                    i += 1;
                    seed = number(args, i, flag)?;
                }
                "--delay-ms" => {
                    i += 1;
                    delay_ms = number(args, i, flag)?;
                }
                "--max-events" => {
                    i += 1;
                    max_events = Some(number(args, i, flag)?);
                }
                "--emit-events" => emit_events = true,
                "--verify" => verify = true,
                "-v" | "--verbose" => verbose = true,
                "-q" | "--quiet" => quiet = true,
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let algorithm =
            algorithm.ok_or_else(|| anyhow!(format!("missing --algorithm\n\n{}", usage())))?;
        let vertices =
            vertices.ok_or_else(|| anyhow!(format!("missing --vertices\n\n{}", usage())))?;

        Ok(Cli::Run(RunArgs {
            algorithm,
            vertices,
            edges,
            start,
            seed,
            delay_ms,
            max_events,
            emit_events,
            verify,
            verbose,
            quiet,
        }))
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| anyhow!("invalid number for {flag}: {raw}"))
}

/// `a:b` with 1-based labels.
fn parse_edge(raw: &str) -> Result<(usize, usize)> {
    let (a, b) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("edge must look like <from>:<to>, got {raw}"))?;
    let a: usize = a.trim().parse().with_context(|| format!("edge start in {raw}"))?;
    let b: usize = b.trim().parse().with_context(|| format!("edge end in {raw}"))?;
    Ok((a, b))
}

fn build_graph(vertices: usize, edges: &[(usize, usize)]) -> Result<Graph> {
    let mut graph = Graph::with_vertices(vertices);
    for &(a, b) in edges {
        let (Some(start), Some(end)) = (graph.vertex_index(a), graph.vertex_index(b)) else {
            return Err(anyhow!(
                "edge {a}:{b} references a vertex outside 1..={vertices}"
            ));
        };
        graph.add_edge(start, end)?;
    }
    Ok(graph)
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    // A second run in the same process keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn usage() -> &'static str {
    "Usage:\n  graph-sandbox run --algorithm <bfs|dfs|coloring|components> --vertices <n> [--edge <a>:<b>]... [--start <label>] [--seed <u64>] [--delay-ms <ms>] [--max-events <k>] [--emit-events] [--verify] [-v|--verbose] [-q|--quiet]\n  graph-sandbox algorithms\n\nVertices are labelled 1..=n on the command line.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nStart:\n  A --start label outside 1..=n makes bfs/dfs emit no steps."
}
