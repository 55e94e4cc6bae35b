use crate::domain::algorithm::DEFAULT_SEED;
use crate::domain::event::AlgorithmEvent;
use crate::domain::graph::Graph;
use crate::domain::palette::Rgb;
use crate::domain::traits::{SccDetector, SccResult};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const UNASSIGNED: usize = usize::MAX;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &Graph) -> SccResult {
    let mut run = KosarajuComponents::new(graph, DEFAULT_SEED);
    let mut components: Vec<Vec<usize>> = Vec::new();

    for ev in run.by_ref() {
        if let AlgorithmEvent::ComponentDiscovered { mut members, .. } = ev {
            members.sort_unstable();
            components.push(members);
        }
    }

    let mut self_loop = vec![false; graph.vertex_count()];
    for e in graph.edges().iter().filter(|e| e.is_self_loop()) {
        self_loop[e.start] = true;
    }

    let cyclic_component = components
        .iter()
        .map(|comp| comp.len() > 1 || self_loop[comp[0]])
        .collect();

    SccResult {
        component_of: run.component_of().to_vec(),
        components,
        cyclic_component,
    }
}

/// Kosaraju decomposition yielding one `ComponentDiscovered` per `next()`.
///
/// The finishing order is computed up front; each component is collected on
/// demand by a DFS over the reversed adjacency. The graph is only borrowed,
/// so dropping the iterator half way leaves it exactly as it was.
#[derive(Debug, Clone)]
pub struct KosarajuComponents<'g> {
    graph: &'g Graph,
    rev: Vec<Vec<usize>>,
    out_edges: Vec<Vec<usize>>,
    order: Vec<usize>,
    cursor: usize,
    component_of: Vec<usize>,
    found: usize,
    rng: ChaCha8Rng,
}

impl<'g> KosarajuComponents<'g> {
    pub fn new(graph: &'g Graph, seed: u64) -> Self {
        let n = graph.vertex_count();
        let mut out_edges = vec![Vec::new(); n];
        for (i, e) in graph.edges().iter().enumerate() {
            out_edges[e.start].push(i);
        }
        Self {
            graph,
            rev: graph.reversed_adjacency(),
            out_edges,
            order: finishing_order(&graph.directed_adjacency()),
            cursor: 0,
            component_of: vec![UNASSIGNED; n],
            found: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Reverse finishing order of the first pass.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Component id per vertex, `usize::MAX` for vertices not reached yet.
    pub fn component_of(&self) -> &[usize] {
        &self.component_of
    }

    fn collect_component(&mut self, seed: usize) -> Vec<usize> {
        let cid = self.found;
        self.component_of[seed] = cid;
        let mut members = vec![seed];
        let mut stack: Vec<(usize, usize)> = vec![(seed, 0)];

        while let Some((v, next_i)) = stack.pop() {
            if let Some(&p) = self.rev[v].get(next_i) {
                stack.push((v, next_i + 1));
                if self.component_of[p] == UNASSIGNED {
                    self.component_of[p] = cid;
                    members.push(p);
                    stack.push((p, 0));
                }
            }
        }

        members
    }

    /// Indices of edges between two distinct members, ascending. Self loops
    /// keep the passive edge color, so they are left out.
    fn internal_edges(&self, members: &[usize], cid: usize) -> Vec<usize> {
        let edges = self.graph.edges();
        let mut internal: Vec<usize> = members
            .iter()
            .flat_map(|&v| &self.out_edges[v])
            .copied()
            .filter(|&i| {
                let e = edges[i];
                !e.is_self_loop() && self.component_of[e.end] == cid
            })
            .collect();
        internal.sort_unstable();
        internal
    }
}

impl Iterator for KosarajuComponents<'_> {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&seed) = self.order.get(self.cursor) {
            self.cursor += 1;
            if self.component_of[seed] != UNASSIGNED {
                continue;
            }

            let members = self.collect_component(seed);
            let component = self.found;
            self.found += 1;

            return Some(AlgorithmEvent::ComponentDiscovered {
                component,
                edges: self.internal_edges(&members, component),
                members,
                color: Rgb::random(&mut self.rng),
            });
        }
        None
    }
}

/// Post-order DFS over every vertex, outer loop `0..n`. Each finished vertex
/// is written back to front, so the result starts with the last to finish.
fn finishing_order(edges: &[Vec<usize>]) -> Vec<usize> {
    let n = edges.len();
    let mut answer = vec![0; n];
    let mut remaining = n;
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some((v, next_i)) = stack.pop() {
            if let Some(&to) = edges[v].get(next_i) {
                stack.push((v, next_i + 1));
                if !seen[to] {
                    seen[to] = true;
                    stack.push((to, 0));
                }
                continue;
            }

            remaining -= 1;
            answer[remaining] = v;
        }
    }

    answer
}
