use crate::domain::algorithm::{Algorithm, RunRequest};
use crate::domain::event::{AlgorithmEvent, VisitPhase};
use crate::domain::graph::Graph;
use anyhow::{anyhow, Result};
use std::collections::{BTreeSet, VecDeque};

/// Checks a complete (not cancelled) event stream against the invariants of
/// the algorithm that produced it.
pub fn validate_run(graph: &Graph, request: &RunRequest, events: &[AlgorithmEvent]) -> Result<()> {
    match request.algorithm {
        Algorithm::Bfs => validate_bfs(graph, request.start, events),
        Algorithm::Dfs => validate_dfs(graph, request.start, events),
        Algorithm::Coloring => validate_coloring(graph, events),
        Algorithm::Components => validate_components(graph, events),
    }
}

pub fn validate_bfs(graph: &Graph, start: usize, events: &[AlgorithmEvent]) -> Result<()> {
    let order = entered_once(graph, start, events)?;
    let Some(s) = graph.vertex_index(start) else {
        return Ok(());
    };

    let dist = distances(graph, s);
    for pair in order.windows(2) {
        if dist[pair[0]] > dist[pair[1]] {
            return Err(anyhow!(
                "bfs entered {} (distance {:?}) before {} (distance {:?})",
                pair[0],
                dist[pair[0]],
                pair[1],
                dist[pair[1]]
            ));
        }
    }
    Ok(())
}

pub fn validate_dfs(graph: &Graph, start: usize, events: &[AlgorithmEvent]) -> Result<()> {
    entered_once(graph, start, events)?;
    let adj = graph.adjacency();

    // Entered pushes onto the open path, Settled must close its top.
    let mut path: Vec<usize> = Vec::new();
    for ev in events {
        let AlgorithmEvent::Visit { vertex, phase } = *ev else {
            return Err(anyhow!("unexpected {} event in a traversal", ev.kind()));
        };
        match phase {
            VisitPhase::Entered => {
                if let Some(&parent) = path.last() {
                    if !adj[parent].contains(&vertex) {
                        return Err(anyhow!("dfs entered {vertex} which is not adjacent to {parent}"));
                    }
                }
                path.push(vertex);
            }
            VisitPhase::Settled => {
                if path.pop() != Some(vertex) {
                    return Err(anyhow!("dfs settled {vertex} out of order"));
                }
            }
            VisitPhase::Discovered => {}
        }
    }

    if !path.is_empty() {
        return Err(anyhow!("dfs left {} vertices unsettled", path.len()));
    }
    Ok(())
}

pub fn validate_coloring(graph: &Graph, events: &[AlgorithmEvent]) -> Result<()> {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<usize>> = vec![None; n];

    for ev in events {
        let AlgorithmEvent::Colored { vertex, color, .. } = *ev else {
            return Err(anyhow!("unexpected {} event in a coloring", ev.kind()));
        };
        if colors[vertex].replace(color).is_some() {
            return Err(anyhow!("vertex {vertex} colored twice"));
        }
    }

    let mut used = BTreeSet::new();
    for (v, c) in colors.iter().enumerate() {
        let c = c.ok_or_else(|| anyhow!("vertex {v} left uncolored"))?;
        used.insert(c);
    }

    for e in graph.edges() {
        if !e.is_self_loop() && colors[e.start] == colors[e.end] {
            return Err(anyhow!(
                "adjacent vertices {} and {} share color {:?}",
                e.start,
                e.end,
                colors[e.start]
            ));
        }
    }

    if n > 0 && !(1..=n).contains(&used.len()) {
        return Err(anyhow!("{} colors used for {n} vertices", used.len()));
    }
    Ok(())
}

pub fn validate_components(graph: &Graph, events: &[AlgorithmEvent]) -> Result<()> {
    let n = graph.vertex_count();
    let mut owner: Vec<Option<usize>> = vec![None; n];
    let mut components: Vec<&[usize]> = Vec::new();

    for ev in events {
        let AlgorithmEvent::ComponentDiscovered {
            component, members, ..
        } = ev
        else {
            return Err(anyhow!("unexpected {} event in a decomposition", ev.kind()));
        };
        for &m in members {
            if let Some(prev) = owner[m].replace(*component) {
                return Err(anyhow!("vertex {m} in components {prev} and {component}"));
            }
        }
        components.push(members);
    }

    if let Some(v) = owner.iter().position(Option::is_none) {
        return Err(anyhow!("vertex {v} belongs to no component"));
    }

    let reach: Vec<Vec<bool>> = (0..n).map(|v| reachable(graph, v)).collect();

    for (cid, members) in components.iter().enumerate() {
        for &a in members.iter() {
            for &b in members.iter() {
                if !reach[a][b] {
                    return Err(anyhow!("component {cid}: {b} is not reachable from {a}"));
                }
            }
        }
    }

    // Maximality: representatives of two components never reach each other.
    for (i, a) in components.iter().enumerate() {
        for b in components.iter().skip(i + 1) {
            if reach[a[0]][b[0]] && reach[b[0]][a[0]] {
                return Err(anyhow!(
                    "components of {} and {} are mutually reachable",
                    a[0],
                    b[0]
                ));
            }
        }
    }
    Ok(())
}

/// Entered order of a traversal; errors on repeats or on a mismatch with the
/// set of vertices reachable from `start`.
fn entered_once(graph: &Graph, start: usize, events: &[AlgorithmEvent]) -> Result<Vec<usize>> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut order = Vec::new();

    for ev in events {
        if let AlgorithmEvent::Visit {
            vertex,
            phase: VisitPhase::Entered,
        } = *ev
        {
            if std::mem::replace(&mut seen[vertex], true) {
                return Err(anyhow!("vertex {vertex} entered twice"));
            }
            order.push(vertex);
        }
    }

    let expected: Vec<bool> = match graph.vertex_index(start) {
        Some(s) => distances(graph, s).iter().map(Option::is_some).collect(),
        None => vec![false; graph.vertex_count()],
    };
    if let Some(v) = (0..seen.len()).find(|&v| seen[v] != expected[v]) {
        return Err(anyhow!(
            "vertex {v}: entered={} but reachable={}",
            seen[v],
            expected[v]
        ));
    }
    Ok(order)
}

/// Undirected hop distance from `s`.
fn distances(graph: &Graph, s: usize) -> Vec<Option<usize>> {
    let adj = graph.adjacency();
    let mut dist = vec![None; graph.vertex_count()];
    let mut q = VecDeque::new();
    dist[s] = Some(0);
    q.push_back(s);

    while let Some(u) = q.pop_front() {
        let du = dist[u].unwrap_or_default();
        for &w in &adj[u] {
            if dist[w].is_none() {
                dist[w] = Some(du + 1);
                q.push_back(w);
            }
        }
    }
    dist
}

/// Directed reachability from `s`, including `s` itself.
fn reachable(graph: &Graph, s: usize) -> Vec<bool> {
    let adj = graph.directed_adjacency();
    let mut seen = vec![false; graph.vertex_count()];
    let mut stack = vec![s];
    seen[s] = true;

    while let Some(u) = stack.pop() {
        for &w in &adj[u] {
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::Rgb;

    fn colored(vertex: usize, color: usize) -> AlgorithmEvent {
        AlgorithmEvent::Colored {
            vertex,
            color,
            swatch: None,
        }
    }

    fn component(component: usize, members: Vec<usize>) -> AlgorithmEvent {
        AlgorithmEvent::ComponentDiscovered {
            component,
            members,
            edges: vec![],
            color: Rgb::new(1, 2, 3),
        }
    }

    #[test]
    fn coloring_rejects_clash_on_an_edge() {
        let g = Graph::new(2, [(0, 1)]).expect("graph");
        let err = validate_coloring(&g, &[colored(0, 0), colored(1, 0)]).unwrap_err();
        assert!(err.to_string().contains("share color"));
        validate_coloring(&g, &[colored(0, 0), colored(1, 1)]).expect("proper coloring");
    }

    #[test]
    fn coloring_rejects_missing_vertex() {
        let g = Graph::with_vertices(2);
        let err = validate_coloring(&g, &[colored(0, 0)]).unwrap_err();
        assert!(err.to_string().contains("uncolored"));
    }

    #[test]
    fn components_reject_overlap_and_non_maximal_split() {
        let g = Graph::new(2, [(0, 1), (1, 0)]).expect("graph");

        let err = validate_components(&g, &[component(0, vec![0, 1]), component(1, vec![1])])
            .unwrap_err();
        assert!(err.to_string().contains("in components"));

        let err = validate_components(&g, &[component(0, vec![0]), component(1, vec![1])])
            .unwrap_err();
        assert!(err.to_string().contains("mutually reachable"));

        validate_components(&g, &[component(0, vec![0, 1])]).expect("valid partition");
    }

    #[test]
    fn bfs_rejects_out_of_layer_order() {
        // path 0 - 1 - 2
        let g = Graph::new(3, [(0, 1), (1, 2)]).expect("graph");
        let events = vec![
            AlgorithmEvent::entered(0),
            AlgorithmEvent::entered(2),
            AlgorithmEvent::entered(1),
        ];
        let err = validate_bfs(&g, 1, &events).unwrap_err();
        assert!(err.to_string().contains("before"));
    }

    #[test]
    fn dfs_rejects_jump_to_non_neighbor() {
        // 0 - 1, 0 - 2
        let g = Graph::new(3, [(0, 1), (0, 2)]).expect("graph");
        let events = vec![
            AlgorithmEvent::entered(0),
            AlgorithmEvent::entered(1),
            AlgorithmEvent::entered(2),
            AlgorithmEvent::settled(2),
            AlgorithmEvent::settled(1),
            AlgorithmEvent::settled(0),
        ];
        let err = validate_dfs(&g, 1, &events).unwrap_err();
        assert!(err.to_string().contains("not adjacent"));
    }

    #[test]
    fn traversal_rejects_missed_reachable_vertex() {
        let g = Graph::new(2, [(0, 1)]).expect("graph");
        let events = vec![AlgorithmEvent::entered(0), AlgorithmEvent::settled(0)];
        let err = validate_bfs(&g, 1, &events).unwrap_err();
        assert!(err.to_string().contains("reachable=true"));
    }
}
