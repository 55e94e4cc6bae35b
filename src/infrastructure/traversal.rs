//! Breadth-first and depth-first traversals as lazy event streams.
//!
//! Both read the edge list as undirected and break ties by neighbor insertion
//! order. Each `next()` advances the traversal by exactly one event, so a
//! consumer can pause between any two of them.

use crate::domain::event::AlgorithmEvent;
use crate::domain::graph::Graph;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Bfs {
    adj: Vec<Vec<usize>>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    /// Dequeued vertex and the position of the next neighbor to scan.
    current: Option<(usize, usize)>,
}

impl Bfs {
    /// `start` is a 1-based label; outside `[1, n]` the stream is empty.
    pub fn new(graph: &Graph, start: usize) -> Self {
        let adj = graph.adjacency();
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();

        if let Some(s) = graph.vertex_index(start) {
            visited[s] = true;
            queue.push_back(s);
        }

        Self {
            adj,
            visited,
            queue,
            current: None,
        }
    }

    pub fn visited(&self) -> &[bool] {
        &self.visited
    }
}

impl Iterator for Bfs {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((v, cursor)) = self.current {
            let neighbors = &self.adj[v];
            for (i, &w) in neighbors.iter().enumerate().skip(cursor) {
                if !self.visited[w] {
                    self.visited[w] = true;
                    self.queue.push_back(w);
                    self.current = Some((v, i + 1));
                    return Some(AlgorithmEvent::discovered(w));
                }
            }
            self.current = None;
            return Some(AlgorithmEvent::settled(v));
        }

        let v = self.queue.pop_front()?;
        self.current = Some((v, 0));
        Some(AlgorithmEvent::entered(v))
    }
}

/// Iterative DFS. The stack top is peeked, not popped, until it has no
/// unvisited neighbor left.
#[derive(Debug, Clone)]
pub struct Dfs {
    adj: Vec<Vec<usize>>,
    visited: Vec<bool>,
    /// (vertex, next neighbor position). Neighbors before the cursor are visited.
    stack: Vec<(usize, usize)>,
}

impl Dfs {
    /// `start` is a 1-based label; outside `[1, n]` the stream is empty.
    pub fn new(graph: &Graph, start: usize) -> Self {
        let adj = graph.adjacency();
        let visited = vec![false; graph.vertex_count()];
        let stack = graph
            .vertex_index(start)
            .map(|s| vec![(s, 0)])
            .unwrap_or_default();

        Self {
            adj,
            visited,
            stack,
        }
    }

    pub fn visited(&self) -> &[bool] {
        &self.visited
    }
}

impl Iterator for Dfs {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let (v, cursor) = *self.stack.last()?;

        if !self.visited[v] {
            self.visited[v] = true;
            return Some(AlgorithmEvent::entered(v));
        }

        let neighbors = &self.adj[v];
        let found = neighbors
            .iter()
            .enumerate()
            .skip(cursor)
            .find(|&(_, &w)| !self.visited[w])
            .map(|(i, &w)| (i, w));

        match found {
            Some((i, w)) => {
                if let Some(top) = self.stack.last_mut() {
                    top.1 = i + 1;
                }
                self.stack.push((w, 0));
                Some(AlgorithmEvent::discovered(w))
            }
            None => {
                self.stack.pop();
                Some(AlgorithmEvent::settled(v))
            }
        }
    }
}
