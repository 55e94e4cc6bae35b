use crate::domain::error::GraphError;

/// A directed edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

/// Graph store: dense vertex indices `0..n` and an ordered, directed edge list.
///
/// Every edge endpoint is checked against the vertex count when the edge is
/// added, so adjacency lookups in the engines never go out of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::with_vertices(vertex_count);
        for (start, end) in edges {
            g.add_edge(start, end)?;
        }
        Ok(g)
    }

    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, start: usize, end: usize) -> Result<(), GraphError> {
        if start >= self.vertex_count || end >= self.vertex_count {
            return Err(GraphError::EdgeOutOfRange {
                start,
                end,
                vertex_count: self.vertex_count,
            });
        }
        self.edges.push(Edge::new(start, end));
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Maps a 1-based vertex label to its index, `None` outside `[1, n]`.
    pub fn vertex_index(&self, label: usize) -> Option<usize> {
        (1..=self.vertex_count).contains(&label).then(|| label - 1)
    }

    /// Undirected adjacency in edge insertion order. A self loop is listed once.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertex_count];
        for e in &self.edges {
            adj[e.start].push(e.end);
            if !e.is_self_loop() {
                adj[e.end].push(e.start);
            }
        }
        adj
    }

    pub fn directed_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertex_count];
        for e in &self.edges {
            adj[e.start].push(e.end);
        }
        adj
    }

    /// Adjacency of the transposed graph. Derived, the edge list is not touched.
    pub fn reversed_adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertex_count];
        for e in &self.edges {
            adj[e.end].push(e.start);
        }
        adj
    }

    /// Node power: size of the vertex's undirected adjacency list.
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency().get(vertex).map_or(0, Vec::len)
    }

    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency().iter().map(Vec::len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_endpoint() {
        let err = Graph::new(2, [(0, 1), (1, 2)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::EdgeOutOfRange {
                start: 1,
                end: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn adjacency_is_undirected_and_keeps_insertion_order() {
        let g = Graph::new(4, [(0, 2), (1, 0), (0, 3)]).expect("graph");
        let adj = g.adjacency();
        assert_eq!(adj[0], vec![2, 1, 3]);
        assert_eq!(adj[1], vec![0]);
        assert_eq!(adj[2], vec![0]);
        assert_eq!(adj[3], vec![0]);
    }

    #[test]
    fn directed_and_reversed_adjacency() {
        let g = Graph::new(3, [(0, 1), (1, 2), (2, 1)]).expect("graph");
        assert_eq!(g.directed_adjacency(), vec![vec![1], vec![2], vec![1]]);
        assert_eq!(g.reversed_adjacency(), vec![vec![], vec![0, 2], vec![1]]);
    }

    #[test]
    fn degree_matches_adjacency_size_with_self_loop() {
        let g = Graph::new(3, [(0, 1), (1, 1), (1, 2)]).expect("graph");
        assert_eq!(g.degrees(), vec![1, 3, 1]);
        for v in 0..3 {
            assert_eq!(g.degree(v), g.degrees()[v]);
        }
    }

    #[test]
    fn vertex_index_maps_one_based_labels() {
        let g = Graph::with_vertices(3);
        assert_eq!(g.vertex_index(0), None);
        assert_eq!(g.vertex_index(1), Some(0));
        assert_eq!(g.vertex_index(3), Some(2));
        assert_eq!(g.vertex_index(4), None);
    }

    #[test]
    fn add_edge_checks_both_endpoints() {
        let mut g = Graph::with_vertices(2);
        assert!(g.add_edge(0, 2).is_err());
        assert!(g.add_edge(2, 0).is_err());
        g.add_edge(1, 0).expect("edge");
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn degree_of_unknown_vertex_is_zero() {
        let g = Graph::new(2, [(0, 1), (0, 1)]).expect("graph");
        assert_eq!(g.degree(0), 2);
        assert_eq!(g.degree(5), 0);
    }
}
