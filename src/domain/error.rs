/// Graph store construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint does not name a vertex of the graph.
    #[error("edge ({start}, {end}) is out of range for a graph with {vertex_count} vertices")]
    EdgeOutOfRange {
        start: usize,
        end: usize,
        vertex_count: usize,
    },
}
