use crate::domain::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringResult {
    /// Color index per vertex.
    pub colors: Vec<usize>,
    pub colors_used: usize,
}

pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> SccResult;
}

pub trait VertexColorer {
    fn color(&self, graph: &Graph) -> ColoringResult;
}
