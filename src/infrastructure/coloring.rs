//! Degree-ordered greedy coloring (Welsh–Powell style).
//!
//! A vertex may only reuse a color that some vertex already holds; when every
//! used color clashes with a neighbor, a fresh index is taken from the
//! counter. Adjacent vertices never share an index either way.

use crate::domain::event::AlgorithmEvent;
use crate::domain::graph::Graph;
use crate::domain::palette::Palette;
use crate::domain::traits::{ColoringResult, VertexColorer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct GreedyColoring {
    adj: Vec<Vec<usize>>,
    order: Vec<usize>,
    position: usize,
    colors: Vec<Option<usize>>,
    used: BTreeSet<usize>,
    next_color: usize,
    palette: Palette,
}

impl GreedyColoring {
    /// The palette is shuffled once with a generator seeded from `seed`; it
    /// only decides which swatch each color index is shown with.
    pub fn new(graph: &Graph, palette: &Palette, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let degrees = graph.degrees();

        let mut order: Vec<usize> = (0..graph.vertex_count()).collect();
        order.sort_by_key(|&v| Reverse(degrees[v]));

        Self {
            adj: graph.adjacency(),
            order,
            position: 0,
            colors: vec![None; graph.vertex_count()],
            used: BTreeSet::new(),
            next_color: 0,
            palette: palette.shuffled(&mut rng),
        }
    }

    /// Vertices in assignment order: descending degree, ties by index.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn colors(&self) -> &[Option<usize>] {
        &self.colors
    }

    pub fn colors_used(&self) -> usize {
        self.used.len()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn pick_color(&mut self, vertex: usize) -> usize {
        let adjacent: BTreeSet<usize> = self.adj[vertex]
            .iter()
            .filter_map(|&w| self.colors[w])
            .collect();

        match self.used.difference(&adjacent).next() {
            Some(&c) => c,
            None => {
                let c = self.next_color;
                self.next_color += 1;
                c
            }
        }
    }
}

impl Iterator for GreedyColoring {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = *self.order.get(self.position)?;
        self.position += 1;

        let color = self.pick_color(vertex);
        self.colors[vertex] = Some(color);
        self.used.insert(color);

        Some(AlgorithmEvent::Colored {
            vertex,
            color,
            swatch: self.palette.swatch(color),
        })
    }
}

/// Runs [`GreedyColoring`] to completion.
#[derive(Debug, Clone, Default)]
pub struct GreedyVertexColorer {
    pub palette: Palette,
    pub seed: u64,
}

impl VertexColorer for GreedyVertexColorer {
    fn color(&self, graph: &Graph) -> ColoringResult {
        let mut run = GreedyColoring::new(graph, &self.palette, self.seed);
        run.by_ref().for_each(drop);

        ColoringResult {
            colors: run.colors().iter().map(|c| c.unwrap_or_default()).collect(),
            colors_used: run.colors_used(),
        }
    }
}
