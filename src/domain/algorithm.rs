use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SEED: u64 = 0x5EED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Coloring,
    Components,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Coloring,
        Algorithm::Components,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Coloring => "coloring",
            Algorithm::Components => "components",
        }
    }

    pub fn needs_start(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0} (expected bfs, dfs, coloring or components)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "coloring" | "colouring" => Ok(Algorithm::Coloring),
            "components" | "scc" => Ok(Algorithm::Components),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// What to run: the configuration surface handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    pub algorithm: Algorithm,
    /// 1-based start label. Only read by the traversals.
    pub start: usize,
    /// Seeds the palette shuffle and the component colors.
    pub seed: u64,
}

impl RunRequest {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            start: 1,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!("SCC".parse::<Algorithm>(), Ok(Algorithm::Components));
        assert_eq!("colouring".parse::<Algorithm>(), Ok(Algorithm::Coloring));
        assert!("dijkstra".parse::<Algorithm>().is_err());
    }

    #[test]
    fn request_builder_defaults() {
        let req = RunRequest::new(Algorithm::Dfs).with_start(3);
        assert_eq!(req.start, 3);
        assert_eq!(req.seed, DEFAULT_SEED);
        assert!(req.algorithm.needs_start());
        assert!(!Algorithm::Coloring.needs_start());
    }
}
