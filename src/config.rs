use crate::all_pairs::strategy::Strategy;

pub const DEFAULT_DENSE_THRESHOLD: usize = 500;

/// settings of a single engine run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// graphs with at most this many nodes are solved with the dense algorithm
    pub dense_threshold: usize,
    /// insert edges in one direction only
    pub directed: bool,
    /// reconstruct an explicit path for every reachable pair
    pub with_paths: bool,
    /// bypass the selector, used to cross validate both algorithms
    pub force_strategy: Option<Strategy>,
}

impl Default for EngineConfig {

    fn default() -> Self {
        EngineConfig {
            dense_threshold: DEFAULT_DENSE_THRESHOLD,
            directed: false,
            with_paths: true,
            force_strategy: None,
        }
    }
}

impl EngineConfig {

    pub fn with_dense_threshold(mut self, dense_threshold: usize) -> Self {
        self.dense_threshold = dense_threshold;
        self
    }

    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn with_paths(mut self, with_paths: bool) -> Self {
        self.with_paths = with_paths;
        self
    }

    pub fn with_forced_strategy(mut self, strategy: Strategy) -> Self {
        self.force_strategy = Some(strategy);
        self
    }
}
