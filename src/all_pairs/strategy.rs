use std::fmt;

use tracing::info;

use crate::config::EngineConfig;
use crate::graph_representation::{Graph, GraphStore};
use crate::types::*;

use super::all_pairs_algorithm::AllPairsAlgorithm;
use super::dijkstra::RepeatedDijkstra;
use super::floyd_warshall::FloydWarshall;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Strategy {
    Dense,
    Sparse,
}

impl fmt::Display for Strategy {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dense => write!(f, "floyd-warshall"),
            Strategy::Sparse => write!(f, "repeated dijkstra"),
        }
    }
}

/// dense for graphs with at most `threshold` nodes, sparse otherwise
pub fn select_strategy(node_count: usize, threshold: usize) -> Strategy {
    if node_count <= threshold {
        Strategy::Dense
    }
    else {
        Strategy::Sparse
    }
}

/// applies a forced strategy of the config, falls back to the selector
pub fn choose_strategy(node_count: usize, config: &EngineConfig) -> Strategy {
    config.force_strategy.unwrap_or_else(|| select_strategy(node_count, config.dense_threshold))
}

/// a solved engine, answers distance and path queries with the selected algorithm
pub enum ShortestPathEngine {
    Dense(FloydWarshall),
    Sparse(RepeatedDijkstra),
}

impl ShortestPathEngine {

    pub fn solve(store: &GraphStore, config: &EngineConfig) -> Self {
        let num_nodes = store.num_nodes();
        let strategy = choose_strategy(num_nodes, config);

        match config.force_strategy {
            Some(_) => info!(num_nodes, %strategy, "using forced strategy"),
            None => info!(num_nodes, threshold = config.dense_threshold, %strategy, "selected strategy"),
        }

        match strategy {
            Strategy::Dense => {
                let solver = match store.seed_matrix() {
                    Some(seed_matrix) => FloydWarshall::new(seed_matrix),
                    None => FloydWarshall::new(&store.build_seed_matrix()),
                };

                ShortestPathEngine::Dense(solver)
            },
            Strategy::Sparse => ShortestPathEngine::Sparse(RepeatedDijkstra::new(store, store.interest_nodes())),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            ShortestPathEngine::Dense(_) => Strategy::Dense,
            ShortestPathEngine::Sparse(_) => Strategy::Sparse,
        }
    }
}

impl AllPairsAlgorithm for ShortestPathEngine {

    fn distance(&self, source: NodeId, target: NodeId) -> Distance {
        match self {
            ShortestPathEngine::Dense(solver) => solver.distance(source, target),
            ShortestPathEngine::Sparse(solver) => solver.distance(source, target),
        }
    }

    fn path(&self, source: NodeId, target: NodeId) -> NodeIds {
        match self {
            ShortestPathEngine::Dense(solver) => solver.path(source, target),
            ShortestPathEngine::Sparse(solver) => solver.path(source, target),
        }
    }
}
