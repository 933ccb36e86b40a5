pub mod all_pairs_algorithm;
pub mod all_pairs_utils;

pub mod floyd_warshall;
pub mod dijkstra;
pub mod path_reconstruction;
pub mod strategy;
pub mod result_table;

use crate::config::EngineConfig;
use crate::graph_representation::GraphStore;

use self::result_table::ResultTable;
use self::strategy::ShortestPathEngine;

/// solves the store with the selected algorithm and collects all pairs of interest nodes
pub fn compute_all_pairs(store: &GraphStore, config: &EngineConfig) -> ResultTable {
    let engine = ShortestPathEngine::solve(store, config);

    ResultTable::assemble(&engine, store.interest_nodes(), config.with_paths)
}
