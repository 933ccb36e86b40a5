use all_pairs_paths::all_pairs::all_pairs_algorithm::AllPairsAlgorithm;
use all_pairs_paths::all_pairs::compute_all_pairs;
use all_pairs_paths::all_pairs::strategy::{ShortestPathEngine, Strategy};
use all_pairs_paths::config::EngineConfig;
use all_pairs_paths::graph_representation::{GraphStore, InputEdge};
use all_pairs_paths::types::*;

//  0 --2-- 1 --3-- 2 --1-- 3      4
fn get_line_graph() -> Vec<InputEdge> {
    vec![InputEdge::new(0, 1, 2), InputEdge::new(1, 2, 3), InputEdge::new(2, 3, 1)]
}

fn roles_with_interest(node_count: usize, interest: &[NodeId]) -> Vec<NodeRole> {
    (0..node_count as NodeId)
        .map(|node| if interest.contains(&node) { NodeRole::District } else { NodeRole::Other })
        .collect()
}

fn solve(node_count: usize, edges: &[InputEdge], interest: &[NodeId], config: &EngineConfig) -> (GraphStore, ShortestPathEngine) {
    let store = GraphStore::from_roles(node_count, &roles_with_interest(node_count, interest), edges, config).unwrap();
    let engine = ShortestPathEngine::solve(&store, config);

    (store, engine)
}

#[test]
fn test_line_graph_both_strategies() {
    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (store, engine) = solve(4, &get_line_graph(), &[0, 3], &config);

        assert_eq!(engine.strategy(), strategy);
        assert_eq!(engine.distance(0, 3), Distance::Finite(6));
        assert_eq!(engine.path(0, 3), vec![0, 1, 2, 3]);
        assert_eq!(engine.distance(3, 0), Distance::Finite(6));
        assert_eq!(engine.path(3, 0), vec![3, 2, 1, 0]);

        let table = compute_all_pairs(&store, &config);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0, 3).unwrap().path, vec![0, 1, 2, 3]);
        assert_eq!(table.distance(0, 0), Some(Distance::Finite(0)));
        assert_eq!(table.get(3, 3).unwrap().path, vec![3]);
    }
}

#[test]
fn test_isolated_node_is_unreachable() {
    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (store, _) = solve(5, &get_line_graph(), &[0, 4], &config);
        let table = compute_all_pairs(&store, &config);

        let pair = table.get(0, 4).unwrap();
        assert_eq!(pair.distance, Distance::Unreachable);
        assert!(pair.path.is_empty());
        assert_eq!(table.distance(4, 0), Some(Distance::Unreachable));
        assert_eq!(table.get(4, 4).unwrap().path, vec![4]);
        assert_eq!(table.distance(4, 4), Some(Distance::Finite(0)));
    }
}

#[test]
fn test_threshold_selects_strategy_with_identical_distances() {
    let interest = [0, 1, 3, 4];

    let sparse_config = EngineConfig::default().with_dense_threshold(3);
    let (sparse_store, _) = solve(5, &get_line_graph(), &interest, &sparse_config);
    let sparse_table = compute_all_pairs(&sparse_store, &sparse_config);

    let dense_config = EngineConfig::default().with_dense_threshold(10);
    let (dense_store, _) = solve(5, &get_line_graph(), &interest, &dense_config);
    let dense_table = compute_all_pairs(&dense_store, &dense_config);

    assert_eq!(sparse_table.strategy(), Strategy::Sparse);
    assert_eq!(dense_table.strategy(), Strategy::Dense);
    assert!(sparse_store.seed_matrix().is_none());
    assert!(dense_store.seed_matrix().is_some());

    for (sparse_pair, dense_pair) in sparse_table.pairs().iter().zip(dense_table.pairs()) {
        assert_eq!((sparse_pair.source, sparse_pair.target), (dense_pair.source, dense_pair.target));
        assert_eq!(sparse_pair.distance, dense_pair.distance);
    }
}

#[test]
fn test_pairs_are_source_major_and_include_self_pairs() {
    let config = EngineConfig::default();
    let (store, _) = solve(4, &get_line_graph(), &[1, 2, 3], &config);
    let table = compute_all_pairs(&store, &config);

    let order: Vec<(NodeId, NodeId)> = table.pairs().iter().map(|pair| (pair.source, pair.target)).collect();
    assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    assert!(table.get(0, 1).is_none());
}

#[test]
fn test_paths_can_be_disabled() {
    let config = EngineConfig::default().with_paths(false);
    let (store, _) = solve(4, &get_line_graph(), &[0, 3], &config);
    let table = compute_all_pairs(&store, &config);

    assert_eq!(table.distance(0, 3), Some(Distance::Finite(6)));
    assert!(table.pairs().iter().all(|pair| pair.path.is_empty()));
}

#[test]
fn test_parallel_edges_use_minimum_weight() {
    let edges = vec![InputEdge::new(0, 1, 7), InputEdge::new(0, 1, 2), InputEdge::new(1, 0, 5)];

    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (_, engine) = solve(2, &edges, &[0, 1], &config);

        assert_eq!(engine.distance(0, 1), Distance::Finite(2));
        assert_eq!(engine.path(1, 0), vec![1, 0]);
    }
}

#[test]
fn test_directed_edges() {
    // 0 -> 1 -> 2, 2 -> 0 with weight 10
    let edges = vec![InputEdge::new(0, 1, 1), InputEdge::new(1, 2, 1), InputEdge::new(2, 0, 10)];

    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_directed(true).with_forced_strategy(strategy);
        let (_, engine) = solve(3, &edges, &[0, 1, 2], &config);

        assert_eq!(engine.distance(0, 2), Distance::Finite(2));
        assert_eq!(engine.distance(2, 1), Distance::Finite(11));
        assert_eq!(engine.path(2, 1), vec![2, 0, 1]);
        assert_eq!(engine.distance(1, 0), Distance::Finite(11));
    }
}

#[test]
fn test_zero_weight_edges() {
    let edges = vec![InputEdge::new(0, 1, 0), InputEdge::new(1, 2, 0), InputEdge::new(0, 2, 0), InputEdge::new(2, 3, 4)];

    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (_, engine) = solve(4, &edges, &[0, 3], &config);

        assert_eq!(engine.distance(0, 3), Distance::Finite(4));
        assert_eq!(engine.path(0, 3), vec![0, 2, 3]);
    }
}

#[test]
fn test_malformed_edges_do_not_abort() {
    let mut edges = get_line_graph();
    edges.push(InputEdge::new(0, 9, 1));
    edges.push(InputEdge::new(0, 3, -1));

    let config = EngineConfig::default();
    let (store, engine) = solve(4, &edges, &[0, 3], &config);

    assert_eq!(store.skipped_edges(), 2);
    assert_eq!(engine.distance(0, 3), Distance::Finite(6));
}

#[test]
fn test_sparse_engine_only_answers_for_interest_sources() {
    let config = EngineConfig::default().with_forced_strategy(Strategy::Sparse);
    let (_, engine) = solve(4, &get_line_graph(), &[0, 3], &config);

    // node 1 has not been used as a source
    assert_eq!(engine.distance(1, 0), Distance::Unreachable);
    assert!(engine.path(1, 0).is_empty());
    assert_eq!(engine.distance(0, 1), Distance::Finite(2));
}

#[test]
fn test_empty_graph() {
    let config = EngineConfig::default();
    let (store, _) = solve(0, &[], &[], &config);
    let table = compute_all_pairs(&store, &config);

    assert!(table.is_empty());
}

//       ┌─┐
//  ┌─1──┤0├──1─┐
//  │    └─┘    │
// ┌┴┐         ┌┴┐
// │2│         │1│
// └┬┘         └┬┘
//  │    ┌─┐    │
//  └─1──┤3├──1─┘
//       └─┘
// the edge 0-2 is inserted first, both routes between 0 and 3 cost 2
fn get_square_graph() -> Vec<InputEdge> {
    vec![InputEdge::new(0, 2, 1), InputEdge::new(0, 1, 1), InputEdge::new(1, 3, 1), InputEdge::new(2, 3, 1)]
}

#[test]
fn test_ties_prefer_lower_node_ids() {
    // dense: the lowest intermediate k improving the pair wins.
    // sparse: equal distances are settled in node id order and the first relaxation wins
    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (_, engine) = solve(4, &get_square_graph(), &[0, 1, 2, 3], &config);

        assert_eq!(engine.distance(0, 3), Distance::Finite(2));
        assert_eq!(engine.path(0, 3), vec![0, 1, 3]);
        assert_eq!(engine.path(3, 0), vec![3, 1, 0]);
        assert_eq!(engine.distance(1, 2), Distance::Finite(2));
        assert_eq!(engine.path(1, 2), vec![1, 0, 2]);
        assert_eq!(engine.path(2, 1), vec![2, 0, 1]);
    }
}

#[test]
fn test_largest_accepted_weights_stay_reachable() {
    let max_weight = (UNREACHABLE_GUARD / 3 - 1) as InputWeight;
    let edges = vec![InputEdge::new(0, 1, max_weight), InputEdge::new(1, 2, max_weight)];

    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (store, engine) = solve(3, &edges, &[0, 2], &config);

        assert_eq!(store.skipped_edges(), 0);
        assert_eq!(engine.distance(0, 2), Distance::Finite(2 * max_weight as Weight));
        assert_eq!(engine.path(0, 2), vec![0, 1, 2]);
    }
}

#[test]
fn test_out_of_range_queries_are_unreachable() {
    let edges = vec![InputEdge::new(0, 1, 5)];

    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let config = EngineConfig::default().with_forced_strategy(strategy);
        let (_, engine) = solve(3, &edges, &[0, 1, 2], &config);

        assert_eq!(engine.distance(0, 1), Distance::Finite(5));
        assert_eq!(engine.distance(0, 3), Distance::Unreachable);
        assert!(engine.path(0, 3).is_empty());
    }
}
