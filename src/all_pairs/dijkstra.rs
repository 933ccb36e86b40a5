use tracing::debug;

use crate::types::*;
use crate::graph_algorithms::DijkstraState;
use crate::graph_representation::Graph;
use crate::utils::binary_heap::LazyMinHeap;

use super::all_pairs_algorithm::AllPairsAlgorithm;
use super::all_pairs_utils::convert_to_arclist;
use super::path_reconstruction::path_from_parents;

/// distances and parent pointers of a single source search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleSourceResult {
    pub source: NodeId,
    pub distances: Weights,
    pub parents: Vec<Option<NodeId>>,
}

/// single source dijkstra on a first out / arclist graph.
/// stale queue entries are skipped when popped instead of decreasing their key
pub fn single_source(first_out: &[EdgeId], arclist: &Arclist, source: NodeId) -> SingleSourceResult {
    let num_vertices = first_out.len() - 1;

    let mut distances: Weights = vec![INFINITY; num_vertices];
    let mut parents: Vec<Option<NodeId>> = vec![None; num_vertices];
    let mut queue: LazyMinHeap<DijkstraState> = LazyMinHeap::with_capacity(num_vertices);

    distances[source as usize] = 0;
    queue.push(DijkstraState {distance: 0, node_id: source});

    while let Some(DijkstraState {distance: current_distance, node_id: current_node}) = queue.pop() {
        if current_distance != distances[current_node as usize] {
            continue;
        }

        let start = first_out[current_node as usize] as usize;
        let end = first_out[current_node as usize + 1] as usize;

        for (target_node, edge_weight) in &arclist[start..end] {
            let new_distance = match current_distance.checked_add(*edge_weight) {
                Some(new_distance) => new_distance,
                None => continue,
            };

            if new_distance < distances[*target_node as usize] {
                distances[*target_node as usize] = new_distance;
                parents[*target_node as usize] = Some(current_node);

                queue.push(DijkstraState {distance: new_distance, node_id: *target_node});
            }
        }
    }

    SingleSourceResult {
        source,
        distances,
        parents,
    }
}

/// sparse all pairs solver, runs one dijkstra per source node
pub struct RepeatedDijkstra {
    source_indices: Vec<Option<usize>>, // position of each source in results
    results: Vec<SingleSourceResult>,
}

impl RepeatedDijkstra {

    pub fn new(graph: &impl Graph, sources: &[NodeId]) -> Self {
        let (first_out, arclist) = convert_to_arclist(graph);
        let mut source_indices = vec![None; graph.num_nodes()];
        let mut results = Vec::with_capacity(sources.len());

        for (source_index, source) in sources.iter().enumerate() {
            if source_indices[*source as usize].is_some() {
                continue;
            }

            results.push(single_source(&first_out, &arclist, *source));
            source_indices[*source as usize] = Some(results.len() - 1);

            if (source_index + 1) % 10 == 0 {
                debug!("completed dijkstra for {} / {} sources", source_index + 1, sources.len());
            }
        }

        RepeatedDijkstra {
            source_indices,
            results,
        }
    }

    /// the single source result of the given source, None if it was not solved
    pub fn result(&self, source: NodeId) -> Option<&SingleSourceResult> {
        self.source_indices
            .get(source as usize)
            .copied()
            .flatten()
            .map(|index| &self.results[index])
    }
}

impl AllPairsAlgorithm for RepeatedDijkstra {

    fn distance(&self, source: NodeId, target: NodeId) -> Distance {
        match self.result(source).and_then(|result| result.distances.get(target as usize)) {
            Some(distance) => Distance::from_raw(*distance),
            None => Distance::Unreachable,
        }
    }

    fn path(&self, source: NodeId, target: NodeId) -> NodeIds {
        if !self.distance(source, target).is_reachable() {
            return Vec::new();
        }

        match self.result(source) {
            Some(result) => path_from_parents(source, target, &result.parents),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::graph_representation::{GraphStore, InputEdge};

    //  0 --1-- 1 --1-- 3
    //  |               |
    //  --1-- 2 ---1-----
    // edges of node 0 list node 2 first
    fn arclist() -> (Vec<EdgeId>, Vec<(NodeId, Weight)>) {
        let first_out = vec![0, 2, 4, 6, 8, 8];
        let arclist = vec![(2, 1), (1, 1), (0, 1), (3, 1), (0, 1), (3, 1), (2, 1), (1, 1)];
        (first_out, arclist)
    }

    #[test]
    fn single_source_distances_and_parents() {
        let (first_out, arclist) = arclist();
        let result = single_source(&first_out, &arclist, 0);

        assert_eq!(&result.distances[..4], &[0, 1, 1, 2]);
        assert_eq!(result.distances[4], INFINITY);
        assert_eq!(result.parents, vec![None, Some(0), Some(0), Some(1), None]);
    }

    #[test]
    fn ties_keep_first_relaxation() {
        // node 3 is reached with distance 2 via 1 and via 2.
        // 1 and 2 share distance 1, the lower id is settled first and relaxes 3 first
        let (first_out, arclist) = arclist();
        let result = single_source(&first_out, &arclist, 0);

        assert_eq!(path_from_parents(0, 3, &result.parents), vec![0, 1, 3]);

        // from 3 the arclist lists node 2 first, both reach 0 with distance 2
        let result = single_source(&first_out, &arclist, 3);

        assert_eq!(result.distances[0], 2);
        assert_eq!(path_from_parents(3, 0, &result.parents), vec![3, 1, 0]);
    }

    #[test]
    fn out_of_range_queries_are_unreachable() {
        let store = GraphStore::from_roles(3, &[NodeRole::District; 3], &[InputEdge::new(0, 1, 5)], &EngineConfig::default()).unwrap();
        let solver = RepeatedDijkstra::new(&store, store.interest_nodes());

        assert_eq!(solver.distance(0, 1), Distance::Finite(5));
        assert_eq!(solver.distance(0, 3), Distance::Unreachable);
        assert_eq!(solver.distance(3, 0), Distance::Unreachable);
        assert!(solver.path(0, 3).is_empty());
    }
}
