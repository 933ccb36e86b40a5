use std::collections::VecDeque;

use crate::types::*;
use crate::graph_representation::Graph;

/// queue entry of the dijkstra search, ordered by distance first
#[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
pub struct DijkstraState {
    pub distance: Weight,
    pub node_id: NodeId,
}

/// breadth first search ignoring weights, returns a reachability flag per node
pub fn reachable_nodes(start: NodeId, graph: &impl Graph) -> Vec<bool> {
    let mut reached = vec![false; graph.num_nodes()];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    reached[start as usize] = true;
    queue.push_back(start);

    while let Some(current_node) = queue.pop_front() {
        for edge_id in graph.edge_ids(current_node) {
            let target_node = graph.target_id(current_node, edge_id);

            if !reached[target_node as usize] {
                reached[target_node as usize] = true;
                queue.push_back(target_node);
            }
        }
    }

    reached
}
