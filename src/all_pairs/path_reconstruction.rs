use tracing::error;

use crate::types::*;
use crate::utils::data_structures::Matrix;

/// walks the next hop matrix from source towards target.
/// returns an empty path if target is unreachable or the matrix is inconsistent
pub fn path_from_next_hops(source: NodeId, target: NodeId, next_hop: &Matrix<Option<NodeId>>) -> NodeIds {
    if source == target {
        return vec![source];
    }

    if next_hop.get(source as usize, target as usize).is_none() {
        return Vec::new();
    }

    let max_steps = next_hop.rows();
    let mut path = vec![source];
    let mut current_node = source;

    while current_node != target {
        if path.len() > max_steps {
            error!(source, target, "next hop chain exceeds the node count");
            return Vec::new();
        }

        match next_hop.get(current_node as usize, target as usize) {
            Some(hop) => {
                current_node = hop;
                path.push(hop);
            },
            None => {
                error!(source, target, current_node, "next hop chain interrupted");
                return Vec::new();
            },
        }
    }

    path
}

/// walks the parent pointers back from target to source and reverses the result.
/// returns an empty path if target has not been reached from source
pub fn path_from_parents(source: NodeId, target: NodeId, parents: &[Option<NodeId>]) -> NodeIds {
    if source == target {
        return vec![source];
    }

    let max_steps = parents.len();
    let mut reversed_path = vec![target];
    let mut current_node = target;

    while current_node != source {
        if reversed_path.len() > max_steps {
            error!(source, target, "parent chain exceeds the node count");
            return Vec::new();
        }

        match parents[current_node as usize] {
            Some(parent) => {
                current_node = parent;
                reversed_path.push(parent);
            },
            None => return Vec::new(), // not reached from source
        }
    }

    reversed_path.reverse();
    reversed_path
}
