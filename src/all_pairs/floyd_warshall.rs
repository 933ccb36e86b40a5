use tracing::debug;

use crate::types::*;
use crate::utils::data_structures::Matrix;

use super::all_pairs_algorithm::AllPairsAlgorithm;
use super::path_reconstruction::path_from_next_hops;

/// dense all pairs solver, relaxes every pair over every intermediate node
pub struct FloydWarshall {
    distances: Matrix<Weight>,
    next_hop: Matrix<Option<NodeId>>,
}

impl FloydWarshall {

    /// solves all pairs on a copy of the given seed matrix
    pub fn new(seed_matrix: &Matrix<Weight>) -> Self {
        let mut solver = FloydWarshall {
            distances: seed_matrix.clone(),
            next_hop: Matrix::new(seed_matrix.rows(), seed_matrix.cols(), None),
        };

        solver.calculate_distances();
        solver
    }

    fn calculate_distances(&mut self) {
        let num_nodes = self.distances.rows();

        for source in 0..num_nodes {
            for target in 0..num_nodes {
                if is_reachable(self.distances.get(source, target)) {
                    self.next_hop.set(source, target, Some(target as NodeId));
                }
            }
        }

        // k has to stay the outermost loop
        for intermediate in 0..num_nodes {
            for source in 0..num_nodes {
                let to_intermediate = self.distances.get(source, intermediate);

                if !is_reachable(to_intermediate) {
                    continue;
                }

                let first_hop = self.next_hop.get(source, intermediate);

                for target in 0..num_nodes {
                    let from_intermediate = self.distances.get(intermediate, target);

                    if !is_reachable(from_intermediate) {
                        continue;
                    }

                    if let Some(new_distance) = to_intermediate.checked_add(from_intermediate) {
                        if new_distance < self.distances.get(source, target) {
                            self.distances.set(source, target, new_distance);
                            self.next_hop.set(source, target, first_hop);
                        }
                    }
                }
            }
        }

        debug!(num_nodes, "floyd warshall finished");
    }

    pub fn distance_matrix(&self) -> &Matrix<Weight> {
        &self.distances
    }

    pub fn next_hop_matrix(&self) -> &Matrix<Option<NodeId>> {
        &self.next_hop
    }
}

impl AllPairsAlgorithm for FloydWarshall {

    fn distance(&self, source: NodeId, target: NodeId) -> Distance {
        let num_nodes = self.distances.rows();

        if source as usize >= num_nodes || target as usize >= num_nodes {
            return Distance::Unreachable;
        }

        Distance::from_raw(self.distances.get(source as usize, target as usize))
    }

    fn path(&self, source: NodeId, target: NodeId) -> NodeIds {
        if !self.distance(source, target).is_reachable() {
            return Vec::new();
        }

        path_from_next_hops(source, target, &self.next_hop)
    }
}
