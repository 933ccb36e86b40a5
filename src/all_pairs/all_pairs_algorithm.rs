use crate::types::*;

/// an all pairs algorithm answers distance and path queries after it has been solved
pub trait AllPairsAlgorithm {

    /// shortest path distance from source to target
    fn distance(&self, source: NodeId, target: NodeId) -> Distance;

    /// nodes of one shortest path from source to target (both inclusive), empty if unreachable
    fn path(&self, source: NodeId, target: NodeId) -> NodeIds;
}
