use crate::types::*;

use super::all_pairs_algorithm::AllPairsAlgorithm;
use super::strategy::{ShortestPathEngine, Strategy};

/// distance and (optionally) path of one ordered pair of interest nodes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairResult {
    pub source: NodeId,
    pub target: NodeId,
    pub distance: Distance,
    pub path: NodeIds,
}

/// results for every ordered pair of interest nodes, source major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    strategy: Strategy,
    interest_nodes: NodeIds,
    pairs: Vec<PairResult>,
}

impl ResultTable {

    pub fn assemble(engine: &ShortestPathEngine, interest_nodes: &[NodeId], with_paths: bool) -> Self {
        let mut pairs = Vec::with_capacity(interest_nodes.len() * interest_nodes.len());

        for source in interest_nodes {
            for target in interest_nodes {
                let distance = engine.distance(*source, *target);
                let path = if with_paths && distance.is_reachable() {
                    engine.path(*source, *target)
                }
                else {
                    Vec::new()
                };

                pairs.push(PairResult {
                    source: *source,
                    target: *target,
                    distance,
                    path,
                });
            }
        }

        ResultTable {
            strategy: engine.strategy(),
            interest_nodes: interest_nodes.to_vec(),
            pairs,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn interest_nodes(&self) -> &[NodeId] {
        &self.interest_nodes
    }

    pub fn pairs(&self) -> &[PairResult] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// looks up the pair of the given nodes, None if either of them is not a node of interest
    pub fn get(&self, source: NodeId, target: NodeId) -> Option<&PairResult> {
        let source_index = self.interest_nodes.iter().position(|node| *node == source)?;
        let target_index = self.interest_nodes.iter().position(|node| *node == target)?;

        self.pairs.get(source_index * self.interest_nodes.len() + target_index)
    }

    pub fn distance(&self, source: NodeId, target: NodeId) -> Option<Distance> {
        self.get(source, target).map(|pair| pair.distance)
    }
}
