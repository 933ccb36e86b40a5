use std::ops::Range;

use tracing::{debug, warn};

use crate::all_pairs::strategy::{choose_strategy, Strategy};
use crate::config::EngineConfig;
use crate::error::GraphError;
use crate::types::*;
use crate::utils::data_structures::Matrix;

pub trait Graph {

    fn node_ids(&self) -> Range<NodeId>;
    fn edge_ids(&self, node: NodeId) -> Range<EdgeId>;
    fn target_id(&self, node: NodeId, edge_id: EdgeId) -> NodeId;
    fn weight(&self, node: NodeId, edge_id: EdgeId) -> Weight;

    fn num_nodes(&self) -> usize {
        self.node_ids().len()
    }
}

/// external name and role of a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeData {
    pub name: String,
    pub role: NodeRole,
}

impl NodeData {

    pub fn new(name: impl Into<String>, role: NodeRole) -> Self {
        NodeData {
            name: name.into(),
            role,
        }
    }
}

/// edge as handed over by the input layer, not yet validated
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: InputWeight,
}

impl InputEdge {

    pub fn new(source: NodeId, target: NodeId, weight: InputWeight) -> Self {
        InputEdge { source, target, weight }
    }
}

/// reason an input edge has been skipped
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeRejection {
    NodeOutOfRange,
    NegativeWeight,
    WeightTooLarge,
}

/// owns the adjacency list, the node data and (for dense runs) the seed distance matrix
pub struct GraphStore {
    nodes: Vec<NodeData>,
    edges: Vec<Vec<(NodeId, Weight)>>,
    seed_matrix: Option<Matrix<Weight>>,
    interest_nodes: NodeIds,
    skipped_edges: usize,
}

impl GraphStore {

    pub fn build(node_count: usize, nodes: Vec<NodeData>, input_edges: &[InputEdge], config: &EngineConfig) -> Result<GraphStore, GraphError> {
        if node_count != nodes.len() {
            return Err(GraphError::RoleCountMismatch { nodes: node_count, roles: nodes.len() });
        }

        if node_count > NodeId::MAX as usize {
            return Err(GraphError::TooManyNodes(node_count));
        }

        let mut edges: Vec<Vec<(NodeId, Weight)>> = vec![Vec::new(); node_count];
        let mut skipped_edges = 0;

        for input_edge in input_edges {
            match validate_edge(node_count, input_edge) {
                Ok(weight) => {
                    edges[input_edge.source as usize].push((input_edge.target, weight));

                    if !config.directed {
                        edges[input_edge.target as usize].push((input_edge.source, weight));
                    }
                },
                Err(rejection) => {
                    warn!(source = input_edge.source, target = input_edge.target, weight = input_edge.weight, ?rejection, "skipping malformed edge");
                    skipped_edges += 1;
                },
            }
        }

        let interest_nodes: NodeIds = nodes.iter()
            .enumerate()
            .filter(|(_, node)| node.role.is_of_interest())
            .map(|(node_id, _)| node_id as NodeId)
            .collect();

        let mut store = GraphStore {
            nodes,
            edges,
            seed_matrix: None,
            interest_nodes,
            skipped_edges,
        };

        if choose_strategy(node_count, config) == Strategy::Dense {
            store.seed_matrix = Some(store.build_seed_matrix());
        }

        debug!(num_nodes = node_count, num_skipped = skipped_edges, num_interest = store.interest_nodes.len(), "graph store built");

        Ok(store)
    }

    /// builds a store for callers that only know node indices, names default to the index
    pub fn from_roles(node_count: usize, roles: &[NodeRole], input_edges: &[InputEdge], config: &EngineConfig) -> Result<GraphStore, GraphError> {
        let nodes = roles.iter()
            .enumerate()
            .map(|(node_id, role)| NodeData::new(node_id.to_string(), *role))
            .collect();

        GraphStore::build(node_count, nodes, input_edges, config)
    }

    /// seeds a V x V matrix with 0 on the diagonal, the minimum weight of all direct edges and INFINITY elsewhere
    pub fn build_seed_matrix(&self) -> Matrix<Weight> {
        let num_nodes = self.num_nodes();
        let mut seed = Matrix::new(num_nodes, num_nodes, INFINITY);

        for node_index in 0..num_nodes {
            seed.set(node_index, node_index, 0);
        }

        for (node_index, node_edges) in self.edges.iter().enumerate() {
            for (target_node, weight) in node_edges {
                seed.reduce_value(node_index, *target_node as usize, *weight);
            }
        }

        seed
    }

    pub fn seed_matrix(&self) -> Option<&Matrix<Weight>> {
        self.seed_matrix.as_ref()
    }

    pub fn interest_nodes(&self) -> &[NodeId] {
        &self.interest_nodes
    }

    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    pub fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node as usize]
    }

    pub fn nodes(&self) -> &[NodeData] {
        &self.nodes
    }

    pub fn neighbours(&self, node: NodeId) -> &Arclist {
        &self.edges[node as usize]
    }
}

fn validate_edge(node_count: usize, edge: &InputEdge) -> Result<Weight, EdgeRejection> {
    if edge.source as usize >= node_count || edge.target as usize >= node_count {
        return Err(EdgeRejection::NodeOutOfRange);
    }

    if edge.weight < 0 {
        return Err(EdgeRejection::NegativeWeight);
    }

    let weight = edge.weight as Weight;

    // a shortest path has at most node_count - 1 edges, its length has to stay below the guard
    if weight >= UNREACHABLE_GUARD / node_count.max(1) as Weight {
        return Err(EdgeRejection::WeightTooLarge);
    }

    Ok(weight)
}

impl Graph for GraphStore {

    fn node_ids(&self) -> Range<NodeId> {
        0..(self.edges.len() as NodeId)
    }

    fn edge_ids(&self, node: NodeId) -> Range<EdgeId> {
        0..(self.edges[node as usize].len() as EdgeId)
    }

    fn target_id(&self, node: NodeId, edge_id: EdgeId) -> NodeId {
        self.edges[node as usize][edge_id as usize].0
    }

    fn weight(&self, node: NodeId, edge_id: EdgeId) -> Weight {
        self.edges[node as usize][edge_id as usize].1
    }
}
