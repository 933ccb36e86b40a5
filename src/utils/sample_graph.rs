use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph_representation::{InputEdge, NodeData};
use crate::types::*;

use super::io::GraphInput;

/// parameters of a random sample graph
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGraphConfig {
    pub num_nodes: usize,
    pub num_districts: usize,
    pub num_shelters: usize,
    /// probability of an additional edge between any two nodes
    pub edge_probability: f64,
    pub max_weight: InputWeight,
    pub seed: Option<u64>,
}

impl Default for SampleGraphConfig {

    fn default() -> Self {
        SampleGraphConfig {
            num_nodes: 40,
            num_districts: 8,
            num_shelters: 4,
            edge_probability: 0.05,
            max_weight: 30,
            seed: None,
        }
    }
}

/// creates a connected random graph: a random spanning tree plus additional edges.
/// roles are assigned to randomly picked nodes, districts and shelters are clamped to the node count
pub fn generate_sample_graph(config: &SampleGraphConfig) -> GraphInput {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let num_nodes = config.num_nodes;
    let max_weight = config.max_weight.max(1);
    let edge_probability = config.edge_probability.clamp(0.0, 1.0);

    let mut roles = vec![NodeRole::Other; num_nodes];
    let mut shuffled: Vec<usize> = (0..num_nodes).collect();
    shuffled.shuffle(&mut rng);

    let num_districts = config.num_districts.min(num_nodes);
    let num_shelters = config.num_shelters.min(num_nodes - num_districts);

    for node_index in &shuffled[..num_districts] {
        roles[*node_index] = NodeRole::District;
    }

    for node_index in &shuffled[num_districts..(num_districts + num_shelters)] {
        roles[*node_index] = NodeRole::Shelter;
    }

    let nodes = roles.into_iter()
        .enumerate()
        .map(|(node_index, role)| NodeData::new(format!("N{}", node_index), role))
        .collect();

    let mut edges = Vec::new();

    for node_index in 1..num_nodes {
        let parent = rng.gen_range(0..node_index);
        edges.push(InputEdge::new(parent as NodeId, node_index as NodeId, rng.gen_range(1..=max_weight)));
    }

    for source in 0..num_nodes {
        for target in (source + 1)..num_nodes {
            if rng.gen_bool(edge_probability) {
                edges.push(InputEdge::new(source as NodeId, target as NodeId, rng.gen_range(1..=max_weight)));
            }
        }
    }

    GraphInput { nodes, edges }
}
