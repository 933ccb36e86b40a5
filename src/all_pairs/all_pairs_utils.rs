use crate::types::*;
use crate::graph_representation::Graph;

/// converts a graph into a first out array and an arclist of (target, weight) pairs.
/// edges of a node keep their insertion order
pub fn convert_to_arclist(graph: &impl Graph) -> (Vec<EdgeId>, Vec<(NodeId, Weight)>) {
    let mut first_out: Vec<EdgeId> = Vec::with_capacity(graph.num_nodes() + 1);
    let mut arclist: Vec<(NodeId, Weight)> = Vec::new();

    for node_id in graph.node_ids() {
        first_out.push(arclist.len() as EdgeId);

        for edge_id in graph.edge_ids(node_id) {
            arclist.push((graph.target_id(node_id, edge_id), graph.weight(node_id, edge_id)));
        }
    }

    first_out.push(arclist.len() as EdgeId);

    (first_out, arclist)
}
