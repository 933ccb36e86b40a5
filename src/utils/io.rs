use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::all_pairs::result_table::ResultTable;
use crate::error::IoError;
use crate::graph_representation::{GraphStore, InputEdge, NodeData};
use crate::types::*;

/// nodes and unvalidated edges read from a graph csv file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphInput {
    pub nodes: Vec<NodeData>,
    pub edges: Vec<InputEdge>,
}

impl GraphInput {

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// reads a graph csv with `NODE,<name>,<role>` and `E,<u>,<v>,<weight>` rows, the first line is a header
pub fn read_graph_csv(path: &dyn AsRef<Path>) -> Result<GraphInput, IoError> {
    let path = path.as_ref();
    let read_error = |source| IoError::Read { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(read_error)?;
    let input = parse_graph_csv(BufReader::new(file)).map_err(read_error)?;

    info!(path = %path.display(), num_nodes = input.nodes.len(), num_edges = input.edges.len(), "graph successfully loaded");

    Ok(input)
}

pub fn parse_graph_csv(reader: impl BufRead) -> std::io::Result<GraphInput> {
    let mut node_rows: Vec<(String, String)> = Vec::new();
    let mut edge_rows: Vec<(String, String, String)> = Vec::new();

    for line in reader.lines().skip(1) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let columns = split_csv_line(&line);
        if columns.len() < 3 {
            continue;
        }

        match columns[0].as_str() {
            "NODE" => node_rows.push((columns[1].clone(), columns[2].clone())),
            "E" => edge_rows.push((columns[1].clone(), columns[2].clone(), columns.get(3).cloned().unwrap_or_default())),
            _ => {}, // unknown row types are ignored
        }
    }

    let mut node_index: HashMap<String, NodeId> = HashMap::new();
    let mut nodes: Vec<NodeData> = Vec::new();

    // nodes declared by NODE rows keep their order, first occurrence wins
    for (name, role) in node_rows {
        if !node_index.contains_key(&name) {
            node_index.insert(name.clone(), nodes.len() as NodeId);
            nodes.push(NodeData::new(name, NodeRole::from_tag(&role)));
        }
    }

    let mut edges = Vec::with_capacity(edge_rows.len());

    for (source_name, target_name, weight) in edge_rows {
        let source = get_or_insert_node(&mut node_index, &mut nodes, source_name);
        let target = get_or_insert_node(&mut node_index, &mut nodes, target_name);

        edges.push(InputEdge::new(source, target, parse_weight(&weight)));
    }

    Ok(GraphInput { nodes, edges })
}

fn get_or_insert_node(node_index: &mut HashMap<String, NodeId>, nodes: &mut Vec<NodeData>, name: String) -> NodeId {
    if let Some(node_id) = node_index.get(&name) {
        return *node_id;
    }

    let node_id = nodes.len() as NodeId;
    node_index.insert(name.clone(), node_id);
    nodes.push(NodeData::new(name, NodeRole::Other));

    node_id
}

/// missing or unparsable weights default to 1, fractional weights are truncated
fn parse_weight(weight: &str) -> InputWeight {
    if weight.is_empty() {
        return 1;
    }

    match weight.parse::<InputWeight>() {
        Ok(weight) => weight,
        Err(_) => match weight.parse::<f64>() {
            Ok(weight) if weight.is_finite() => weight.trunc() as InputWeight,
            _ => 1,
        },
    }
}

/// splits on commas outside of double quotes, quotes are dropped and fields trimmed
fn split_csv_line(line: &str) -> Vec<String> {
    let mut columns = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for character in line.chars() {
        match character {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => columns.push(std::mem::take(&mut current)),
            _ => current.push(character),
        }
    }

    columns.push(current);

    columns.iter().map(|column| column.trim().to_string()).collect()
}

/// writes one row per ordered pair, unreachable distances are written as INF
pub fn write_distance_pairs(path: &dyn AsRef<Path>, store: &GraphStore, table: &ResultTable) -> Result<(), IoError> {
    let path = path.as_ref();
    let write_error = |source| IoError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "source_id,source_role,target_id,target_role,distance_minutes").map_err(write_error)?;

    for pair in table.pairs() {
        let source = store.node(pair.source);
        let target = store.node(pair.target);

        writeln!(writer, "{},{},{},{},{}", source.name, source.role.tag(), target.name, target.role.tag(), pair.distance).map_err(write_error)?;
    }

    writer.flush().map_err(write_error)?;

    info!(path = %path.display(), num_pairs = table.len(), "wrote pairwise distances");
    Ok(())
}

pub fn path_file_name(prefix: &str, source_name: &str, target_name: &str) -> PathBuf {
    PathBuf::from(format!("{}_path_{}_to_{}.txt", prefix, source_name, target_name))
}

/// writes one file per reachable pair with the node names joined by arrows, returns the number of files
pub fn write_path_files(prefix: &str, store: &GraphStore, table: &ResultTable) -> Result<usize, IoError> {
    let mut num_files = 0;

    for pair in table.pairs().iter().filter(|pair| !pair.path.is_empty()) {
        let path = path_file_name(prefix, &store.node(pair.source).name, &store.node(pair.target).name);
        let names: Vec<&str> = pair.path.iter().map(|node| store.node(*node).name.as_str()).collect();

        let mut file = File::create(&path).map_err(|source| IoError::Write { path: path.clone(), source })?;
        writeln!(file, "{}", names.join(" -> ")).map_err(|source| IoError::Write { path: path.clone(), source })?;

        num_files += 1;
    }

    debug!(num_files, "wrote path files");
    Ok(num_files)
}

/// writes a graph in the format understood by read_graph_csv
pub fn write_graph_csv(path: &dyn AsRef<Path>, input: &GraphInput) -> Result<(), IoError> {
    let path = path.as_ref();
    let write_error = |source| IoError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "type,id_or_u,role_or_v,weight").map_err(write_error)?;

    for node in &input.nodes {
        writeln!(writer, "NODE,{},{}", node.name, node.role.tag()).map_err(write_error)?;
    }

    for edge in &input.edges {
        let source = &input.nodes[edge.source as usize].name;
        let target = &input.nodes[edge.target as usize].name;

        writeln!(writer, "E,{},{},{}", source, target, edge.weight).map_err(write_error)?;
    }

    writer.flush().map_err(write_error)
}
