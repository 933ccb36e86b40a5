use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use all_pairs_paths::all_pairs::compute_all_pairs;
use all_pairs_paths::config::{EngineConfig, DEFAULT_DENSE_THRESHOLD};
use all_pairs_paths::error::IoError;
use all_pairs_paths::graph_representation::GraphStore;
use all_pairs_paths::types::NodeRole;
use all_pairs_paths::utils::io::{read_graph_csv, write_distance_pairs, write_graph_csv, write_path_files};
use all_pairs_paths::utils::measure_time;
use all_pairs_paths::utils::sample_graph::{generate_sample_graph, SampleGraphConfig};

#[derive(Parser)]
#[clap(name = "all_pairs_paths", about = "shortest paths between all districts and shelters")]
struct Opts {

    /// verbose output (can be repeated: -v, -vv)
    #[clap(short, long, parse(from_occurrences), global = true)]
    verbose: u8,

    #[clap(subcommand)]
    subcmd: SubCommand
}

#[derive(Parser)]
enum SubCommand {
    Solve(SolveCommand),
    GenerateSample(GenerateSampleCommand)
}

/// computes distances and paths between every pair of districts and shelters
#[derive(Parser)]
struct SolveCommand {

    /// graph csv with NODE and E rows
    input: PathBuf,

    /// graphs with at most this many nodes are solved with floyd warshall
    #[clap(long, default_value_t = DEFAULT_DENSE_THRESHOLD)]
    fw_threshold: usize,

    /// prefix of all output files
    #[clap(long, default_value = "allpairs")]
    outprefix: String,

    /// treat edges as one way
    #[clap(long)]
    directed: bool,

    /// do not write path files
    #[clap(long)]
    no_paths: bool
}

/// writes a random sample graph csv
#[derive(Parser)]
struct GenerateSampleCommand {

    /// path of the csv to create
    output: PathBuf,

    /// number of nodes
    #[clap(short, long, default_value = "40")]
    nodes: usize,

    /// number of districts
    #[clap(short, long, default_value = "8")]
    districts: usize,

    /// number of shelters
    #[clap(short, long, default_value = "4")]
    shelters: usize,

    /// probability of an additional edge between two nodes
    #[clap(short, long, default_value = "0.05")]
    edge_probability: f64,

    /// maximum travel time of an edge
    #[clap(short, long, default_value = "30")]
    max_weight: i64,

    /// seed for reproducible graphs
    #[clap(long)]
    seed: Option<u64>
}

fn main() -> ExitCode {
    let opts: Opts = Opts::parse();

    let filter = match opts.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let result = match opts.subcmd {
        SubCommand::Solve(command) => solve(command),
        SubCommand::GenerateSample(command) => generate_sample(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn solve(command: SolveCommand) -> Result<(), IoError> {
    let config = EngineConfig::default()
        .with_dense_threshold(command.fw_threshold)
        .with_directed(command.directed)
        .with_paths(!command.no_paths);

    let input = read_graph_csv(&command.input)?;
    let store = GraphStore::build(input.node_count(), input.nodes, &input.edges, &config)?;

    let num_districts = store.nodes().iter().filter(|node| node.role == NodeRole::District).count();
    info!(total_nodes = store.nodes().len(), districts = num_districts, shelters = store.interest_nodes().len() - num_districts, skipped_edges = store.skipped_edges(), "graph store ready");

    let (solve_time, table) = measure_time(|| compute_all_pairs(&store, &config));
    info!(strategy = %table.strategy(), pairs = table.len(), "solved in {} ms", solve_time.as_millis());

    write_distance_pairs(&PathBuf::from(format!("{}_distances_pairs.csv", command.outprefix)), &store, &table)?;

    if config.with_paths {
        let num_files = write_path_files(&command.outprefix, &store, &table)?;
        info!(num_files, "wrote path files");
    }

    Ok(())
}

fn generate_sample(command: GenerateSampleCommand) -> Result<(), IoError> {
    let config = SampleGraphConfig {
        num_nodes: command.nodes,
        num_districts: command.districts,
        num_shelters: command.shelters,
        edge_probability: command.edge_probability,
        max_weight: command.max_weight,
        seed: command.seed,
    };

    let input = generate_sample_graph(&config);
    write_graph_csv(&command.output, &input)?;

    info!(path = %command.output.display(), num_nodes = input.nodes.len(), num_edges = input.edges.len(), "wrote sample graph");
    Ok(())
}
