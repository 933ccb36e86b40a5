use std::path::PathBuf;

use thiserror::Error;

/// configuration errors that abort a solve before any work is done
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {

    #[error("node count {nodes} does not match the number of roles provided ({roles})")]
    RoleCountMismatch { nodes: usize, roles: usize },

    #[error("node count {0} exceeds the supported maximum")]
    TooManyNodes(usize),
}

/// errors of the file reading and writing layer
#[derive(Debug, Error)]
pub enum IoError {

    #[error("unable to read {path}: {source}", path = .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("unable to write {path}: {source}", path = .path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
