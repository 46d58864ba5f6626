use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid input: {msg}")]
    InvalidInput { msg: String },

    #[error("distance matrix format error at line {line}: {msg}")]
    MatrixFormat { msg: String, line: u64 },

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no leaf named '{name}' exists in the tree")]
    OutlierNotFound { name: String },

    #[error("node id {id} out of range (nodes = {nodes})")]
    OutOfRange { id: usize, nodes: usize },

    #[error("edge between nodes {a} and {b} already exists")]
    DuplicateEdge { a: usize, b: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type TreeResult<T> = Result<T, TreeError>;
