//! Graph construction and persistence errors.

use std::io;

use thiserror::Error;

use crate::NodeId;

/// Structural error raised when an edge or a graph shape is rejected.
#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum GraphError {
    #[error("Node {node} is out of range, graph has {node_count} nodes")]
    OutOfRange { node: NodeId, node_count: usize },

    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Edge {0} -> {1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    #[error("Maximum number of nodes exceeded: {node_count} requested, at most {max_node_count} allowed")]
    TooManyNodes { node_count: usize, max_node_count: usize },

    #[error("Maximum number of edges exceeded: {edge_count} requested, at most {max_edge_count} allowed")]
    TooManyEdges { edge_count: usize, max_edge_count: usize },
}

/// Error loading or saving a graph in the edge list format.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed header line: {0}")]
    MalformedHeader(&'static str),

    #[error("Malformed edge at line {line}: {reason}")]
    MalformedEdge { line: usize, reason: &'static str },

    #[error("Header declares {declared} edges but {found} edge lines were found")]
    EdgeCountMismatch { declared: usize, found: usize },

    #[error("Rejected edge at line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

pub(crate) type Result<T> = std::result::Result<T, GraphError>;
