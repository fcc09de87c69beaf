use thiserror::Error;

use spath_graph::NodeId;
use spath_heap::HeapError;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchError {
    #[error("Node {node} is out of range, graph has {node_count} nodes")]
    OutOfRange { node: NodeId, node_count: usize },

    /// Internal heap misuse. Never happens unless the search itself is broken.
    #[error("Frontier error: {0}")]
    Heap(#[from] HeapError),
}

pub(crate) type Result<T> = std::result::Result<T, SearchError>;
