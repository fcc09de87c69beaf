//! Weighted directed graph storage.
//!
//! The graph is append-only: edges are validated and stored, never removed.
//! See [`persist`] for the plain-text edge list format.

pub use self::adjacency::{AdjacencyList, EdgeCountObserver};
pub use self::edge::{check_edge_budget, check_graph_size, max_edge_count, Edge, NodeId, Weight, MAX_NODE_COUNT};
pub use self::errors::{GraphError, PersistError};

mod adjacency;
mod edge;
mod errors;
pub mod persist;
