//! Edge value object and the edge budget of a simple directed graph.

use crate::errors::{GraphError, Result};

/// Node identifier, in range `[0, node_count)` of the owning graph.
pub type NodeId = usize;

/// Non-negative edge weight.
pub type Weight = u32;

/// Request to insert a directed weighted edge. Not retained by the graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    pub source: NodeId,
    pub destination: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeId, destination: NodeId, weight: Weight) -> Self {
        Edge { source, destination, weight }
    }
}

/// Largest graph a caller may ask for before allocating it.
pub const MAX_NODE_COUNT: usize = 1 << 24;

/// Maximum number of edges in a directed graph without self-loops and parallel edges,
/// i.e. `N * (N - 1)`. Saturates instead of overflowing.
pub fn max_edge_count(node_count: usize) -> usize {
    node_count.saturating_mul(node_count.saturating_sub(1))
}

/// Checks that `edge_count` edges can fit into a graph of `node_count` nodes.
///
/// This is a caller-side check, `AdjacencyList` itself never enforces it.
pub fn check_edge_budget(node_count: usize, edge_count: usize) -> Result<()> {
    let max_edge_count = max_edge_count(node_count);
    if edge_count > max_edge_count {
        return Err(GraphError::TooManyEdges { edge_count, max_edge_count });
    }
    Ok(())
}

/// Checks both the node count against `MAX_NODE_COUNT` and the edge budget.
///
/// Must be called before `AdjacencyList::new()` with untrusted dimensions.
pub fn check_graph_size(node_count: usize, edge_count: usize) -> Result<()> {
    if node_count > MAX_NODE_COUNT {
        return Err(GraphError::TooManyNodes { node_count, max_node_count: MAX_NODE_COUNT });
    }
    check_edge_budget(node_count, edge_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_edge_count() {
        assert_eq!(max_edge_count(0), 0);
        assert_eq!(max_edge_count(1), 0);
        assert_eq!(max_edge_count(2), 2);
        assert_eq!(max_edge_count(4), 12);
        assert_eq!(max_edge_count(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_check_edge_budget() {
        assert_eq!(check_edge_budget(3, 6), Ok(()));
        assert_eq!(check_edge_budget(3, 0), Ok(()));
        assert_eq!(check_edge_budget(0, 0), Ok(()));
        assert_eq!(
            check_edge_budget(3, 7),
            Err(GraphError::TooManyEdges { edge_count: 7, max_edge_count: 6 })
        );
        assert_eq!(
            check_edge_budget(1, 1),
            Err(GraphError::TooManyEdges { edge_count: 1, max_edge_count: 0 })
        );
    }

    #[test]
    fn test_check_graph_size() {
        assert_eq!(check_graph_size(4, 5), Ok(()));
        assert_eq!(check_graph_size(MAX_NODE_COUNT, 0), Ok(()));
        assert_eq!(
            check_graph_size(MAX_NODE_COUNT + 1, 0),
            Err(GraphError::TooManyNodes { node_count: MAX_NODE_COUNT + 1, max_node_count: MAX_NODE_COUNT })
        );
        assert_eq!(
            check_graph_size(100_000_000_000_000_000, 0),
            Err(GraphError::TooManyNodes { node_count: 100_000_000_000_000_000, max_node_count: MAX_NODE_COUNT })
        );
        assert_eq!(
            check_graph_size(3, 7),
            Err(GraphError::TooManyEdges { edge_count: 7, max_edge_count: 6 })
        );
    }
}
