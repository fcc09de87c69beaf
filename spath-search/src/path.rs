//! Search results.

use std::fmt;

use spath_graph::NodeId;
use spath_heap::Cost;

/// Shortest path from a source to a destination, both included.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: Cost) -> Self {
        debug_assert!(!nodes.is_empty(), "empty path");
        Path { nodes, cost }
    }

    /// Nodes from the source to the destination.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of edge weights along the path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Node ids joined with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.nodes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (cost {})", self.join(" -> "), self.cost)
    }
}

/// Result of a path query. Absence of a path is a regular outcome, not an error.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PathOutcome {
    Found(Path),
    NoPath { source: NodeId, destination: NodeId },
}

impl PathOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NoPath { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path().is_some()
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOutcome::Found(path) => path.fmt(f),
            PathOutcome::NoPath { source, destination } => write!(f, "No path exists between {} and {}.", source, destination),
        }
    }
}

#[test]
fn test_path_format() {
    let p = Path::new(vec![0, 2, 1, 3], 4);
    assert_eq!(p.to_string(), "0 -> 2 -> 1 -> 3 (cost 4)");
    assert_eq!(p.join(","), "0,2,1,3");
    assert_eq!(p.source(), 0);
    assert_eq!(p.destination(), 3);

    let single = Path::new(vec![5], 0);
    assert_eq!(single.to_string(), "5 (cost 0)");
    assert_eq!(single.source(), single.destination());

    let none = PathOutcome::NoPath { source: 0, destination: 3 };
    assert_eq!(none.to_string(), "No path exists between 0 and 3.");
    assert!(!none.is_found());
    assert_eq!(PathOutcome::Found(p.clone()).path(), Some(&p));
}
