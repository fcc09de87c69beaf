//! Adjacency list graph storage.

use std::fmt;

use log::debug;

use crate::edge::{Edge, NodeId, Weight};
use crate::errors::{GraphError, Result};

/// Receives the new edge count after every successful insertion.
pub trait EdgeCountObserver {
    fn on_edge_count_changed(&mut self, new_count: usize);
}

impl<F: FnMut(usize)> EdgeCountObserver for F {
    fn on_edge_count_changed(&mut self, new_count: usize) {
        self(new_count)
    }
}

/// Directed weighted graph with a fixed number of nodes.
///
/// Each node owns the list of its outgoing `(destination, weight)` pairs.
/// Edges can only be added, and every stored edge satisfies:
/// * both endpoints are in `[0, node_count)`;
/// * no self-loops;
/// * at most one edge per `(source, destination)` pair.
pub struct AdjacencyList {
    /// Outgoing edges per source node, in insertion order.
    /// Iteration order exposed to users is the reverse (newest first).
    links: Vec<Vec<(NodeId, Weight)>>,
    edge_count: usize,
    /// Expected total number of edges. Informational only.
    all_edge_count: usize,
    observer: Option<Box<dyn EdgeCountObserver>>,
}

impl AdjacencyList {
    /// Create an empty graph with `node_count` nodes.
    /// `all_edge_count` is the number of edges the caller intends to insert.
    ///
    /// Allocates per node up front: validate untrusted sizes with `check_graph_size()` first.
    pub fn new(node_count: usize, all_edge_count: usize) -> Self {
        AdjacencyList {
            links: vec![Vec::new(); node_count],
            edge_count: 0,
            all_edge_count,
            observer: None,
        }
    }

    /// Install the edge count change observer, replacing the previous one.
    pub fn set_observer<O: EdgeCountObserver + 'static>(&mut self, observer: O) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the edge count change observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Validate and store an edge.
    ///
    /// On error the graph is left untouched and the observer is not notified.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        let Edge { source, destination, weight } = edge;
        self.check_node(source)?;
        self.check_node(destination)?;
        if source == destination {
            return Err(GraphError::SelfLoop(source));
        }
        if self.edge_exists(source, destination) {
            return Err(GraphError::DuplicateEdge(source, destination));
        }

        self.links[source].push((destination, weight));
        self.edge_count += 1;
        debug!("added edge {} -> {} weight {} [{} / {}]", source, destination, weight, self.edge_count, self.all_edge_count);

        let new_count = self.edge_count;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_edge_count_changed(new_count);
        }

        Ok(())
    }

    /// Whether `id` is a valid node of this graph.
    #[inline]
    pub fn node_exists(&self, id: NodeId) -> bool {
        id < self.links.len()
    }

    /// Whether the edge `source -> destination` is stored. Linear in the out-degree of `source`.
    pub fn edge_exists(&self, source: NodeId, destination: NodeId) -> bool {
        match self.links.get(source) {
            Some(links) => links.iter().any(|&(d, _)| d == destination),
            None => false,
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The edge count hint given at construction.
    #[inline]
    pub fn all_edge_count(&self) -> usize {
        self.all_edge_count
    }

    /// Outgoing `(destination, weight)` pairs of `source`, most recently inserted first.
    ///
    /// Panics if `source` is out of range.
    pub fn edges_from(&self, source: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.links[source].iter().rev().copied()
    }

    /// All stored edges, sources in ascending order, each source's edges in `edges_from()` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.node_count()).flat_map(move |source| {
            self.edges_from(source).map(move |(destination, weight)| Edge::new(source, destination, weight))
        })
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.node_exists(node) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange { node, node_count: self.node_count() })
        }
    }
}

impl fmt::Debug for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyList")
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count)
            .field("all_edge_count", &self.all_edge_count)
            .field("links", &self.links)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn e(source: NodeId, destination: NodeId, weight: Weight) -> Edge {
        Edge::new(source, destination, weight)
    }

    fn snapshot(g: &AdjacencyList) -> Vec<Edge> {
        g.edges().collect()
    }

    #[test]
    fn test_insert_and_query() {
        let mut g = AdjacencyList::new(4, 5);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.all_edge_count(), 5);

        g.insert_edge(e(0, 1, 4)).expect("insert");
        g.insert_edge(e(0, 2, 1)).expect("insert");
        g.insert_edge(e(2, 1, 2)).expect("insert");
        assert_eq!(g.edge_count(), 3);

        assert!(g.edge_exists(0, 1));
        assert!(g.edge_exists(0, 2));
        assert!(g.edge_exists(2, 1));
        assert!(!g.edge_exists(1, 0));
        assert!(!g.edge_exists(3, 0));
        assert!(!g.edge_exists(9, 0));

        assert!(g.node_exists(0));
        assert!(g.node_exists(3));
        assert!(!g.node_exists(4));
    }

    #[test]
    fn test_newest_first_order() {
        let mut g = AdjacencyList::new(4, 3);
        g.insert_edge(e(0, 1, 4)).expect("insert");
        g.insert_edge(e(0, 2, 1)).expect("insert");
        g.insert_edge(e(0, 3, 7)).expect("insert");
        assert_eq!(g.edges_from(0).collect::<Vec<_>>(), vec![(3, 7), (2, 1), (1, 4)]);
        assert_eq!(g.edges_from(1).count(), 0);
    }

    #[test]
    fn test_edges_sorted_by_source() {
        let mut g = AdjacencyList::new(3, 3);
        g.insert_edge(e(2, 0, 1)).expect("insert");
        g.insert_edge(e(0, 1, 2)).expect("insert");
        g.insert_edge(e(1, 2, 3)).expect("insert");
        assert_eq!(snapshot(&g), vec![e(0, 1, 2), e(1, 2, 3), e(2, 0, 1)]);
    }

    #[test]
    fn test_duplicate_edge() {
        let mut g = AdjacencyList::new(3, 2);
        assert_eq!(g.insert_edge(e(1, 2, 5)), Ok(()));
        assert_eq!(g.insert_edge(e(1, 2, 5)), Err(GraphError::DuplicateEdge(1, 2)));
        assert_eq!(g.insert_edge(e(1, 2, 9)), Err(GraphError::DuplicateEdge(1, 2)));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(snapshot(&g), vec![e(1, 2, 5)]);

        // Opposite direction is a different edge
        assert_eq!(g.insert_edge(e(2, 1, 5)), Ok(()));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_rejected_insertions_leave_graph_unchanged() {
        let mut g = AdjacencyList::new(3, 3);
        g.insert_edge(e(0, 1, 1)).expect("insert");
        let before = snapshot(&g);

        assert_eq!(g.insert_edge(e(1, 1, 1)), Err(GraphError::SelfLoop(1)));
        assert_eq!(g.insert_edge(e(3, 1, 1)), Err(GraphError::OutOfRange { node: 3, node_count: 3 }));
        assert_eq!(g.insert_edge(e(1, 7, 1)), Err(GraphError::OutOfRange { node: 7, node_count: 3 }));
        assert_eq!(g.insert_edge(e(0, 1, 3)), Err(GraphError::DuplicateEdge(0, 1)));

        assert_eq!(g.edge_count(), 1);
        assert_eq!(snapshot(&g), before);
    }

    #[test]
    fn test_out_of_range_is_checked_before_self_loop() {
        let mut g = AdjacencyList::new(2, 0);
        assert_eq!(g.insert_edge(e(5, 5, 1)), Err(GraphError::OutOfRange { node: 5, node_count: 2 }));
    }

    #[test]
    fn test_empty_graph() {
        let mut g = AdjacencyList::new(0, 0);
        assert_eq!(g.node_count(), 0);
        assert!(!g.node_exists(0));
        assert_eq!(g.insert_edge(e(0, 1, 1)), Err(GraphError::OutOfRange { node: 0, node_count: 0 }));
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn test_observer() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut g = AdjacencyList::new(3, 3);
        {
            let seen = Rc::clone(&seen);
            g.set_observer(move |n: usize| seen.borrow_mut().push(n));
        }

        g.insert_edge(e(0, 1, 1)).expect("insert");
        let _ = g.insert_edge(e(0, 1, 1));
        let _ = g.insert_edge(e(2, 2, 1));
        g.insert_edge(e(1, 2, 1)).expect("insert");
        assert_eq!(*seen.borrow(), vec![1, 2]);

        g.clear_observer();
        g.insert_edge(e(2, 0, 1)).expect("insert");
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_random_insertions_keep_invariants() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let n = 8;
        let mut g = AdjacencyList::new(n, 0);
        let mut accepted = 0;
        for _ in 0..500 {
            let s = rng.gen_range(0, n + 1);
            let d = rng.gen_range(0, n + 1);
            let count_before = g.edge_count();
            match g.insert_edge(e(s, d, rng.gen_range(0, 10))) {
                Ok(()) => {
                    accepted += 1;
                    assert_eq!(g.edge_count(), count_before + 1);
                }
                Err(_) => assert_eq!(g.edge_count(), count_before),
            }
        }

        assert_eq!(g.edge_count(), accepted);
        assert_eq!(g.edges().count(), accepted);
        assert!(g.edge_count() <= crate::max_edge_count(n));
        for edge in g.edges() {
            assert_ne!(edge.source, edge.destination);
            assert!(edge.source < n && edge.destination < n);
            assert_eq!(g.edges_from(edge.source).filter(|&(d, _)| d == edge.destination).count(), 1);
        }
    }
}
