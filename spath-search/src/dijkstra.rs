//! Dijkstra search over an adjacency list.

use log::{debug, trace};

use spath_graph::{AdjacencyList, NodeId};
use spath_heap::{Cost, IndexedMinHeap, INFINITE};

use crate::errors::{Result, SearchError};
use crate::path::{Path, PathOutcome};
use crate::sink::{NoopSink, RelaxationSink};

/// Shortest path finder bound to a graph.
///
/// Edge weights are non-negative by construction (`Weight` is unsigned),
/// which is what makes extracting a node final.
#[derive(Copy, Clone, Debug)]
pub struct ShortestPathFinder<'g> {
    graph: &'g AdjacencyList,
}

/// Costs and predecessors computed by one single-source search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchRun {
    source: NodeId,
    costs: Vec<Cost>,
    predecessors: Vec<Option<NodeId>>,
}

impl<'g> ShortestPathFinder<'g> {
    pub fn new(graph: &'g AdjacencyList) -> Self {
        ShortestPathFinder { graph }
    }

    /// Find the shortest path from `source` to `destination`.
    pub fn find(&self, source: NodeId, destination: NodeId) -> Result<PathOutcome> {
        self.find_with_sink(source, destination, &mut NoopSink)
    }

    /// Same as `find()`, reporting every relaxed edge to `sink`.
    pub fn find_with_sink<S: RelaxationSink + ?Sized>(&self, source: NodeId, destination: NodeId, sink: &mut S) -> Result<PathOutcome> {
        self.check_node(source)?;
        self.check_node(destination)?;
        let run = self.run_with_sink(source, sink)?;
        let outcome = run.path_to(destination)?;
        match &outcome {
            PathOutcome::Found(path) => debug!("shortest path {} -> {}: {}", source, destination, path),
            PathOutcome::NoPath { .. } => debug!("no path {} -> {}", source, destination),
        }
        Ok(outcome)
    }

    /// Compute costs from `source` to every node.
    pub fn run(&self, source: NodeId) -> Result<SearchRun> {
        self.run_with_sink(source, &mut NoopSink)
    }

    /// Same as `run()`, reporting every relaxed edge to `sink`.
    pub fn run_with_sink<S: RelaxationSink + ?Sized>(&self, source: NodeId, sink: &mut S) -> Result<SearchRun> {
        self.check_node(source)?;

        let node_count = self.graph.node_count();
        let mut costs = vec![INFINITE; node_count];
        let mut predecessors = vec![None; node_count];
        let mut frontier = IndexedMinHeap::new(node_count);

        costs[source] = 0;
        frontier.decrease_key(source, 0)?;

        while !frontier.is_empty() {
            let u = frontier.extract_min()?;
            let u_cost = costs[u];
            trace!("extracted node {} with cost {}", u, u_cost);
            if u_cost == INFINITE {
                // Everything left in the frontier is unreachable
                continue;
            }

            for (v, weight) in self.graph.edges_from(u) {
                if !frontier.contains(v) {
                    continue;
                }
                let v_cost = u_cost.saturating_add(Cost::from(weight));
                if v_cost < costs[v] {
                    costs[v] = v_cost;
                    predecessors[v] = Some(u);
                    frontier.decrease_key(v, v_cost)?;
                    trace!("relaxed {} -> {}, new cost {}", u, v, v_cost);
                    sink.on_edge_relaxed(u, v);
                }
            }
        }

        Ok(SearchRun { source, costs, predecessors })
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.graph.node_exists(node) {
            Ok(())
        } else {
            Err(SearchError::OutOfRange { node, node_count: self.graph.node_count() })
        }
    }
}

impl SearchRun {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Cost of the shortest path to `node`, `INFINITE` if unreachable. Panics if `node` is out of range.
    pub fn cost(&self, node: NodeId) -> Cost {
        self.costs[node]
    }

    /// Previous node on the shortest path to `node`. `None` for the source and unreachable nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node]
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.costs[node] != INFINITE
    }

    pub fn costs(&self) -> &[Cost] {
        &self.costs
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    /// Rebuild the path to `destination` by walking predecessors back to the source.
    pub fn path_to(&self, destination: NodeId) -> Result<PathOutcome> {
        if destination >= self.costs.len() {
            return Err(SearchError::OutOfRange { node: destination, node_count: self.costs.len() });
        }
        if destination != self.source && self.predecessors[destination].is_none() {
            return Ok(PathOutcome::NoPath { source: self.source, destination });
        }

        let mut nodes = Vec::new();
        let mut cur = destination;
        while cur != self.source {
            nodes.push(cur);
            match self.predecessors[cur] {
                Some(prev) => cur = prev,
                None => unreachable!("predecessor chain of a reached node ends at the source"),
            }
        }
        nodes.push(self.source);
        nodes.reverse();

        Ok(PathOutcome::Found(Path::new(nodes, self.costs[destination])))
    }
}
