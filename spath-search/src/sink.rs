//! Observation of the search progress.

use spath_graph::NodeId;

/// Notified each time a relaxation improves the cost of `destination` via `source`.
///
/// Called after the search state was updated, the sink can't influence the search.
pub trait RelaxationSink {
    fn on_edge_relaxed(&mut self, source: NodeId, destination: NodeId);
}

/// Sink which ignores everything.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoopSink;

impl RelaxationSink for NoopSink {
    #[inline]
    fn on_edge_relaxed(&mut self, _source: NodeId, _destination: NodeId) {}
}

impl<F: FnMut(NodeId, NodeId)> RelaxationSink for F {
    fn on_edge_relaxed(&mut self, source: NodeId, destination: NodeId) {
        self(source, destination)
    }
}
