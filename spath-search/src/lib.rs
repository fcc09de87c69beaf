//! Shortest path search in a weighted directed graph.

pub use spath_heap::{Cost, INFINITE};

pub use self::dijkstra::{SearchRun, ShortestPathFinder};
pub use self::errors::SearchError;
pub use self::path::{Path, PathOutcome};
pub use self::sink::{NoopSink, RelaxationSink};

mod dijkstra;
mod errors;
mod path;
mod sink;
