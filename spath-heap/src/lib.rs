//! Binary min-heap addressed by node id.

pub use self::errors::HeapError;
pub use self::heap::IndexedMinHeap;

mod errors;
mod heap;

/// Path cost.
pub type Cost = u64;

/// Cost of a node which was not reached yet.
pub const INFINITE: Cost = Cost::MAX;
