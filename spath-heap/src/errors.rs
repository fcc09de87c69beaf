use thiserror::Error;

use crate::Cost;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum HeapError {
    #[error("Heap is empty")]
    Empty,

    #[error("Node {0} was already extracted from the heap")]
    NotPresent(usize),

    #[error("Cost of node {node} can't be increased from {current} to {requested}")]
    CostIncrease { node: usize, current: Cost, requested: Cost },
}

pub(crate) type Result<T> = std::result::Result<T, HeapError>;
