//! Indexed binary min-heap.

use crate::errors::{HeapError, Result};
use crate::{Cost, INFINITE};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct Slot {
    node: usize,
    cost: Cost,
}

/// Binary min-heap over node ids `0..capacity` with decrease-key.
///
/// Alongside the heap array the structure keeps the `position` of every node in that array,
/// so a node's cost can be found and decreased in `O(log n)` without searching.
/// Extracted nodes are parked past the end of the live part of the array,
/// so their position is always `>= len()`.
///
/// Node ids outside `0..capacity` are a contract violation and cause a panic.
#[derive(Clone, Debug)]
pub struct IndexedMinHeap {
    slots: Vec<Slot>,
    /// Maps node id to its index in `slots`.
    position: Vec<usize>,
    /// Number of live slots, i.e. `slots[..size]` is heap-ordered.
    size: usize,
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

impl IndexedMinHeap {
    /// Create a heap holding every node in `0..capacity`, all with infinite cost.
    pub fn new(capacity: usize) -> Self {
        IndexedMinHeap {
            slots: (0..capacity).map(|node| Slot { node, cost: INFINITE }).collect(),
            position: (0..capacity).collect(),
            size: capacity,
        }
    }

    /// Number of nodes still in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of nodes the heap was created with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether `node` was not extracted yet.
    #[inline]
    pub fn contains(&self, node: usize) -> bool {
        self.position[node] < self.size
    }

    /// Current cost of `node`. For extracted nodes this is the cost they were extracted with.
    #[inline]
    pub fn cost(&self, node: usize) -> Cost {
        self.slots[self.position[node]].cost
    }

    /// Lower the cost of a present node and restore heap order.
    ///
    /// Setting the same cost again is allowed and does nothing.
    pub fn decrease_key(&mut self, node: usize, new_cost: Cost) -> Result<()> {
        if !self.contains(node) {
            return Err(HeapError::NotPresent(node));
        }
        let mut index = self.position[node];
        let current = self.slots[index].cost;
        if new_cost > current {
            return Err(HeapError::CostIncrease { node, current, requested: new_cost });
        }

        self.slots[index].cost = new_cost;
        while index > 0 && self.slots[parent(index)].cost > self.slots[index].cost {
            let p = parent(index);
            self.swap(index, p);
            index = p;
        }

        self.debug_check();
        Ok(())
    }

    /// Remove the node with the lowest cost and return its id.
    pub fn extract_min(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }

        let min = self.slots[0].node;
        let last = self.size - 1;
        // The minimum goes to the end, where it stays out of the live range
        self.swap(0, last);
        self.size = last;
        self.sift_down(0);

        self.debug_check();
        Ok(min)
    }

    /// Swap two slots keeping `position` in sync.
    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.position[self.slots[a].node] = a;
        self.position[self.slots[b].node] = b;
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut smallest = index;
            // Right child is checked first, so it wins a tie with the left one
            let right = right_child(index);
            if right < self.size && self.slots[right].cost < self.slots[smallest].cost {
                smallest = right;
            }
            let left = left_child(index);
            if left < self.size && self.slots[left].cost < self.slots[smallest].cost {
                smallest = left;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(debug_assertions)]
    fn debug_check(&self) {
        for (index, slot) in self.slots.iter().enumerate() {
            debug_assert_eq!(self.position[slot.node], index, "position index out of sync");
        }
        for index in 1..self.size {
            debug_assert!(self.slots[parent(index)].cost <= self.slots[index].cost, "heap order broken");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn debug_check(&self) {}
}
