//! Best-first frontier (the open set).
//!
//! `BinaryHeap` is a max-heap, so entries wrap their key in `Reverse`
//! to get min-heap behavior (lowest `f_cost` first).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, LadderNode, NodeId};

/// A frontier entry pairing a node id with its ordering key.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-ordered open set of discovered-but-unexpanded nodes.
///
/// Holds node ids only; the nodes themselves live in the search arena.
/// A node enters the frontier at most once per search (the candidate
/// pool guarantees a word is attached at most once), so no visited set
/// is needed here.
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: usize,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push a node onto the frontier.
    pub fn push(&mut self, node: &LadderNode) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node)),
            node_id: node.node_id,
        });
        let size = self.heap.len();
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best node (lowest key) with the key it was popped under.
    #[must_use]
    pub fn pop(&mut self) -> Option<(NodeId, FrontierKey)> {
        self.heap.pop().map(|e| (e.node_id, e.key.0))
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
