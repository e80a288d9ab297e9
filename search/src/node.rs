//! Arena node and frontier ordering key.

/// Dense node identifier. Equals both the node's index in the search
/// arena and its creation order.
pub type NodeId = usize;

/// One candidate word attached to the search tree.
///
/// Nodes live in a flat arena owned by a single search invocation.
/// Parents are stored as indices, never as owning references, so the
/// parent graph is a forest rooted at the start node and cycle-free by
/// construction (a word leaves the candidate pool when it is claimed
/// and can never be attached twice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderNode {
    /// Index of this node in the arena.
    pub node_id: NodeId,
    /// Parent in the search tree; `None` for the start node only.
    pub parent_id: Option<NodeId>,
    /// The literal word; immutable once created.
    pub word: String,
    /// Edit steps from the start node along the path that attached
    /// this node (g).
    pub g_cost: u32,
    /// Mismatched letter positions against the end word (h), computed
    /// once when the node is scored.
    pub h_cost: u32,
}

impl LadderNode {
    /// Compute `f = g + h`, the frontier ordering estimate.
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, g_cost, creation_order)`.
///
/// Lowest `f_cost` first; ties broken by lowest `g_cost` — preferring
/// the node farther along a concrete path over one whose low estimate
/// is mostly speculative heuristic, which attaches children at the
/// shallowest available point — then by oldest `creation_order` for
/// determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u32,
    pub g_cost: u32,
    pub creation_order: NodeId,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.g_cost.cmp(&other.g_cost))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl From<&LadderNode> for FrontierKey {
    fn from(node: &LadderNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            g_cost: node.g_cost,
            creation_order: node.node_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_cost_is_sum_of_g_and_h() {
        let node = LadderNode {
            node_id: 0,
            parent_id: None,
            word: "test".into(),
            g_cost: 3,
            h_cost: 7,
        };
        assert_eq!(node.f_cost(), 10);
    }

    #[test]
    fn frontier_key_lower_f_cost_wins() {
        let a = FrontierKey {
            f_cost: 1,
            g_cost: 5,
            creation_order: 10,
        };
        let b = FrontierKey {
            f_cost: 2,
            g_cost: 0,
            creation_order: 1,
        };
        assert!(a < b, "lower f_cost should sort first");
    }

    #[test]
    fn frontier_key_ties_broken_by_g_then_creation_order() {
        let a = FrontierKey {
            f_cost: 3,
            g_cost: 2,
            creation_order: 5,
        };
        let b = FrontierKey {
            f_cost: 3,
            g_cost: 3,
            creation_order: 1,
        };
        assert!(a < b, "lower g_cost should sort first on f_cost tie");

        let c = FrontierKey {
            f_cost: 3,
            g_cost: 2,
            creation_order: 3,
        };
        assert!(
            c < a,
            "older creation_order should sort first on f_cost+g_cost tie"
        );
    }

    #[test]
    fn frontier_key_from_node() {
        let node = LadderNode {
            node_id: 4,
            parent_id: Some(2),
            word: "pest".into(),
            g_cost: 1,
            h_cost: 2,
        };
        let key = FrontierKey::from(&node);
        assert_eq!(key.f_cost, 3);
        assert_eq!(key.g_cost, 1);
        assert_eq!(key.creation_order, 4);
    }
}
