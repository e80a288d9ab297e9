//! `LadderTraceV1`: expansion-event audit artifact.
//!
//! The engine records every frontier pop and the children it claimed.
//! The ordered event list doubles as the closed set (a node appears in
//! it exactly once, after expansion) and is the engine's observability
//! surface: same inputs, same trace, same digest.

use sha2::{Digest, Sha256};

use crate::node::{FrontierKey, NodeId};

/// Schema tag embedded in the rendered artifact.
pub const TRACE_SCHEMA_VERSION: &str = "ladder_trace_v1";

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The popped node's word matched the end word.
    GoalReached { node_id: NodeId },
    /// The open set emptied without matching the end word. This is the
    /// expected negative result, not an error.
    FrontierExhausted,
    /// The expansion budget ran out before either of the above.
    ExpansionBudgetExceeded,
}

/// A single frontier-pop + children-claim event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    /// The node that was expanded.
    pub node_id: NodeId,
    /// The expanded node's word.
    pub word: String,
    /// The frontier key at time of pop.
    pub pop_key: FrontierKey,
    /// Words claimed from the pool as children, in pool order.
    pub children: Vec<String>,
    /// Pool words identical to the expanded word, dropped without
    /// becoming children.
    pub duplicates_dropped: u64,
}

/// Aggregate metadata with run totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderTraceMetadata {
    pub start_word: String,
    pub end_word: String,
    /// Pool size at search start, including the injected end word.
    pub initial_pool_size: u64,
    pub total_expansions: u64,
    pub total_children_attached: u64,
    pub total_duplicates_dropped: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

/// The complete search audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderTraceV1 {
    /// Ordered expansion events (the normative decision surface).
    pub expansions: Vec<ExpandEventV1>,
    /// Aggregate metadata.
    pub metadata: LadderTraceMetadata,
}

impl LadderTraceV1 {
    /// Render the trace as JSON. `serde_json`'s default map keeps keys
    /// sorted, so the rendering is canonical without a separate
    /// canonicalization pass.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let expansions: Vec<serde_json::Value> = self
            .expansions
            .iter()
            .map(|e| {
                serde_json::json!({
                    "expansion_order": e.expansion_order,
                    "node_id": e.node_id,
                    "word": e.word,
                    "pop_key": {
                        "f_cost": e.pop_key.f_cost,
                        "g_cost": e.pop_key.g_cost,
                        "creation_order": e.pop_key.creation_order,
                    },
                    "children": e.children,
                    "duplicates_dropped": e.duplicates_dropped,
                })
            })
            .collect();

        let m = &self.metadata;
        serde_json::json!({
            "schema_version": TRACE_SCHEMA_VERSION,
            "expansions": expansions,
            "metadata": {
                "start_word": m.start_word,
                "end_word": m.end_word,
                "initial_pool_size": m.initial_pool_size,
                "total_expansions": m.total_expansions,
                "total_children_attached": m.total_children_attached,
                "total_duplicates_dropped": m.total_duplicates_dropped,
                "frontier_high_water": m.frontier_high_water,
                "termination_reason": termination_to_json(m.termination_reason),
            },
        })
    }

    /// Content digest over the canonical JSON bytes, formatted as
    /// `"sha256:<hex>"`.
    #[must_use]
    pub fn digest(&self) -> String {
        let bytes = self.to_json().to_string();
        let mut hasher = Sha256::new();
        hasher.update(bytes.as_bytes());
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

fn termination_to_json(reason: TerminationReasonV1) -> serde_json::Value {
    match reason {
        TerminationReasonV1::GoalReached { node_id } => serde_json::json!({
            "reason": "goal_reached",
            "node_id": node_id,
        }),
        TerminationReasonV1::FrontierExhausted => serde_json::json!({
            "reason": "frontier_exhausted",
        }),
        TerminationReasonV1::ExpansionBudgetExceeded => serde_json::json!({
            "reason": "expansion_budget_exceeded",
        }),
    }
}
