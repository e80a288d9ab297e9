//! Search entry point and expansion loop.

use ladder_lexicon::loader::Candidate;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::mismatch_count;
use crate::node::{LadderNode, NodeId};
use crate::policy::SearchPolicy;
use crate::pool::CandidatePool;
use crate::trace::{ExpandEventV1, LadderTraceMetadata, LadderTraceV1, TerminationReasonV1};

/// Result of a search execution.
///
/// Always carries a complete [`LadderTraceV1`] regardless of how the
/// search terminated. Check [`SearchOutcome::found`] or inspect
/// `trace.metadata.termination_reason` to determine the outcome.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The goal node (if found).
    pub goal_node: Option<NodeId>,
    /// The ladder, ordered from the end word back to the start word,
    /// both inclusive. Empty when no ladder was found.
    pub path: Vec<String>,
    /// All nodes created during the search, indexed by `node_id`.
    pub nodes: Vec<LadderNode>,
    /// The complete search audit trail.
    pub trace: LadderTraceV1,
}

impl SearchOutcome {
    /// Returns `true` if the search terminated because the end word
    /// was reached.
    #[must_use]
    pub fn found(&self) -> bool {
        matches!(
            self.trace.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }
}

/// Run the best-first ladder search from `start` to `end` over the
/// supplied candidates.
///
/// The end word is appended to the candidate pool so it can be
/// discovered as a child; the goal test is word equality at pop time.
/// "No ladder exists" is a normal outcome (`found() == false`, empty
/// path), not an error.
///
/// # Errors
///
/// Returns [`SearchError::LengthMismatch`] if the start and end words
/// have different lengths. No search step is taken in that case.
pub fn search(
    start: &str,
    end: &str,
    candidates: Vec<Candidate>,
    policy: &SearchPolicy,
) -> Result<SearchOutcome, SearchError> {
    if start.len() != end.len() {
        return Err(SearchError::LengthMismatch {
            start_len: start.len(),
            end_len: end.len(),
        });
    }

    let mut pool = CandidatePool::new(candidates);
    pool.push_word(end.to_string());
    let initial_pool_size = pool.len() as u64;

    let mut nodes: Vec<LadderNode> = Vec::new();
    let mut frontier = Frontier::new();
    let mut expansions: Vec<ExpandEventV1> = Vec::new();
    let mut expansion_count: u64 = 0;
    let mut total_children_attached: u64 = 0;
    let mut total_duplicates_dropped: u64 = 0;

    let start_node = LadderNode {
        node_id: 0,
        parent_id: None,
        word: start.to_string(),
        g_cost: 0,
        h_cost: mismatch_count(start, end),
    };
    frontier.push(&start_node);
    nodes.push(start_node);

    let termination_reason;

    loop {
        if expansion_count >= policy.max_expansions {
            termination_reason = TerminationReasonV1::ExpansionBudgetExceeded;
            break;
        }

        let Some((node_id, pop_key)) = frontier.pop() else {
            termination_reason = TerminationReasonV1::FrontierExhausted;
            break;
        };

        if nodes[node_id].word == end {
            termination_reason = TerminationReasonV1::GoalReached { node_id };
            break;
        }

        let word = nodes[node_id].word.clone();
        let parent_g = nodes[node_id].g_cost;
        let claim = pool.claim_children(&word);
        total_duplicates_dropped += claim.duplicates_dropped;

        let mut attached = Vec::with_capacity(claim.children.len());
        for child_word in claim.children {
            let child = LadderNode {
                node_id: nodes.len(),
                parent_id: Some(node_id),
                g_cost: parent_g + 1,
                h_cost: mismatch_count(&child_word, end),
                word: child_word,
            };
            frontier.push(&child);
            attached.push(child.word.clone());
            nodes.push(child);
        }
        total_children_attached += attached.len() as u64;

        // The expansion log doubles as the closed set: a node enters it
        // exactly once, after its neighbors have been examined.
        expansions.push(ExpandEventV1 {
            expansion_order: expansion_count,
            node_id,
            word,
            pop_key,
            children: attached,
            duplicates_dropped: claim.duplicates_dropped,
        });
        expansion_count += 1;
    }

    let (goal_node, path) = match termination_reason {
        TerminationReasonV1::GoalReached { node_id } => {
            (Some(node_id), reconstruct_path(&nodes, node_id))
        }
        _ => (None, Vec::new()),
    };

    let trace = LadderTraceV1 {
        expansions,
        metadata: LadderTraceMetadata {
            start_word: start.to_string(),
            end_word: end.to_string(),
            initial_pool_size,
            total_expansions: expansion_count,
            total_children_attached,
            total_duplicates_dropped,
            frontier_high_water: frontier.high_water() as u64,
            termination_reason,
        },
    };

    Ok(SearchOutcome {
        goal_node,
        path,
        nodes,
        trace,
    })
}

/// Reconstruct the ladder by following parent links from the goal
/// node. Words are emitted from the goal word back to the start word
/// (the node with no parent), both inclusive.
#[must_use]
pub fn reconstruct_path(nodes: &[LadderNode], goal_node_id: NodeId) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(goal_node_id);

    while let Some(id) = current {
        path.push(nodes[id].word.clone());
        current = nodes[id].parent_id;
    }

    path
}
