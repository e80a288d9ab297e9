//! Ladder Search: deterministic best-first word-ladder search.
//!
//! Finds the shortest transformation sequence between two equal-length
//! words where each step changes exactly one letter and every
//! intermediate word belongs to a supplied dictionary. The search is
//! A* over the implicit one-letter-edit graph: the letter-mismatch
//! heuristic is admissible and consistent for that metric, and a word
//! leaves the candidate pool the moment it is claimed as a child, so
//! nodes are never reopened.
//!
//! # Crate dependency graph
//!
//! ```text
//! ladder_lexicon  ←  ladder_search  ←  ladder_benchmarks
//! (word sources)     (frontier, nodes)   (criterion benches)
//! ```
//!
//! # Key types
//!
//! - [`node::LadderNode`] — arena node with index-based parent links
//! - [`frontier::Frontier`] — min-ordered open set over [`node::FrontierKey`]
//! - [`pool::CandidatePool`] — dictionary words not yet attached to the tree
//! - [`search::SearchOutcome`] — found/not-found result, path, and trace
//! - [`trace::LadderTraceV1`] — expansion-event audit artifact
//! - [`ladder::find_shortest_ladder`] — top-level entry point

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod ladder;
pub mod node;
pub mod policy;
pub mod pool;
pub mod search;
pub mod trace;
