//! Ladder Lexicon: word-source loading for the ladder search engine.
//!
//! This crate is the leaf of the workspace. It turns a raw line-oriented
//! text source into an ordered sequence of candidate words, excluding the
//! start and end words of a search (those are injected into the engine
//! directly). It does NOT depend on `ladder_search`.
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
//! - [`source::WordSource`] — trait for collaborators that produce ordered text lines
//! - [`source::FileSource`] / [`source::MemorySource`] — file-backed and in-memory sources
//! - [`loader::Candidate`] — a dictionary word eligible to join a search
//! - [`error::LexiconError`] — fatal configuration failures (unreadable source)

#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod source;
