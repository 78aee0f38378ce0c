// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recurrence sequence evaluation and batched concurrent target search.
//!
//! This crate evaluates integer sequences defined by a recurrence relation
//! over a fixed-size window of prior terms, and computes statistics about
//! how such a sequence behaves until it first reaches a target value — the
//! Collatz/Syracuse family of "does this always reach 1" questions.
//!
//! # Architecture
//!
//! Two components, the second built on the first:
//!
//! ## Evaluator
//!
//! A [`Sequence`] pairs an ordered vector of initial terms with a
//! fixed-arity [`Relation`]. [`Sequence::term_at`] computes the term at any
//! rank: ranks below the initial-terms length are read directly, later
//! ranks recurse through the relation. The recursion is deliberately
//! unmemoized; it is the definitional form, not the workhorse.
//!
//! ## Search
//!
//! [`Sequence::search_until`] steps rank-by-rank with an incrementally
//! maintained window of the last `k` terms (O(1) amortized per step) until
//! the target value appears, reporting the step count and the maximum term
//! seen along the way as a [`SearchResult`].
//!
//! [`Sequence::search_many_until`] is the fork-join batch form: it derives
//! `n` initial-term vectors by repeated additive shifts, runs an
//! independent search for each on a worker pool, and joins them into a
//! [`ResultTable`] keyed by the exact vector each run started from.
//!
//! # Parallelization
//!
//! Batch runs share nothing mutable: each task exclusively owns its
//! initial-terms snapshot, and the relation is a pure function invoked
//! concurrently by all of them. The table the caller receives is identical
//! whatever order the runs finish in, since it is keyed by initial terms.
//!
//! # Example
//!
//! ```
//! use recurrence_search::{Relation, Sequence, TermVector};
//!
//! let seq = Sequence::new(TermVector::from(vec![6]), Relation::collatz());
//! let result = seq.search_until(1).unwrap();
//! assert_eq!(result.cycle_length, 8);
//! assert_eq!(result.max_term, 16);
//! ```

pub mod search;
pub mod sequence;

// Re-export commonly used types
pub use search::{ResultTable, SearchResult};
pub use sequence::{Relation, Sequence, SequenceError, TermVector};
