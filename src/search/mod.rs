// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Target search over recurrence sequences.
//!
//! Built on the evaluator in [`crate::sequence`]. The search answers: how
//! many steps from rank 0 does the sequence take to first produce a given
//! target value, and what is the largest term seen on the way?
//!
//! Two forms:
//!
//! - [`Sequence::search_until`](crate::Sequence::search_until) — one run,
//!   stepping an incremental window of the last `k` terms.
//! - [`Sequence::search_many_until`](crate::Sequence::search_many_until) —
//!   a fork-join batch of independent runs over step-shifted initial
//!   terms, joined into a [`ResultTable`].
//!
//! Neither form bounds its own running time: a target the relation never
//! produces never returns. Supplying sequences believed to terminate, or
//! wrapping the call in an external timeout, is the caller's business.

pub mod batch;
pub mod single;

pub use batch::ResultTable;
pub use single::SearchResult;
