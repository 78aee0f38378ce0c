// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequence evaluation and search.

use thiserror::Error;

/// Errors surfaced by evaluation and search entry points.
///
/// Non-termination of a search is not an error: a target the relation
/// never produces simply never returns. Only precondition violations are
/// reported here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// No effective initial terms: the sequence was constructed without
    /// initial terms and none were supplied for the call.
    #[error(
        "sequence has no initial terms: supply them at construction, \
         via with_terms(), or explicitly per call"
    )]
    UninitializedTerms,

    /// The effective initial terms do not match the relation's arity.
    ///
    /// The relation indexes its window up to `expected` terms, so a
    /// shorter vector would read out of bounds and a longer one would
    /// silently ignore terms.
    #[error("initial terms hold {found} term(s) but the relation has arity {expected}")]
    ArityMismatch { expected: usize, found: usize },
}
