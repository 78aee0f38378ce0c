// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! TermVector type for ordered runs of sequence terms.
//!
//! A TermVector holds signed 64-bit terms in rank order: index 0 is the
//! oldest (rank 0) term. The same type serves as the initial terms of a
//! [`Sequence`](crate::Sequence) and as the window of recent terms handed
//! to a [`Relation`](crate::Relation).
//!
//! The derived `Ord` is lexicographic, which is what lets a TermVector key
//! the batch-search result table.
//!
//! # Examples
//!
//! ```
//! use recurrence_search::TermVector;
//!
//! let mut terms = TermVector::from(vec![6, 7]);
//! terms.shift_by(2);
//! assert_eq!(terms.as_slice(), &[8, 9]);
//! assert!(terms < TermVector::from(vec![8, 10]));
//! ```

use std::fmt;
use std::ops::Deref;

/// An ordered vector of sequence terms, indexed by rank.
///
/// Equality is element-wise and ordering is lexicographic, so two runs of
/// a batch search that started from different shifts never collide as map
/// keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermVector(Vec<i64>);

impl TermVector {
    /// Create an empty term vector.
    ///
    /// A sequence holding an empty vector cannot be evaluated until terms
    /// are supplied (see
    /// [`SequenceError::UninitializedTerms`](crate::SequenceError)).
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty term vector with room for `capacity` terms.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Number of terms held.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether no terms are held.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a term at the next rank.
    pub fn push(&mut self, term: i64) {
        self.0.push(term);
    }

    /// View the terms as a slice in rank order.
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Add `step` to every term in place.
    ///
    /// This is how the batch runner derives the initial terms of run `i+1`
    /// from those of run `i`.
    pub fn shift_by(&mut self, step: i64) {
        for term in &mut self.0 {
            *term += step;
        }
    }

    /// Return a copy with `step` added to every term.
    pub fn shifted_by(&self, step: i64) -> Self {
        let mut shifted = self.clone();
        shifted.shift_by(step);
        shifted
    }
}

impl Deref for TermVector {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for TermVector {
    fn from(terms: Vec<i64>) -> Self {
        Self(terms)
    }
}

impl From<&[i64]> for TermVector {
    fn from(terms: &[i64]) -> Self {
        Self(terms.to_vec())
    }
}

impl FromIterator<i64> for TermVector {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TermVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, "]")
    }
}
