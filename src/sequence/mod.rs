// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recurrence sequence evaluator.
//!
//! A [`Sequence`] pairs initial terms with a fixed-arity [`Relation`] and
//! computes the term at any rank. Ranks below the initial-terms length are
//! read directly; later ranks are derived by recursing for the `k`
//! immediately preceding terms and applying the relation to them.
//!
//! # Evaluation cost
//!
//! [`Sequence::term_at`] is the definitional top-down recursion and is
//! deliberately unmemoized: evaluating rank `n` costs on the order of
//! `k^n` relation applications, and repeated calls recompute everything.
//! That is acceptable for spot checks at small ranks. The search
//! procedures in [`crate::search`] never iterate `term_at`; they maintain
//! a sliding window of the last `k` terms so that each step is O(1)
//! amortized while producing exactly the per-rank values `term_at` would.

pub mod errors;
pub mod relation;
pub mod terms;

pub use errors::SequenceError;
pub use relation::Relation;
pub use terms::TermVector;

/// A sequence defined by initial terms and a recurrence relation.
///
/// The pairing is immutable once constructed, except for
/// [`with_terms`](Sequence::with_terms), which replaces the stored initial
/// terms on the same instance.
///
/// # Example
///
/// ```
/// use recurrence_search::{Relation, Sequence, TermVector};
///
/// let mut seq = Sequence::from_relation(Relation::fibonacci());
/// let term = seq.with_terms(TermVector::from(vec![0, 1])).term_at(6).unwrap();
/// assert_eq!(term, 8);
/// ```
#[derive(Debug)]
pub struct Sequence {
    initial_terms: TermVector,
    relation: Relation,
}

impl Sequence {
    /// Create a sequence from initial terms and a recurrence relation.
    pub fn new(initial_terms: TermVector, relation: Relation) -> Self {
        Self {
            initial_terms,
            relation,
        }
    }

    /// Create a sequence from a relation alone, with no initial terms.
    ///
    /// Every evaluation fails with [`SequenceError::UninitializedTerms`]
    /// until terms are supplied via [`with_terms`](Sequence::with_terms)
    /// or passed explicitly per call.
    pub fn from_relation(relation: Relation) -> Self {
        Self::new(TermVector::new(), relation)
    }

    /// Replace the stored initial terms, returning the same instance for
    /// fluent chaining.
    pub fn with_terms(&mut self, initial_terms: TermVector) -> &mut Self {
        self.initial_terms = initial_terms;
        self
    }

    /// The stored initial terms (possibly empty).
    pub fn initial_terms(&self) -> &TermVector {
        &self.initial_terms
    }

    /// The recurrence relation.
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// Compute the term at rank `n` using the stored initial terms.
    pub fn term_at(&self, n: usize) -> Result<i64, SequenceError> {
        self.term_at_with(n, &TermVector::new())
    }

    /// Compute the term at rank `n`, preferring the explicit initial
    /// terms over the stored ones.
    ///
    /// `terms` is used when non-empty; otherwise the stored vector is the
    /// fallback. An empty effective vector fails with
    /// [`SequenceError::UninitializedTerms`], a vector whose length
    /// disagrees with the relation's arity with
    /// [`SequenceError::ArityMismatch`].
    pub fn term_at_with(&self, n: usize, terms: &TermVector) -> Result<i64, SequenceError> {
        let terms = self.effective_terms(terms)?;
        Ok(self.term_at_unchecked(n, terms))
    }

    /// Resolve and validate the initial terms for one call.
    ///
    /// The explicit argument wins when non-empty, else the stored vector.
    pub(crate) fn effective_terms<'a>(
        &'a self,
        explicit: &'a TermVector,
    ) -> Result<&'a TermVector, SequenceError> {
        let terms = if explicit.is_empty() {
            &self.initial_terms
        } else {
            explicit
        };

        if terms.is_empty() {
            return Err(SequenceError::UninitializedTerms);
        }
        if terms.len() != self.relation.arity() {
            return Err(SequenceError::ArityMismatch {
                expected: self.relation.arity(),
                found: terms.len(),
            });
        }

        Ok(terms)
    }

    /// Definitional recursion: assemble the `k` preceding terms in
    /// increasing rank order and apply the relation.
    ///
    /// `terms` has already been validated non-empty and arity-matched.
    fn term_at_unchecked(&self, n: usize, terms: &TermVector) -> i64 {
        let k = terms.len();
        if n < k {
            return terms[n];
        }

        let mut window = TermVector::with_capacity(k);
        for rank in (n - k)..n {
            window.push(self.term_at_unchecked(rank, terms));
        }

        self.relation.apply(&window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fibonacci() -> Sequence {
        Sequence::new(TermVector::from(vec![0, 1]), Relation::fibonacci())
    }

    #[test]
    fn test_initial_terms_read_directly() {
        let seq = fibonacci();
        assert_eq!(seq.term_at(0), Ok(0));
        assert_eq!(seq.term_at(1), Ok(1));
    }

    #[test]
    fn test_fibonacci_rank_six() {
        let seq = fibonacci();
        assert_eq!(seq.term_at(6), Ok(8));
    }

    #[test]
    fn test_recursion_matches_relation_of_preceding_terms() {
        let seq = fibonacci();
        for n in 2..10 {
            let expected = seq.term_at(n - 2).unwrap() + seq.term_at(n - 1).unwrap();
            assert_eq!(seq.term_at(n), Ok(expected));
        }
    }

    #[test]
    fn test_window_is_increasing_rank_order() {
        // A relation that only uses the most recent term reveals window
        // order: with window (u(n-2), u(n-1)) the sequence repeats the
        // second seed forever, with the reverse order it would alternate.
        let seq = Sequence::new(
            TermVector::from(vec![7, 9]),
            Relation::new(2, |window| window[1]),
        );
        assert_eq!(seq.term_at(2), Ok(9));
        assert_eq!(seq.term_at(3), Ok(9));
    }

    #[test]
    fn test_explicit_terms_override_stored() {
        let seq = fibonacci();
        let other = TermVector::from(vec![2, 3]);
        assert_eq!(seq.term_at_with(0, &other), Ok(2));
        assert_eq!(seq.term_at_with(3, &other), Ok(8)); // 2, 3, 5, 8
    }

    #[test]
    fn test_empty_explicit_falls_back_to_stored() {
        let seq = fibonacci();
        assert_eq!(seq.term_at_with(6, &TermVector::new()), Ok(8));
    }

    #[test]
    fn test_uninitialized_terms() {
        let seq = Sequence::from_relation(Relation::fibonacci());
        assert_eq!(seq.term_at(0), Err(SequenceError::UninitializedTerms));
        assert_eq!(
            seq.term_at_with(0, &TermVector::new()),
            Err(SequenceError::UninitializedTerms)
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let seq = Sequence::new(TermVector::from(vec![1, 2, 3]), Relation::fibonacci());
        assert_eq!(
            seq.term_at(0),
            Err(SequenceError::ArityMismatch {
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn test_with_terms_is_fluent() {
        let mut seq = Sequence::from_relation(Relation::fibonacci());
        let term = seq
            .with_terms(TermVector::from(vec![0, 1]))
            .term_at(6)
            .unwrap();
        assert_eq!(term, 8);
        assert_eq!(seq.initial_terms().as_slice(), &[0, 1]);
    }

    #[test]
    fn test_term_at_is_deterministic() {
        let seq = fibonacci();
        assert_eq!(seq.term_at(9), seq.term_at(9));
    }
}
