// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single search run: step until a target value is observed.
//!
//! The loop maintains a window of the last `k` computed terms and derives
//! each next term from it in O(1) amortized time. The per-rank values are
//! exactly those [`Sequence::term_at`] would produce; only the cost model
//! differs (linear in steps taken rather than exponential in rank).

use crate::sequence::{Sequence, SequenceError, TermVector};

/// Statistics from one search run.
///
/// Created once when the target is reached and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Number of steps from rank 0 until the target value was first
    /// observed. 0 when the rank-0 term already equals the target.
    ///
    /// This is a step count, not a revisited-state cycle detector.
    pub cycle_length: u64,

    /// Largest term over every rank visited, from rank 0 up to and
    /// including the rank at which the target appeared.
    pub max_term: i64,
}

impl Sequence {
    /// Step from rank 0 until the stored sequence produces `target`.
    ///
    /// Does not return if the relation never produces `target`; see the
    /// module docs of [`crate::search`].
    pub fn search_until(&self, target: i64) -> Result<SearchResult, SequenceError> {
        self.search_until_with(target, &TermVector::new())
    }

    /// Step from rank 0 until the sequence produces `target`, preferring
    /// the explicit initial terms over the stored ones.
    ///
    /// Same effective-terms resolution and errors as
    /// [`Sequence::term_at_with`].
    pub fn search_until_with(
        &self,
        target: i64,
        terms: &TermVector,
    ) -> Result<SearchResult, SequenceError> {
        let terms = self.effective_terms(terms)?;
        let k = terms.len();

        // Window of the last k terms in increasing rank order. It fills
        // from the initial terms during the first k-1 steps and holds
        // exactly ranks (rank-k)..rank thereafter.
        let mut window: Vec<i64> = Vec::with_capacity(k);
        let mut current = terms[0];
        window.push(current);

        let mut cycle_length: u64 = 0;
        let mut max_term = current;

        while current != target {
            cycle_length += 1;
            let rank = cycle_length as usize;

            current = if rank < k {
                terms[rank]
            } else {
                self.relation().apply(&window)
            };

            if window.len() == k {
                window.remove(0);
            }
            window.push(current);

            if current > max_term {
                max_term = current;
            }
        }

        Ok(SearchResult {
            cycle_length,
            max_term,
        })
    }
}
