// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-arity recurrence relation functions.
//!
//! A [`Relation`] wraps a pure function from a window of the `arity` most
//! recent terms to the next term. The window is passed in increasing rank
//! order: `window[0]` is the oldest of the `arity` terms, `window[arity-1]`
//! the most recent.
//!
//! The function must be pure — the batch search invokes it concurrently
//! from independent worker tasks with no synchronization.
//!
//! # Examples
//!
//! The Fibonacci relation `u(n) = u(n-2) + u(n-1)`:
//!
//! ```
//! use recurrence_search::Relation;
//!
//! let fib = Relation::new(2, |window| window[0] + window[1]);
//! assert_eq!(fib.arity(), 2);
//! ```

use std::fmt;

/// A recurrence relation of fixed arity.
///
/// The declared arity must match the length of any initial-terms vector
/// the relation is evaluated against; the evaluator checks this on every
/// entry point and fails with
/// [`SequenceError::ArityMismatch`](crate::SequenceError) on disagreement,
/// so the function body may index `window[0..arity]` freely.
pub struct Relation {
    arity: usize,
    func: Box<dyn Fn(&[i64]) -> i64 + Send + Sync>,
}

impl Relation {
    /// Create a relation from its arity and a pure function of the last
    /// `arity` terms in increasing rank order.
    pub fn new<F>(arity: usize, func: F) -> Self
    where
        F: Fn(&[i64]) -> i64 + Send + Sync + 'static,
    {
        Self {
            arity,
            func: Box::new(func),
        }
    }

    /// The Collatz (Syracuse) relation: halve an even term, otherwise
    /// triple it and add one. Arity 1.
    pub fn collatz() -> Self {
        Self::new(1, |window| {
            let term = window[0];
            if term % 2 == 0 {
                term / 2
            } else {
                3 * term + 1
            }
        })
    }

    /// The Fibonacci relation `u(n) = u(n-2) + u(n-1)`. Arity 2.
    pub fn fibonacci() -> Self {
        Self::new(2, |window| window[0] + window[1])
    }

    /// Number of preceding terms the relation consumes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Apply the relation to a window of the last `arity` terms.
    ///
    /// Callers guarantee `window.len() == self.arity()`; the public entry
    /// points on [`Sequence`](crate::Sequence) validate this before any
    /// evaluation starts.
    pub(crate) fn apply(&self, window: &[i64]) -> i64 {
        debug_assert_eq!(window.len(), self.arity);
        (self.func)(window)
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relation")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_sees_increasing_rank_order() {
        let second_of_two = Relation::new(2, |window| window[1]);
        assert_eq!(second_of_two.apply(&[10, 20]), 20);
    }

    #[test]
    fn test_collatz_relation() {
        let collatz = Relation::collatz();
        assert_eq!(collatz.arity(), 1);
        assert_eq!(collatz.apply(&[6]), 3);
        assert_eq!(collatz.apply(&[3]), 10);
        assert_eq!(collatz.apply(&[16]), 8);
        assert_eq!(collatz.apply(&[1]), 4);
    }

    #[test]
    fn test_fibonacci_relation() {
        let fib = Relation::fibonacci();
        assert_eq!(fib.arity(), 2);
        assert_eq!(fib.apply(&[3, 5]), 8);
    }

    #[test]
    fn test_debug_does_not_require_fn_debug() {
        let rel = Relation::new(1, |w| w[0]);
        let text = format!("{:?}", rel);
        assert!(text.contains("arity: 1"));
    }
}
