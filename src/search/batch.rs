// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Batched parallel search over step-shifted initial terms.
//!
//! The batch runner derives `n` initial-term vectors sequentially — each
//! one is the previous shifted by `step` — then forks one search task per
//! vector onto the rayon worker pool and joins on all of them. Each task
//! exclusively owns its snapshot; the relation is the only shared object
//! and is pure, so the runs proceed with no synchronization at all.
//!
//! Results are folded into a [`ResultTable`] after the join. Because the
//! table is keyed by the exact initial terms of each run, the caller sees
//! the same table whatever order the runs finished in.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::search::SearchResult;
use crate::sequence::{Sequence, SequenceError, TermVector};

/// Completed results of one batch run, keyed by the exact initial terms
/// each search started from.
///
/// Results sit behind [`Arc`] so a table entry and any external holder
/// share one allocation; the record lives until its last holder drops.
pub type ResultTable = BTreeMap<TermVector, Arc<SearchResult>>;

impl Sequence {
    /// Run `n` independent searches toward `target`, shifting the stored
    /// initial terms by `step` between runs.
    ///
    /// Run `i` starts from the stored terms with every element increased
    /// by `i * step`. All runs execute in parallel; the call returns only
    /// once every run has completed and its result is in the table.
    ///
    /// Fails with [`SequenceError::UninitializedTerms`] before launching
    /// anything when the stored terms are empty (and `n > 0`); no partial
    /// table is ever returned. `n == 0` yields an empty table.
    ///
    /// Like [`Sequence::search_until`], a run whose target is never
    /// produced never finishes, and neither does the batch.
    pub fn search_many_until(
        &self,
        n: usize,
        target: i64,
        step: i64,
    ) -> Result<ResultTable, SequenceError> {
        if n == 0 {
            return Ok(ResultTable::new());
        }

        // Snapshot generation is sequential: snapshot i must reflect
        // exactly i applications of the step before its run launches.
        let mut working = self.effective_terms(&TermVector::new())?.clone();
        let mut snapshots = Vec::with_capacity(n);
        for _ in 0..n {
            snapshots.push(working.clone());
            working.shift_by(step);
        }

        debug!(
            "forking {} searches toward {} from {} (step {})",
            n,
            target,
            snapshots[0],
            step
        );

        let entries = snapshots
            .into_par_iter()
            .map(|terms| {
                let result = self.search_until_with(target, &terms)?;
                Ok((terms, Arc::new(result)))
            })
            .collect::<Result<Vec<_>, SequenceError>>()?;

        debug!("all {} searches joined", n);

        Ok(entries.into_iter().collect())
    }
}
