// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use recurrence_search::{Relation, Sequence, TermVector};

/// Initialize logging for a test, tolerating repeat initialization when
/// several tests run in one process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A Collatz sequence starting from the given value.
pub fn collatz_from(start: i64) -> Sequence {
    Sequence::new(TermVector::from(vec![start]), Relation::collatz())
}

/// Known Collatz statistics for small starts: (start, steps_to_one, max).
pub const COLLATZ_FACTS: &[(i64, u64, i64)] = &[
    (1, 0, 1),
    (2, 1, 2),
    (3, 7, 16),
    (4, 2, 4),
    (5, 5, 16),
    (6, 8, 16),
    (7, 16, 52),
    (27, 111, 9232),
];
