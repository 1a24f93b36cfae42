//! Command-line history bookkeeping.
//!
//! History entries are stored sorted and deduplicated, so the picker over
//! them is alphabetical rather than most-recent-first. Normalization runs
//! after every successful command-line run, right before the settings are
//! persisted.

/// Sort a command history lexicographically and collapse duplicates.
///
/// Idempotent. The output carries no recency information; two histories
/// with the same entries in any order and multiplicity normalize to the
/// same list.
pub fn normalize(history: &[String]) -> Vec<String> {
    let mut cleaned = history.to_vec();
    cleaned.sort();
    cleaned.dedup();
    cleaned
}
