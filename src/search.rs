//! Quicksearch matching for script names and command-line history.
//!
//! The picker re-runs the filter on every keystroke, so matching is a
//! single allocation-light pass per candidate and the returned iterator is
//! lazy: the picker can stop pulling results as soon as its list is full.
//! Matching is a case-insensitive subsequence walk. There is no scoring;
//! results keep the candidate input order.

/// A candidate that survived the filter, with the character positions that
/// consumed the query (for highlight rendering in the picker).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateMatch<'a> {
    /// The candidate text, borrowed from the input list.
    pub text: &'a str,
    /// Character indices (not byte offsets) of the matched query
    /// characters, strictly increasing. Empty for an empty query.
    pub indices: Vec<usize>,
}

/// Compare two characters ignoring case.
///
/// One query character consumes exactly one candidate character, which
/// keeps the highlight indices aligned with the candidate's characters.
#[inline]
fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Check if a pattern is a fuzzy match for haystack (characters appear in
/// order, not necessarily contiguous).
pub fn is_fuzzy_match(haystack: &str, pattern: &str) -> bool {
    let mut pattern_chars = pattern.chars().peekable();
    for ch in haystack.chars() {
        if let Some(&p) = pattern_chars.peek() {
            if chars_eq_ignore_case(ch, p) {
                pattern_chars.next();
            }
        }
    }
    pattern_chars.peek().is_none()
}

/// Perform fuzzy matching and return the indices of matched characters.
///
/// Returns `(matched, indices)` where `matched` is true iff every pattern
/// character was found in order. The indices are character positions in
/// the haystack; when the pattern does not match, the indices are empty.
pub fn fuzzy_match_with_indices(haystack: &str, pattern: &str) -> (bool, Vec<usize>) {
    let mut indices = Vec::new();
    let mut pattern_chars = pattern.chars().peekable();

    for (idx, ch) in haystack.chars().enumerate() {
        if let Some(&p) = pattern_chars.peek() {
            if chars_eq_ignore_case(ch, p) {
                indices.push(idx);
                pattern_chars.next();
            }
        }
    }

    let matched = pattern_chars.peek().is_none();
    (matched, if matched { indices } else { Vec::new() })
}

/// Lazily filter `candidates` against `query`.
///
/// Yields a [`CandidateMatch`] for every candidate whose characters
/// contain the query as a case-insensitive subsequence, in candidate input
/// order. An empty query matches every candidate with no highlight
/// indices. Blank and whitespace-only candidates are never yielded.
///
/// The iterator examines one candidate per `next` call, so dropping it
/// early does no further work. Re-invoke the function to restart.
///
/// # Examples
///
/// ```
/// use launchscripts::search::fuzzy_filter;
///
/// let history = ["ls -la", "ls -l", "cd .."];
/// let matches: Vec<_> = fuzzy_filter("ls", &history).collect();
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].text, "ls -la");
/// assert_eq!(matches[0].indices, vec![0, 1]);
/// ```
pub fn fuzzy_filter<'a, S>(query: &str, candidates: &'a [S]) -> FuzzyMatches<'a, S>
where
    S: AsRef<str>,
{
    FuzzyMatches {
        query: query.to_owned(),
        candidates: candidates.iter(),
    }
}

/// Iterator returned by [`fuzzy_filter`].
pub struct FuzzyMatches<'a, S> {
    query: String,
    candidates: std::slice::Iter<'a, S>,
}

impl<'a, S: AsRef<str>> Iterator for FuzzyMatches<'a, S> {
    type Item = CandidateMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.candidates.next()?.as_ref();
            if candidate.trim().is_empty() {
                continue;
            }
            let (matched, indices) = fuzzy_match_with_indices(candidate, &self.query);
            if matched {
                return Some(CandidateMatch {
                    text: candidate,
                    indices,
                });
            }
        }
    }
}
