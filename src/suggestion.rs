use std::cmp::Ordering;

/// A ranked correction candidate: `(word, edit distance, corpus frequency)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
    pub frequency: u64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, distance: usize, frequency: u64) -> Self {
        Self {
            word: word.into(),
            distance,
            frequency,
        }
    }
}

/// Ascending by distance, then descending by frequency, then ascending by
/// word. The word comparison is a deterministic tie-break shared by every
/// corrector strategy — without it, ties on both distance and frequency
/// would order candidates by each strategy's own internal traversal order,
/// and `SymDeleteCorrector` and `LinearCorrector` do not traverse candidates
/// in the same order (see DESIGN.md).
pub fn rank_key(a: &Suggestion, b: &Suggestion) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.frequency.cmp(&a.frequency))
        .then_with(|| a.word.cmp(&b.word))
}
