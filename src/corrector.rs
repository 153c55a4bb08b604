//! Corrector orchestration: candidate generation, deduplication,
//! verification, ranking and top-K selection, plus the linear reference
//! oracle and the strategy-selection enum from SPEC_FULL.md §4.6.

use std::collections::HashSet;
use std::sync::Mutex;

use cachers::{Cache, LFUCache};
use rayon::prelude::*;

use crate::deletion;
use crate::edit_distance::EditDistance;
use crate::error::{CorrectorError, Result};
use crate::index::{IndexConfig, SymDeleteIndex};
use crate::suggestion::{rank_key, Suggestion};

/// Default LFU cache capacity for the symmetric-delete corrector, matching
/// the teacher's `SpellCorrector::cache`.
const SUGGESTION_CACHE_CAPACITY: usize = 10_000;

/// Shared operation set for every correction strategy (SPEC_FULL.md §4.6):
/// a tagged variant over concrete implementations, rather than a trait
/// object hierarchy, so the hot `correct` path stays monomorphic.
pub trait SpellingCorrector {
    /// Add a word to the dictionary. Fails with `DuplicateWord` if already
    /// present.
    fn add_word(&mut self, word: &str, frequency: u64) -> Result<()>;

    /// Return up to `top_k` ranked suggestions for `input`, verified under
    /// `max_edit_distance`. Fails with `DistanceOutOfRange` if
    /// `max_edit_distance` exceeds the build bound.
    fn correct(&self, input: &str, max_edit_distance: usize, top_k: usize) -> Result<Vec<Suggestion>>;

    /// Batch form: one `correct` call per input, fanned out over a `rayon`
    /// thread pool, order-preserving in the result `Vec`.
    fn correct_many(
        &self,
        inputs: &[String],
        max_edit_distance: usize,
        top_k: usize,
    ) -> Vec<Result<Vec<Suggestion>>>
    where
        Self: Sync,
    {
        inputs
            .par_iter()
            .map(|word| self.correct(word, max_edit_distance, top_k))
            .collect()
    }
}

/// The symmetric-delete corrector: the fast path, backed by `SymDeleteIndex`.
pub struct SymDeleteCorrector {
    index: SymDeleteIndex,
    cache: Mutex<LFUCache<String, Vec<Suggestion>>>,
}

impl SymDeleteCorrector {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            index: SymDeleteIndex::new(config),
            cache: Mutex::new(LFUCache::new(SUGGESTION_CACHE_CAPACITY)),
        }
    }

    pub fn from_entries<I>(config: IndexConfig, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut corrector = Self::new(config);
        for (line_no, (word, frequency)) in entries.into_iter().enumerate() {
            corrector.index.add(&word, frequency, line_no + 1)?;
        }
        Ok(corrector)
    }

    pub fn index(&self) -> &SymDeleteIndex {
        &self.index
    }

    /// Candidate generation + verification for one query, unbounded by
    /// `top_k` (the cache stores the full ranked set so any `top_k`
    /// requested later for the same `(input, max_edit_distance)` is a
    /// cache hit; see SPEC_FULL.md §4.4).
    fn compute(&self, input: &str, max_edit_distance: usize) -> Vec<Suggestion> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<Suggestion> = Vec::new();

        seen.insert(input.to_string());
        if let Some(frequency) = self.index.get_frequency(input) {
            candidates.push(Suggestion::new(input, 0, frequency));
        }

        if max_edit_distance > 0 {
            let mut verifier = EditDistance::new();
            let input_len = input.chars().count();
            let keys = deletion::enumerate(
                input,
                max_edit_distance,
                self.index.max_edit_distance(),
                self.index.prefix_cap(),
            );

            for key in keys {
                for candidate in self.index.lookup(&key) {
                    if seen.contains(candidate) {
                        continue;
                    }
                    seen.insert(candidate.clone());

                    let candidate_len = candidate.chars().count();
                    let len_diff = input_len.abs_diff(candidate_len);
                    if len_diff > max_edit_distance {
                        continue;
                    }

                    let distance = verifier.distance(input, candidate, max_edit_distance);
                    if distance >= 0 {
                        let frequency = self.index.get_frequency(candidate).unwrap_or(0);
                        candidates.push(Suggestion::new(candidate.clone(), distance as usize, frequency));
                    }
                }
            }
        }

        candidates.sort_by(rank_key);
        candidates
    }
}

impl SpellingCorrector for SymDeleteCorrector {
    fn add_word(&mut self, word: &str, frequency: u64) -> Result<()> {
        let line_no = self.index.words() + 1;
        self.index.add(word, frequency, line_no)?;
        self.cache.lock().unwrap().clear();
        Ok(())
    }

    fn correct(&self, input: &str, max_edit_distance: usize, top_k: usize) -> Result<Vec<Suggestion>> {
        if max_edit_distance > self.index.max_edit_distance() {
            return Err(CorrectorError::DistanceOutOfRange {
                requested: max_edit_distance,
                build_bound: self.index.max_edit_distance(),
            });
        }

        let cache_key = format!("{input}\u{1}{max_edit_distance}");
        if let Some(cached) = self.cache.lock().unwrap().get(&cache_key) {
            return Ok(cached.iter().take(top_k).cloned().collect());
        }

        let full = self.compute(input, max_edit_distance);
        self.cache.lock().unwrap().set(cache_key, full.clone());
        Ok(full.into_iter().take(top_k).collect())
    }
}

/// Brute-force reference corrector: iterates every dictionary entry,
/// verifying each against the query. Used as a correctness oracle; not the
/// default strategy wired into the REPL.
pub struct LinearCorrector {
    max_edit_distance: usize,
    words: Vec<String>,
    freq: std::collections::HashMap<String, u64>,
}

impl LinearCorrector {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            max_edit_distance,
            words: Vec::new(),
            freq: std::collections::HashMap::new(),
        }
    }

    pub fn from_entries<I>(max_edit_distance: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut corrector = Self::new(max_edit_distance);
        for (word, frequency) in entries {
            SpellingCorrector::add_word(&mut corrector, &word, frequency)?;
        }
        Ok(corrector)
    }
}

impl SpellingCorrector for LinearCorrector {
    fn add_word(&mut self, word: &str, frequency: u64) -> Result<()> {
        if self.freq.contains_key(word) {
            return Err(CorrectorError::DuplicateWord {
                word: word.to_string(),
                line_no: self.words.len() + 1,
            });
        }
        self.freq.insert(word.to_string(), frequency);
        self.words.push(word.to_string());
        Ok(())
    }

    fn correct(&self, input: &str, max_edit_distance: usize, top_k: usize) -> Result<Vec<Suggestion>> {
        if max_edit_distance > self.max_edit_distance {
            return Err(CorrectorError::DistanceOutOfRange {
                requested: max_edit_distance,
                build_bound: self.max_edit_distance,
            });
        }

        let mut verifier = EditDistance::new();
        let mut candidates: Vec<Suggestion> = Vec::new();
        for word in &self.words {
            let distance = verifier.distance(input, word, max_edit_distance);
            if distance >= 0 {
                let frequency = *self.freq.get(word).unwrap();
                candidates.push(Suggestion::new(word.clone(), distance as usize, frequency));
            }
        }
        candidates.sort_by(rank_key);
        Ok(candidates.into_iter().take(top_k).collect())
    }
}

/// Strategy selection behind one interface (SPEC_FULL.md §4.6), dispatched
/// via enum rather than a trait object to keep the hot lookup path
/// monomorphic.
pub enum CorrectorKind {
    SymDelete(SymDeleteCorrector),
    Linear(LinearCorrector),
}

impl SpellingCorrector for CorrectorKind {
    fn add_word(&mut self, word: &str, frequency: u64) -> Result<()> {
        match self {
            CorrectorKind::SymDelete(c) => c.add_word(word, frequency),
            CorrectorKind::Linear(c) => c.add_word(word, frequency),
        }
    }

    fn correct(&self, input: &str, max_edit_distance: usize, top_k: usize) -> Result<Vec<Suggestion>> {
        match self {
            CorrectorKind::SymDelete(c) => c.correct(input, max_edit_distance, top_k),
            CorrectorKind::Linear(c) => c.correct(input, max_edit_distance, top_k),
        }
    }
}
