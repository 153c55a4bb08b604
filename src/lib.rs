//! Symmetric-delete spelling correction.
//!
//! Given a misspelled input token, [`corrector::SpellingCorrector::correct`]
//! returns up to `top_k` dictionary words ranked by edit distance
//! (ascending) then corpus frequency (descending). See `SPEC_FULL.md` for
//! the full contract.
//!
//! The fast path builds a [`index::SymDeleteIndex`] once from a dictionary
//! file ([`dictionary::load_dictionary`]) and verifies candidates with a
//! bounded OSA [`edit_distance::EditDistance`]; [`corrector::LinearCorrector`]
//! is the brute-force oracle used to test it against.

pub mod corrector;
pub mod deletion;
pub mod dictionary;
pub mod edit_distance;
pub mod error;
pub mod index;
pub mod memory;
pub mod suggestion;

pub use corrector::{CorrectorKind, LinearCorrector, SpellingCorrector, SymDeleteCorrector};
pub use dictionary::{load_dictionary, DictionaryEntry};
pub use edit_distance::EditDistance;
pub use error::{CorrectorError, Result};
pub use index::{IndexConfig, SymDeleteIndex};
pub use suggestion::Suggestion;

/// Build a [`SymDeleteCorrector`] directly from a dictionary file, the
/// common entry point for hosts (see `demos/repl.rs`).
pub fn build_from_file(
    path: impl AsRef<std::path::Path>,
    max_edit_distance: usize,
    prefix_cap: Option<usize>,
) -> Result<SymDeleteCorrector> {
    let entries = load_dictionary(path)?;
    SymDeleteCorrector::from_entries(
        IndexConfig {
            max_edit_distance,
            prefix_cap,
        },
        entries.into_iter().map(|e| (e.word, e.frequency)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn build_from_file_round_trips_a_query() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "the 100").unwrap();
        writeln!(f, "they 50").unwrap();
        writeln!(f, "them 40").unwrap();
        writeln!(f, "then 30").unwrap();

        let corrector = build_from_file(f.path(), 2, Some(7)).unwrap();
        let got = corrector.correct("teh", 2, 3).unwrap();
        assert_eq!(got[0].word, "the");
        assert_eq!(got[0].distance, 1);
    }
}
