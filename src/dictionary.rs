//! Dictionary file loading: the external collaborator that turns a text
//! file into `(word, frequency)` pairs, fail-fast on the first malformed
//! or duplicate line (SPEC_FULL.md §6/§7).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::{CorrectorError, MalformedReason, Result};

/// One parsed dictionary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    pub frequency: u64,
}

/// Read and parse a dictionary file. UTF-8 text, one `word frequency` pair
/// per line, split on whitespace runs. Fails fast on the first line with
/// fewer than two fields, an unparsable frequency, a duplicate word, or a
/// trailing blank line.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorrectorError::FileMissing {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut line_count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| CorrectorError::FileMissing {
            path: path.to_path_buf(),
            source,
        })?;
        line_count = line_no;

        if line.trim().is_empty() {
            return Err(CorrectorError::MalformedLine {
                line_no,
                raw: line,
                reason: MalformedReason::Blank,
            });
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(CorrectorError::MalformedLine {
                line_no,
                raw: line,
                reason: MalformedReason::TooFewFields,
            });
        }

        let word = fields[0].to_string();
        let frequency: u64 = fields[1].parse().map_err(|_| CorrectorError::MalformedLine {
            line_no,
            raw: line.clone(),
            reason: MalformedReason::UnparsableFrequency,
        })?;

        if !seen.insert(word.clone()) {
            return Err(CorrectorError::DuplicateWord { word, line_no });
        }

        entries.push(DictionaryEntry { word, frequency });
    }

    info!("loaded {} entries from {} lines in {path:?}", entries.len(), line_count);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_well_formed_entries() {
        let f = write_temp("the 100\nthey 50\nthem 40\n");
        let entries = load_dictionary(f.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], DictionaryEntry { word: "the".into(), frequency: 100 });
    }

    #[test]
    fn missing_file_fails() {
        let err = load_dictionary("/nonexistent/path/to/dictionary.txt").unwrap_err();
        assert!(matches!(err, CorrectorError::FileMissing { .. }));
    }

    #[test]
    fn too_few_fields_fails() {
        let f = write_temp("the 100\nthey\n");
        let err = load_dictionary(f.path()).unwrap_err();
        assert!(matches!(
            err,
            CorrectorError::MalformedLine { reason: MalformedReason::TooFewFields, line_no: 2, .. }
        ));
    }

    #[test]
    fn unparsable_frequency_fails() {
        let f = write_temp("the abc\n");
        let err = load_dictionary(f.path()).unwrap_err();
        assert!(matches!(
            err,
            CorrectorError::MalformedLine { reason: MalformedReason::UnparsableFrequency, .. }
        ));
    }

    #[test]
    fn duplicate_word_fails() {
        let f = write_temp("the 100\nthe 50\n");
        let err = load_dictionary(f.path()).unwrap_err();
        assert!(matches!(err, CorrectorError::DuplicateWord { line_no: 2, .. }));
    }

    #[test]
    fn trailing_blank_line_fails() {
        let f = write_temp("the 100\n\n");
        let err = load_dictionary(f.path()).unwrap_err();
        assert!(matches!(
            err,
            CorrectorError::MalformedLine { reason: MalformedReason::Blank, .. }
        ));
    }
}
