use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorrectorError>;

/// The five failure modes the core contract defines (see spec §7).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CorrectorError {
    #[error("dictionary file {path:?} is missing or unreadable: {source}")]
    FileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dictionary line {line_no} ({reason}): {raw:?}")]
    MalformedLine {
        line_no: usize,
        raw: String,
        reason: MalformedReason,
    },

    #[error("duplicate word {word:?} at line {line_no}")]
    DuplicateWord { word: String, line_no: usize },

    #[error("max edit distance {requested} exceeds build bound {build_bound}")]
    DistanceOutOfRange { requested: usize, build_bound: usize },

    #[error("word {0:?} is not present in the dictionary")]
    UnknownWord(String),
}

/// Why a dictionary line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    TooFewFields,
    UnparsableFrequency,
    Blank,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::TooFewFields => write!(f, "expected word and frequency fields"),
            MalformedReason::UnparsableFrequency => write!(f, "frequency is not a non-negative integer"),
            MalformedReason::Blank => write!(f, "trailing blank line"),
        }
    }
}
