// Error types for the music crate.
//
// Only caller contract violations surface as errors: a string that is not a
// roman numeral, key name, or pitch. Unknown genres and duration symbols are
// well-typed input and resolve to fallbacks instead (see genre.rs and
// duration.rs).

use thiserror::Error;

/// A music-theory string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unknown roman numeral '{0}' (expected I..VII, all upper or all lower case)")]
    UnknownNumeral(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("unparseable pitch '{0}'")]
    BadPitch(String),
}

/// Failure while exporting a song.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Theory(#[from] TheoryError),
    #[error("tempo {0} BPM cannot be encoded")]
    Tempo(u32),
}
