// Error kinds and the shared error type

use std::fmt;

/// Stable classification of every failure the library reports.
///
/// The integer codes are part of the C ABI. Code 0 is reserved for success
/// and codes 2 (end of file), 9 (exact match) and 11 (comment line) are
/// signalled through return values rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An I/O error occurred while reading a lexicon.
    FileRead,
    /// A lexicon could not be opened.
    InvalidFile,
    /// A form would exceed the maximum word length.
    BufferTooSmall,
    /// Malformed text: undecodable bytes or a malformed article.
    InvalidString,
    /// An argument was missing or out of range.
    InvalidArgument,
    /// An allocation failed.
    OutOfMemory,
    /// The word has no spelling in the index.
    WordNotFound,
    /// An unknown ablaut grade letter.
    InvalidConjugation,
    /// A verb article ends after its contraction.
    IncompleteVerb,
}

impl ErrorKind {
    /// Positive integer code of this kind.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::FileRead => 1,
            ErrorKind::InvalidFile => 3,
            ErrorKind::BufferTooSmall => 4,
            ErrorKind::InvalidString => 5,
            ErrorKind::InvalidArgument => 6,
            ErrorKind::OutOfMemory => 7,
            ErrorKind::WordNotFound => 8,
            ErrorKind::InvalidConjugation => 10,
            ErrorKind::IncompleteVerb => 12,
        }
    }

    /// Short human-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::FileRead => "file read error",
            ErrorKind::InvalidFile => "invalid file",
            ErrorKind::BufferTooSmall => "buffer too small",
            ErrorKind::InvalidString => "invalid string",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::OutOfMemory => "out of memory",
            ErrorKind::WordNotFound => "word not found",
            ErrorKind::InvalidConjugation => "invalid conjugation",
            ErrorKind::IncompleteVerb => "incomplete verb",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type shared by every crate of the workspace.
#[derive(Debug, thiserror::Error)]
pub enum LkError {
    #[error("failed to read lexicon: {0}")]
    Read(#[from] std::io::Error),

    #[error("cannot open lexicon {path}: {source}")]
    InvalidFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("form `{form}` does not fit in {limit} bytes")]
    BufferTooSmall { form: String, limit: usize },

    #[error("line {line} is longer than {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("invalid string: {0}")]
    InvalidString(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("out of memory while {0}")]
    OutOfMemory(&'static str),

    #[error("unknown ablaut grade `{0}`")]
    InvalidConjugation(char),

    #[error("verb article has no base form after its contraction: {0}")]
    IncompleteVerb(String),

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<LkError>,
    },
}

impl LkError {
    /// The stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LkError::Read(_) => ErrorKind::FileRead,
            LkError::InvalidFile { .. } => ErrorKind::InvalidFile,
            LkError::BufferTooSmall { .. } | LkError::LineTooLong { .. } => {
                ErrorKind::BufferTooSmall
            }
            LkError::InvalidString(_) => ErrorKind::InvalidString,
            LkError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LkError::OutOfMemory(_) => ErrorKind::OutOfMemory,
            LkError::InvalidConjugation(_) => ErrorKind::InvalidConjugation,
            LkError::IncompleteVerb(_) => ErrorKind::IncompleteVerb,
            LkError::AtLine { source, .. } => source.kind(),
        }
    }
}

impl From<std::str::Utf8Error> for LkError {
    fn from(e: std::str::Utf8Error) -> Self {
        LkError::InvalidString(e.to_string())
    }
}

impl From<std::collections::TryReserveError> for LkError {
    fn from(_: std::collections::TryReserveError) -> Self {
        LkError::OutOfMemory("growing a buffer")
    }
}

pub type Result<T, E = LkError> = std::result::Result<T, E>;
