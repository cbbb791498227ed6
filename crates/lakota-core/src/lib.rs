//! Shared types and text utilities for the Lakota spell checker.
//!
//! - [`character`]: codepoint classification and single-character maps
//! - [`transform`]: case folding, ASCII folding, stress and glottal-stop
//!   transforms, ablaut marker helpers
//! - [`enums`]: word types, ablaut grades and length limits
//! - [`error`]: `ErrorKind` and `LkError`
//! - [`token`]: `WordSpan`

pub mod character;
pub mod enums;
pub mod error;
pub mod token;
pub mod transform;

pub use enums::{AblautGrade, DEFAULT_STRESS_POSITION, MAX_LINE_LEN, MAX_WORD_LEN, WordType};
pub use error::{ErrorKind, LkError, Result};
pub use token::WordSpan;
