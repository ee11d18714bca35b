use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::utils::validation::{
    check_text_size, validate_text_content, ValidationError, MAX_TEXT_BYTES,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Read a text file, or standard input when `path` is `-`
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, `ParseError::Invalid`
/// if it is larger than [`MAX_TEXT_BYTES`] or looks binary, or
/// `ParseError::InvalidUtf8` if it is not UTF-8.
pub fn read_text(path: &Path) -> Result<String, ParseError> {
    if path.as_os_str() == STDIN_PATH {
        let stdin = std::io::stdin();
        let handle = stdin.lock();
        return read_text_from(handle, "<stdin>");
    }

    let metadata = std::fs::metadata(path)?;
    check_text_size(usize::try_from(metadata.len()).unwrap_or(usize::MAX))?;

    let file = std::fs::File::open(path)?;
    read_text_from(file, &path.display().to_string())
}

/// Read text from any reader, enforcing the same limits as [`read_text`]
///
/// # Errors
///
/// Returns the same errors as [`read_text`]; `source` only labels UTF-8 errors.
pub fn read_text_from<R: Read>(reader: R, source: &str) -> Result<String, ParseError> {
    // One byte past the limit is enough to tell an oversized input apart
    let limit = u64::try_from(MAX_TEXT_BYTES).unwrap_or(u64::MAX) + 1;
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;

    check_text_size(bytes.len())?;
    parse_text_bytes(bytes, source)
}

/// Validate raw bytes as text
///
/// # Errors
///
/// Returns `ParseError::Invalid` for binary content or `ParseError::InvalidUtf8`
/// if the bytes are not UTF-8.
pub fn parse_text_bytes(bytes: Vec<u8>, source: &str) -> Result<String, ParseError> {
    validate_text_content(&bytes)?;
    String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8(source.to_string()))
}
