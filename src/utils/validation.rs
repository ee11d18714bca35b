//! Centralized validation and helper functions.

/// Maximum size of a single reference or query text, in bytes (DOS protection)
pub const MAX_TEXT_BYTES: usize = 4 * 1024 * 1024;

/// Maximum number of references a catalog may hold
pub const MAX_REFERENCES: usize = 10_000;

/// Maximum length of a reference name, in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty reference name provided")]
    EmptyName,
    #[error("Reference name too long: exceeds {MAX_NAME_LENGTH} characters")]
    NameTooLong,
    #[error("Invalid reference name: contains control characters")]
    InvalidName,
    #[error("Text too large: {size} bytes exceeds maximum of {MAX_TEXT_BYTES}")]
    TextTooLarge { size: usize },
    #[error("Too many references: maximum is {MAX_REFERENCES}")]
    TooManyReferences,
    #[error("Content appears to be binary, not text")]
    BinaryContent,
}

/// Validate a reference name.
///
/// Names are opaque labels, so only the obviously broken ones are rejected:
/// blank names, very long names and names containing control characters.
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` if the name is blank,
/// `ValidationError::NameTooLong` if it exceeds the limit, or
/// `ValidationError::InvalidName` if it contains control characters.
pub fn validate_reference_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::InvalidName);
    }

    Ok(())
}

/// Check that a text of `size` bytes is within [`MAX_TEXT_BYTES`].
///
/// # Errors
///
/// Returns `ValidationError::TextTooLarge` if the limit is exceeded.
pub fn check_text_size(size: usize) -> Result<(), ValidationError> {
    if size > MAX_TEXT_BYTES {
        Err(ValidationError::TextTooLarge { size })
    } else {
        Ok(())
    }
}

/// Check if adding another reference would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new reference.
///
/// # Errors
///
/// Returns `ValidationError::TooManyReferences` if adding would exceed the limit.
pub fn check_reference_limit(count: usize) -> Result<(), ValidationError> {
    if count >= MAX_REFERENCES {
        Err(ValidationError::TooManyReferences)
    } else {
        Ok(())
    }
}

/// Reject content that is clearly not text.
///
/// NUL bytes never occur in license text; their presence means a binary file
/// was passed by mistake.
///
/// # Errors
///
/// Returns `ValidationError::BinaryContent` if the content contains NUL bytes.
pub fn validate_text_content(content: &[u8]) -> Result<(), ValidationError> {
    if content.contains(&0) {
        return Err(ValidationError::BinaryContent);
    }
    Ok(())
}
