//! Embed error types

use thiserror::Error;

/// Errors raised when an embed breaks Discord's size limits
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("Title exceeds maximum length of {limit} characters (got {actual})")]
    TitleTooLong { limit: usize, actual: usize },

    #[error("Description exceeds maximum length of {limit} characters (got {actual})")]
    DescriptionTooLong { limit: usize, actual: usize },

    #[error("Too many fields: maximum is {limit}, got {actual}")]
    TooManyFields { limit: usize, actual: usize },

    #[error("Field name exceeds maximum length of {limit} characters (got {actual})")]
    FieldNameTooLong { limit: usize, actual: usize },

    #[error("Field value exceeds maximum length of {limit} characters (got {actual})")]
    FieldValueTooLong { limit: usize, actual: usize },

    #[error("Footer text exceeds maximum length of {limit} characters (got {actual})")]
    FooterTextTooLong { limit: usize, actual: usize },

    #[error("Author name exceeds maximum length of {limit} characters (got {actual})")]
    AuthorNameTooLong { limit: usize, actual: usize },

    #[error("Total embed size exceeds maximum of {limit} characters (got {actual})")]
    TotalSizeTooLarge { limit: usize, actual: usize },
}

/// Hex color could not be interpreted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color {0:?}: expected 1 to 6 hex digits")]
    Malformed(String),
}

/// Timestamp text did not match `YYYY-MM-DD HH:MM:SS.ssss`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Invalid timestamp {0:?}: expected YYYY-MM-DD HH:MM:SS.ssss")]
    Malformed(String),
}
