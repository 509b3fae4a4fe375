//! Error types for editor operations.
//!
//! Every failure in this crate is a local validation failure: a rejected
//! import, an oversized file, or an icon dialog confirmed without a choice.
//! The editor surfaces the latest one through a single message slot and
//! keeps going; nothing here aborts editing.

use thiserror::Error;

/// Errors that can occur during editor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Import was not a PNG, JPEG, or WebP image
    #[error("Only PNG, JPG, or WEBP images are accepted.")]
    UnsupportedFileType { name: String },

    /// Import exceeded the size ceiling
    #[error("File larger than 8MB. Use smaller images.")]
    FileTooLarge { name: String, size: u64 },

    /// Icon placement confirmed without choosing a template
    #[error("Choose an icon to create.")]
    NoIconChosen,
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
