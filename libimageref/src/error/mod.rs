//! Error types for image reference handling.
//!
//! All errors implement the standard Error trait and carry enough context
//! for callers to report what was wrong with the input. Failures are
//! deterministic: the same input always produces the same error.

use thiserror::Error;


/// Main error type for image reference operations.
#[derive(Error, Debug)]
pub enum ImageRefError {
    /// The input does not match the distribution-reference grammar
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A caller-supplied override tag fails grammar validation.
    ///
    /// Kept separate from [`ImageRefError::Validation`] so callers can
    /// report "bad tag" specifically instead of a generic parse failure.
    #[error("Invalid tag: {tag}")]
    InvalidTag { tag: String },

    /// The splitter input carries no tag separator
    #[error("Split error: {message}")]
    Split { message: String },

    /// An auth config blob is not valid base64 or valid JSON
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for image reference operations
pub type Result<T> = std::result::Result<T, ImageRefError>;

impl ImageRefError {
    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimageref::error::ImageRefError;
    ///
    /// let err = ImageRefError::validation("not a valid reference");
    /// assert!(matches!(err, ImageRefError::Validation { .. }));
    /// ```
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new validation error with a source error.
    pub fn validation_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new invalid-tag error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimageref::error::ImageRefError;
    ///
    /// let err = ImageRefError::invalid_tag("-12@3%44-");
    /// assert!(matches!(err, ImageRefError::InvalidTag { .. }));
    /// ```
    pub fn invalid_tag<S: Into<String>>(tag: S) -> Self {
        Self::InvalidTag { tag: tag.into() }
    }

    /// Creates a new split error.
    pub fn split<S: Into<String>>(message: S) -> Self {
        Self::Split {
            message: message.into(),
        }
    }

    /// Creates a new decode error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimageref::error::ImageRefError;
    ///
    /// let err = ImageRefError::decode("auth config is not valid base64");
    /// assert!(matches!(err, ImageRefError::Decode { .. }));
    /// ```
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new decode error with a source error.
    pub fn decode_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
