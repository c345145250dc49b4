//! Error types and handling for the object store
//! Author: kartik4905

use std::result::Result as StdResult;

use thiserror::Error;

/// Custom result type for object store operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for object store operations
#[derive(Error, Debug)]
#[non_exhaustive]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// The caller asked for something that cannot work, e.g. a template path
    /// that does not exist.
    #[error("Usage error: {0}")]
    UsageError(String),

    #[error("Dependency mismatch: {0}")]
    DependencyMismatch(String),

    #[error("Template import error: {0}")]
    TemplateError(#[from] TemplateError),
}

impl Error {
    pub fn usage(msg: impl Into<String>) -> Self {
        Error::UsageError(msg.into())
    }

    /// True for every failure that means "the template could not be imported".
    pub fn is_template_error(&self) -> bool {
        matches!(self, Error::TemplateError(_))
    }
}

// -------------------- Sub-Error Categories --------------------

/// Reasons a template document could not be imported.
///
/// Whatever the underlying reader reported is folded into one of these, so callers
/// never see reader-specific error types.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TemplateError {
    #[error("Error reading template file ({0}). If you are sure it's a valid PDF, it may be a bug.")]
    Malformed(String),

    #[error("Template file contains unsupported PDF features: {0}")]
    Unsupported(String),
}

/// Failure signals raised by an [`ObjectSource`](crate::template::ObjectSource).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SourceError {
    #[error("malformed source: {0}")]
    Malformed(String),

    #[error("unsupported feature: {0}")]
    Unsupported(String),
}

impl From<SourceError> for TemplateError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Malformed(cause) => TemplateError::Malformed(cause),
            SourceError::Unsupported(cause) => TemplateError::Unsupported(cause),
        }
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::TemplateError(err.into())
    }
}

impl From<lopdf::Error> for SourceError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            // Valid PDF the reader cannot handle, as opposed to a broken file.
            lopdf::Error::Unimplemented(_)
            | lopdf::Error::UnsupportedSecurityHandler(_)
            | lopdf::Error::Decryption(_)
            | lopdf::Error::InvalidPassword => SourceError::Unsupported(err.to_string()),
            _ => SourceError::Malformed(err.to_string()),
        }
    }
}
