//! Centralized error handling for rastime
//!
//! This module provides structured error types instead of a generic
//! `Box<dyn Error>`, so callers can match on what actually went wrong.

use std::fmt;

/// Main error type for rastime operations
#[derive(Debug)]
pub enum RastimeError {
    /// GDAL dataset or band operation errors
    GdalError(gdal::errors::GdalError),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Expected metadata key absent from a file's or band's metadata
    MetadataKeyNotFound { key: String, context: String },

    /// A date string matched none of the accepted layouts
    DateParse {
        input: String,
        attempts: Vec<(&'static str, chrono::format::ParseError)>,
    },

    /// An external command exited with a non-zero status
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },
}

impl fmt::Display for RastimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RastimeError::GdalError(e) => write!(f, "GDAL error: {}", e),
            RastimeError::IoError(e) => write!(f, "I/O error: {}", e),
            RastimeError::MetadataKeyNotFound { key, context } => {
                write!(f, "Metadata key '{}' not found in {}", key, context)
            }
            RastimeError::DateParse { input, attempts } => {
                write!(f, "Could not parse date '{}'", input)?;
                for (layout, err) in attempts {
                    write!(f, "; layout '{}': {}", layout, err)?;
                }
                Ok(())
            }
            RastimeError::CommandFailed {
                command,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "Command '{}' failed with exit code {}", command, code)?,
                    None => write!(f, "Command '{}' failed (terminated by signal)", command)?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr.trim_end())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RastimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RastimeError::GdalError(e) => Some(e),
            RastimeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<gdal::errors::GdalError> for RastimeError {
    fn from(error: gdal::errors::GdalError) -> Self {
        RastimeError::GdalError(error)
    }
}

impl From<std::io::Error> for RastimeError {
    fn from(error: std::io::Error) -> Self {
        RastimeError::IoError(error)
    }
}

/// Result type alias for rastime operations
pub type Result<T> = std::result::Result<T, RastimeError>;
