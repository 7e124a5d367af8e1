//! Error types for mageforge

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for mageforge
#[derive(Debug, Error)]
pub enum Error {
    /// A declarative spec that cannot be mapped onto a markup tree,
    /// e.g. a nested value under an attribute key.
    #[error("invalid spec: {0}")]
    InvalidSpec(String),

    /// An attribute rejected by the allowed-attribute schema of an element.
    #[error("attribute `{attribute}` rejected by element schema: {reason}")]
    SchemaViolation { attribute: String, reason: String },

    /// Bad caller input: malformed identifiers, versions, or colliding targets.
    #[error("{0}")]
    Validation(String),

    /// Filesystem failure while writing generated output.
    #[error("io failure at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec(message.into())
    }

    pub fn schema_violation(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for mageforge
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_violation_display() {
        let err = Error::schema_violation("cacheable", "expected a bool value");
        let display = err.to_string();
        assert!(display.contains("cacheable"));
        assert!(display.contains("expected a bool value"));
    }

    #[test]
    fn test_io_display_names_path() {
        let err = Error::io(
            "/tmp/etc/module.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/etc/module.xml"));
    }
}
