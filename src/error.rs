//! Unified error types for cpe-tools.
//!
//! Every fallible library operation returns [`CpeError`]. A failed parse never
//! yields a partially populated [`Cpe`](crate::Cpe).

use crate::parsers::CpeFormat;
use thiserror::Error;

/// Main error type for cpe-tools operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CpeError {
    /// Input did not start with `wfn:`, `cpe:/` or `cpe:2.3:`
    #[error("Unrecognized CPE format: {input:?} (expected 'wfn:', 'cpe:/' or 'cpe:2.3:')")]
    UnrecognizedFormat { input: String },

    /// Input carried a known prefix but violated that format's grammar
    #[error("Malformed {format}: {input:?}")]
    Malformed {
        format: CpeFormat,
        input: String,
        #[source]
        source: MalformedKind,
    },

    /// A version string could not be turned into a [`Version`](crate::Version)
    #[error("Invalid version {version:?}: {reason}")]
    InvalidVersion { version: String, reason: String },
}

/// Specific reasons a CPE string is malformed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKind {
    #[error("input does not start with the expected prefix")]
    MissingPrefix,

    #[error("expected exactly {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("at most {max} fields are allowed, found {found}")]
    TooManyFields { max: usize, found: usize },

    #[error("attribute '{0}' is defined more than once")]
    DuplicateAttribute(String),

    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("missing opening '['")]
    MissingBracket,

    #[error("missing closing ']'")]
    UnterminatedBracket,

    #[error("missing closing '\"'")]
    UnterminatedQuote,

    #[error("input ends with a lone escape character")]
    TrailingEscape,

    #[error("invalid attribute value '{0}' (expected ANY, NA or a quoted string)")]
    InvalidValue(String),

    #[error("expected 'name=value', found '{0}'")]
    MissingAssignment(String),

    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Convenient Result type for cpe-tools operations
pub type Result<T> = std::result::Result<T, CpeError>;

impl CpeError {
    /// Create an error for input with no known prefix
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::UnrecognizedFormat {
            input: input.into(),
        }
    }

    /// Create a malformed-input error for the given format
    pub fn malformed(format: CpeFormat, input: impl Into<String>, kind: MalformedKind) -> Self {
        Self::Malformed {
            format,
            input: input.into(),
            source: kind,
        }
    }

    /// Create an invalid-version error
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from an unknown prefix
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::UnrecognizedFormat { .. })
    }

    /// Returns true if this error came from a grammar violation
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Returns true if this error came from version construction
    #[must_use]
    pub const fn is_invalid_version(&self) -> bool {
        matches!(self, Self::InvalidVersion { .. })
    }

    /// The specific malformation, if this is a malformed-input error
    #[must_use]
    pub const fn malformed_kind(&self) -> Option<&MalformedKind> {
        match self {
            Self::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = CpeError::unrecognized("pkg:npm/left-pad");
        let display = err.to_string();
        assert!(display.contains("pkg:npm/left-pad"), "{display}");
        assert!(display.contains("cpe:2.3:"), "{display}");

        let err = CpeError::malformed(
            CpeFormat::FormattedString,
            "cpe:2.3:a",
            MalformedKind::FieldCount {
                expected: 11,
                found: 1,
            },
        );
        assert!(err.to_string().contains("formatted string"), "{err}");
    }

    #[test]
    fn test_malformed_source_chain() {
        let err = CpeError::malformed(
            CpeFormat::Wfn,
            "wfn:[part=\"a\",part=\"o\"]",
            MalformedKind::DuplicateAttribute("part".to_string()),
        );
        let source = err.source().expect("malformed errors carry a source");
        assert!(source.to_string().contains("'part'"));
        assert_eq!(
            err.malformed_kind(),
            Some(&MalformedKind::DuplicateAttribute("part".to_string()))
        );
    }

    #[test]
    fn test_predicates() {
        assert!(CpeError::unrecognized("x").is_unrecognized());
        assert!(CpeError::invalid_version("1.*.2", "wildcard").is_invalid_version());
        assert!(!CpeError::invalid_version("1.*.2", "wildcard").is_malformed());
        assert_eq!(CpeError::unrecognized("x").malformed_kind(), None);
    }
}
