//! Core error type for SPM operations
//!
//! Malformed markup is never an error in this crate: tags that fail to parse
//! stay in the text as literals and structural oddities are reported as
//! [`ParseIssue`](crate::parser::ParseIssue)s. `CoreError` covers the few
//! operations that can genuinely fail, chiefly saving text that Latin-1
//! cannot represent.
//!
//! # Examples
//!
//! ```rust
//! use spm_core::utils::errors::{CoreError, ErrorCategory};
//!
//! let err = CoreError::encoding(3, 'Ω');
//! assert_eq!(err.category(), ErrorCategory::Encoding);
//! assert!(err.to_string().contains("U+03A9"));
//! ```

use core::fmt;
use thiserror::Error;

/// Main error type for SPM core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Character outside the Latin-1 range found while encoding
    #[error("Cannot encode {character:?} (U+{:04X}) at position {position}: outside Latin-1", codepoint(.character))]
    Encoding { position: usize, character: char },

    /// Color value that is not `RRGGBB` or `RRGGBBAA` hex
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// Icon name missing from the asset table
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

fn codepoint(character: &char) -> u32 {
    u32::from(*character)
}

/// Error category for filtering and user interface organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Text could not be mapped back to bytes
    Encoding,
    /// A value had the wrong shape
    Format,
    /// Caller-supplied settings were rejected
    Config,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding => write!(f, "encoding"),
            Self::Format => write!(f, "format"),
            Self::Config => write!(f, "config"),
        }
    }
}

impl CoreError {
    /// Create encoding error for an unrepresentable character
    #[must_use]
    pub const fn encoding(position: usize, character: char) -> Self {
        Self::Encoding {
            position,
            character,
        }
    }

    /// Create color error from invalid format
    pub fn invalid_color<T: fmt::Display>(value: T) -> Self {
        Self::InvalidColor(value.to_string())
    }

    /// Create configuration error from message
    pub fn config<T: fmt::Display>(message: T) -> Self {
        Self::Config(message.to_string())
    }

    /// Category of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Encoding { .. } => ErrorCategory::Encoding,
            Self::InvalidColor(_) | Self::UnknownIcon(_) => ErrorCategory::Format,
            Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// Suggested fix for display next to the error message
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Encoding { .. } => {
                Some("Replace the character with a Latin-1 equivalent before saving")
            }
            Self::InvalidColor(_) => Some("Use RRGGBB or RRGGBBAA hex, e.g. ff0000 or ff000080"),
            Self::UnknownIcon(_) => Some("Use one of the PAD_*, WAIT, HM, DYNAMIC, SHAKE, WAVE icons"),
            Self::Config(_) => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_error_display() {
        let err = CoreError::encoding(12, '\u{2019}');
        let message = err.to_string();
        assert!(message.contains("U+2019"));
        assert!(message.contains("position 12"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn categories() {
        assert_eq!(CoreError::invalid_color("zz").category(), ErrorCategory::Format);
        assert_eq!(CoreError::config("bad").category(), ErrorCategory::Config);
        assert_eq!(ErrorCategory::Encoding.to_string(), "encoding");
    }

    #[test]
    fn color_suggestion_names_both_forms() {
        let suggestion = CoreError::invalid_color("zz").suggestion().unwrap();
        assert!(suggestion.contains("RRGGBB "));
        assert!(suggestion.contains("RRGGBBAA"));
    }
}
