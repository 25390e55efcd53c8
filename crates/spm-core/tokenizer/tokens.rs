//! Token definitions for SPM script tokenization
//!
//! Tokens own their text because the block parser may split a header token
//! and push the remainder back as a fresh token.

use super::stage::is_stage_identifier;
use super::trim_script;
use core::fmt;

/// Token produced by the SPM tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind discriminant
    pub kind: TokenKind,

    /// Trimmed, non-empty token text
    pub text: String,

    /// Line number where the token starts (1-based)
    pub line: usize,
}

impl Token {
    /// Create token, classifying it from its text
    ///
    /// The text is trimmed; callers must not pass whitespace-only text.
    #[must_use]
    pub fn new(text: &str, line: usize) -> Self {
        let text = trim_script(text);
        Self {
            kind: TokenKind::classify(text),
            text: text.to_owned(),
            line,
        }
    }

    /// Check if this token starts a new bubble block
    #[must_use]
    pub const fn is_stage(&self) -> bool {
        matches!(self.kind, TokenKind::Stage)
    }

    /// Check if this token starts with a bracket tag
    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self.kind, TokenKind::Tag)
    }

    /// Token text as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} '{}'", self.kind, self.line, self.text)
    }
}

/// Semantic token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Whole token is a stage identifier (`stg1_1_000`)
    Stage,

    /// Token begins with `<`, a tag possibly followed by text
    Tag,

    /// Prose or anything else
    Text,
}

impl TokenKind {
    /// Classify trimmed token text
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if is_stage_identifier(text) {
            Self::Stage
        } else if text.starts_with('<') {
            Self::Tag
        } else {
            Self::Text
        }
    }
}
