//! Parse issue types for recoverable parsing problems
//!
//! The block parser never fails. Anything suspicious it had to step around is
//! recorded as a [`ParseIssue`] so editors and the `check` command can point
//! at it, while the blocks themselves are still produced.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parse issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum IssueSeverity {
    /// Information that may be useful but doesn't affect the result
    Info,

    /// Input was skipped or is unusual but harmless for the preview
    Warning,

    /// Input was recovered from but the game will likely show it wrong
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Issue categories for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum IssueCategory {
    /// Text outside any block
    Structure,

    /// Header tag problems
    Header,

    /// Position arguments of `<wpos>`/`<select>`/`<adv_select>`
    Position,

    /// Page content problems
    Page,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Header => write!(f, "header"),
            Self::Position => write!(f, "position"),
            Self::Page => write!(f, "page"),
        }
    }
}

/// Recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based)
    pub line: usize,
}

impl ParseIssue {
    /// Create new parse issue
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
        }
    }

    /// Create info-level issue
    #[must_use]
    pub const fn info(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Info, category, message, line)
    }

    /// Create warning-level issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Create error-level issue
    #[must_use]
    pub const fn error(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Error, category, message, line)
    }

    /// Check if this issue should fail a lint run
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, IssueSeverity::Error)
    }

    /// Format issue for display in editor or console
    #[must_use]
    pub fn format_for_display(&self) -> String {
        format!(
            "[{}:{}] {}: {}",
            self.line, self.category, self.severity, self.message
        )
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_for_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_and_order() {
        assert_eq!(IssueSeverity::Warning.to_string(), "warning");
        assert!(IssueSeverity::Error > IssueSeverity::Warning);
        assert!(IssueSeverity::Warning > IssueSeverity::Info);
    }

    #[test]
    fn category_display() {
        assert_eq!(IssueCategory::Structure.to_string(), "structure");
        assert_eq!(IssueCategory::Position.to_string(), "position");
    }

    #[test]
    fn convenience_constructors() {
        let issue = ParseIssue::error(IssueCategory::Position, "bad wpos".to_string(), 7);
        assert_eq!(issue.severity, IssueSeverity::Error);
        assert!(issue.is_error());
        assert!(!ParseIssue::info(IssueCategory::Page, "x".to_string(), 1).is_error());
        assert!(!ParseIssue::warning(IssueCategory::Header, "x".to_string(), 1).is_error());
    }

    #[test]
    fn formatting() {
        let issue = ParseIssue::warning(IssueCategory::Structure, "stray text".to_string(), 3);
        assert_eq!(issue.to_string(), "[3:structure] warning: stray text");
    }
}
