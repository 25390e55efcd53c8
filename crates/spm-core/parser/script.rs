//! Parsed SPM script container
//!
//! [`Script`] owns the blocks produced by one parse run together with the
//! issues collected along the way. Each edit of the source text produces a
//! fresh `Script`; blocks have no identity across runs.

use super::{block::BubbleBlock, errors::ParseIssue, main::Parser};
use crate::tokenizer::tokenize;

/// Result of parsing visible SPM text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    /// Blocks in source order
    blocks: Vec<BubbleBlock>,

    /// Parse warnings and recoverable errors
    issues: Vec<ParseIssue>,
}

impl Script {
    /// Parse visible text into blocks
    ///
    /// Never fails: malformed input is recovered from and reported through
    /// [`Script::issues`].
    ///
    /// # Example
    ///
    /// ```rust
    /// # use spm_core::parser::{Script, BubbleType, Position};
    /// let script = Script::parse("stg1_1_000\n<select -5 10 20 30>\nOption A\nOption B\n");
    /// let block = &script.blocks()[0];
    /// assert_eq!(block.bubble_type, BubbleType::Select);
    /// assert_eq!(block.position, Position::new(-5, 10, 20, 30));
    /// assert_eq!(block.pages, ["Option A\nOption B"]);
    /// ```
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Parser::new(tokenize(source)).parse()
    }

    /// Create script from already parsed parts
    #[must_use]
    pub(super) const fn from_parts(blocks: Vec<BubbleBlock>, issues: Vec<ParseIssue>) -> Self {
        Self { blocks, issues }
    }

    /// Parsed blocks in source order
    #[must_use]
    pub fn blocks(&self) -> &[BubbleBlock] {
        &self.blocks
    }

    /// Issues found while parsing
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Check whether any error-level issue was recorded
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ParseIssue::is_error)
    }

    /// Take ownership of the blocks
    #[must_use]
    pub fn into_blocks(self) -> Vec<BubbleBlock> {
        self.blocks
    }

    /// Find the first block introduced by `stage_npc` (case-insensitive)
    #[must_use]
    pub fn find_block(&self, stage_npc: &str) -> Option<&BubbleBlock> {
        self.blocks
            .iter()
            .find(|block| block.stage_npc.eq_ignore_ascii_case(stage_npc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source() {
        let script = Script::parse("");
        assert!(script.blocks().is_empty());
        assert!(script.issues().is_empty());
        assert!(!script.has_errors());
    }

    #[test]
    fn find_block_by_stage() {
        let script = Script::parse("stg1_1_000\nA\nstg1_1_001\nB\n");
        assert_eq!(script.find_block("STG1_1_001").map(|b| b.text()), Some("B".to_string()));
        assert!(script.find_block("stg9_9").is_none());
        assert_eq!(script.into_blocks().len(), 2);
    }

    #[test]
    fn malformed_position_is_an_error() {
        assert!(Script::parse("stg1_1_000\n<select a b c d>\n").has_errors());
    }
}
