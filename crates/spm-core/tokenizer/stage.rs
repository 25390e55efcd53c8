//! Stage identifier grammar
//!
//! A stage identifier names the speaker or location context of a bubble, e.g.
//! `stg1_1_000`, `anna_teki_04` or `he3_shop`. The grammar is an optional
//! `anna_` prefix, one of a fixed set of category prefixes, optional digits,
//! an underscore, then a run of characters other than `[`, `]`, `<` and
//! whitespace (including `\x1F`). Matching is case-insensitive.
//!
//! Two anchorings are used:
//!
//! - [`find_stage_identifiers`] extracts identifiers from a line only at the
//!   very start of the line or right after a `[NUL]` marker, swallowing one
//!   optional trailing `[NUL]`.
//! - [`is_stage_identifier`] tests whether a whole token is an identifier.
//!   The block parser uses this form, so an identifier-shaped fragment that
//!   the tokenizer split off mid-line still starts a new block.

use super::trim_script;
use core::ops::Range;
use regex::Regex;
use std::sync::OnceLock;

/// Stage category prefixes, in match priority order
pub const STAGE_PREFIXES: [&str; 15] = [
    "stg", "teki", "peach", "kaisou", "opening", "pro", "shop", "he", "mi", "ta", "sp", "gn",
    "wa", "an", "ls",
];

fn identifier_pattern() -> String {
    format!(r"(?:anna_)?(?:{})\d*_[^\[\]<\s\x1F]+", STAGE_PREFIXES.join("|"))
}

fn extract_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            r"(?i)(?:^|\[NUL\])[\s\x1F]*({})[\s\x1F]*(?:\[NUL\])?",
            identifier_pattern()
        );
        Regex::new(&pattern).expect("stage identifier pattern is valid")
    })
}

fn full_match_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)^{}$", identifier_pattern());
        Regex::new(&pattern).expect("stage identifier pattern is valid")
    })
}

/// One identifier found inside a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMatch<'a> {
    /// Byte range of the whole match, including any `[NUL]` markers and
    /// whitespace around the identifier
    pub range: Range<usize>,

    /// The identifier itself
    pub identifier: &'a str,
}

/// Check whether `text` (after trimming) is exactly one stage identifier
///
/// # Example
///
/// ```rust
/// use spm_core::tokenizer::stage::is_stage_identifier;
///
/// assert!(is_stage_identifier("stg1_1_000"));
/// assert!(is_stage_identifier("ANNA_teki_04"));
/// assert!(!is_stage_identifier("stg1_1_000 Hello"));
/// assert!(!is_stage_identifier("stage_1"));
/// ```
#[must_use]
pub fn is_stage_identifier(text: &str) -> bool {
    full_match_regex().is_match(trim_script(text))
}

/// Find identifiers anchored at the start of `line` or after a `[NUL]` marker
///
/// Matches never overlap and are returned in order. A `[NUL]` consumed as
/// the trailing marker of one match cannot anchor the next one.
pub fn find_stage_identifiers(line: &str) -> impl Iterator<Item = StageMatch<'_>> + '_ {
    extract_regex().captures_iter(line).filter_map(|caps| {
        let whole = caps.get(0)?;
        let identifier = caps.get(1)?;
        Some(StageMatch {
            range: whole.range(),
            identifier: identifier.as_str(),
        })
    })
}
