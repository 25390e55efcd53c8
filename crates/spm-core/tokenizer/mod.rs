//! SPM script tokenizer module
//!
//! Splits visible text (see [`crate::codec`]) into a flat ordered list of
//! tokens: stage identifiers, tag-led fragments and prose fragments.
//!
//! Each source line is cleaned first: `[LF]` placeholders are removed and the
//! line is trimmed. Lines that are empty afterwards, or that consist of just a
//! `<p>` page tag, produce no tokens. Stage identifiers are then cut out of
//! the line wherever they are anchored (line start or after `[NUL]`); the text
//! around them becomes separate tokens. No token is ever empty.
//!
//! # Example
//!
//! ```rust
//! use spm_core::tokenizer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("stg1_1_000[NUL]<diary>[LF]\nHello[LF]\n");
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Stage, TokenKind::Tag, TokenKind::Text]);
//! assert_eq!(tokens[1].text, "<diary>");
//! ```

use crate::codec::LF_MARKER;
use log::debug;
use std::borrow::Cow;

pub mod stage;
pub mod tokens;

pub use stage::{find_stage_identifiers, is_stage_identifier, StageMatch};
pub use tokens::{Token, TokenKind};

/// Tokenizer over one visible-text buffer
#[derive(Debug, Clone)]
pub struct SpmTokenizer<'a> {
    /// Source text being tokenized
    source: &'a str,
}

impl<'a> SpmTokenizer<'a> {
    /// Create new tokenizer for source text
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Tokenize the whole source
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (index, raw) in split_lines(self.source).enumerate() {
            let line = index + 1;
            let cleaned = clean_line(raw);
            if cleaned.is_empty() {
                continue;
            }
            debug!("Line {line}: '{raw}' -> cleaned: '{cleaned}'");
            tokenize_line(&cleaned, line, &mut tokens);
        }

        debug!("Tokenization complete. Total tokens: {}", tokens.len());
        tokens
    }
}

/// Tokenize visible text in one call
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    SpmTokenizer::new(source).tokenize()
}

fn tokenize_line(cleaned: &str, line: usize, tokens: &mut Vec<Token>) {
    let mut pos = 0;
    for found in find_stage_identifiers(cleaned) {
        push_fragment(&cleaned[pos..found.range.start], line, tokens);
        debug!("Line {line} stage token: '{}'", found.identifier);
        push_fragment(found.identifier, line, tokens);
        pos = found.range.end;
    }
    push_fragment(&cleaned[pos..], line, tokens);
}

fn push_fragment(fragment: &str, line: usize, tokens: &mut Vec<Token>) {
    if !trim_script(fragment).is_empty() {
        tokens.push(Token::new(fragment, line));
    }
}

/// Strip `[LF]` placeholders and surrounding blanks from one line
///
/// Returns an empty string for lines that carry no tokens, including a bare
/// `<p>` page tag in any letter case.
#[must_use]
pub fn clean_line(line: &str) -> Cow<'_, str> {
    let cleaned = if line.contains(LF_MARKER) {
        Cow::Owned(trim_script(&line.replace(LF_MARKER, "")).to_owned())
    } else {
        Cow::Borrowed(trim_script(line))
    };
    if cleaned.eq_ignore_ascii_case("<p>") {
        Cow::Borrowed("")
    } else {
        cleaned
    }
}

/// Check for a character the script format treats as blank
///
/// Unicode whitespace plus the unit separator `\x1F`, which game files
/// use as padding.
#[must_use]
pub fn is_script_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\x1F'
}

/// Trim [`is_script_whitespace`] characters from both ends
#[must_use]
pub fn trim_script(text: &str) -> &str {
    text.trim_matches(is_script_whitespace)
}

/// Split text into lines on every universal-newline boundary
///
/// Boundaries are `\n`, `\r\n`, `\r`, vertical tab, form feed, the
/// `\x1C`..`\x1E` separators, NEL (`\u{85}`), and the Unicode line and
/// paragraph separators. A trailing boundary does not produce a final
/// empty line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

const fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0B' | '\x0C' | '\x1C' | '\x1D' | '\x1E' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((index, boundary)) = self.rest.char_indices().find(|&(_, c)| is_line_boundary(c))
        else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..index];
        let mut after = index + boundary.len_utf8();
        if boundary == '\r' && self.rest[after..].starts_with('\n') {
            after += 1;
        }
        self.rest = &self.rest[after..];
        Some(line)
    }
}

#[cfg(test)]
mod tests;
