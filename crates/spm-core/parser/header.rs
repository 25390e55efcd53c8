//! Header tag recognition
//!
//! The header region is the run of tags right after a stage identifier. Each
//! header token is classified here; the block parser applies the result and
//! re-queues whatever text followed the tag on the same token.

use super::block::{BubbleSound, BubbleType, Position};
use crate::tokenizer::trim_script;
use regex::Regex;
use std::sync::OnceLock;

/// Tag names that carry a position quadruple
const PLACEMENT_TAGS: [&str; 3] = ["<select", "<adv_select", "<wpos"];

fn placement_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^<(select|adv_select|wpos)[\s\x1F]+(-?[0-9]+)[\s\x1F]+(-?[0-9]+)[\s\x1F]+([0-9]+)[\s\x1F]+([0-9]+)>",
        )
        .expect("placement tag pattern is valid")
    })
}

/// Block setting carried by one header tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTag {
    /// `<se 1>` / `<se 2>`
    Sound(BubbleSound),

    /// Bare style tag such as `<diary>`
    Style(BubbleType),

    /// `<select x y w h>` / `<adv_select x y w h>`
    Select(BubbleType, Position),

    /// `<wpos x y w h>`
    WindowPosition(Position),
}

/// Result of inspecting one token in the header region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch<'a> {
    /// Recognised tag and the text that followed it on the token
    Tag {
        tag: HeaderTag,
        rest: &'a str,
    },

    /// Placement tag whose arguments are not four integers
    MalformedPlacement {
        /// Lowercased tag name without the bracket
        name: &'static str,
    },

    /// Token ends the header region
    End,
}

/// Check whether a token may still belong to the header region
///
/// Header tokens start with `<`; anything starting with `<p` (in any case)
/// closes the header, as does text.
#[must_use]
pub fn continues_header(text: &str) -> bool {
    text.starts_with('<')
        && !text
            .get(..2)
            .is_some_and(|head| head.eq_ignore_ascii_case("<p"))
}

/// Classify one trimmed header-region token
#[must_use]
pub fn match_header(text: &str) -> HeaderMatch<'_> {
    let lower = text.to_ascii_lowercase();

    for (index, sound) in (1..=2).filter_map(|i| Some((i, BubbleSound::from_index(i)?))) {
        let tag = format!("<se {index}>");
        if lower.starts_with(&tag) {
            return HeaderMatch::Tag {
                tag: HeaderTag::Sound(sound),
                rest: trim_script(&text[tag.len()..]),
            };
        }
    }

    for kind in BubbleType::TAGGED {
        let tag = format!("<{}>", kind.as_str());
        if lower.starts_with(&tag) {
            return HeaderMatch::Tag {
                tag: HeaderTag::Style(kind),
                rest: trim_script(&text[tag.len()..]),
            };
        }
    }

    let Some(prefix) = PLACEMENT_TAGS.into_iter().find(|p| lower.starts_with(p)) else {
        return HeaderMatch::End;
    };
    let name = &prefix[1..];

    match parse_placement(text) {
        Some((position, consumed)) => {
            let tag = match name {
                "wpos" => HeaderTag::WindowPosition(position),
                "adv_select" => HeaderTag::Select(BubbleType::AdvSelect, position),
                _ => HeaderTag::Select(BubbleType::Select, position),
            };
            HeaderMatch::Tag {
                tag,
                rest: trim_script(&text[consumed..]),
            }
        }
        None => HeaderMatch::MalformedPlacement { name },
    }
}

/// Parse `<tag x y w h>` at the start of `text`
///
/// Returns the position and the byte length of the tag. Values that do not
/// fit in `i32` make the tag malformed.
fn parse_placement(text: &str) -> Option<(Position, usize)> {
    let caps = placement_regex().captures(text)?;
    let value = |group: usize| caps.get(group)?.as_str().parse::<i32>().ok();
    let position = Position::new(value(2)?, value(3)?, value(4)?, value(5)?);
    Some((position, caps.get(0)?.end()))
}
