//! Inline tag classification
//!
//! A tag `<name arg ...>` is split on whitespace; the lowercased first word
//! picks a [`TagKind`] and the remaining words are its arguments. Tags that
//! match no kind are left to the caller to pass through.

use super::assets::IconKey;
use smallvec::SmallVec;

/// Tag arguments; inline tags take at most one
pub type TagArgs<'a> = SmallVec<[&'a str; 2]>;

/// Text effects that render as an icon plus optional value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Dynamic,
    Shake,
    Wave,
}

impl EffectKind {
    /// Icon drawn for this effect
    #[must_use]
    pub const fn icon(self) -> IconKey {
        match self {
            Self::Dynamic => IconKey::DYNAMIC,
            Self::Shake => IconKey::SHAKE,
            Self::Wave => IconKey::WAVE,
        }
    }
}

/// Recognised inline tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<icon NAME>`
    Icon,
    /// `<scale F>`
    Scale,
    /// `</scale>`
    ScaleEnd,
    /// `<wait N>`
    Wait,
    /// `<col RRGGBB>`
    Color,
    /// `</col>`
    ColorEnd,
    /// `<center>`
    Center,
    /// `</center>`
    CenterEnd,
    /// `<dynamic>`, `<shake>`, `<wave>` and their closers
    Effect(EffectKind),
}

impl TagKind {
    /// Look up a tag by its lowercased name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "icon" => Self::Icon,
            "scale" => Self::Scale,
            "/scale" => Self::ScaleEnd,
            "wait" => Self::Wait,
            "col" => Self::Color,
            "/col" => Self::ColorEnd,
            "center" => Self::Center,
            "/center" => Self::CenterEnd,
            "dynamic" | "/dynamic" => Self::Effect(EffectKind::Dynamic),
            "shake" | "/shake" => Self::Effect(EffectKind::Shake),
            "wave" | "/wave" => Self::Effect(EffectKind::Wave),
            _ => return None,
        };
        Some(kind)
    }
}

/// One recognised tag with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCall<'a> {
    pub kind: TagKind,
    pub args: TagArgs<'a>,
}

impl<'a> TagCall<'a> {
    /// Classify the text between `<` and `>`
    ///
    /// Returns `None` for blank content and unknown tag names.
    #[must_use]
    pub fn parse(content: &'a str) -> Option<Self> {
        let mut words = content.split_whitespace();
        let name = words.next()?.to_lowercase();
        let kind = TagKind::from_name(&name)?;
        Some(Self {
            kind,
            args: words.collect(),
        })
    }

    /// The only argument, if there is exactly one
    #[must_use]
    pub fn single_arg(&self) -> Option<&'a str> {
        match self.args.as_slice() {
            [arg] => Some(*arg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        let call = TagCall::parse("COL ff0000").unwrap();
        assert_eq!(call.kind, TagKind::Color);
        assert_eq!(call.single_arg(), Some("ff0000"));
    }

    #[test]
    fn closers_share_effect_kind() {
        assert_eq!(
            TagCall::parse("/shake").unwrap().kind,
            TagKind::Effect(EffectKind::Shake)
        );
        assert_eq!(EffectKind::Wave.icon(), IconKey::WAVE);
    }

    #[test]
    fn unknown_and_blank() {
        assert!(TagCall::parse("foobar").is_none());
        assert!(TagCall::parse("   ").is_none());
        assert!(TagCall::parse("/icon").is_none());
    }

    #[test]
    fn argument_count() {
        let call = TagCall::parse("  wait   10  20 ").unwrap();
        assert_eq!(call.args.len(), 2);
        assert_eq!(call.single_arg(), None);
    }
}
