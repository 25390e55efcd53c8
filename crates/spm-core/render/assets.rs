//! Icon and bubble artwork lookup
//!
//! The renderer refers to images by symbolic [`IconKey`]. Turning a key into
//! a path the display widget can load is the job of an [`AssetResolver`];
//! [`AssetTable`] is the stock resolver, joining an asset root with the
//! packaged resource layout and allowing per-icon overrides.

use crate::parser::BubbleType;
use crate::utils::{create_hash_map, CoreError};
use ahash::RandomState;
use core::{fmt, str::FromStr};
use std::collections::HashMap;

/// Directory of icon images, relative to the asset root
pub const ICON_DIR: &str = "Packaged_Resources/Images/Icons/";

/// Directory of bubble artwork, relative to the asset root
pub const BUBBLE_DIR: &str = "Packaged_Resources/Images/Bubbles/";

/// Symbolic image keys known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum IconKey {
    PAD_A,
    PAD_1,
    PAD_2,
    PAD_PLUS,
    PAD_MINUS,
    PAD,
    WAIT,
    HM,
    DYNAMIC,
    SHAKE,
    WAVE,
    /// Substituted for `Þ`
    STAR,
    /// Substituted for `®`
    ARROW_LEFT,
}

impl IconKey {
    /// Every key, in table order
    pub const ALL: [Self; 13] = [
        Self::PAD_A,
        Self::PAD_1,
        Self::PAD_2,
        Self::PAD_PLUS,
        Self::PAD_MINUS,
        Self::PAD,
        Self::WAIT,
        Self::HM,
        Self::DYNAMIC,
        Self::SHAKE,
        Self::WAVE,
        Self::STAR,
        Self::ARROW_LEFT,
    ];

    /// Key name as written in `<icon NAME>`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PAD_A => "PAD_A",
            Self::PAD_1 => "PAD_1",
            Self::PAD_2 => "PAD_2",
            Self::PAD_PLUS => "PAD_PLUS",
            Self::PAD_MINUS => "PAD_MINUS",
            Self::PAD => "PAD",
            Self::WAIT => "WAIT",
            Self::HM => "HM",
            Self::DYNAMIC => "DYNAMIC",
            Self::SHAKE => "SHAKE",
            Self::WAVE => "WAVE",
            Self::STAR => "STAR",
            Self::ARROW_LEFT => "ARROW_LEFT",
        }
    }

    /// Image file name inside [`ICON_DIR`]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PAD_A => "Icon_A.png",
            Self::PAD_1 => "Icon_One.png",
            Self::PAD_2 => "Icon_Two.png",
            Self::PAD_PLUS => "Icon_Plus.png",
            Self::PAD_MINUS => "Icon_Minus.png",
            Self::PAD => "Icon_Pad.png",
            Self::WAIT => "Icon_Wait.png",
            Self::HM => "Icon_Heart.png",
            Self::DYNAMIC => "Icon_Dynamic.png",
            Self::SHAKE => "Icon_Shake.png",
            Self::WAVE => "Icon_Wave.png",
            Self::STAR => "Icon_Star.png",
            Self::ARROW_LEFT => "Icon_Arrow_Left.png",
        }
    }

    /// Path relative to the asset root
    #[must_use]
    pub fn relative_path(self) -> String {
        format!("{ICON_DIR}{}", self.file_name())
    }

    /// Glyph-substitution keys cannot be named by `<icon>`
    #[must_use]
    pub const fn is_glyph(self) -> bool {
        matches!(self, Self::STAR | Self::ARROW_LEFT)
    }

    /// Look up the key named by an `<icon NAME>` tag (case-sensitive)
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| !key.is_glyph() && key.name() == name)
    }

    /// Key substituted for a special glyph
    #[must_use]
    pub const fn for_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '\u{DE}' => Some(Self::STAR),
            '\u{AE}' => Some(Self::ARROW_LEFT),
            _ => None,
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| CoreError::UnknownIcon(s.to_string()))
    }
}

/// Resolves symbolic image keys to loadable paths
pub trait AssetResolver {
    /// Resolve a path relative to the asset root
    fn resolve(&self, relative: &str) -> String;

    /// Resolve an icon image
    fn icon(&self, key: IconKey) -> String {
        self.resolve(&key.relative_path())
    }
}

/// Default resolver rooted at a resource directory
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    /// Prefix joined in front of relative paths; empty keeps them relative
    root: String,

    /// Per-icon replacement paths, used verbatim
    overrides: HashMap<IconKey, String, RandomState>,
}

impl AssetTable {
    /// Create table rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            overrides: create_hash_map(),
        }
    }

    /// Replace the path of one icon
    #[must_use]
    pub fn with_override(mut self, key: IconKey, path: impl Into<String>) -> Self {
        self.overrides.insert(key, path.into());
        self
    }

    /// Asset root prefix
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolved path of the artwork for a bubble style
    #[must_use]
    pub fn bubble_image(&self, bubble_type: BubbleType) -> String {
        self.resolve(&bubble_image_path(bubble_type))
    }
}

impl AssetResolver for AssetTable {
    fn resolve(&self, relative: &str) -> String {
        if self.root.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{relative}", self.root.trim_end_matches(['/', '\\']))
        }
    }

    fn icon(&self, key: IconKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| self.resolve(&key.relative_path()))
    }
}

/// Artwork path for a bubble style, relative to the asset root
#[must_use]
pub fn bubble_image_path(bubble_type: BubbleType) -> String {
    format!("{BUBBLE_DIR}{}", bubble_type.background_image())
}
