//! Bubble block data model
//!
//! A [`BubbleBlock`] is one speaker turn: everything from a stage identifier
//! up to the next one. Blocks are plain values rebuilt from scratch on every
//! parse; nothing mutates them afterwards.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One dialogue bubble parsed from the script
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BubbleBlock {
    /// Stage identifier token that introduced the block (e.g. `stg1_1_000`)
    pub stage_npc: String,

    /// Bubble style selected by a header tag
    pub bubble_type: BubbleType,

    /// Placement from `<wpos>`/`<select>`/`<adv_select>`, zero for automatic
    pub position: Position,

    /// Page texts in presentation order
    pub pages: Vec<String>,

    /// Text sound selected by `<se 1>`/`<se 2>`
    pub bubble_sound: BubbleSound,
}

impl BubbleBlock {
    /// Create block with default header values and no pages
    #[must_use]
    pub fn new(stage_npc: impl Into<String>) -> Self {
        Self {
            stage_npc: stage_npc.into(),
            bubble_type: BubbleType::None,
            position: Position::default(),
            pages: Vec::new(),
            bubble_sound: BubbleSound::None,
        }
    }

    /// Number of pages in this block
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All page text joined with newlines, as used by text search
    #[must_use]
    pub fn text(&self) -> String {
        self.pages.join("\n")
    }
}

/// Bubble style named by a header tag
///
/// Besides the tag name, each style carries the presentation details the
/// preview needs: a display name, the bubble artwork and whether text is
/// drawn light-on-dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BubbleType {
    /// No style tag, the default speech bubble
    #[default]
    None,
    /// `<diary>`
    Diary,
    /// `<system>`
    System,
    /// `<fairy>` (Tippi)
    Fairy,
    /// `<kanban>` (signpost)
    Kanban,
    /// `<fairy2>` (Pixl)
    Fairy2,
    /// `<housou>` (robot announcer)
    Housou,
    /// `<majo>` (Mimi)
    Majo,
    /// `<adv>` (Swoon.exe)
    Adv,
    /// `<clear>` (intermission)
    Clear,
    /// `<small>`
    Small,
    /// `<select x y w h>` option box
    Select,
    /// `<adv_select x y w h>` option box
    AdvSelect,
}

impl BubbleType {
    /// Styles set by a bare `<name>` header tag
    pub const TAGGED: [Self; 10] = [
        Self::Diary,
        Self::System,
        Self::Fairy,
        Self::Kanban,
        Self::Fairy2,
        Self::Housou,
        Self::Majo,
        Self::Adv,
        Self::Clear,
        Self::Small,
    ];

    /// Tag name as written in scripts (`none` for the default)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Diary => "diary",
            Self::System => "system",
            Self::Fairy => "fairy",
            Self::Kanban => "kanban",
            Self::Fairy2 => "fairy2",
            Self::Housou => "housou",
            Self::Majo => "majo",
            Self::Adv => "adv",
            Self::Clear => "clear",
            Self::Small => "small",
            Self::Select => "select",
            Self::AdvSelect => "adv_select",
        }
    }

    /// Human-readable name shown in the preview
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "Normal",
            Self::Diary => "Diary",
            Self::System => "System",
            Self::Fairy => "Tippi",
            Self::Kanban => "Signpost",
            Self::Fairy2 => "Pixl",
            Self::Housou => "Robo",
            Self::Majo => "Mimi",
            Self::Adv => "Swoon.exe",
            Self::Clear => "Intermission",
            Self::Small => "Small",
            Self::Select => "Select",
            Self::AdvSelect => "Swoon.exe Select",
        }
    }

    /// File name of the bubble artwork for this style
    #[must_use]
    pub const fn background_image(self) -> &'static str {
        match self {
            Self::Clear => "Intermission_Bubble.png",
            Self::Diary => "Diary_Bubble.png",
            Self::Fairy | Self::Fairy2 => "Pixel_Speach_Bubble.png",
            Self::System => "System_Speach_Bubble.png",
            Self::Select => "Selectbox_Bubble.png",
            Self::Kanban => "Signpost_Bubble.png",
            Self::Housou => "Robo_Speach_Bubble.png",
            Self::Majo => "Mimi_Speach_Bubble.png",
            Self::Adv => "Swoon_Speach_Bubble.png",
            Self::AdvSelect => "Swoon_Select_Bubble.png",
            Self::Small => "Small_Speach_Bubble.png",
            Self::None => "Speach_Bubble.png",
        }
    }

    /// Dark bubbles draw white text
    #[must_use]
    pub const fn uses_light_text(self) -> bool {
        matches!(
            self,
            Self::System | Self::Majo | Self::Adv | Self::AdvSelect | Self::Clear
        )
    }

    /// Option boxes list choices instead of dialogue
    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(self, Self::Select | Self::AdvSelect)
    }

    /// Look up a style by its bare header tag name, ignoring case
    ///
    /// Only styles set by a bare `<name>` tag are returned; the select styles
    /// need position arguments and are handled separately.
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::TAGGED
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for BubbleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typing sound played while a bubble's text appears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BubbleSound {
    /// No `<se>` tag
    #[default]
    None,
    /// `<se 1>`
    Typewriter,
    /// `<se 2>`
    Pencil,
}

impl BubbleSound {
    /// Name as stored on the block (`none`, `Typewriter`, `Pencil`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Typewriter => "Typewriter",
            Self::Pencil => "Pencil",
        }
    }

    /// Capitalised label for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Typewriter => "Typewriter",
            Self::Pencil => "Pencil",
        }
    }

    /// Sound selected by `<se N>`
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Typewriter),
            2 => Some(Self::Pencil),
            _ => None,
        }
    }
}

impl fmt::Display for BubbleSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bubble placement and size in screen units
///
/// All zeros means "use the default size and placement".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Position {
    /// Create position from its four components
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if the position was never set
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        self.x == 0 && self.y == 0 && self.w == 0 && self.h == 0
    }
}

impl From<(i32, i32, i32, i32)> for Position {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, w, h)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            f.write_str("auto")
        } else {
            write!(f, "{} {} {} {}", self.x, self.y, self.w, self.h)
        }
    }
}

impl FromStr for BubbleType {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "select" => Ok(Self::Select),
            "adv_select" => Ok(Self::AdvSelect),
            other => Self::from_tag_name(other)
                .ok_or_else(|| crate::CoreError::config(format!("unknown bubble type '{s}'"))),
        }
    }
}
