//! SPM block parser module
//!
//! Groups tokenizer output into [`BubbleBlock`]s. A block starts at a token
//! that is exactly a stage identifier and runs to the next one.
//!
//! # Header region
//!
//! Right after the stage identifier, tags configure the block:
//!
//! - `<se 1>` / `<se 2>` select the typing sound
//! - `<diary>`, `<fairy>`, ... select the bubble style
//! - `<select x y w h>` / `<adv_select x y w h>` select an option box and
//!   its placement
//! - `<wpos x y w h>` sets the placement only
//!
//! The first token that is none of these (or starts with `<p`) ends the
//! header. Text trailing a header tag on the same line is put back into the
//! token stream, so `<fairy>Hello` still shows "Hello".
//!
//! # Pages
//!
//! Body tokens are split into pages at `<k>` and joined with
//! [`join_page_lines`].
//!
//! # Example
//!
//! ```rust
//! use spm_core::parser::{parse, BubbleSound, BubbleType};
//!
//! let script = parse("stg1_1_000\n<se 2>\n<diary>\nHello\n<k>\nWorld\n");
//! let block = &script.blocks()[0];
//! assert_eq!(block.bubble_type, BubbleType::Diary);
//! assert_eq!(block.bubble_sound, BubbleSound::Pencil);
//! assert_eq!(block.pages, ["Hello", "World"]);
//! ```

pub mod block;
pub mod errors;
pub mod header;
mod main;
pub mod page;
pub mod script;

pub use block::{BubbleBlock, BubbleSound, BubbleType, Position};
pub use errors::{IssueCategory, IssueSeverity, ParseIssue};
pub use page::{join_page_lines, INLINE_TAG_PREFIXES};
pub use script::Script;

/// Parse visible text into a [`Script`]
#[must_use]
pub fn parse(source: &str) -> Script {
    Script::parse(source)
}

/// Parse visible text and keep only the blocks
#[must_use]
pub fn parse_blocks(source: &str) -> Vec<BubbleBlock> {
    Script::parse(source).into_blocks()
}
