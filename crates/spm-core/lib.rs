//! # SPM Core
//!
//! Parser and renderer for the dialogue-script format used by Super Paper
//! Mario text files ("SPM text"). The format is a flat, line-oriented markup
//! mixing control bytes, bracketed inline tags and stage/speaker identifiers
//! that delimit one dialogue bubble from the next.
//!
//! ## Pipeline
//!
//! - [`codec`]: raw bytes <-> visible text with `[NUL]`, `[LF]`, `[CR]` placeholders
//! - [`tokenizer`]: visible text -> ordered stage/tag/text tokens
//! - [`parser`]: tokens -> ordered [`BubbleBlock`]s with pages
//! - [`render`]: one page of markup -> display-ready rich text
//!
//! ## Quick Start
//!
//! ```rust
//! use spm_core::{codec, Script};
//!
//! let raw = b"stg1_1_000\x00<diary>\nHello\n<k>\nWorld\n";
//! let visible = codec::decode(raw);
//! let script = Script::parse(&visible);
//!
//! let block = &script.blocks()[0];
//! assert_eq!(block.stage_npc, "stg1_1_000");
//! assert_eq!(block.bubble_type.as_str(), "diary");
//! assert_eq!(block.pages, vec!["Hello", "World"]);
//!
//! assert_eq!(codec::encode(&visible)?, raw.to_vec());
//! # Ok::<(), spm_core::CoreError>(())
//! ```
//!
//! Every operation except [`codec::encode`] is total: malformed tags are kept
//! as literal text and structural oddities yield best-effort blocks.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
pub mod parser;
pub mod render;
pub mod tokenizer;
pub mod utils;

pub use parser::{
    parse, parse_blocks, BubbleBlock, BubbleSound, BubbleType, ParseIssue, Position, Script,
};
pub use render::{render_text_with_tags, AssetResolver, RenderConfig, Rgb, TagRenderer};
pub use tokenizer::{tokenize, SpmTokenizer, Token, TokenKind};
pub use utils::{CoreError, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
