//! Editing layer for SPM dialogue scripts
//!
//! `spm-editor` sits on top of `spm-core` and holds the state an editor needs
//! besides the text itself:
//!
//! - **Documents**: open `.txt` scripts as visible text, re-parse on edit,
//!   save back to raw game bytes
//! - **Search**: case-insensitive find with `X of Y` match navigation
//! - **Bubble views**: per-bubble page navigation, labels and page markup,
//!   plus the list of bubbles with one active
//!
//! # Example
//!
//! ```
//! use spm_editor::{BubbleViewer, SpmDocument};
//!
//! let mut doc = SpmDocument::from_text("stg1_1_000\n<fairy>\nHello\n<k>\nWorld\n");
//! let mut viewer = BubbleViewer::from_script(doc.script());
//!
//! let bubble = viewer.active_mut().unwrap();
//! assert_eq!(bubble.type_label(), "Tippi");
//! assert!(bubble.next_page());
//! assert_eq!(bubble.page_counter().as_deref(), Some("2/2"));
//!
//! doc.set_text(format!("{}stg1_1_001\nBye\n", doc.text()));
//! assert_eq!(doc.blocks().len(), 2);
//! assert!(doc.is_modified());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod utils;
pub mod view;

// Re-export spm-core types as first-class citizens
pub use spm_core::{BubbleBlock, BubbleSound, BubbleType, Position, Script};

pub use crate::core::{EditorError, Result, SpmDocument};
pub use utils::{MatchRange, TextSearch};
pub use view::{BubbleView, BubbleViewer};
