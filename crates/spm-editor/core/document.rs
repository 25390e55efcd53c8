//! Script document: visible text, its parse and the file it came from
//!
//! Files on disk hold raw game bytes. A document keeps the decoded visible
//! text (with `[NUL]`/`[LF]`/`[CR]` placeholders) that users edit and
//! re-parses it on every change so bubble views always match the text.

use crate::core::errors::{EditorError, Result};
use log::{debug, info, warn};
use spm_core::{codec, parser::ParseIssue, BubbleBlock, Script};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension accepted by [`SpmDocument::open`]
pub const SCRIPT_EXTENSION: &str = "txt";

/// Title used for documents that were never saved
pub const UNTITLED: &str = "Untitled";

/// An editable SPM script
#[derive(Debug, Clone, Default)]
pub struct SpmDocument {
    /// Visible text with control-byte placeholders
    text: String,

    /// Parse of `text`, refreshed on every change
    script: Script,

    /// File the document was opened from or last saved to
    path: Option<PathBuf>,

    /// Whether the text changed since it was loaded or saved
    modified: bool,
}

impl SpmDocument {
    /// Create an empty, untitled document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from raw file bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use spm_editor::SpmDocument;
    ///
    /// let doc = SpmDocument::from_bytes(b"stg1_1_000\x00<fairy>\nHi!\n");
    /// assert_eq!(doc.text(), "stg1_1_000[NUL]<fairy>[LF]\nHi![LF]\n");
    /// assert_eq!(doc.blocks()[0].pages, ["Hi!"]);
    /// ```
    #[must_use]
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self::from_text(codec::decode(raw))
    }

    /// Create a document from visible text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let script = Script::parse(&text);
        Self {
            text,
            script,
            path: None,
            modified: false,
        }
    }

    /// Open a script file
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnsupportedFile`] when the path does not end in
    /// `.txt` (any case) and [`EditorError::IoError`] when reading fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !has_script_extension(path) {
            warn!("Rejected file (not .txt): {}", path.display());
            return Err(EditorError::unsupported_file(path.display()));
        }

        let raw = fs::read(path)
            .map_err(|e| EditorError::io(format!("{}: {e}", path.display())))?;
        debug!("Read {} bytes from {}", raw.len(), path.display());

        let mut doc = Self::from_bytes(&raw);
        doc.path = Some(path.to_path_buf());
        info!(
            "Opened {} ({} blocks, {} issues)",
            path.display(),
            doc.script.blocks().len(),
            doc.script.issues().len()
        );
        Ok(doc)
    }

    /// Save to the path the document was opened from or last saved to
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoPath`] for untitled documents, the wrapped
    /// encoding error when the text is not Latin-1, or an I/O error.
    pub fn save(&mut self) -> Result<()> {
        let path = self.path.clone().ok_or(EditorError::NoPath)?;
        self.save_as(path)
    }

    /// Save to `path` and remember it for later saves
    ///
    /// The text is encoded before the file is touched, so an encoding error
    /// never leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns the wrapped encoding error or an I/O error.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let raw = self.to_bytes()?;
        fs::write(path, &raw).map_err(|e| EditorError::io(format!("{}: {e}", path.display())))?;

        info!("Saved {} bytes to {}", raw.len(), path.display());
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Encode the visible text back to raw game bytes
    ///
    /// # Errors
    ///
    /// Returns the wrapped encoding error when the text is not Latin-1.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(codec::encode(&self.text)?)
    }

    /// Visible text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the visible text and re-parse it
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.script = Script::parse(&text);
        self.text = text;
        self.modified = true;
        debug!("Document re-parsed: {} blocks", self.script.blocks().len());
    }

    /// Parsed script
    #[must_use]
    pub const fn script(&self) -> &Script {
        &self.script
    }

    /// Parsed bubble blocks in source order
    #[must_use]
    pub fn blocks(&self) -> &[BubbleBlock] {
        self.script.blocks()
    }

    /// Issues found by the last parse
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        self.script.issues()
    }

    /// File path, if the document has one
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for window titles, or `Untitled`
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| UNTITLED.to_string(), |name| name.to_string_lossy().into_owned())
    }

    /// Whether the text changed since it was loaded or saved
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }
}

fn has_script_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
}
