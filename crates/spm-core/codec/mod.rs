//! Byte codec between on-disk SPM bytes and editable visible text
//!
//! SPM script files are single-byte encoded and use NUL, LF and CR as in-game
//! control codes rather than text formatting. Decoding maps every byte to the
//! code point of the same value (Latin-1) and spells the three control bytes
//! as bracket placeholders. LF and CR additionally get a real newline after
//! the placeholder so the editor shows one script line per text line.
//!
//! | byte | visible text |
//! |------|--------------|
//! | `0x00` | `[NUL]` |
//! | `0x0A` | `[LF]` + newline |
//! | `0x0D` | `[CR]` + newline |
//!
//! # Example
//!
//! ```rust
//! use spm_core::codec::{decode, encode};
//!
//! let raw = b"stg1_1_000\x00Hello\n";
//! let visible = decode(raw);
//! assert_eq!(visible, "stg1_1_000[NUL]Hello[LF]\n");
//! assert_eq!(encode(&visible)?, raw.to_vec());
//! # Ok::<(), spm_core::CoreError>(())
//! ```

use crate::utils::{CoreError, Result};
use log::debug;

/// Placeholder for the NUL control byte
pub const NUL_MARKER: &str = "[NUL]";

/// Placeholder for the LF control byte
pub const LF_MARKER: &str = "[LF]";

/// Placeholder for the CR control byte
pub const CR_MARKER: &str = "[CR]";

/// Convert raw script bytes into visible, editable text
///
/// Total over all inputs: every byte maps to exactly one code point or
/// placeholder, so no information is lost.
#[must_use]
pub fn decode(raw: &[u8]) -> String {
    debug!("Decoding raw bytes to visible text (length={})", raw.len());

    let mut visible = String::with_capacity(raw.len() + raw.len() / 8);
    for &byte in raw {
        match byte {
            0x00 => visible.push_str(NUL_MARKER),
            0x0A => {
                visible.push_str(LF_MARKER);
                visible.push('\n');
            }
            0x0D => {
                visible.push_str(CR_MARKER);
                visible.push('\n');
            }
            _ => visible.push(char::from(byte)),
        }
    }

    debug!("Finished decoding. Result length={}", visible.len());
    visible
}

/// Convert visible text back into raw script bytes
///
/// Newlines the editor placed after `[LF]` or `[CR]` (either `\n` or `\r\n`)
/// are dropped first; remaining placeholders become their control bytes and
/// every other character must fit in one Latin-1 byte.
///
/// # Errors
///
/// Returns [`CoreError::Encoding`] for the first character above U+00FF. The
/// reported position is the character index once placeholders have been
/// replaced by their control bytes.
pub fn encode(visible: &str) -> Result<Vec<u8>> {
    debug!("Encoding visible text to bytes (length={})", visible.len());

    let collapsed = collapse_marker_newlines(visible);
    let substituted = collapsed
        .replace(NUL_MARKER, "\x00")
        .replace(LF_MARKER, "\x0A")
        .replace(CR_MARKER, "\x0D");

    let encoded = to_latin1(&substituted)?;
    debug!("Finished encoding. Result length={}", encoded.len());
    Ok(encoded)
}

/// Undo the readability newline inserted after `[LF]` and `[CR]`
fn collapse_marker_newlines(visible: &str) -> String {
    let mut text = visible.to_owned();
    for marker in [LF_MARKER, CR_MARKER] {
        text = text
            .replace(&format!("{marker}\r\n"), marker)
            .replace(&format!("{marker}\n"), marker);
    }
    text
}

fn to_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map_err(|_| CoreError::encoding(position, character))
        })
        .collect()
}
