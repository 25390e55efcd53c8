//! Page text reassembly
//!
//! A page is collected as a list of body tokens. Joining them back into one
//! string must keep inline styling tags glued to the text they style, while
//! ordinary dialogue lines stay on their own lines.

use crate::tokenizer::trim_script;

/// Prefixes of tags that are joined without a line break
///
/// Matching is case-sensitive. Some closers are listed with their `>` and
/// some without; both forms are matched as plain prefixes.
pub const INLINE_TAG_PREFIXES: [&str; 18] = [
    "<col", "</col", "<center", "</center", "<icon", "</icon>", "<select", "</select>",
    "<dynamic", "</dynamic", "<shake", "</shake", "<wait", "</wait", "<scale", "</scale>",
    "<wave", "</wave>",
];

/// Check whether a trimmed line starts with an inline tag
#[must_use]
pub fn is_inline_line(line: &str) -> bool {
    INLINE_TAG_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Join one page's lines into its text
///
/// Each line is trimmed. A line starting with an inline tag is appended with
/// no separator. Any other line gets a leading `\n`, unless it is the first
/// line or the line before it was inline. The result is trimmed.
///
/// # Example
///
/// ```rust
/// use spm_core::parser::join_page_lines;
///
/// let page = join_page_lines(&["Hello", "<col ff0000>", "red", "plain"]);
/// assert_eq!(page, "Hello<col ff0000>red\nplain");
/// ```
#[must_use]
pub fn join_page_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut page = String::new();
    let mut previous_inline = false;

    for (index, line) in lines.iter().enumerate() {
        let line = trim_script(line.as_ref());
        let inline = is_inline_line(line);
        if index > 0 && !inline && !previous_inline {
            page.push('\n');
        }
        page.push_str(line);
        previous_inline = inline;
    }

    trim_script(&page).to_owned()
}
