//! Rich-text markup fragments emitted by the renderer

use super::color::Rgb;

/// Closing tag for any span the renderer opens
pub const SPAN_CLOSE: &str = "</span>";

/// Opening tag of a centered block
pub const CENTER_OPEN: &str = r#"<div style="text-align:center;">"#;

/// Closing tag of a centered block
pub const CENTER_CLOSE: &str = "</div>";

/// Inline image scaled to the line height
#[must_use]
pub fn img(path: &str, size: u32) -> String {
    format!(r#"<img src="{path}" height="{size}">"#)
}

/// Opening color span
#[must_use]
pub fn color_span(color: Rgb) -> String {
    format!(
        r#"<span style="color: rgb({},{},{});">"#,
        color.r, color.g, color.b
    )
}

/// Opening font-size span
#[must_use]
pub fn font_size_span(size: u32) -> String {
    format!(r#"<span style="font-size: {size}px;">"#)
}

/// Gray annotation shown after wait and effect icons
#[must_use]
pub fn gray_label(label: &str) -> String {
    format!("<span style='color: gray;'>{label}</span>")
}
