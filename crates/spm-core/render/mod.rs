//! Tag renderer for page markup
//!
//! Turns one page's raw text into rich text for a display widget. Tags are
//! found with `<([^>]+)>` and dispatched on their lowercased first word:
//!
//! | tag | output |
//! |---|---|
//! | `<icon NAME>` | icon image (unknown names stay literal) |
//! | `<scale F>` / `</scale>` | font-size span of `round(base * F * 0.5)` px |
//! | `<col RRGGBB>` / `</col>` | color span |
//! | `<center>` / `</center>` | centered div |
//! | `<wait N>` | wait icon and a gray `Nms` label |
//! | `<dynamic>`, `<shake>`, `<wave>` (and closers) | effect icon, plus a gray value when given one integer |
//!
//! Anything else, and any recognised tag with unusable arguments, is copied
//! through unchanged. The glyphs `Þ` and `®` are swapped for icons before
//! tags are scanned. Whatever is still open at the end is closed, so the
//! output is always well nested.
//!
//! # Example
//!
//! ```rust
//! use spm_core::render::render_text_with_tags;
//!
//! let html = render_text_with_tags("<col ff0000>Hi</col> <foobar>", 20, None);
//! assert_eq!(html, r#"<span style="color: rgb(255,0,0);">Hi</span> <foobar>"#);
//! ```

use log::trace;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

pub mod assets;
pub mod color;
pub mod html;
pub mod nesting;
pub mod tags;

pub use assets::{bubble_image_path, AssetResolver, AssetTable, IconKey};
pub use color::Rgb;
pub use nesting::{Nesting, OpenSpan};
pub use tags::{EffectKind, TagCall, TagKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Font size used when none is configured
pub const DEFAULT_BASE_FONT_SIZE: u32 = 20;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<([^>]+)>").expect("tag pattern is valid"))
}

/// Renderer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Pixel size of unscaled text and of icons
    pub base_font_size: u32,

    /// Color wrapped around the whole page
    pub persistent_color: Option<Rgb>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            persistent_color: None,
        }
    }
}

impl RenderConfig {
    /// Set base font size
    #[must_use]
    pub const fn with_base_font_size(mut self, size: u32) -> Self {
        self.base_font_size = size;
        self
    }

    /// Set persistent page color
    #[must_use]
    pub const fn with_persistent_color(mut self, color: Option<Rgb>) -> Self {
        self.persistent_color = color;
        self
    }
}

/// Page renderer bound to an asset resolver
pub struct TagRenderer<'a> {
    assets: &'a dyn AssetResolver,
    config: RenderConfig,
}

impl<'a> TagRenderer<'a> {
    /// Create renderer
    #[must_use]
    pub fn new(assets: &'a dyn AssetResolver, config: RenderConfig) -> Self {
        Self { assets, config }
    }

    /// Active settings
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one page of markup
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let text = self.replace_glyphs(text);
        let mut out = String::with_capacity(text.len() * 2);
        let mut nesting = Nesting::new();

        if let Some(color) = self.config.persistent_color {
            out.push_str(&html::color_span(color));
        }

        let mut last = 0;
        for caps in tag_regex().captures_iter(&text) {
            let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&text[last..whole.start()]);
            if !self.render_tag(content.as_str(), &mut nesting, &mut out) {
                trace!("Passing through tag {}", whole.as_str());
                out.push_str(whole.as_str());
            }
            last = whole.end();
        }
        out.push_str(&text[last..]);

        nesting.finish(&mut out);
        if self.config.persistent_color.is_some() {
            out.push_str(html::SPAN_CLOSE);
        }
        out
    }

    /// Render one tag; false means the tag is kept as literal text
    fn render_tag(&self, content: &str, nesting: &mut Nesting, out: &mut String) -> bool {
        let Some(call) = TagCall::parse(content) else {
            return false;
        };

        match call.kind {
            TagKind::Icon => match call.single_arg().and_then(IconKey::from_tag_name) {
                Some(key) => out.push_str(&self.icon(key)),
                None => return false,
            },
            TagKind::Scale => {
                let size = call
                    .single_arg()
                    .and_then(|arg| arg.parse::<f64>().ok())
                    .and_then(|factor| scaled_size(self.config.base_font_size, factor));
                match size {
                    Some(size) => nesting.open(OpenSpan::Scale(size), out),
                    None => return false,
                }
            }
            TagKind::ScaleEnd => return nesting.close_scale(out),
            TagKind::Wait => match call.single_arg().and_then(|arg| arg.parse::<i64>().ok()) {
                Some(millis) => {
                    out.push_str(&self.icon(IconKey::WAIT));
                    out.push_str(&html::gray_label(&format!("{millis}ms")));
                }
                None => return false,
            },
            TagKind::Color => match call.single_arg().map(Rgb::from_hex) {
                Some(Ok(color)) => nesting.open(OpenSpan::Color(color), out),
                _ => return false,
            },
            TagKind::ColorEnd => return nesting.close_color(out),
            TagKind::Center => nesting.open_center(self.config.persistent_color, out),
            TagKind::CenterEnd => return nesting.close_center(out),
            TagKind::Effect(effect) => {
                out.push_str(&self.icon(effect.icon()));
                if let Some(value) = call.single_arg().and_then(|arg| arg.parse::<i64>().ok()) {
                    out.push_str(&html::gray_label(&value.to_string()));
                }
            }
        }
        true
    }

    fn icon(&self, key: IconKey) -> String {
        html::img(&self.assets.icon(key), self.config.base_font_size)
    }

    fn replace_glyphs<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.chars().any(|c| IconKey::for_glyph(c).is_some()) {
            return Cow::Borrowed(text);
        }

        let mut replaced = String::with_capacity(text.len() + 64);
        for c in text.chars() {
            match IconKey::for_glyph(c) {
                Some(key) => replaced.push_str(&self.icon(key)),
                None => replaced.push(c),
            }
        }
        Cow::Owned(replaced)
    }
}

/// Pixel size for `<scale factor>`; `None` when not a usable size
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_size(base: u32, factor: f64) -> Option<u32> {
    let size = (f64::from(base) * factor * 0.5).round();
    (size.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&size)).then(|| size as u32)
}

/// Render a page with the packaged asset layout
///
/// Shorthand for a [`TagRenderer`] over [`AssetTable::default`].
#[must_use]
pub fn render_text_with_tags(
    text: &str,
    base_font_size: u32,
    persistent_color: Option<Rgb>,
) -> String {
    let assets = AssetTable::default();
    let config = RenderConfig::default()
        .with_base_font_size(base_font_size)
        .with_persistent_color(persistent_color);
    TagRenderer::new(&assets, config).render(text)
}

#[cfg(test)]
mod tests;
