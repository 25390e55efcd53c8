//! Open-element bookkeeping for rendered markup
//!
//! Scale and color spans live on one ordered stack. Centered blocks are
//! `<div>`s, and spans must not straddle a div edge in the output, so every
//! open span is closed before a div opens or closes and re-opened right after.
//! Closing a span that is not on top closes the spans above it and re-opens
//! them, which keeps the output well nested whatever order the source closes
//! things in.

use super::{
    color::Rgb,
    html::{color_span, font_size_span, CENTER_CLOSE, CENTER_OPEN, SPAN_CLOSE},
};

/// Span opened by an inline tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSpan {
    /// `<scale>` with its computed pixel size
    Scale(u32),
    /// `<col>` with its color
    Color(Rgb),
}

impl OpenSpan {
    fn open_tag(self) -> String {
        match self {
            Self::Scale(size) => font_size_span(size),
            Self::Color(color) => color_span(color),
        }
    }

    const fn is_scale(&self) -> bool {
        matches!(self, Self::Scale(_))
    }

    const fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }
}

/// One open `<center>` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CenterFrame {
    /// Page color span opened directly inside the div
    base: Option<Rgb>,
}

/// Elements currently open in the output
#[derive(Debug, Default)]
pub struct Nesting {
    spans: Vec<OpenSpan>,
    frames: Vec<CenterFrame>,
}

impl Nesting {
    /// Create empty nesting state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            spans: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Open a span
    pub fn open(&mut self, span: OpenSpan, out: &mut String) {
        out.push_str(&span.open_tag());
        self.spans.push(span);
    }

    /// Close the innermost scale span; false if none is open
    pub fn close_scale(&mut self, out: &mut String) -> bool {
        self.close_innermost(OpenSpan::is_scale, out)
    }

    /// Close the innermost color span; false if none is open
    pub fn close_color(&mut self, out: &mut String) -> bool {
        self.close_innermost(OpenSpan::is_color, out)
    }

    fn close_innermost(&mut self, kind: fn(&OpenSpan) -> bool, out: &mut String) -> bool {
        let Some(index) = self.spans.iter().rposition(kind) else {
            return false;
        };

        let above = self.spans.split_off(index + 1);
        for _ in 0..=above.len() {
            out.push_str(SPAN_CLOSE);
        }
        self.spans.pop();
        for span in above {
            self.open(span, out);
        }
        true
    }

    /// Check whether any color span is open
    #[must_use]
    pub fn has_color(&self) -> bool {
        self.spans.iter().any(OpenSpan::is_color)
    }

    /// Number of open spans
    #[must_use]
    pub fn depth(&self) -> usize {
        self.spans.len()
    }

    /// Open a centered block
    ///
    /// With no color open, `page_color` is re-applied inside the div since
    /// the div does not inherit it.
    pub fn open_center(&mut self, page_color: Option<Rgb>, out: &mut String) {
        self.emit_span_closes(out);
        out.push_str(CENTER_OPEN);

        let base = if self.has_color() { None } else { page_color };
        if let Some(color) = base {
            out.push_str(&color_span(color));
        }
        self.frames.push(CenterFrame { base });
        self.emit_span_opens(out);
    }

    /// Close the innermost centered block; false if none is open
    pub fn close_center(&mut self, out: &mut String) -> bool {
        let Some(frame) = self.frames.pop() else {
            return false;
        };

        self.emit_span_closes(out);
        if frame.base.is_some() {
            out.push_str(SPAN_CLOSE);
        }
        out.push_str(CENTER_CLOSE);
        self.emit_span_opens(out);
        true
    }

    /// Close everything still open
    pub fn finish(&mut self, out: &mut String) {
        self.emit_span_closes(out);
        self.spans.clear();

        while let Some(frame) = self.frames.pop() {
            if frame.base.is_some() {
                out.push_str(SPAN_CLOSE);
            }
            out.push_str(CENTER_CLOSE);
        }
    }

    fn emit_span_closes(&self, out: &mut String) {
        for _ in &self.spans {
            out.push_str(SPAN_CLOSE);
        }
    }

    fn emit_span_opens(&self, out: &mut String) {
        for span in &self.spans {
            out.push_str(&span.open_tag());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn closing_a_buried_span_reopens_the_ones_above() {
        let mut nesting = Nesting::new();
        let mut out = String::new();
        nesting.open(OpenSpan::Color(RED), &mut out);
        nesting.open(OpenSpan::Scale(30), &mut out);
        out.clear();

        assert!(nesting.close_color(&mut out));
        assert_eq!(
            out,
            r#"</span></span><span style="font-size: 30px;">"#
        );
        assert_eq!(nesting.depth(), 1);
        assert!(!nesting.has_color());
    }

    #[test]
    fn stray_closers_are_rejected() {
        let mut nesting = Nesting::new();
        let mut out = String::new();
        assert!(!nesting.close_color(&mut out));
        assert!(!nesting.close_scale(&mut out));
        assert!(!nesting.close_center(&mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn page_color_inside_center() {
        let mut nesting = Nesting::new();
        let mut out = String::new();
        nesting.open_center(Some(RED), &mut out);
        nesting.finish(&mut out);
        assert_eq!(
            out,
            r#"<div style="text-align:center;"><span style="color: rgb(255,0,0);"></span></div>"#
        );
    }

    #[test]
    fn finish_closes_spans_before_divs() {
        let mut nesting = Nesting::new();
        let mut out = String::new();
        nesting.open_center(None, &mut out);
        nesting.open(OpenSpan::Scale(10), &mut out);
        out.clear();
        nesting.finish(&mut out);
        assert_eq!(out, "</span></div>");
    }
}
