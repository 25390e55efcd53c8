//! Tests for the tag renderer

use super::*;
use pretty_assertions::assert_eq;

const RED_SPAN: &str = r#"<span style="color: rgb(255,0,0);">"#;
const BLUE_SPAN: &str = r#"<span style="color: rgb(0,0,255);">"#;

fn render(text: &str) -> String {
    render_text_with_tags(text, 20, None)
}

fn icon(file: &str, size: u32) -> String {
    format!(r#"<img src="Packaged_Resources/Images/Icons/{file}" height="{size}">"#)
}

/// Checks that every opened span/div is closed in order
fn assert_well_nested(html: &str) {
    let mut open: Vec<&str> = Vec::new();
    for m in Regex::new(r"</?(span|div)\b[^>]*>").unwrap().find_iter(html) {
        let tag = m.as_str();
        let name = if tag.contains("span") { "span" } else { "div" };
        if tag.starts_with("</") {
            assert_eq!(open.pop(), Some(name), "unbalanced at {} in {html}", m.start());
        } else {
            open.push(name);
        }
    }
    assert!(open.is_empty(), "unclosed {open:?} in {html}");
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(render("Hello, Mario!\nBye"), "Hello, Mario!\nBye");
}

#[test]
fn color_inside_center_is_reopened() {
    let html = render("<col ff0000>Hi<center>There</center></col>");
    assert_eq!(
        html,
        format!(
            "{RED_SPAN}Hi</span>{}{RED_SPAN}There</span></div>{RED_SPAN}</span>",
            html::CENTER_OPEN
        )
    );
    assert_well_nested(&html);
}

#[test]
fn unknown_tag_passes_through() {
    assert_eq!(render("a <foobar> b <foo bar=1>"), "a <foobar> b <foo bar=1>");
    assert_eq!(render("< >"), "< >");
}

#[test]
fn icons() {
    assert_eq!(render("<icon PAD_A>"), icon("Icon_A.png", 20));
    assert_eq!(render("<ICON  HM >"), icon("Icon_Heart.png", 20));
    assert_eq!(render("<icon BOGUS>"), "<icon BOGUS>");
    assert_eq!(render("<icon>"), "<icon>");
    assert_eq!(render("<icon PAD_A PAD_B>"), "<icon PAD_A PAD_B>");
}

#[test]
fn special_glyphs_become_icons() {
    assert_eq!(
        render("Þ®"),
        format!("{}{}", icon("Icon_Star.png", 20), icon("Icon_Arrow_Left.png", 20))
    );
}

#[test]
fn scale_rounds_half_of_base() {
    let html = render_text_with_tags("<scale 1.5>Big</scale>", 25, None);
    assert_eq!(html, r#"<span style="font-size: 19px;">Big</span>"#);
    assert_eq!(render("<scale 2>x"), r#"<span style="font-size: 20px;">x</span>"#);
}

#[test]
fn malformed_scale_is_literal() {
    for tag in ["<scale>", "<scale big>", "<scale 1 2>", "<scale inf>", "<scale -3>"] {
        assert_eq!(render(tag), tag);
    }
}

#[test]
fn wait_tag() {
    assert_eq!(
        render("<wait 250>Go"),
        format!("{}<span style='color: gray;'>250ms</span>Go", icon("Icon_Wait.png", 20))
    );
    assert_eq!(render("<wait soon>"), "<wait soon>");
}

#[test]
fn effect_tags() {
    let shake = icon("Icon_Shake.png", 20);
    assert_eq!(render("<shake>x</shake>"), format!("{shake}x{shake}"));
    assert_eq!(
        render("<dynamic 3>"),
        format!("{}<span style='color: gray;'>3</span>", icon("Icon_Dynamic.png", 20))
    );
    assert_eq!(render("<wave fast>"), icon("Icon_Wave.png", 20));
}

#[test]
fn malformed_color_is_literal() {
    assert_eq!(render("<col red>x"), "<col red>x");
    assert_eq!(render("<col ff00>x"), "<col ff00>x");
}

#[test]
fn eight_digit_color_ignores_alpha() {
    assert_eq!(render("<col ff000080>x</col>"), format!("{RED_SPAN}x</span>"));
}

#[test]
fn stray_closers_are_literal() {
    assert_eq!(render("</col></scale></center>"), "</col></scale></center>");
}

#[test]
fn unclosed_spans_are_closed_at_end() {
    let html = render("<col ff0000>a<scale 2>b<center>c");
    assert_well_nested(&html);
    assert!(html.ends_with("c</span></span></div>"));
}

#[test]
fn crossed_closers_stay_nested() {
    let html = render("<col ff0000>a<scale 2>b</col>c</scale>");
    assert_eq!(
        html,
        format!(
            r#"{RED_SPAN}a<span style="font-size: 20px;">b</span></span><span style="font-size: 20px;">c</span>"#
        )
    );
    assert_well_nested(&html);
}

#[test]
fn nested_colors_close_innermost_first() {
    let html = render("<col ff0000>a<col 0000ff>b</col>c</col>");
    assert_eq!(html, format!("{RED_SPAN}a{BLUE_SPAN}b</span>c</span>"));
}

#[test]
fn persistent_color_wraps_page() {
    let white = r#"<span style="color: rgb(255,255,255);">"#;
    let html = render_text_with_tags("Hi", 20, Some(Rgb::WHITE));
    assert_eq!(html, format!("{white}Hi</span>"));

    let html = render_text_with_tags("<center>Mid</center>", 20, Some(Rgb::WHITE));
    assert_eq!(
        html,
        format!("{white}{}{white}Mid</span></div></span>", html::CENTER_OPEN)
    );
    assert_well_nested(&html);
}

#[test]
fn custom_resolver_and_size() {
    let assets = AssetTable::new("res").with_override(IconKey::HM, "heart.svg");
    let renderer = TagRenderer::new(&assets, RenderConfig::default().with_base_font_size(32));
    assert_eq!(
        renderer.render("<icon HM><icon PAD>"),
        r#"<img src="heart.svg" height="32"><img src="res/Packaged_Resources/Images/Icons/Icon_Pad.png" height="32">"#
    );
    assert_eq!(renderer.config().base_font_size, 32);
}

#[test]
fn arbitrary_markup_is_well_nested() {
    let samples = [
        "</center><center><col 00ff00>x</center>y",
        "<center><center><col ff0000>a</center>b",
        "<scale 3><col ff0000></scale></col></col>",
        "<col ff0000><center><scale 2>x</col>y</center>z",
    ];
    for sample in samples {
        assert_well_nested(&render(sample));
        assert_well_nested(&render_text_with_tags(sample, 20, Some(Rgb::BLACK)));
    }
}
