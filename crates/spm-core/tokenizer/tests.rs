//! Tests for tokenizer functionality

use super::*;
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.text).collect()
}

#[test]
fn tokenize_empty_string() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_whitespace_only() {
    assert!(tokenize("   \t \n [LF]  \n").is_empty());
}

#[test]
fn plain_line_is_one_token() {
    assert_eq!(texts("Hello there, Mario!"), ["Hello there, Mario!"]);
}

#[test]
fn stage_only_line_is_one_token() {
    let tokens = tokenize("stg1_1_000[NUL]");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text, "stg1_1_000");
    assert_eq!(tokens[0].kind, TokenKind::Stage);
}

#[test]
fn token_kinds() {
    let tokens = tokenize("stg1_1_000[NUL]<diary>[LF]\nHi <col ff0000>\n");
    assert!(tokens[0].is_stage());
    assert!(tokens[1].is_tag());
    assert!(!tokens[2].is_tag() && !tokens[2].is_stage());
}

#[test]
fn lf_placeholder_is_removed() {
    assert_eq!(texts("Hel[LF]lo[LF]\n"), ["Hello"]);
}

#[test]
fn page_tag_lines_are_dropped() {
    assert_eq!(texts("One\n<p>\n  <P>[LF]\nTwo"), ["One", "Two"]);
}

#[test]
fn inline_page_tag_is_kept() {
    assert_eq!(texts("One<p>"), ["One<p>"]);
}

#[test]
fn prefix_and_tail_around_stage() {
    let source = "Bye![NUL]he2_mario[NUL]<fairy>Hi";
    assert_eq!(texts(source), ["Bye!", "he2_mario", "<fairy>Hi"]);
}

#[test]
fn several_stage_identifiers_on_one_line() {
    let source = "stg1_a[NUL][NUL]stg1_b[NUL]<diary>";
    let tokens = tokenize(source);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenKind::Stage, TokenKind::Stage, TokenKind::Tag]);
}

#[test]
fn line_numbers_follow_source_lines() {
    let tokens = tokenize("stg1_1_000\n\nHello\r\nWorld");
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 3, 4]);
}

#[test]
fn decoded_script_tokenizes() {
    let visible = crate::codec::decode(b"stg1_1_000\x00<diary>\nHello\n<k>\nWorld\n");
    assert_eq!(
        texts(&visible),
        ["stg1_1_000", "<diary>", "Hello", "<k>", "World"]
    );
}

#[test]
fn no_token_is_blank() {
    let source = "  \n\t[NUL] stg1_1_000 [NUL]  \n <col ff0000> \n\u{2028}x";
    for token in tokenize(source) {
        assert!(!token.text.trim().is_empty(), "{token}");
        assert_eq!(token.text, token.text.trim());
    }
}

#[test]
fn split_lines_boundaries() {
    let lines: Vec<_> = split_lines("a\r\nb\rc\nd\u{85}e\u{2029}f\n").collect();
    assert_eq!(lines, ["a", "b", "c", "d", "e", "f"]);
    assert_eq!(split_lines("\n").collect::<Vec<_>>(), [""]);
    assert_eq!(split_lines("").count(), 0);
}

#[test]
fn clean_line_variants() {
    assert_eq!(clean_line("  <p>[LF] "), "");
    assert_eq!(clean_line("text[LF]"), "text");
    assert_eq!(clean_line("  plain  "), "plain");
}

#[test]
fn unit_separator_counts_as_blank() {
    assert_eq!(
        texts("\x1Fstg1_1_000\x1F[NUL]Hi\x1F\n\x1F\x1F\nBye"),
        ["stg1_1_000", "Hi", "Bye"]
    );
    assert_eq!(clean_line("\x1F<p>\x1F"), "");
    assert_eq!(trim_script("\x1F a \x1F"), "a");
    assert!(is_script_whitespace('\x1F'));
    assert!(!is_script_whitespace('\x1E'));
}
