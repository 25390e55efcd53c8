//! Block parser state machine
//!
//! Walks the token list once. Outside a block, tokens are skipped until a
//! stage identifier. After the identifier, header tags are applied to the new
//! block; then body tokens are collected into pages until the next stage
//! identifier or the end of input.

use log::{debug, info};

use super::{
    block::{BubbleBlock, BubbleType},
    errors::{IssueCategory, ParseIssue},
    header::{continues_header, match_header, HeaderMatch, HeaderTag},
    page::join_page_lines,
    script::Script,
};
use crate::tokenizer::{trim_script, Token};

/// Page break tag
const PAGE_BREAK: &str = "<k>";

/// Internal parser state over one token buffer
pub(super) struct Parser {
    /// Token buffer; header remainders are inserted back into it
    tokens: Vec<Token>,
    /// Cursor into `tokens`
    index: usize,
    /// Blocks accumulated so far
    blocks: Vec<BubbleBlock>,
    /// Parse issues and warnings
    issues: Vec<ParseIssue>,
}

impl Parser {
    /// Create new parser over tokenizer output
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            blocks: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Parse every block
    pub fn parse(mut self) -> Script {
        debug!("Starting block parse. Total tokens: {}", self.tokens.len());

        while self.index < self.tokens.len() {
            if self.tokens[self.index].is_stage() {
                self.parse_block();
            } else {
                self.skip_stray_tokens();
            }
        }

        info!("Parsing complete. Total bubbles: {}", self.blocks.len());
        Script::from_parts(self.blocks, self.issues)
    }

    /// Skip tokens that belong to no block
    ///
    /// Every block body runs up to the next stage identifier, so stray text
    /// can only appear before the first block.
    fn skip_stray_tokens(&mut self) {
        let start = self.index;
        while self.index < self.tokens.len() && !self.tokens[self.index].is_stage() {
            self.index += 1;
        }

        let skipped = self.index - start;
        debug!("Skipped {skipped} token(s) outside any block");
        self.issues.push(ParseIssue::warning(
            IssueCategory::Structure,
            format!("{skipped} token(s) before the first stage identifier were ignored"),
            self.tokens[start].line,
        ));
    }

    fn parse_block(&mut self) {
        let stage = &self.tokens[self.index];
        let line = stage.line;
        let mut block = BubbleBlock::new(stage.text.clone());
        self.index += 1;

        self.parse_header(&mut block);
        self.parse_pages(&mut block);

        debug!(
            "Block '{}' ({}) with {} page(s)",
            block.stage_npc,
            block.bubble_type,
            block.pages.len()
        );
        if block.pages.is_empty() {
            self.issues.push(ParseIssue::info(
                IssueCategory::Page,
                format!("block '{}' has no pages", block.stage_npc),
                line,
            ));
        }
        self.blocks.push(block);
    }

    fn parse_header(&mut self, block: &mut BubbleBlock) {
        while let Some(token) = self.tokens.get(self.index) {
            if !continues_header(&token.text) {
                break;
            }
            let line = token.line;

            let (tag, rest) = match match_header(&token.text) {
                HeaderMatch::Tag { tag, rest } => (tag, rest.to_owned()),
                HeaderMatch::MalformedPlacement { name } => {
                    self.issues.push(ParseIssue::error(
                        IssueCategory::Position,
                        format!("<{name}> needs four integer arguments 'x y w h'; kept as text"),
                        line,
                    ));
                    break;
                }
                HeaderMatch::End => break,
            };

            self.apply_header_tag(block, tag, line);
            self.index += 1;
            if !rest.is_empty() {
                self.tokens.insert(self.index, Token::new(&rest, line));
            }
        }
    }

    fn apply_header_tag(&mut self, block: &mut BubbleBlock, tag: HeaderTag, line: usize) {
        match tag {
            HeaderTag::Sound(sound) => block.bubble_sound = sound,
            HeaderTag::Style(kind) => self.set_bubble_type(block, kind, line),
            HeaderTag::Select(kind, position) => {
                self.set_bubble_type(block, kind, line);
                block.position = position;
            }
            HeaderTag::WindowPosition(position) => block.position = position,
        }
    }

    fn set_bubble_type(&mut self, block: &mut BubbleBlock, kind: BubbleType, line: usize) {
        if block.bubble_type != BubbleType::None && block.bubble_type != kind {
            self.issues.push(ParseIssue::warning(
                IssueCategory::Header,
                format!(
                    "bubble type '{}' of block '{}' is overridden by '{kind}'",
                    block.bubble_type, block.stage_npc
                ),
                line,
            ));
        }
        block.bubble_type = kind;
    }

    fn parse_pages(&mut self, block: &mut BubbleBlock) {
        let mut buffer: Vec<String> = Vec::new();

        while let Some(token) = self.tokens.get(self.index) {
            if token.is_stage() {
                break;
            }

            if let Some(after) = token.text.strip_prefix(PAGE_BREAK) {
                if !buffer.is_empty() {
                    block.pages.push(join_page_lines(&buffer));
                    buffer.clear();
                }
                let after = trim_script(after);
                if !after.is_empty() {
                    buffer.push(after.to_owned());
                }
            } else {
                buffer.push(token.text.clone());
            }
            self.index += 1;
        }

        if !buffer.is_empty() {
            block.pages.push(join_page_lines(&buffer));
        }
    }
}
