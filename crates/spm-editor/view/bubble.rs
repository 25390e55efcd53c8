//! View model for one dialogue bubble
//!
//! Tracks the visible page and produces the labels and markup a preview
//! widget shows for a [`BubbleBlock`].

use spm_core::{
    render::{bubble_image_path, AssetResolver},
    BubbleBlock, Rgb, TagRenderer,
};

/// Line spacing applied around every rendered page
pub const LINE_HEIGHT: &str = "1.3";

/// Bullet prefixed to each option of a select bubble
pub const OPTION_BULLET: &str = "\u{2022}";

/// One bubble and the page currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleView {
    block: BubbleBlock,
    page: usize,
}

impl BubbleView {
    /// Create view showing the first page
    #[must_use]
    pub const fn new(block: BubbleBlock) -> Self {
        Self { block, page: 0 }
    }

    /// Underlying block
    #[must_use]
    pub const fn block(&self) -> &BubbleBlock {
        &self.block
    }

    /// Zero-based index of the visible page
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.page
    }

    /// Markup of the visible page, empty for blocks without pages
    #[must_use]
    pub fn page_text(&self) -> &str {
        self.block.pages.get(self.page).map_or("", String::as_str)
    }

    /// Advance one page; false when already on the last page
    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.block.pages.len() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; false when already on the first page
    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// `current/total` counter, only for bubbles with several pages
    #[must_use]
    pub fn page_counter(&self) -> Option<String> {
        let total = self.block.pages.len();
        (total > 1).then(|| format!("{}/{total}", self.page + 1))
    }

    /// Stage identifier label
    #[must_use]
    pub fn stage_label(&self) -> &str {
        &self.block.stage_npc
    }

    /// Human-facing bubble style, e.g. `Tippi` for `fairy`
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        self.block.bubble_type.display_name()
    }

    /// `x y w h`, or `auto` when the game places the bubble
    #[must_use]
    pub fn position_label(&self) -> String {
        self.block.position.to_string()
    }

    /// Capitalised sound name
    #[must_use]
    pub const fn sound_label(&self) -> &'static str {
        self.block.bubble_sound.label()
    }

    /// Text searched by bubble lookup: all pages joined with newlines
    #[must_use]
    pub fn search_text(&self) -> String {
        self.block.text()
    }

    /// Default text color for this bubble's artwork
    #[must_use]
    pub const fn text_color(&self) -> Rgb {
        Rgb::text_on(self.block.bubble_type.uses_light_text())
    }

    /// Resolved path of this bubble's artwork
    #[must_use]
    pub fn background_image(&self, assets: &dyn AssetResolver) -> String {
        assets.resolve(&bubble_image_path(self.block.bubble_type))
    }

    /// Markup for the visible page
    ///
    /// Select bubbles list their options one per line with a bullet and no
    /// tag processing. Every other bubble turns newlines into `<br>` and runs
    /// the tag renderer.
    #[must_use]
    pub fn render_page(&self, renderer: &TagRenderer<'_>) -> String {
        let raw = self.page_text();
        let body = if self.block.bubble_type.is_select() {
            raw.split('\n')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .map(|option| format!("{OPTION_BULLET} {option}"))
                .collect::<Vec<_>>()
                .join("<br>")
        } else {
            renderer.render(&raw.replace('\n', "<br>"))
        };
        format!(r#"<div style="line-height: {LINE_HEIGHT};">{body}</div>"#)
    }
}

impl From<BubbleBlock> for BubbleView {
    fn from(block: BubbleBlock) -> Self {
        Self::new(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spm_core::{
        parse_blocks,
        render::{AssetTable, RenderConfig},
    };

    fn view(source: &str) -> BubbleView {
        BubbleView::new(parse_blocks(source).remove(0))
    }

    #[test]
    fn page_navigation_stops_at_ends() {
        let mut bubble = view("stg1_1_000\nOne\n<k>\nTwo\n<k>\nThree\n");
        assert_eq!(bubble.page_counter().as_deref(), Some("1/3"));
        assert!(!bubble.previous_page());

        assert!(bubble.next_page());
        assert!(bubble.next_page());
        assert_eq!(bubble.page_text(), "Three");
        assert_eq!(bubble.page_counter().as_deref(), Some("3/3"));
        assert!(!bubble.next_page());

        assert!(bubble.previous_page());
        assert_eq!(bubble.current_page(), 1);
    }

    #[test]
    fn single_page_has_no_counter() {
        let mut bubble = view("stg1_1_000\nOnly\n");
        assert_eq!(bubble.page_counter(), None);
        assert!(!bubble.next_page());
    }

    #[test]
    fn empty_block() {
        let bubble = BubbleView::new(BubbleBlock::new("stg1_1_000"));
        assert_eq!(bubble.page_text(), "");
        assert_eq!(bubble.page_counter(), None);
        assert_eq!(bubble.search_text(), "");
    }

    #[test]
    fn labels() {
        let bubble = view("stg2_1_004\n<fairy2>\n<se 2>\n<wpos 1 -2 300 90>\nHi\n");
        assert_eq!(bubble.stage_label(), "stg2_1_004");
        assert_eq!(bubble.type_label(), "Pixl");
        assert_eq!(bubble.position_label(), "1 -2 300 90");
        assert_eq!(bubble.sound_label(), "Pencil");

        let plain = view("stg2_1_005\nHi\n");
        assert_eq!(plain.type_label(), "Normal");
        assert_eq!(plain.position_label(), "auto");
        assert_eq!(plain.sound_label(), "None");
    }

    #[test]
    fn select_page_lists_options() {
        let bubble = view("stg1_1_000\n<select 0 0 100 50>\n Yes \n\nNo <col ff0000>\n");
        let assets = AssetTable::default();
        let renderer = TagRenderer::new(&assets, RenderConfig::default());
        assert_eq!(
            bubble.render_page(&renderer),
            r#"<div style="line-height: 1.3;">• Yes<br>• No <col ff0000></div>"#
        );
    }

    #[test]
    fn dialogue_page_goes_through_renderer() {
        let bubble = view("stg1_1_000\nHello\n<k>\nx\n");
        let assets = AssetTable::default();
        let renderer = TagRenderer::new(&assets, RenderConfig::default());
        assert_eq!(
            bubble.render_page(&renderer),
            r#"<div style="line-height: 1.3;">Hello</div>"#
        );

        let bubble = BubbleView::new(BubbleBlock {
            pages: vec!["A\n<col 0000ff>B</col>".to_string()],
            ..BubbleBlock::new("stg1_1_000")
        });
        assert_eq!(
            bubble.render_page(&renderer),
            r#"<div style="line-height: 1.3;">A<br><span style="color: rgb(0,0,255);">B</span></div>"#
        );
    }

    #[test]
    fn artwork_and_text_color() {
        let bubble = view("stg1_1_000\n<system>\nHi\n");
        assert_eq!(bubble.text_color(), Rgb::WHITE);
        assert_eq!(
            bubble.background_image(&AssetTable::new("res")),
            format!("res/Packaged_Resources/Images/Bubbles/{}", spm_core::BubbleType::System.background_image())
        );
        assert_eq!(view("stg1_1_000\nHi\n").text_color(), Rgb::BLACK);
    }
}
