//! Scrollable list of bubble views with one active bubble

use crate::utils::search::contains_ignore_case;
use crate::view::bubble::BubbleView;
use log::{debug, info};
use spm_core::{BubbleBlock, Script};

/// All bubbles of a script, first one active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleViewer {
    views: Vec<BubbleView>,
    active: Option<usize>,
}

impl BubbleViewer {
    /// Build one view per block; the first becomes active
    pub fn new(blocks: impl IntoIterator<Item = BubbleBlock>) -> Self {
        let views: Vec<BubbleView> = blocks.into_iter().map(BubbleView::new).collect();
        let active = (!views.is_empty()).then_some(0);
        debug!("Bubble viewer built with {} bubbles", views.len());
        Self { views, active }
    }

    /// Build views for every block of a parsed script
    #[must_use]
    pub fn from_script(script: &Script) -> Self {
        Self::new(script.blocks().iter().cloned())
    }

    /// All views in source order
    #[must_use]
    pub fn views(&self) -> &[BubbleView] {
        &self.views
    }

    /// Mutable view at `index`, e.g. for page navigation
    pub fn view_mut(&mut self, index: usize) -> Option<&mut BubbleView> {
        self.views.get_mut(index)
    }

    /// Number of bubbles
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether there are no bubbles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Make bubble `index` active
    ///
    /// Returns false when it is already active or out of range.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.views.len() || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        info!("Active bubble set to: '{}'", self.views[index].stage_label());
        true
    }

    /// Index of the active bubble
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Active bubble
    #[must_use]
    pub fn active(&self) -> Option<&BubbleView> {
        self.active.and_then(|index| self.views.get(index))
    }

    /// Active bubble, mutably
    pub fn active_mut(&mut self) -> Option<&mut BubbleView> {
        self.active.and_then(|index| self.views.get_mut(index))
    }

    /// Indices of bubbles whose text contains `query`, ignoring case
    ///
    /// An empty query matches nothing.
    #[must_use]
    pub fn find_block(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        self.views
            .iter()
            .enumerate()
            .filter(|(_, view)| contains_ignore_case(&view.search_text(), query))
            .map(|(index, _)| index)
            .collect()
    }
}
