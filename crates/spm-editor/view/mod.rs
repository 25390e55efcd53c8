//! View models for the bubble preview
//!
//! Widget-free state behind a preview pane: which page each bubble shows,
//! which bubble is active, and the markup and labels to display.

pub mod bubble;
pub mod viewer;

pub use bubble::{BubbleView, LINE_HEIGHT, OPTION_BULLET};
pub use viewer::BubbleViewer;
