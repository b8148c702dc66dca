//! Highlight marking across a page document.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use pagelight_protocols::time::Scheduler;

use crate::dom::{PageDocument, StyleFragment, Tag};

#[cfg(test)]
#[path = "annotator_tests.rs"]
mod tests;

/// Marker class carried by highlighted elements.
pub const HIGHLIGHT_CLASS: &str = "pagelight-highlight";

/// ID of the stylesheet fragment injected while highlights are active.
pub const HIGHLIGHT_STYLE_ID: &str = "pagelight-highlight-style";

/// Delay between successive element marks.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(50);

const HIGHLIGHT_COLOR: &str = "#ffeb3b";

const HIGHLIGHT_CSS: &str = "\
.pagelight-highlight {
    border-left: 3px solid #ff9800 !important;
    padding-left: 10px !important;
    margin-left: -13px !important;
}
";

/// Tags the annotator marks: paragraphs, headings, list items, table
/// cells.
const HIGHLIGHT_TAGS: [Tag; 9] = [
    Tag::P,
    Tag::H1,
    Tag::H2,
    Tag::H3,
    Tag::H4,
    Tag::H5,
    Tag::H6,
    Tag::Li,
    Tag::Td,
];

/// Applies and removes highlight marks on one page.
///
/// Marks cascade in document order, one stagger apart, through the
/// injected scheduler. The page toggles between exactly two states:
/// cleared and highlighted.
pub struct Annotator {
    document: Arc<PageDocument>,
    scheduler: Arc<dyn Scheduler>,
    stagger: Duration,
}

impl Annotator {
    pub fn new(document: Arc<PageDocument>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            document,
            scheduler,
            stagger: DEFAULT_STAGGER,
        }
    }

    /// Override the per-element stagger.
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Highlight every matching element, clearing any previous marks
    /// first, and return how many elements were targeted.
    ///
    /// Each successive mark waits one stagger, so marks appear in
    /// document order over time rather than atomically. If the page
    /// navigates mid-cascade the remaining marks are abandoned silently.
    pub async fn apply(&self) -> usize {
        self.clear();

        self.document
            .insert_stylesheet(StyleFragment::new(HIGHLIGHT_STYLE_ID, HIGHLIGHT_CSS));

        let generation = self.document.generation();
        let targets = self.document.matching_indices(&HIGHLIGHT_TAGS);
        let total = targets.len();

        for (position, index) in targets.into_iter().enumerate() {
            if position > 0 {
                self.scheduler.sleep(self.stagger).await;
            }
            if self.document.generation() != generation {
                debug!(marked = position, total, "page navigated mid-highlight");
                return total;
            }
            self.document.update_element(index, |el| {
                el.style.background_color = Some(HIGHLIGHT_COLOR.to_string());
                el.style.transition = Some("background-color 0.3s ease".to_string());
                el.add_class(HIGHLIGHT_CLASS);
            });
        }

        debug!(total, "page highlighted");
        total
    }

    /// Remove every highlight mark and the injected stylesheet.
    ///
    /// Safe to call on a page with no marks.
    pub fn clear(&self) {
        for index in self.document.indices_with_class(HIGHLIGHT_CLASS) {
            self.document.update_element(index, |el| {
                el.style.background_color = None;
                el.style.border_left = None;
                el.style.padding_left = None;
                el.style.margin_left = None;
                el.remove_class(HIGHLIGHT_CLASS);
            });
        }
        self.document.remove_stylesheet(HIGHLIGHT_STYLE_ID);
    }

    /// How many elements currently carry a mark.
    pub fn marked_count(&self) -> usize {
        self.document.indices_with_class(HIGHLIGHT_CLASS).len()
    }
}
