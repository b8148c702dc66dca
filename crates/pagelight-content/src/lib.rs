//! # Pagelight Content
//!
//! The document context: a minimal page model, the highlight annotator,
//! word counting, and the handler set a loaded page installs on the
//! relay.

pub mod annotator;
pub mod dom;
pub mod handlers;
pub mod metrics;

pub use annotator::{Annotator, HIGHLIGHT_CLASS, HIGHLIGHT_STYLE_ID};
pub use dom::{Element, InlineStyle, PageDocument, StyleFragment, Tag};
pub use handlers::ContentScript;
pub use metrics::count_words;
