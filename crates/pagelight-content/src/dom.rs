//! Minimal page document model.
//!
//! Just enough of a document for the annotator and word counter: a flat
//! element list in document order, per-element classes and inline style,
//! and injected stylesheet fragments. A generation counter tracks
//! navigations so work scheduled against an old page can notice and stop.

use std::collections::BTreeSet;

use parking_lot::RwLock;

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;

/// Element tag names the model knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Li,
    Td,
    Div,
    Span,
    A,
    Blockquote,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::Li => "li",
            Tag::Td => "td",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::A => "a",
            Tag::Blockquote => "blockquote",
        }
    }
}

/// Inline style subset the annotator touches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub background_color: Option<String>,
    pub border_left: Option<String>,
    pub padding_left: Option<String>,
    pub margin_left: Option<String>,
    pub transition: Option<String>,
}

/// One element: tag, visible text, classes, inline style.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub text: String,
    classes: BTreeSet<String>,
    pub style: InlineStyle,
}

impl Element {
    pub fn new(tag: Tag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            classes: BTreeSet::new(),
            style: InlineStyle::default(),
        }
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// An injected stylesheet fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFragment {
    pub id: String,
    pub css: String,
}

impl StyleFragment {
    pub fn new(id: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            css: css.into(),
        }
    }
}

struct DocumentInner {
    elements: Vec<Element>,
    stylesheets: Vec<StyleFragment>,
    generation: u64,
}

/// A loaded page, shared between handlers and the highlight cascade.
///
/// All access goes through short scoped lock sections; no lock is held
/// across an await point.
pub struct PageDocument {
    inner: RwLock<DocumentInner>,
}

impl PageDocument {
    /// An empty document.
    pub fn new() -> Self {
        Self::with_elements(Vec::new())
    }

    /// A document with the given content, in document order.
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            inner: RwLock::new(DocumentInner {
                elements,
                stylesheets: Vec::new(),
                generation: 0,
            }),
        }
    }

    /// Replace the page content, as a navigation does.
    ///
    /// Injected stylesheets are dropped and the generation bumps, so
    /// pending work keyed to the old page stops silently.
    pub fn navigate(&self, elements: Vec<Element>) {
        let mut inner = self.inner.write();
        inner.elements = elements;
        inner.stylesheets.clear();
        inner.generation += 1;
    }

    /// Current navigation generation.
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    pub fn element_count(&self) -> usize {
        self.inner.read().elements.len()
    }

    /// The page's visible text: element texts in document order.
    pub fn visible_text(&self) -> String {
        let inner = self.inner.read();
        inner
            .elements
            .iter()
            .map(|el| el.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indices of elements whose tag is in `tags`, in document order.
    pub fn matching_indices(&self, tags: &[Tag]) -> Vec<usize> {
        let inner = self.inner.read();
        inner
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| tags.contains(&el.tag))
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of elements carrying `class`.
    pub fn indices_with_class(&self, class: &str) -> Vec<usize> {
        let inner = self.inner.read();
        inner
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.has_class(class))
            .map(|(index, _)| index)
            .collect()
    }

    /// Run `f` against the element at `index`, if it exists.
    pub fn with_element<R>(&self, index: usize, f: impl FnOnce(&Element) -> R) -> Option<R> {
        let inner = self.inner.read();
        inner.elements.get(index).map(f)
    }

    /// Mutate the element at `index`, if it exists.
    pub fn update_element<R>(&self, index: usize, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let mut inner = self.inner.write();
        inner.elements.get_mut(index).map(f)
    }

    /// Inject a stylesheet fragment; a fragment with the same ID is not
    /// duplicated.
    pub fn insert_stylesheet(&self, fragment: StyleFragment) {
        let mut inner = self.inner.write();
        if !inner.stylesheets.iter().any(|s| s.id == fragment.id) {
            inner.stylesheets.push(fragment);
        }
    }

    /// Remove the stylesheet fragment with `id`, if present.
    pub fn remove_stylesheet(&self, id: &str) {
        self.inner.write().stylesheets.retain(|s| s.id != id);
    }

    pub fn has_stylesheet(&self, id: &str) -> bool {
        self.inner.read().stylesheets.iter().any(|s| s.id == id)
    }

    /// Copy of all elements, for assertions.
    pub fn elements(&self) -> Vec<Element> {
        self.inner.read().elements.clone()
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}
