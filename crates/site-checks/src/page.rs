//! The surrounding page the panel is written into.

use std::collections::HashMap;

/// Container that receives the rendered rows or the failure notice.
pub const PANEL_ID: &str = "aiChecksContainer";
/// Summary slot mirroring `total_score`.
pub const SCORE_SLOT_ID: &str = "aiScore";
/// Summary slot mirroring `confidence`.
pub const CONFIDENCE_SLOT_ID: &str = "aiConfidence";

/// Write access to page elements by identifier.
///
/// Both methods return `false` when the element does not exist; callers treat
/// that as a no-op.
pub trait Page {
    /// Replace the element's entire content with markup.
    fn set_html(&mut self, id: &str, html: &str) -> bool;

    /// Replace the element's entire content with plain text.
    fn set_text(&mut self, id: &str, text: &str) -> bool;
}

/// What an element currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Html(String),
    Text(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Html(s) | Content::Text(s) => s,
        }
    }
}

/// In-memory page. Only registered elements accept writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: HashMap<String, Content>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the panel and both summary slots present and empty.
    pub fn with_standard_elements() -> Self {
        let mut page = Self::new();
        for id in [PANEL_ID, SCORE_SLOT_ID, CONFIDENCE_SLOT_ID] {
            page.add_element(id, Content::Html(String::new()));
        }
        page
    }

    pub fn add_element(&mut self, id: impl Into<String>, initial: Content) {
        self.elements.insert(id.into(), initial);
    }

    pub fn content(&self, id: &str) -> Option<&Content> {
        self.elements.get(id)
    }

    /// Current content of an element as a string, if the element exists.
    pub fn text_of(&self, id: &str) -> Option<&str> {
        self.content(id).map(Content::as_str)
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

impl Page for MemoryPage {
    fn set_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = Content::Html(html.to_string());
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(slot) => {
                *slot = Content::Text(text.to_string());
                true
            }
            None => false,
        }
    }
}
