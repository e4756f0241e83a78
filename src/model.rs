//! Extracted text, page by page.

/// Text of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Text as returned by the backend
    pub text: String,
}

impl PageText {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Extracted text of a whole document, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    pub pages: Vec<PageText>,
}

impl TextDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page. Pages are expected in document order.
    pub fn add_page(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&PageText> {
        self.pages.iter().find(|p| p.number == number)
    }

    /// Every page's text followed by one newline, concatenated.
    ///
    /// The last page also gets its newline, and an empty document yields an
    /// empty string.
    pub fn plain_text(&self) -> String {
        let capacity = self.pages.iter().map(|p| p.text.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for page in &self.pages {
            out.push_str(&page.text);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_multi_page() {
        let mut doc = TextDocument::new();
        doc.add_page(PageText::new(1, "first"));
        doc.add_page(PageText::new(2, "second"));
        doc.add_page(PageText::new(3, "third"));
        assert_eq!(doc.plain_text(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_plain_text_keeps_empty_pages() {
        let mut doc = TextDocument::new();
        doc.add_page(PageText::new(1, "cover"));
        doc.add_page(PageText::new(2, ""));
        doc.add_page(PageText::new(3, "body"));
        assert_eq!(doc.plain_text(), "cover\n\nbody\n");
    }

    #[test]
    fn test_empty_document() {
        let doc = TextDocument::new();
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_get_page() {
        let mut doc = TextDocument::new();
        doc.add_page(PageText::new(1, "a"));
        doc.add_page(PageText::new(2, "b"));
        assert_eq!(doc.get_page(2).map(|p| p.text.as_str()), Some("b"));
        assert!(doc.get_page(0).is_none());
        assert!(doc.get_page(3).is_none());
    }
}
