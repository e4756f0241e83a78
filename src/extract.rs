//! The page-by-page extraction routine.

use crate::backend::PdfBackend;
use crate::error::Result;
use crate::model::{PageText, TextDocument};

/// Walks a document's pages in order and collects their text.
///
/// Any page failure aborts the whole run; no partial result is returned.
pub struct TextExtractor<B: PdfBackend> {
    backend: B,
}

impl<B: PdfBackend> TextExtractor<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract every page into a [`TextDocument`].
    pub fn extract(&self) -> Result<TextDocument> {
        let mut document = TextDocument::new();

        for number in self.backend.page_numbers() {
            let text = self.backend.page_text(number)?;
            log::trace!("page {}: {} bytes of text", number, text.len());
            document.add_page(PageText::new(number, text));
        }

        log::debug!("extracted text from {} pages", document.page_count());
        Ok(document)
    }

    /// Extract every page and join them, one newline after each page.
    pub fn extract_text(&self) -> Result<String> {
        Ok(self.extract()?.plain_text())
    }
}
