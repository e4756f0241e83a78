//! PDF backend abstraction layer.
//!
//! The extraction routine only needs two things from a PDF library: the
//! ordered page numbers and a way to turn one page into text. [`PdfBackend`]
//! captures exactly that, and [`LopdfBackend`] provides it on top of lopdf.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};

/// Abstract interface for PDF text access.
pub trait PdfBackend {
    /// Page numbers (1-indexed) in document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extracted text of a single page.
    fn page_text(&self, page_number: u32) -> Result<String>;
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
    /// Page number to page object, resolved once at load.
    pages: BTreeMap<u32, ObjectId>,
}

impl LopdfBackend {
    fn new(doc: LopdfDocument) -> Self {
        let pages = doc.get_pages();
        Self { doc, pages }
    }

    /// Load from a file path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let backend = Self::new(LopdfDocument::load(path)?);
        log::debug!(
            "loaded {} (PDF {}, {} pages)",
            path.display(),
            backend.doc.version,
            backend.pages.len()
        );
        Ok(backend)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let backend = Self::new(LopdfDocument::load_mem(data)?);
        log::debug!(
            "loaded {} bytes (PDF {}, {} pages)",
            data.len(),
            backend.doc.version,
            backend.pages.len()
        );
        Ok(backend)
    }

    /// Load from a reader.
    pub fn load_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load_bytes(&data)
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Decode every filtered content stream of a page.
    ///
    /// lopdf's text extraction falls back to the raw bytes when a stream
    /// fails to decompress and then finds no text, so a corrupt page would
    /// otherwise come back empty instead of failing.
    fn check_content_streams(&self, page_number: u32, page_id: ObjectId) -> Result<()> {
        for content_id in self.doc.get_page_contents(page_id) {
            if let Ok(Object::Stream(stream)) = self.doc.get_object(content_id) {
                if stream.dict.get(b"Filter").is_err() {
                    continue;
                }
                stream
                    .decompressed_content()
                    .map_err(|e| Error::TextExtract {
                        page: page_number,
                        message: format!(
                            "content stream {} {} R: {}",
                            content_id.0, content_id.1, e
                        ),
                    })?;
            }
        }
        Ok(())
    }
}

impl PdfBackend for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        // BTreeMap keys come out sorted, which is document order.
        self.pages.keys().copied().collect()
    }

    fn page_text(&self, page_number: u32) -> Result<String> {
        let page_id = *self
            .pages
            .get(&page_number)
            .ok_or(Error::PageOutOfRange(page_number, self.page_count()))?;

        self.check_content_streams(page_number, page_id)?;

        let text = self
            .doc
            .extract_text(&[page_number])
            .map_err(|e| Error::TextExtract {
                page: page_number,
                message: e.to_string(),
            })?;

        Ok(strip_text_object_break(&text).to_string())
    }
}

/// Drop the single line feed lopdf appends when a text object ends.
///
/// lopdf only appends it when the text does not already end in a line feed,
/// so a page whose own text ends in one loses exactly that one.
fn strip_text_object_break(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
