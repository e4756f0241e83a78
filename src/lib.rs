//! # pdfdump
//!
//! Dump the text of a PDF document, page by page.
//!
//! Every page's text is extracted in document order and followed by exactly
//! one newline, so a document whose pages read `p1, p2, ..., pn` produces
//! `"p1\np2\n...pn\n"`. Text decoding is done by [`lopdf`].
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfdump::Result<()> {
//!     let text = pdfdump::extract_text("document.pdf")?;
//!     print!("{}", text);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;

pub use backend::{LopdfBackend, PdfBackend};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use extract::TextExtractor;
pub use model::{PageText, TextDocument};

use std::io::Read;
use std::path::Path;

/// Open the PDF at `path` and extract its pages into a [`TextDocument`].
///
/// The header is checked before the PDF library sees the file, so a non-PDF
/// input fails before any page is processed.
///
/// ```no_run
/// let doc = pdfdump::extract_document("document.pdf").unwrap();
/// for page in &doc.pages {
///     println!("page {}: {} chars", page.number, page.text.len());
/// }
/// ```
pub fn extract_document<P: AsRef<Path>>(path: P) -> Result<TextDocument> {
    let path = path.as_ref();
    detect_format_from_path(path)?;
    let backend = LopdfBackend::load_file(path)?;
    TextExtractor::new(backend).extract()
}

/// Extract the text of the PDF at `path`, one newline after each page.
///
/// ```no_run
/// let text = pdfdump::extract_text("document.pdf").unwrap();
/// print!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(extract_document(path)?.plain_text())
}

/// Extract the text of a PDF held in memory.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    detect_format_from_bytes(data)?;
    let backend = LopdfBackend::load_bytes(data)?;
    TextExtractor::new(backend).extract_text()
}

/// Extract the text of a PDF read from `reader`.
pub fn extract_text_from_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    extract_text_from_bytes(&data)
}
