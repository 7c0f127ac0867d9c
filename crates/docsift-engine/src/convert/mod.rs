//! # Document Conversion
//!
//! Turns uploaded bytes into a [`MarkupTree`]. The extraction stages never
//! look at the source format; they only see blocks.
//!
//! ## Modules
//!
//! - **`docx`**: `DocxConverter` for Word (OOXML) documents via `zip` + `quick-xml`
//! - **`html`**: `HtmlConverter` for already-converted markup via `scraper`
//!
//! Converters take the buffer by value. Each parse hands over its own copy,
//! so a converter is free to consume or rewrite it.

pub mod docx;
pub mod html;

use crate::markup::MarkupTree;

pub use docx::DocxConverter;
pub use html::HtmlConverter;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Document is empty")]
    Empty,
    #[error("Not a Word document archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Document part missing: {0}")]
    MissingPart(&'static str),
    #[error("Malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Markup is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A black-box document-to-markup conversion step.
pub trait DocumentConverter: Send + Sync {
    fn convert(&self, bytes: Vec<u8>) -> Result<MarkupTree, ConvertError>;
}

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Picks a converter from the leading bytes of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConverterKind {
    /// Zip magic: an OOXML Word document.
    Docx,
    /// Anything else is treated as markup.
    #[default]
    Html,
}

impl ConverterKind {
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(ZIP_MAGIC) {
            ConverterKind::Docx
        } else {
            ConverterKind::Html
        }
    }
}

/// Dispatches to the docx or markup converter per input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConverter;

impl DocumentConverter for AutoConverter {
    fn convert(&self, bytes: Vec<u8>) -> Result<MarkupTree, ConvertError> {
        match ConverterKind::detect(&bytes) {
            ConverterKind::Docx => DocxConverter.convert(bytes),
            ConverterKind::Html => HtmlConverter.convert(bytes),
        }
    }
}
