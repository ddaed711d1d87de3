//! Document text extraction: format sniffing plus one extractor per format,
//! behind a small facade that normalizes all of them to
//! `Result<String, ExtractError>`.

mod docx;
mod pdf;
mod plain;

use std::io::{Read, Seek};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// Errors from the PDF and DOCX extraction paths. The plain/unknown-format
/// path is total and never constructs one.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Document formats recognized by extension sniffing. Adding a format means
/// adding a variant here; the dispatcher match below is exhaustive, so the
/// compiler points at every site that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
    Unknown,
}

impl DocumentFormat {
    /// Case-insensitive suffix match. `.doc` and extensionless names are
    /// deliberately `Unknown`: they fall through to best-effort decoding
    /// instead of being rejected.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if lower.ends_with(".docx") {
            DocumentFormat::Docx
        } else if lower.ends_with(".txt") {
            DocumentFormat::PlainText
        } else {
            DocumentFormat::Unknown
        }
    }
}

/// An uploaded document: a name used only for format sniffing, plus the raw
/// bytes. Consumed once by extraction; nothing refers back to it afterwards.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Bytes,
}

/// Extracts text from an optional document. An absent document yields an
/// empty string rather than an error, so callers can treat "no file" and
/// "empty file" uniformly.
pub fn extract_text(document: Option<&UploadedDocument>) -> Result<String, ExtractError> {
    match document {
        Some(doc) => extract_bytes(&doc.name, &doc.bytes),
        None => Ok(String::new()),
    }
}

/// Extracts text from a seekable reader. The reader is rewound first:
/// extractors assume a stream positioned at offset 0, and establishing that
/// is this facade's job, not each extractor's.
pub fn extract_reader<R: Read + Seek>(name: &str, reader: &mut R) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_file_name(name);
    let mut data = Vec::new();
    let read = reader.rewind().and_then(|_| reader.read_to_end(&mut data));
    if let Err(e) = read {
        // Unknown-format reads are best-effort: swallow and return nothing.
        if format == DocumentFormat::Unknown {
            return Ok(String::new());
        }
        return Err(ExtractError::Io(e));
    }
    dispatch(format, name, &data)
}

/// Extracts text from named bytes, sniffing the format from the name.
pub fn extract_bytes(name: &str, data: &[u8]) -> Result<String, ExtractError> {
    dispatch(DocumentFormat::from_file_name(name), name, data)
}

fn dispatch(format: DocumentFormat, name: &str, data: &[u8]) -> Result<String, ExtractError> {
    debug!("extracting text from {name} ({format:?}, {} bytes)", data.len());
    match format {
        DocumentFormat::Pdf => pdf::extract(data),
        DocumentFormat::Docx => docx::extract(data),
        DocumentFormat::PlainText | DocumentFormat::Unknown => Ok(plain::extract(data)),
    }
}
