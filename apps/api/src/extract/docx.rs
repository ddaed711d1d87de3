//! DOCX text extraction via the WordprocessingML main document part.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use super::ExtractError;

/// Extracts paragraph text from a DOCX package. `read_docx` opens the ZIP
/// container and parses `word/document.xml`; alternate package layouts are
/// not searched. Text runs within a paragraph are concatenated with no
/// separator; paragraphs that collected no text contribute nothing — not a
/// blank line; the remaining paragraphs are joined with newlines.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(data)
        .map_err(|e| ExtractError::Malformed(format!("unparsable DOCX: {e}")))?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    /// Builds a real DOCX package in memory. Empty strings become paragraphs
    /// with no run, i.e. genuinely empty paragraphs.
    fn build_docx(paragraph_texts: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraph_texts {
            let mut paragraph = Paragraph::new();
            if !text.is_empty() {
                paragraph = paragraph.add_run(Run::new().add_text(*text));
            }
            docx = docx.add_paragraph(paragraph);
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_two_paragraph_round_trip() {
        let package = build_docx(&["Hello", "World"]);
        assert_eq!(extract(&package).unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_empty_paragraph_is_skipped() {
        // No blank line between the two non-empty paragraphs.
        let package = build_docx(&["Hello", "", "World"]);
        assert_eq!(extract(&package).unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_runs_concatenate_without_separator() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Hel"))
                .add_run(Run::new().add_text("lo")),
        );
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        assert_eq!(extract(&cursor.into_inner()).unwrap(), "Hello");
    }

    #[test]
    fn test_document_with_no_text_yields_empty_string() {
        let package = build_docx(&["", ""]);
        assert_eq!(extract(&package).unwrap(), "");
    }

    #[test]
    fn test_corrupt_package_is_an_error() {
        let err = extract(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }
}
