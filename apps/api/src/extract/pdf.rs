//! PDF text extraction, page by page.

use lopdf::Document;
use tracing::warn;

use super::ExtractError;

/// Extracts text from each page in document order and joins the non-empty
/// per-page results with newlines. Pages with no extractable text (scanned
/// images, blank pages) contribute nothing — not even a blank line.
///
/// A document that fails to parse at all is a `Malformed` error; a single
/// page whose text extraction fails is logged and skipped so the rest of the
/// document still comes through.
pub fn extract(data: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(data)
        .map_err(|e| ExtractError::Malformed(format!("unparsable PDF: {e}")))?;

    let mut pages: Vec<String> = Vec::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    pages.push(text.to_string());
                }
            }
            Err(e) => {
                warn!("skipping PDF page {page_number}: {e}");
            }
        }
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Builds a minimal single-font PDF with one page per entry; `None`
    /// produces a page with no text operators.
    fn build_pdf(page_texts: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let mut operations = vec![Operation::new("BT", vec![])];
            if let Some(text) = text {
                operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
                operations.push(Operation::new("Td", vec![72.into(), 720.into()]));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            }
            operations.push(Operation::new("ET", vec![]));

            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    #[test]
    fn test_single_page_text() {
        let pdf = build_pdf(&[Some("Alice resume")]);
        assert_eq!(extract(&pdf).unwrap(), "Alice resume");
    }

    #[test]
    fn test_empty_page_contributes_nothing() {
        // Page 1 has no text; output must be page 2's text with no leading
        // blank line.
        let pdf = build_pdf(&[None, Some("Hello from page two")]);
        assert_eq!(extract(&pdf).unwrap(), "Hello from page two");
    }

    #[test]
    fn test_pages_joined_with_newline() {
        let pdf = build_pdf(&[Some("Page one"), Some("Page two")]);
        assert_eq!(extract(&pdf).unwrap(), "Page one\nPage two");
    }

    #[test]
    fn test_all_empty_pages_yield_empty_string() {
        let pdf = build_pdf(&[None, None]);
        assert_eq!(extract(&pdf).unwrap(), "");
    }

    #[test]
    fn test_malformed_pdf_is_an_error() {
        let err = extract(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }
}
