//! Text extraction from uploaded résumé documents.
//!
//! Total over all inputs: unsupported extensions and unreadable files yield
//! empty text, never an error. The scorer is defined on empty text, so a
//! scanned PDF with no text layer still produces a complete response — the
//! user sees a near-zero character count instead of a failure.

use tracing::warn;

/// Extracts plain text from a document, dispatching on the declared extension.
pub fn extract_text(data: &[u8], ext: &str) -> String {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => extract_pdf(data),
        "docx" => extract_docx(data),
        other => {
            warn!("unsupported document extension '{other}', treating as empty");
            String::new()
        }
    }
}

fn extract_pdf(data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF text extraction failed: {e}");
            String::new()
        }
    }
}

/// Walks the document body paragraph by paragraph, collecting run text.
fn extract_docx(data: &[u8]) -> String {
    let docx = match docx_rs::read_docx(data) {
        Ok(d) => d,
        Err(e) => {
            warn!("DOCX parse failed: {e:?}");
            return String::new();
        }
    };

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    text
}
