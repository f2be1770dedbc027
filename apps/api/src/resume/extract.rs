//! Document Text Extractor: raw text from uploaded PDF, DOCX, DOC or plain-text resumes.

use thiserror::Error;

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Shortest printable run kept when scraping a legacy `.doc` binary.
const MIN_DOC_RUN: usize = 4;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document type: {0}")]
    UnsupportedFormat(String),

    #[error("File is {size} bytes; the limit is {MAX_UPLOAD_BYTES}")]
    TooLarge { size: usize },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format from the file extension, falling back to the content type.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Result<Self, ExtractionError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => return Ok(Self::Pdf),
            "docx" => return Ok(Self::Docx),
            "doc" => return Ok(Self::Doc),
            "txt" | "text" => return Ok(Self::PlainText),
            _ => {}
        }

        match content_type.unwrap_or_default() {
            "application/pdf" => Ok(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::Docx)
            }
            "application/msword" => Ok(Self::Doc),
            "text/plain" => Ok(Self::PlainText),
            other => Err(ExtractionError::UnsupportedFormat(if extension.is_empty() {
                other.to_string()
            } else {
                extension
            })),
        }
    }
}

/// Checks size and format before any parsing happens.
pub fn validate_upload(
    file_name: &str,
    content_type: Option<&str>,
    size: usize,
) -> Result<DocumentFormat, ExtractionError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ExtractionError::TooLarge { size });
    }
    DocumentFormat::detect(file_name, content_type)
}

pub fn extract_text(format: DocumentFormat, data: &[u8]) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| ExtractionError::Pdf(e.to_string())),
        DocumentFormat::Docx => extract_docx(data),
        DocumentFormat::Doc => Ok(scrape_doc(data)),
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(data).into_owned()),
    }
}

fn extract_docx(data: &[u8]) -> Result<String, ExtractionError> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let docx = docx_rs::read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

/// Legacy Word binaries store body text as plain single-byte runs. Keep every
/// printable run long enough to be a word and drop the rest.
fn scrape_doc(data: &[u8]) -> String {
    let mut runs: Vec<String> = Vec::new();
    let mut current = String::new();

    for &byte in data {
        if byte.is_ascii_graphic() || byte == b' ' {
            current.push(byte as char);
        } else {
            if current.trim().len() >= MIN_DOC_RUN {
                runs.push(current.trim().to_string());
            }
            current.clear();
        }
    }
    if current.trim().len() >= MIN_DOC_RUN {
        runs.push(current.trim().to_string());
    }

    runs.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(DocumentFormat::detect("cv.PDF", None).unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::detect("cv.docx", None).unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::detect("cv.doc", None).unwrap(), DocumentFormat::Doc);
        assert_eq!(DocumentFormat::detect("cv.txt", None).unwrap(), DocumentFormat::PlainText);
    }

    #[test]
    fn test_detect_by_content_type() {
        let format = DocumentFormat::detect("resume", Some("application/pdf")).unwrap();
        assert_eq!(format, DocumentFormat::Pdf);
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let err = DocumentFormat::detect("photo.png", Some("image/png")).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(ref ext) if ext == "png"));
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let err = validate_upload("cv.pdf", None, MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, ExtractionError::TooLarge { .. }));
        assert!(validate_upload("cv.pdf", None, MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_plain_text_is_lossy_utf8() {
        let text = extract_text(DocumentFormat::PlainText, b"python \xFF developer").unwrap();
        assert!(text.starts_with("python"));
        assert!(text.ends_with("developer"));
    }

    #[test]
    fn test_doc_scrape_keeps_printable_runs() {
        let mut data = vec![0u8, 1, 2];
        data.extend_from_slice(b"Senior Rust Engineer");
        data.extend_from_slice(&[0, 0, 7]);
        data.extend_from_slice(b"ab");
        data.push(0);
        data.extend_from_slice(b"5 years of experience");
        let text = extract_text(DocumentFormat::Doc, &data).unwrap();
        assert_eq!(text, "Senior Rust Engineer\n5 years of experience");
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let result = extract_text(DocumentFormat::Pdf, b"definitely not a pdf");
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_docx_is_an_error() {
        let result = extract_text(DocumentFormat::Docx, b"not a zip archive");
        assert!(matches!(result, Err(ExtractionError::Docx(_))));
    }
}
