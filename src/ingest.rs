//! Document ingestion.
//!
//! Turns an uploaded file into an [`UploadedFile`]: plain text is decoded
//! verbatim, PDFs go through a page-by-page text-extraction capability.
//! Extraction itself sits behind [`TextExtraction`] so the PDF machinery
//! stays swappable (and stubbable in tests).

use crate::types::{FileKind, UploadedFile};
use async_trait::async_trait;
use lopdf::Document;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("document could not be parsed: {0}")]
    Extraction(String),
}

/// External text-extraction capability: given raw file bytes, produce the
/// extracted text of each page, in page order.
#[async_trait]
pub trait TextExtraction {
    async fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, IngestError>;
}

/// Default capability backed by lopdf.
pub struct PdfExtractor;

#[async_trait]
impl TextExtraction for PdfExtractor {
    async fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, IngestError> {
        let doc = Document::load_mem(bytes)
            .map_err(|err| IngestError::Extraction(format!("failed to read PDF: {err}")))?;

        let mut pages = Vec::new();
        // get_pages is keyed by page number, so iteration order is 1..N.
        for page_number in doc.get_pages().keys() {
            let text = doc.extract_text(&[*page_number]).map_err(|err| {
                IngestError::Extraction(format!("failed to extract page {page_number}: {err}"))
            })?;
            pages.push(text);
        }
        Ok(pages)
    }
}

/// Ingest raw file bytes as `kind`, assigning a fresh id and recording the
/// original file name.
pub async fn ingest_file(
    name: &str,
    bytes: &[u8],
    kind: FileKind,
    extractor: &dyn TextExtraction,
) -> Result<UploadedFile, IngestError> {
    let content = match kind {
        FileKind::Text => String::from_utf8(bytes.to_vec())
            .map_err(|err| IngestError::Extraction(format!("file is not valid UTF-8: {err}")))?,
        FileKind::Pdf => {
            let mut full_text = String::new();
            for page_text in extractor.extract_pages(bytes).await? {
                full_text.push_str(&page_text);
                full_text.push('\n');
            }
            full_text
        }
    };

    Ok(UploadedFile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
        content,
    })
}
