//! PDF discovery and per-page text extraction.

use docchat_core::error::IngestionError;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Extracted text of a single PDF page. Page numbers are 1-based.
#[derive(Debug, Clone)]
pub struct PageText {
    pub page: usize,
    pub text: String,
}

/// Enumerate all `*.pdf` files (case-insensitive) under `root`, sorted.
///
/// A missing folder and a folder without any PDFs are both fatal to the
/// indexing run.
pub fn discover_pdf_files(root: &Path) -> Result<Vec<PathBuf>, IngestionError> {
    if !root.is_dir() {
        return Err(IngestionError::SourceDirMissing(root.to_path_buf()));
    }
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| {
            p.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(IngestionError::NoDocuments(root.to_path_buf()));
    }
    Ok(files)
}

/// Extract the text of every page of one PDF, in page order.
///
/// Any parse or extraction failure aborts with `UnreadablePdf`; a corrupt
/// document fails the whole run rather than producing a partial index.
pub fn extract_page_texts(path: &Path) -> Result<Vec<PageText>, IngestionError> {
    let unreadable = |e: lopdf::Error| IngestionError::UnreadablePdf {
        path: path.to_path_buf(),
        source: anyhow::Error::new(e),
    };

    let doc = Document::load(path).map_err(unreadable)?;
    let mut pages = Vec::new();
    for page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[*page_number]).map_err(unreadable)?;
        pages.push(PageText {
            page: *page_number as usize,
            text,
        });
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_folder_is_fatal() {
        let err = discover_pdf_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, IngestionError::SourceDirMissing(_)));
    }

    #[test]
    fn folder_without_pdfs_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "plain text").unwrap();
        let err = discover_pdf_files(tmp.path()).unwrap_err();
        assert!(matches!(err, IngestionError::NoDocuments(_)));
    }

    #[test]
    fn discovery_is_case_insensitive_and_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("b.PDF"), b"stub").unwrap();
        std::fs::write(tmp.path().join("a.pdf"), b"stub").unwrap();
        let files = discover_pdf_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.PDF"]);
    }

    #[test]
    fn corrupt_pdf_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();
        let err = extract_page_texts(&path).unwrap_err();
        assert!(matches!(err, IngestionError::UnreadablePdf { .. }));
    }
}
