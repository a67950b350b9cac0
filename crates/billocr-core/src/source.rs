//! Page text acquisition.
//!
//! Rendering and OCR are external collaborators; the pipeline only consumes
//! the page texts they produce. This module is the seam: anything that can
//! hand over an ordered sequence of per-page text blobs is a [`PageSource`].

use std::path::Path;

use tracing::debug;

use crate::error::{DocumentError, Result};

/// Form feed, the page separator OCR engines emit between pages.
pub const PAGE_SEPARATOR: char = '\u{0c}';

/// A source of ordered per-page OCR text for one document.
pub trait PageSource {
    /// The document's page texts, in page order (1-indexed for labeling).
    fn pages(&self) -> Result<Vec<String>>;
}

/// A plain-text OCR dump, with pages separated by form feeds.
#[derive(Debug, Clone)]
pub struct TextDocument {
    pages: Vec<String>,
}

impl TextDocument {
    /// Split a raw text dump into pages on form-feed separators.
    ///
    /// Trailing empty pages (OCR engines terminate every page with a form
    /// feed) are dropped; interior blank pages are kept so page numbering
    /// stays aligned with the source document.
    pub fn from_text(text: &str) -> Self {
        let mut pages: Vec<String> = text.split(PAGE_SEPARATOR).map(String::from).collect();
        while pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }
        debug!(pages = pages.len(), "split text dump into pages");
        Self { pages }
    }

    /// Wrap already-split page texts.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self { pages }
    }

    /// Load a text dump from disk.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.display().to_string()).into());
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| DocumentError::Read(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_text(&text))
    }
}

impl PageSource for TextDocument {
    fn pages(&self) -> Result<Vec<String>> {
        if self.pages.is_empty() {
            return Err(DocumentError::NoPages.into());
        }
        Ok(self.pages.clone())
    }
}
