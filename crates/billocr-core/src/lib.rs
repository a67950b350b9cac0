//! Core library for bill OCR extraction.
//!
//! This crate provides:
//! - Line item reconstruction from noisy OCR page text (two-state parser
//!   that reassembles wrapped item names)
//! - Header/footer line filtering and whole-page junk detection
//! - Numeric normalization tolerant of currency glyphs and separators
//! - Cross-page deduplication with a grand total
//!
//! Document acquisition, page rendering and the OCR engine itself are
//! external collaborators; the pipeline consumes their per-page text output
//! through the [`source::PageSource`] seam.

pub mod error;
pub mod extract;
pub mod models;
pub mod source;

pub use error::{BillocrError, DocumentError, Result};
pub use extract::{
    BillExtractor, LineClassifier, LineItemParser, NumericNormalizer, ParserState, normalize_name,
};
pub use models::bill::{
    BillExtraction, ExtractResponse, LineItem, PAGE_TYPE_BILL_DETAIL, Page, PagedLineItem,
};
pub use models::config::{BillocrConfig, ClassifierConfig, NumericConfig};
pub use source::{PageSource, TextDocument};
