//! Bill extraction pipeline.
//!
//! Leaf components (numeric/name normalization, line classification) feed a
//! per-page state machine; collected items are deduplicated and totaled
//! across pages. The whole pipeline is synchronous and total: malformed
//! content degrades, it never errors.

pub mod classify;
pub mod dedupe;
pub mod name;
pub mod numeric;
pub mod parser;
mod patterns;

pub use classify::LineClassifier;
pub use dedupe::{dedupe_items, sum_total};
pub use name::normalize_name;
pub use numeric::NumericNormalizer;
pub use parser::{LineItemParser, ParserState};

use tracing::{debug, info};

use crate::models::bill::{BillExtraction, LineItem, Page, PagedLineItem, PAGE_TYPE_BILL_DETAIL};
use crate::models::config::BillocrConfig;

/// Document-level bill extractor.
///
/// Wires the classifier, normalizers and the per-page parser together and
/// reduces the collected items into the final result set.
#[derive(Debug, Clone, Default)]
pub struct BillExtractor {
    parser: LineItemParser,
}

impl BillExtractor {
    pub fn new(config: &BillocrConfig) -> Self {
        Self {
            parser: LineItemParser::new(config),
        }
    }

    /// Extract the line items of a single page, or `None` for a junk page.
    ///
    /// `page_no` is the 1-based index used for labeling only.
    pub fn extract_page(&self, page_no: usize, text: &str) -> Option<Page> {
        if self.parser.classifier().is_junk_page(text) {
            debug!(page_no, "skipping junk page");
            return None;
        }

        let bill_items: Vec<LineItem> = self.parser.parse_page(text);
        debug!(page_no, items = bill_items.len(), "parsed page");

        Some(Page {
            page_no: page_no.to_string(),
            page_type: PAGE_TYPE_BILL_DETAIL.to_string(),
            bill_items,
        })
    }

    /// Run the full pipeline over a document's pages, in page order.
    ///
    /// Per-page parser state never crosses pages, and pages are consumed in
    /// ascending order so first-occurrence-wins deduplication is
    /// deterministic. Running twice on the same input yields identical
    /// output.
    pub fn extract_document<I, S>(&self, pages: I) -> BillExtraction
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pagewise = Vec::new();
        let mut collected: Vec<PagedLineItem> = Vec::new();

        for (i, text) in pages.into_iter().enumerate() {
            let Some(page) = self.extract_page(i + 1, text.as_ref()) else {
                continue;
            };

            collected.extend(page.bill_items.iter().map(|item| PagedLineItem {
                item: item.clone(),
                page_no: page.page_no.clone(),
            }));
            pagewise.push(page);
        }

        let unique_line_items = dedupe_items(collected);
        let total_items_count = unique_line_items.len();
        let sum = sum_total(&unique_line_items);

        info!(
            pages = pagewise.len(),
            unique_items = total_items_count,
            sum_total = sum,
            "extraction complete"
        );

        BillExtraction {
            pagewise_line_items: pagewise,
            unique_line_items,
            total_items_count,
            sum_total: sum,
        }
    }
}
