//! Bill data models: line items, pages, and the extraction result.

use serde::{Deserialize, Serialize};

/// Page type label attached to every non-junk page.
pub const PAGE_TYPE_BILL_DETAIL: &str = "Bill Detail";

/// A single line item reconstructed from OCR text.
///
/// Numeric fields are `None` when the source token could not be parsed;
/// they serialize as JSON `null`. The name is never empty — an item is only
/// emitted once a non-empty name portion has been matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description as it appeared on the bill (OCR noise tolerated).
    pub item_name: String,

    /// Quantity; `1.0` for amount-only continuation items.
    pub item_quantity: Option<f64>,

    /// Unit rate; `None` for continuation items.
    pub item_rate: Option<f64>,

    /// Net amount for the line.
    pub item_amount: Option<f64>,
}

/// A line item tagged with the page it was found on.
///
/// Used for the deduplicated result set; the page tag serializes as
/// `_page_no` to match the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedLineItem {
    #[serde(flatten)]
    pub item: LineItem,

    /// 1-based page index, as a string.
    #[serde(rename = "_page_no")]
    pub page_no: String,
}

/// All line items found on one non-junk page.
///
/// Junk pages never produce a `Page` record; they are excluded from the
/// output entirely rather than recorded as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page index, as a string.
    pub page_no: String,

    /// Constant label, always [`PAGE_TYPE_BILL_DETAIL`].
    pub page_type: String,

    /// Items in the order they were found on the page.
    pub bill_items: Vec<LineItem>,
}

/// Top-level extraction output for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillExtraction {
    /// Per-page items, in page order, junk pages omitted.
    pub pagewise_line_items: Vec<Page>,

    /// Deduplicated items, first-seen order preserved.
    pub unique_line_items: Vec<PagedLineItem>,

    /// Length of the unique set.
    pub total_items_count: usize,

    /// Sum of unique amounts (null counted as 0), rounded to 2 decimals.
    pub sum_total: f64,
}

/// Wire envelope returned by the request layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub is_success: bool,
    pub data: BillExtraction,
}

impl ExtractResponse {
    /// Wrap a successful extraction.
    pub fn success(data: BillExtraction) -> Self {
        Self {
            is_success: true,
            data,
        }
    }
}
