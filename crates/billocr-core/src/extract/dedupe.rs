//! Cross-page deduplication and totaling.

use std::collections::HashSet;

use crate::models::bill::PagedLineItem;

use super::name::normalize_name;

/// Dedup key: normalized item name plus the amount compared by value.
///
/// `f64` is not hashable, so the amount contributes its bit pattern; the
/// normalizers never produce NaN, and a missing amount is a valid key
/// component of its own.
type DedupKey = (String, Option<u64>);

fn dedup_key(item: &PagedLineItem) -> DedupKey {
    (
        normalize_name(&item.item.item_name),
        item.item.item_amount.map(f64::to_bits),
    )
}

/// Keep the first occurrence of each distinct key, preserving order.
///
/// Input must already be in page-then-line order so "first wins" is
/// deterministic; each kept item retains its originating page tag.
pub fn dedupe_items(items: Vec<PagedLineItem>) -> Vec<PagedLineItem> {
    let mut seen: HashSet<DedupKey> = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        if seen.insert(dedup_key(&item)) {
            unique.push(item);
        }
    }

    unique
}

/// Sum of amounts over the unique set, null counted as 0, rounded to
/// 2 decimal places.
pub fn sum_total(items: &[PagedLineItem]) -> f64 {
    let total: f64 = items
        .iter()
        .map(|i| i.item.item_amount.unwrap_or(0.0))
        .sum();
    (total * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bill::LineItem;
    use pretty_assertions::assert_eq;

    fn paged(name: &str, amount: Option<f64>, page_no: &str) -> PagedLineItem {
        PagedLineItem {
            item: LineItem {
                item_name: name.to_string(),
                item_quantity: Some(1.0),
                item_rate: None,
                item_amount: amount,
            },
            page_no: page_no.to_string(),
        }
    }

    #[test]
    fn first_occurrence_wins_across_pages() {
        let unique = dedupe_items(vec![
            paged("Paracetamol-500MG!!", Some(25.0), "1"),
            paged("Consultation Fee", Some(500.0), "1"),
            paged("paracetamol 500mg", Some(25.0), "2"),
        ]);

        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].item.item_name, "Paracetamol-500MG!!");
        assert_eq!(unique[0].page_no, "1");
    }

    #[test]
    fn same_name_different_amount_is_distinct() {
        let unique = dedupe_items(vec![
            paged("Dressing", Some(100.0), "1"),
            paged("Dressing", Some(150.0), "1"),
        ]);
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn null_amount_is_a_valid_key() {
        let unique = dedupe_items(vec![
            paged("Misc", None, "1"),
            paged("Misc", None, "2"),
            paged("Misc", Some(0.0), "2"),
        ]);
        assert_eq!(unique.len(), 2);
    }

    #[test]
    fn sum_treats_null_as_zero_and_rounds() {
        let items = vec![
            paged("A", Some(25.0), "1"),
            paged("B", None, "1"),
            paged("C", Some(500.0), "2"),
        ];
        assert_eq!(sum_total(&items), 525.0);

        let items = vec![paged("A", Some(0.1), "1"), paged("B", Some(0.2), "1")];
        assert_eq!(sum_total(&items), 0.3);
    }

    #[test]
    fn empty_set_sums_to_zero() {
        assert_eq!(sum_total(&[]), 0.0);
    }
}
