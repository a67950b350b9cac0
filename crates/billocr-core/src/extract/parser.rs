//! Per-page line item reconstruction.
//!
//! Bill renderers frequently wrap a long item description onto its own
//! line, with the numeric columns alone on the following line. The parser
//! is a two-state machine: a full item line emits directly, while an
//! amount-only line attaches to the pending name buffered from the
//! previous line. The buffer is the single line of lookback state and is
//! local to one page.

use tracing::trace;

use crate::models::bill::LineItem;
use crate::models::config::BillocrConfig;

use super::classify::LineClassifier;
use super::numeric::NumericNormalizer;
use super::patterns::{AMOUNT_ONLY, FULL_ITEM};

/// Parser state carried across lines within one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    /// No wrapped name is pending.
    #[default]
    NoPendingName,
    /// A previous line is buffered as a candidate wrapped item name.
    PendingName(String),
}

/// State machine turning filtered page lines into line items.
#[derive(Debug, Clone, Default)]
pub struct LineItemParser {
    classifier: LineClassifier,
    numeric: NumericNormalizer,
}

impl LineItemParser {
    pub fn new(config: &BillocrConfig) -> Self {
        Self {
            classifier: LineClassifier::new(&config.classifier),
            numeric: NumericNormalizer::new(&config.numeric),
        }
    }

    /// The classifier this parser filters lines with.
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Pure transition function: consume one trimmed, non-empty line.
    ///
    /// Priority order: header lines are discarded and forcibly terminate an
    /// in-progress wrapped name; a full item line always wins over the
    /// amount-only shape; an amount-only line emits only when a name is
    /// pending. Anything else becomes the new pending name, overwriting any
    /// previous, unconsumed buffer. That silent overwrite means two
    /// consecutive unmatched lines keep only the second; the first is lost
    /// with no item and no diagnostic.
    pub fn step(&self, state: ParserState, line: &str) -> (ParserState, Option<LineItem>) {
        if self.classifier.is_header_line(line) {
            return (ParserState::NoPendingName, None);
        }

        if let Some(caps) = FULL_ITEM.captures(line) {
            // The discount column pins the line shape but is not retained.
            let item = LineItem {
                item_name: caps["prefix"].trim().to_string(),
                item_quantity: self.numeric.normalize(&caps["qty"]),
                item_rate: self.numeric.normalize(&caps["rate"]),
                item_amount: self.numeric.normalize(&caps["net"]),
            };
            return (ParserState::NoPendingName, Some(item));
        }

        if let ParserState::PendingName(buffer) = &state {
            if let Some(caps) = AMOUNT_ONLY.captures(line) {
                let item_name = match caps.name("prefix") {
                    Some(prefix) => format!("{} {}", buffer, prefix.as_str()),
                    None => buffer.clone(),
                };
                let item = LineItem {
                    item_name: item_name.trim().to_string(),
                    item_quantity: Some(1.0),
                    item_rate: None,
                    item_amount: self.numeric.normalize(&caps["net"]),
                };
                return (ParserState::NoPendingName, Some(item));
            }
        }

        if let ParserState::PendingName(dropped) = &state {
            trace!(%dropped, line, "overwriting pending name buffer");
        }
        (ParserState::PendingName(line.to_string()), None)
    }

    /// Parse one page of OCR text into line items.
    ///
    /// Splits into trimmed non-empty lines and folds [`Self::step`] over
    /// them; the pending buffer starts empty and never leaks to the next
    /// page.
    pub fn parse_page(&self, text: &str) -> Vec<LineItem> {
        let mut state = ParserState::NoPendingName;
        let mut items = Vec::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (next, emitted) = self.step(state, line);
            state = next;
            if let Some(item) = emitted {
                items.push(item);
            }
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser() -> LineItemParser {
        LineItemParser::default()
    }

    #[test]
    fn full_item_line_parses_all_fields() {
        let items = parser().parse_page("Paracetamol 500mg 10 2.50 0 25.00");

        assert_eq!(
            items,
            vec![LineItem {
                item_name: "Paracetamol 500mg".to_string(),
                item_quantity: Some(10.0),
                item_rate: Some(2.5),
                item_amount: Some(25.0),
            }]
        );
    }

    #[test]
    fn wrapped_name_joins_with_amount_line() {
        let items = parser().parse_page("Consultation Fee\n500.00");

        assert_eq!(
            items,
            vec![LineItem {
                item_name: "Consultation Fee".to_string(),
                item_quantity: Some(1.0),
                item_rate: None,
                item_amount: Some(500.0),
            }]
        );
    }

    #[test]
    fn continuation_prefix_extends_the_name() {
        let items = parser().parse_page("Ultrasound Abdomen\n(whole) 1,200.00");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Ultrasound Abdomen (whole)");
        assert_eq!(items[0].item_amount, Some(1200.0));
    }

    #[test]
    fn header_line_emits_nothing_and_clears_buffer() {
        // The buffered name is discarded by the header, so the amount line
        // that follows has nothing to attach to and becomes the new buffer.
        let items = parser().parse_page("Consultation Fee\nDescription Qty Rate\n500.00");
        assert_eq!(items, vec![]);
    }

    #[test]
    fn full_item_wins_over_continuation() {
        // Both shapes structurally match the second line; the four trailing
        // tokens are unambiguous so the buffer must stay unused.
        let items = parser().parse_page("Syringe 5ml\nGauze Roll 2 15.00 0 30.00");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Gauze Roll");
        assert_eq!(items[0].item_quantity, Some(2.0));
    }

    #[test]
    fn amount_line_without_buffer_becomes_buffer() {
        let (state, emitted) = parser().step(ParserState::NoPendingName, "Stray 42.00");
        assert_eq!(state, ParserState::PendingName("Stray 42.00".to_string()));
        assert_eq!(emitted, None);
    }

    #[test]
    fn consecutive_amount_lines_drop_first_without_buffer() {
        // Known quirk preserved from the reference behavior: with no buffer,
        // the first amount-shaped line is buffered, the second consumes it,
        // and a third is buffered again — so pairs collapse and an odd
        // trailing line is silently lost.
        let items = parser().parse_page("Dressing 100.00\nBandage 50.00\nCotton 25.00");

        assert_eq!(
            items,
            vec![LineItem {
                item_name: "Dressing 100.00 Bandage".to_string(),
                item_quantity: Some(1.0),
                item_rate: None,
                item_amount: Some(50.0),
            }]
        );
    }

    #[test]
    fn unparseable_amount_degrades_to_null() {
        let items = parser().parse_page("Misc Charges\nhandling -,-");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Misc Charges handling");
        assert_eq!(items[0].item_amount, None);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let items = parser().parse_page("\n  \nConsultation Fee\n\n500.00\n");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn unmatched_noise_emits_nothing() {
        let items = parser().parse_page("Dr. A. Sharma\nPatient: B. Gupta\nThank you!");
        assert_eq!(items, vec![]);
    }
}
