//! Header-line and junk-page classification.

use crate::models::config::ClassifierConfig;

/// Decides which lines and pages carry no bill content.
///
/// Matching policy is injected as configuration: both marker lists are
/// case-insensitive substrings.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    header_markers: Vec<String>,
    junk_markers: Vec<String>,
}

impl LineClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            header_markers: config
                .header_markers
                .iter()
                .map(|m| m.to_lowercase())
                .collect(),
            junk_markers: config
                .junk_markers
                .iter()
                .map(|m| m.to_lowercase())
                .collect(),
        }
    }

    /// True if the line is a table header/footer to discard.
    pub fn is_header_line(&self, line: &str) -> bool {
        let low = line.to_lowercase();
        self.header_markers.iter().any(|m| low.contains(m.as_str()))
    }

    /// True if the whole page is boilerplate rather than bill content.
    ///
    /// Applied once per page, before any line-level processing; a junk page
    /// contributes no items and no page record.
    pub fn is_junk_page(&self, page_text: &str) -> bool {
        let low = page_text.to_lowercase();
        self.junk_markers.iter().any(|m| low.contains(m.as_str()))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lines_detected_case_insensitively() {
        let classifier = LineClassifier::default();
        assert!(classifier.is_header_line("Description Qty Rate"));
        assert!(classifier.is_header_line("GRAND TOTAL"));
        assert!(classifier.is_header_line("Net Amt"));
        assert!(!classifier.is_header_line("Paracetamol 500mg 10 2.50 0 25.00"));
    }

    #[test]
    fn junk_pages_detected() {
        let classifier = LineClassifier::default();
        assert!(classifier.is_junk_page("Expected Response Format:\n{...}"));
        assert!(classifier.is_junk_page("Pagewise Line Items on this page"));
        assert!(classifier.is_junk_page("l tem_amount: float"));
        assert!(!classifier.is_junk_page("Consultation Fee\n500.00"));
    }

    #[test]
    fn custom_markers_replace_defaults() {
        let classifier = LineClassifier::new(&ClassifierConfig {
            header_markers: vec!["subtotal".to_string()],
            junk_markers: vec!["annexure".to_string()],
        });
        assert!(classifier.is_header_line("SubTotal"));
        assert!(!classifier.is_header_line("Total")); // default list not in effect
        assert!(classifier.is_junk_page("Annexure A"));
    }
}
