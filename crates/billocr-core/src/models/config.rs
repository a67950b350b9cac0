//! Configuration structures for the extraction pipeline.
//!
//! The header/junk marker lists and the currency glyph set are deliberately
//! configuration rather than hard-coded constants, so the matching policy
//! can be adjusted (or tested) without touching parsing logic.

use serde::{Deserialize, Serialize};

use crate::error::{BillocrError, Result};

/// Main configuration for the billocr pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillocrConfig {
    /// Line and page classification configuration.
    pub classifier: ClassifierConfig,

    /// Numeric normalization configuration.
    pub numeric: NumericConfig,
}

/// Configuration for header-line and junk-page detection.
///
/// All markers are matched as case-insensitive substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// A line containing any of these is a table header/footer to discard.
    pub header_markers: Vec<String>,

    /// A page containing any of these is boilerplate to discard wholesale.
    pub junk_markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            header_markers: [
                "description",
                "qty",
                "rate",
                "discount",
                "net amt",
                "total",
            ]
            .map(String::from)
            .to_vec(),
            // Corrupted field-name renderings ("tem_amount", "tem quantity")
            // show up when a bill scan includes a dump of the response format.
            junk_markers: [
                "pagewise line items",
                "response format",
                "item name",
                "tem_amount",
                "tem quantity",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Configuration for numeric token normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Currency glyphs stripped before number extraction.
    pub currency_glyphs: Vec<char>,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            currency_glyphs: vec!['₹', '$'],
        }
    }
}

impl BillocrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BillocrError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| BillocrError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_markers_cover_source_lists() {
        let config = ClassifierConfig::default();
        assert!(config.header_markers.contains(&"net amt".to_string()));
        assert!(config
            .junk_markers
            .contains(&"pagewise line items".to_string()));
    }

    #[test]
    fn config_json_round_trip() {
        let config = BillocrConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: BillocrConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.classifier.header_markers, config.classifier.header_markers);
        assert_eq!(back.numeric.currency_glyphs, config.numeric.currency_glyphs);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: BillocrConfig =
            serde_json::from_str(r#"{"numeric": {"currency_glyphs": ["€"]}}"#).unwrap();
        assert_eq!(config.numeric.currency_glyphs, vec!['€']);
        assert!(!config.classifier.header_markers.is_empty());
    }
}
