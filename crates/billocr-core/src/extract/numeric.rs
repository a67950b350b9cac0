//! Numeric token normalization.

use crate::models::config::NumericConfig;

use super::patterns::NUMBER_TOKEN;

/// Normalizes raw numeric-looking tokens into floats.
///
/// Tolerates comma thousands-separators and the configured currency glyphs.
/// Extraction failure is not an error: anything unparseable yields `None`.
#[derive(Debug, Clone)]
pub struct NumericNormalizer {
    currency_glyphs: Vec<char>,
}

impl NumericNormalizer {
    pub fn new(config: &NumericConfig) -> Self {
        Self {
            currency_glyphs: config.currency_glyphs.clone(),
        }
    }

    /// Turn a raw token into a float, or `None` if no number is present.
    ///
    /// Commas and currency glyphs are stripped first, then the *first*
    /// substring matching the generic numeric pattern is parsed; a token
    /// with multiple numbers yields only the first.
    pub fn normalize(&self, raw: &str) -> Option<f64> {
        if raw.is_empty() {
            return None;
        }

        let cleaned: String = raw
            .chars()
            .filter(|c| *c != ',' && !self.currency_glyphs.contains(c))
            .collect();

        NUMBER_TOKEN
            .find(&cleaned)
            .and_then(|m| m.as_str().parse::<f64>().ok())
    }
}

impl Default for NumericNormalizer {
    fn default() -> Self {
        Self::new(&NumericConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_currency_and_separators() {
        let normalizer = NumericNormalizer::default();
        assert_eq!(normalizer.normalize("₹1,234.56"), Some(1234.56));
        assert_eq!(normalizer.normalize("$25.00"), Some(25.0));
        assert_eq!(normalizer.normalize("1,00,000"), Some(100000.0));
    }

    #[test]
    fn empty_and_non_numeric_yield_none() {
        let normalizer = NumericNormalizer::default();
        assert_eq!(normalizer.normalize(""), None);
        assert_eq!(normalizer.normalize("N/A"), None);
        assert_eq!(normalizer.normalize("--"), None);
    }

    #[test]
    fn only_first_number_is_used() {
        let normalizer = NumericNormalizer::default();
        assert_eq!(normalizer.normalize("12.50 x 3"), Some(12.5));
        assert_eq!(normalizer.normalize("qty 10 of 20"), Some(10.0));
    }

    #[test]
    fn signed_and_bare_decimal_tokens() {
        let normalizer = NumericNormalizer::default();
        assert_eq!(normalizer.normalize("-42"), Some(-42.0));
        assert_eq!(normalizer.normalize("+3.5"), Some(3.5));
        assert_eq!(normalizer.normalize(".75"), Some(0.75));
    }

    #[test]
    fn glyph_set_is_configurable() {
        let normalizer = NumericNormalizer::new(&NumericConfig {
            currency_glyphs: vec!['€'],
        });
        assert_eq!(normalizer.normalize("€9.99"), Some(9.99));
    }
}
