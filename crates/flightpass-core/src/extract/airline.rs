//! Airline detection from carrier names and flight-number prefixes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CatalogError;
use crate::models::config::CarrierConfig;
use crate::models::record::UNKNOWN_AIRLINE;

/// A carrier recognized by the airline field.
#[derive(Debug, Clone)]
pub struct Carrier {
    name: String,
    matcher: Regex,
}

impl Carrier {
    /// Build a carrier from its name tokens and flight-number prefix.
    ///
    /// Tokens match case-insensitively anywhere in the text, with any run of
    /// whitespace between their words. The prefix matches when followed by
    /// at least three digits.
    pub fn new(
        name: impl Into<String>,
        tokens: &[&str],
        prefix: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidCarrier {
                name,
                reason: "name is empty".to_string(),
            });
        }

        let mut alternatives: Vec<String> = tokens
            .iter()
            .map(|t| t.split_whitespace().map(regex::escape).collect::<Vec<_>>())
            .filter(|words| !words.is_empty())
            .map(|words| words.join(r"\s+"))
            .collect();

        if let Some(prefix) = prefix {
            let prefix = prefix.trim();
            if prefix.len() != 2 || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(CatalogError::InvalidCarrier {
                    name,
                    reason: format!("prefix {prefix:?} is not a two-character designator"),
                });
            }
            alternatives.push(format!(r"{}\d{{3}}", regex::escape(prefix)));
        }

        if alternatives.is_empty() {
            return Err(CatalogError::InvalidCarrier {
                name,
                reason: "carrier needs a name token or a prefix".to_string(),
            });
        }

        let pattern = format!("(?i)(?:{})", alternatives.join("|"));
        let matcher = Regex::new(&pattern).map_err(|source| CatalogError::Pattern {
            field: format!("airline ({name})"),
            source,
        })?;

        Ok(Self { name, matcher })
    }

    /// Build a carrier from configuration.
    pub fn from_config(config: &CarrierConfig) -> Result<Self, CatalogError> {
        let tokens: Vec<&str> = config.tokens.iter().map(String::as_str).collect();
        Self::new(config.name.clone(), &tokens, config.prefix.as_deref())
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the text mentions this carrier.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

lazy_static! {
    /// Built-in carriers in priority order.
    pub static ref BUILTIN_CARRIERS: Vec<Carrier> = vec![
        Carrier::new("Air India", &["AIR INDIA"], Some("AI")).unwrap(),
        Carrier::new("IndiGo", &["INDIGO"], Some("6E")).unwrap(),
        Carrier::new("Vistara", &["VISTARA"], Some("UK")).unwrap(),
        Carrier::new("SpiceJet", &["SPICEJET"], Some("SG")).unwrap(),
    ];
}

/// First carrier in `carriers` mentioned by the text, else `Unknown`.
pub fn detect_airline<'a>(carriers: &'a [Carrier], text: &str) -> &'a str {
    carriers
        .iter()
        .find(|c| c.is_match(text))
        .map(Carrier::name)
        .unwrap_or(UNKNOWN_AIRLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_name_token() {
        assert_eq!(detect_airline(&BUILTIN_CARRIERS, "Thank you for flying Vistara"), "Vistara");
        assert_eq!(detect_airline(&BUILTIN_CARRIERS, "AIR\n INDIA boarding pass"), "Air India");
    }

    #[test]
    fn test_detect_by_prefix() {
        assert_eq!(detect_airline(&BUILTIN_CARRIERS, "6E205"), "IndiGo");
        assert_eq!(detect_airline(&BUILTIN_CARRIERS, "flight sg8169"), "SpiceJet");
    }

    #[test]
    fn test_priority_order_wins() {
        // Both IndiGo and Air India are mentioned; Air India ranks first.
        assert_eq!(
            detect_airline(&BUILTIN_CARRIERS, "IndiGo codeshare on AI101"),
            "Air India"
        );
    }

    #[test]
    fn test_unknown_airline() {
        assert_eq!(detect_airline(&BUILTIN_CARRIERS, "hello world"), "Unknown");
        assert_eq!(detect_airline(&[], "AI101"), "Unknown");
    }

    #[test]
    fn test_invalid_carriers() {
        assert!(Carrier::new("", &["X"], None).is_err());
        assert!(Carrier::new("Akasa Air", &[], Some("QPX")).is_err());
        assert!(Carrier::new("Akasa Air", &["  "], None).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = CarrierConfig {
            name: "Akasa Air".to_string(),
            tokens: vec!["akasa air".to_string()],
            prefix: Some("QP".to_string()),
        };
        let carrier = Carrier::from_config(&config).unwrap();

        assert!(carrier.is_match("QP1402 BOM-BLR"));
        assert!(carrier.is_match("Welcome aboard AKASA  AIR"));
        assert!(!carrier.is_match("Air India"));
    }
}
