//! Catalog-driven field extractor.

use tracing::{debug, trace};

use super::airline::{BUILTIN_CARRIERS, Carrier, detect_airline};
use super::catalog::{CATALOG, FieldDefinition, definition};
use super::{FieldMatch, TextExtractor};
use crate::error::CatalogError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{Field, FieldValue, FlightRecord};

/// Extracts flight fields from free text using the built-in catalog.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    carriers: Vec<Carrier>,
}

impl FieldExtractor {
    /// Create an extractor with the built-in carrier list.
    pub fn new() -> Self {
        Self {
            carriers: BUILTIN_CARRIERS.clone(),
        }
    }

    /// Append carriers after the built-in list.
    pub fn with_carriers(mut self, carriers: impl IntoIterator<Item = Carrier>) -> Self {
        self.carriers.extend(carriers);
        self
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, CatalogError> {
        let extra = config
            .extra_carriers
            .iter()
            .map(Carrier::from_config)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} extra carriers", extra.len());
        Ok(Self::new().with_carriers(extra))
    }

    /// Carriers in priority order.
    pub fn carriers(&self) -> &[Carrier] {
        &self.carriers
    }

    /// Report which candidate pattern resolved each pattern field.
    pub fn explain(&self, text: &str) -> Vec<FieldMatch> {
        CATALOG
            .iter()
            .filter_map(|def| first_match(def, text))
            .collect()
    }

    fn resolve(&self, field: Field, text: &str) -> FieldValue {
        if field == Field::Airline {
            return FieldValue::Found(detect_airline(&self.carriers, text).to_string());
        }

        let resolved = definition(field).and_then(|def| first_match(def, text));

        match resolved {
            Some(m) => {
                debug!(field = %field, pattern = m.pattern_index, value = %m.value, "Resolved field");
                FieldValue::Found(m.value)
            }
            None => {
                trace!(field = %field, "No candidate pattern matched");
                FieldValue::NotFound
            }
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for FieldExtractor {
    fn extract(&self, text: &str) -> FlightRecord {
        let record = FlightRecord::from_fn(|field| self.resolve(field, text));

        debug!(
            "Extracted {}/{} fields from {} characters",
            record.found_count(),
            Field::COUNT - 1,
            text.len()
        );

        record
    }
}

/// Greedy first match: the first pattern, in catalog order, that matches
/// and normalizes to a value. Matches the normalizer rejects are skipped in
/// favour of the pattern's next match, then the next pattern.
fn first_match(def: &FieldDefinition, text: &str) -> Option<FieldMatch> {
    def.patterns.iter().enumerate().find_map(|(index, re)| {
        re.captures_iter(text).find_map(|caps| {
            let value = def.normalizer.apply(&caps)?;
            let whole = caps.get(0)?;

            Some(FieldMatch {
                field: def.field,
                pattern_index: index,
                value,
                source: whole.as_str().to_string(),
                position: (whole.start(), whole.end()),
            })
        })
    })
}
