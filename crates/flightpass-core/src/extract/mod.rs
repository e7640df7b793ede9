//! Flight field extraction module.

pub mod airline;
pub mod catalog;
mod extractor;
pub mod normalize;
pub mod patterns;

pub use airline::{BUILTIN_CARRIERS, Carrier, detect_airline};
pub use catalog::{CATALOG, FieldDefinition};
pub use extractor::FieldExtractor;
pub use normalize::Normalizer;

use tracing::info;

use crate::models::record::{ExtractedDocument, Field, FlightRecord};
use crate::source::Document;

/// Trait for flight field extractors.
///
/// Extraction is infallible: unresolved fields are reported as
/// [`FieldValue::NotFound`](crate::FieldValue::NotFound).
pub trait TextExtractor: Send + Sync {
    /// Extract every catalog field from raw text.
    fn extract(&self, text: &str) -> FlightRecord;

    /// Extract a document and tag the record with its name.
    fn extract_document(&self, document: &Document) -> ExtractedDocument {
        let record = self.extract(&document.text);
        info!(
            "{}: {} fields resolved, airline {}",
            document.name,
            record.found_count(),
            record.airline()
        );
        ExtractedDocument::new(document.name.clone(), record)
    }
}

/// The candidate pattern that resolved a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Resolved field.
    pub field: Field,
    /// Rank of the winning pattern in the field's candidate list.
    pub pattern_index: usize,
    /// Normalized value.
    pub value: String,
    /// Text matched by the whole pattern.
    pub source: String,
    /// Byte range of the match in the input.
    pub position: (usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Document, DocumentKind};

    #[test]
    fn test_extract_mail_document() {
        let raw = b"Subject: Flight Confirmation - Deepa Iyer\r\n\r\nVistara UK955 BOM to DEL\r\nDeparture 07:10 am, 2025-04-02\r\nPNR: K9T4QZ\r\n";
        let doc = Document::from_bytes("confirm.eml", DocumentKind::Mail, raw).unwrap();

        let extracted = FieldExtractor::new().extract_document(&doc);
        let record = &extracted.record;

        assert_eq!(extracted.source_file, "confirm.eml");
        assert_eq!(record.get(Field::PassengerName).as_str(), "Deepa Iyer");
        assert_eq!(record.get(Field::FlightNumber).as_str(), "UK955");
        assert_eq!(record.get(Field::Route).as_str(), "BOM → DEL");
        assert_eq!(record.get(Field::Time).as_str(), "07:10 AM");
        assert_eq!(record.get(Field::Date).as_str(), "2025-04-02");
        assert_eq!(record.get(Field::Pnr).as_str(), "K9T4QZ");
        assert_eq!(record.airline(), "Vistara");
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = std::sync::Arc::new(FieldExtractor::new());

        let handles: Vec<_> = ["AI101", "6E205", "UK955", "SG123"]
            .into_iter()
            .map(|text| {
                let extractor = std::sync::Arc::clone(&extractor);
                std::thread::spawn(move || extractor.extract(text).airline().to_string())
            })
            .collect();

        let airlines: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(airlines, ["Air India", "IndiGo", "Vistara", "SpiceJet"]);
    }
}
