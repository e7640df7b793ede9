//! Flight record models produced by the field extractor.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Text rendered for a field that could not be resolved.
pub const NOT_FOUND: &str = "Not found";

/// Airline reported when no carrier is recognized.
pub const UNKNOWN_AIRLINE: &str = "Unknown";

/// A field of the extraction catalog.
///
/// Declaration order is catalog order and output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Carrier designator plus flight digits (e.g. `AI101`).
    FlightNumber,
    /// Origin and destination airport codes.
    Route,
    /// Passenger or employee name.
    PassengerName,
    /// Travel date as written in the document.
    Date,
    /// Departure or boarding time.
    Time,
    /// Seat assignment.
    Seat,
    /// Booking reference.
    Pnr,
    /// Fare amount with its currency symbol.
    Cost,
    /// Derived operating airline.
    Airline,
}

impl Field {
    /// Number of catalog fields.
    pub const COUNT: usize = 9;

    /// All fields in catalog order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::FlightNumber,
        Field::Route,
        Field::PassengerName,
        Field::Date,
        Field::Time,
        Field::Seat,
        Field::Pnr,
        Field::Cost,
        Field::Airline,
    ];

    /// Stable snake_case key used for JSON keys and CSV columns.
    pub fn key(self) -> &'static str {
        match self {
            Field::FlightNumber => "flight_number",
            Field::Route => "route",
            Field::PassengerName => "passenger_name",
            Field::Date => "date",
            Field::Time => "time",
            Field::Seat => "seat",
            Field::Pnr => "pnr",
            Field::Cost => "cost",
            Field::Airline => "airline",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::FlightNumber => "Flight",
            Field::Route => "Route",
            Field::PassengerName => "Passenger",
            Field::Date => "Date",
            Field::Time => "Time",
            Field::Seat => "Seat",
            Field::Pnr => "PNR",
            Field::Cost => "Cost",
            Field::Airline => "Airline",
        }
    }

    /// Parse a field from its key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved value of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldValue {
    /// A normalized value.
    Found(String),
    /// No candidate pattern matched.
    NotFound,
}

impl FieldValue {
    /// Whether a candidate pattern resolved the field.
    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }

    /// The resolved value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldValue::Found(v) => Some(v),
            FieldValue::NotFound => None,
        }
    }

    /// The value as rendered in reports.
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or(NOT_FOUND)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        if s == NOT_FOUND {
            FieldValue::NotFound
        } else {
            FieldValue::Found(s)
        }
    }
}

impl From<FieldValue> for String {
    fn from(v: FieldValue) -> Self {
        match v {
            FieldValue::Found(s) => s,
            FieldValue::NotFound => NOT_FOUND.to_string(),
        }
    }
}

/// Structured result of extracting one document.
///
/// Holds exactly one value per catalog field. Records are built by the
/// extractor and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    values: [FieldValue; Field::COUNT],
}

impl FlightRecord {
    /// Build a record from per-field values in catalog order.
    pub(crate) fn from_fn(resolve: impl FnMut(Field) -> FieldValue) -> Self {
        Self {
            values: Field::ALL.map(resolve),
        }
    }

    /// Value of a field.
    pub fn get(&self, field: Field) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Iterate over `(field, value)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> + '_ {
        Field::ALL.into_iter().zip(self.values.iter())
    }

    /// The detected airline, `Unknown` when no carrier matched.
    pub fn airline(&self) -> &str {
        self.get(Field::Airline).value().unwrap_or(UNKNOWN_AIRLINE)
    }

    /// Number of catalog fields with a resolved value, excluding the
    /// derived airline.
    pub fn found_count(&self) -> usize {
        self.iter()
            .filter(|(field, value)| *field != Field::Airline && value.is_found())
            .count()
    }

    /// Rendered values in catalog order, for tabular output.
    pub fn to_row(&self) -> Vec<&str> {
        self.values.iter().map(FieldValue::as_str).collect()
    }
}

impl Serialize for FlightRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value.as_str())?;
        }
        map.end()
    }
}

/// A record together with the document it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    /// File name or other identifier of the source document.
    pub source_file: String,

    /// When the extraction ran.
    pub extraction_time: DateTime<Utc>,

    /// Extracted fields.
    #[serde(flatten)]
    pub record: FlightRecord,
}

impl ExtractedDocument {
    /// Tag a record with its source, stamped with the current time.
    pub fn new(source_file: impl Into<String>, record: FlightRecord) -> Self {
        Self {
            source_file: source_file.into(),
            extraction_time: Utc::now(),
            record,
        }
    }

    /// Formatted extraction time, as written to reports.
    pub fn extraction_time_display(&self) -> String {
        self.extraction_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Aggregate counts over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Records seen.
    pub total: usize,
    /// Records with a resolved flight number.
    pub flight_numbers: usize,
    /// Records with a resolved route.
    pub routes: usize,
    /// Records with a resolved passenger name.
    pub passenger_names: usize,
    /// Distinct airlines, `Unknown` included.
    pub airlines: usize,
}

impl ExtractionStats {
    /// Aggregate counts over records in one pass.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FlightRecord>) -> Self {
        let mut stats = Self::default();
        let mut airlines = BTreeSet::new();

        for record in records {
            stats.total += 1;
            if record.get(Field::FlightNumber).is_found() {
                stats.flight_numbers += 1;
            }
            if record.get(Field::Route).is_found() {
                stats.routes += 1;
            }
            if record.get(Field::PassengerName).is_found() {
                stats.passenger_names += 1;
            }
            airlines.insert(record.airline().to_string());
        }

        stats.airlines = airlines.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(flight: Option<&str>, airline: &str) -> FlightRecord {
        FlightRecord::from_fn(|field| match field {
            Field::FlightNumber => flight
                .map(|f| FieldValue::Found(f.to_string()))
                .unwrap_or(FieldValue::NotFound),
            Field::Airline => FieldValue::Found(airline.to_string()),
            _ => FieldValue::NotFound,
        })
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("gate"), None);
    }

    #[test]
    fn test_field_value_sentinel_text() {
        assert_eq!(FieldValue::NotFound.to_string(), "Not found");
        assert_eq!(FieldValue::from("Not found".to_string()), FieldValue::NotFound);
        assert_eq!(FieldValue::Found("15A".into()).as_str(), "15A");
    }

    #[test]
    fn test_record_serializes_every_field_in_order() {
        let rec = record(Some("AI101"), "Air India");
        let json = serde_json::to_string(&rec).unwrap();

        assert_eq!(
            json,
            r#"{"flight_number":"AI101","route":"Not found","passenger_name":"Not found","date":"Not found","time":"Not found","seat":"Not found","pnr":"Not found","cost":"Not found","airline":"Air India"}"#
        );
    }

    #[test]
    fn test_extracted_document_flattens_record() {
        let doc = ExtractedDocument::new("pass.txt", record(None, "Unknown"));
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["source_file"], "pass.txt");
        assert_eq!(value["flight_number"], "Not found");
        assert_eq!(value["airline"], "Unknown");
        assert!(value.get("extraction_time").is_some());
    }

    #[test]
    fn test_stats_counts() {
        let records = vec![
            record(Some("AI101"), "Air India"),
            record(Some("6E205"), "IndiGo"),
            record(None, "Unknown"),
            record(Some("AI202"), "Air India"),
        ];

        let stats = ExtractionStats::from_records(&records);

        assert_eq!(
            stats,
            ExtractionStats {
                total: 4,
                flight_numbers: 3,
                routes: 0,
                passenger_names: 0,
                airlines: 3,
            }
        );
    }
}
