//! Core library for flight document field extraction.
//!
//! This crate provides:
//! - A static, ordered catalog of flight fields and their candidate patterns
//! - A pure, infallible field extractor over OCR text or email bodies
//! - Airline detection from carrier names and flight-number prefixes
//! - Document sources for plain text and `.eml` mail messages
//! - Record models, aggregate statistics and pipeline configuration

pub mod error;
pub mod extract;
pub mod models;
pub mod source;

pub use error::{CatalogError, FlightpassError, Result, SourceError};
pub use extract::{Carrier, FieldExtractor, FieldMatch, TextExtractor};
pub use models::config::FlightpassConfig;
pub use models::record::{ExtractedDocument, ExtractionStats, Field, FieldValue, FlightRecord};
pub use source::{Document, DocumentKind, load_document};
