//! The field catalog: ordered candidate patterns per field.

use lazy_static::lazy_static;
use regex::Regex;

use super::normalize::Normalizer;
use super::patterns::*;
use crate::models::record::Field;

/// Definition of a pattern-resolved field.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// The field being resolved.
    pub field: Field,
    /// Candidate patterns, most specific first.
    pub patterns: Vec<&'static Regex>,
    /// Normalization applied to the winning capture.
    pub normalizer: Normalizer,
}

impl FieldDefinition {
    fn new(field: Field, patterns: Vec<&'static Regex>, normalizer: Normalizer) -> Self {
        Self {
            field,
            patterns,
            normalizer,
        }
    }
}

lazy_static! {
    /// Built-in catalog in field order. `airline` is derived and has no entry.
    pub static ref CATALOG: Vec<FieldDefinition> = vec![
        FieldDefinition::new(
            Field::FlightNumber,
            vec![&*FLIGHT_LABELED, &*FLIGHT_STANDALONE],
            Normalizer::Upper,
        ),
        FieldDefinition::new(
            Field::Route,
            vec![&*ROUTE_LABELED, &*ROUTE_STANDALONE],
            Normalizer::Route,
        ),
        FieldDefinition::new(
            Field::PassengerName,
            vec![
                &*PASSENGER_NAME_LABELED,
                &*NAME_LABELED,
                &*SUBJECT_FLIGHT_CONFIRMATION,
                &*SUBJECT_BOOKING_CONFIRMATION,
                &*SUBJECT_ITINERARY,
            ],
            Normalizer::PersonName,
        ),
        FieldDefinition::new(
            Field::Date,
            vec![&*DATE_DMY_LABELED, &*DATE_ISO_LABELED, &*DATE_DMY, &*DATE_ISO],
            Normalizer::PassThrough,
        ),
        FieldDefinition::new(
            Field::Time,
            vec![&*TIME_LABELED, &*TIME_STANDALONE],
            Normalizer::Clock,
        ),
        FieldDefinition::new(
            Field::Seat,
            vec![&*SEAT_LABELED, &*SEAT_LOOSE],
            Normalizer::Upper,
        ),
        FieldDefinition::new(
            Field::Pnr,
            vec![&*PNR_LABELED, &*BOOKING_REF_LABELED],
            Normalizer::Upper,
        ),
        FieldDefinition::new(
            Field::Cost,
            vec![&*COST_LABELED, &*COST_STANDALONE],
            Normalizer::PassThrough,
        ),
    ];
}

/// Look up the built-in definition of a field.
pub fn definition(field: Field) -> Option<&'static FieldDefinition> {
    CATALOG.iter().find(|d| d.field == field)
}
