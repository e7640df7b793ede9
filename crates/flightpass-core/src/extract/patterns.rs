//! Regex patterns for flight document extraction.
//!
//! Alphabetic fields match case-insensitively. Date digits match as written;
//! only their labels ignore case.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Flight number: IATA designator (AI, 6E, G8) + 3-4 digits
    pub static ref FLIGHT_LABELED: Regex = Regex::new(
        r"(?i)\bFLIGHT\s*(?:NUMBER|NO\.?)?\s*[:#]?\s*((?:[A-Z]{2}|[A-Z]\d|\d[A-Z])\d{3,4})\b"
    ).unwrap();

    pub static ref FLIGHT_STANDALONE: Regex = Regex::new(
        r"(?i)\b((?:[A-Z]{2}|[A-Z]\d|\d[A-Z])\d{3,4})\b"
    ).unwrap();

    // Route: pair of airport codes
    pub static ref ROUTE_LABELED: Regex = Regex::new(
        r"(?i)\bFROM\b\s*:?\s*([A-Z]{3})\b\s*TO\b\s*:?\s*([A-Z]{3})\b"
    ).unwrap();

    pub static ref ROUTE_STANDALONE: Regex = Regex::new(
        r"(?i)\b([A-Z]{3})\s*(?:→|->|-|\bTO\b\s*:?)\s*([A-Z]{3})\b"
    ).unwrap();

    // Names stop at the next label, then at the end of the line
    pub static ref PASSENGER_NAME_LABELED: Regex = Regex::new(
        r"(?im)\bPASSENGER\s*NAME\s*:[ \t]*([A-Z][A-Z .'\t-]*?)(?:[ \t]+(?:TERMINAL|FLIGHT)\b|[ \t\r]*$)"
    ).unwrap();

    pub static ref NAME_LABELED: Regex = Regex::new(
        r"(?im)\bNAME\s*:[ \t]*([A-Z][A-Z .'\t-]*?)(?:[ \t]+(?:TERMINAL|FLIGHT)\b|[ \t\r]*$)"
    ).unwrap();

    // Names in confirmation mail subjects
    pub static ref SUBJECT_FLIGHT_CONFIRMATION: Regex = Regex::new(
        r"(?i)\bFlight\s+Confirmation\s*-\s*([A-Z][^-\r\n]*)"
    ).unwrap();

    pub static ref SUBJECT_BOOKING_CONFIRMATION: Regex = Regex::new(
        r"(?i)\bBooking\s+Confirmation\s*-\s*([A-Z][^-\r\n]*)"
    ).unwrap();

    pub static ref SUBJECT_ITINERARY: Regex = Regex::new(
        r"(?i)\bItinerary\s+for\s+([A-Z][^-\r\n]*)"
    ).unwrap();

    // Dates: DD/MM/YYYY and ISO
    pub static ref DATE_DMY_LABELED: Regex = Regex::new(
        r"\b(?i:DATE)\s*:\s*(\d{1,2}/\d{1,2}/\d{4})\b"
    ).unwrap();

    pub static ref DATE_ISO_LABELED: Regex = Regex::new(
        r"\b(?i:DATE)\s*:\s*(\d{4}-\d{2}-\d{2})\b"
    ).unwrap();

    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2}/\d{1,2}/\d{4})\b"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4}-\d{2}-\d{2})\b"
    ).unwrap();

    // Time: 12-hour clock with meridiem
    pub static ref TIME_LABELED: Regex = Regex::new(
        r"(?i)\bTIME\s*:\s*(\d{1,2}:\d{2}\s*[AP]M)\b"
    ).unwrap();

    pub static ref TIME_STANDALONE: Regex = Regex::new(
        r"(?i)\b(\d{1,2}:\d{2}\s*[AP]M)\b"
    ).unwrap();

    // Seat: optional row letter, 1-2 digits, optional seat letter
    pub static ref SEAT_LABELED: Regex = Regex::new(
        r"(?i)\bSEAT\s*:\s*([A-Z]?\d{1,2}[A-Z]?)\b"
    ).unwrap();

    pub static ref SEAT_LOOSE: Regex = Regex::new(
        r"(?i)\bSEAT\s*(?:NUMBER|NO\.?)?\s*:?\s*([A-Z]?\d{1,2}[A-Z]?)\b"
    ).unwrap();

    // Booking reference
    pub static ref PNR_LABELED: Regex = Regex::new(
        r"(?i)\bPNR\s*:\s*([A-Z0-9]{6})\b"
    ).unwrap();

    pub static ref BOOKING_REF_LABELED: Regex = Regex::new(
        r"(?i)\bBOOKING\s*REF(?:ERENCE)?\s*:\s*([A-Z0-9]{6})\b"
    ).unwrap();

    // Cost: rupee or dollar amount, optional thousands separators and paise/cents
    pub static ref COST_LABELED: Regex = Regex::new(
        r"(?i:\b(?:TOTAL\s+)?(?:FARE|COST|AMOUNT|PRICE))\s*:?\s*([$₹](?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)"
    ).unwrap();

    pub static ref COST_STANDALONE: Regex = Regex::new(
        r"([$₹](?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{2})?)"
    ).unwrap();
}
