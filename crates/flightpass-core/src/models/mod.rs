//! Data models for flightpass.

pub mod config;
pub mod record;
