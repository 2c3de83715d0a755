//! Core domain layer for the car-hunts report.
//!
//! Holds the data model, the interval/prediction math, date format helpers,
//! CLI settings and the shared error type. No I/O happens in this crate.

pub mod dates;
pub mod error;
pub mod models;
pub mod prediction;
pub mod settings;
