//! Data layer for the car-hunts report.
//!
//! Responsible for reading and parsing the hunt log, classifying cars into
//! the once/upcoming/due buckets and running the top-level analysis pipeline.

pub mod analysis;
pub mod classifier;
pub mod reader;

pub use hunts_core as core;
