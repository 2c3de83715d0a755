//! Report layer for the car-hunts pipeline.
//!
//! Renders the classified cars as fixed-width text tables on a plain
//! `io::Write` stream (stdout in the binary, byte buffers in tests).

pub mod table;

pub use hunts_core as core;
