//! compass-core
//!
//! Pure domain types for Values Compass: questions, typed answers, value
//! names, ranked results and assessment records. No I/O; this is the shared
//! vocabulary of every other crate.

pub mod error;
pub mod models;
