//! compass-app library root.
//!
//! Re-exports the command layer so that integration tests can drive whole
//! assessments without going through the command line.

pub mod commands;
pub mod config;
pub mod error;
pub mod flow;
pub mod state;
