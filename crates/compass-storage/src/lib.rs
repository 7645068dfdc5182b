//! compass-storage
//!
//! In-memory record stores with simulated latency, seeded from bundled
//! fixtures, plus JSON snapshots for carrying them across runs.

pub mod assessments;
pub mod error;
pub mod questions;
pub mod state;
pub mod store;
pub mod values;
