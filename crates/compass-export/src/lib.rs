//! compass-export
//!
//! Share text, JSON reports and history exports for completed assessments.

pub mod error;
pub mod filenames;
pub mod render;
pub mod report;
