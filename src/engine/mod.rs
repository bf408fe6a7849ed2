//! Check execution engine.
//!
//! The orchestrator runs registered checks in dependency order; the result
//! module aggregates their outcomes into a report.

pub mod orchestrator;
pub mod result;
