//! Sentinel Pipeline - escalation resolution and orchestration
//!
//! Composes the core scanners into the linear triage pipeline:
//! detect -> extract -> resolve -> aggregate. Fully synchronous; every run
//! is independent and deterministic for a given input.

pub mod escalation;
pub mod pipeline;

pub use escalation::*;
pub use pipeline::*;
