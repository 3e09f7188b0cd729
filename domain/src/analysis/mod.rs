//! Oracle reply parsing.
//!
//! The oracle answers analysis prompts with structured JSON, sometimes
//! wrapped in markdown code fences. These modules strip the wrapping
//! and parse the payloads; they never perform I/O.

pub mod insights;
pub mod turn_analysis;
