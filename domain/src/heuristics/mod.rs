//! Local text heuristics.
//!
//! Pure functions that classify a turn without consulting the oracle:
//! argument quality, scoring category, opposing-counsel rhetoric
//! profile, objection detection, and finish-phrase detection. These are
//! the always-available fallback path; oracle analysis refines but
//! never replaces them.

pub mod finish;
pub mod objection;
pub mod quality;
pub mod scoring;
pub mod strategy;
pub(crate) mod vocabulary;
