//! Prompt templates for the external oracle.
//!
//! All prompts are fully formed here in the domain layer; the oracle
//! port receives opaque strings and returns free text.

pub mod analyst;
pub mod counsel;
