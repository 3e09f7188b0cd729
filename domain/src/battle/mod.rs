//! Battle entities, score ledger, and stage progression

pub mod entities;
pub mod score;
pub mod stage;
