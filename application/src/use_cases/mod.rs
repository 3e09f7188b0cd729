//! Application use cases

pub mod battle_engine;

pub use battle_engine::BattleEngine;
