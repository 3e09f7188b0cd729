//! Legal case entities

pub mod entities;
