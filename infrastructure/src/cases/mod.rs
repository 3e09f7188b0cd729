//! Built-in case files

pub mod library;
