// cleantext/src/ui/mod.rs
//! Terminal output helpers.

pub mod output_format;
pub mod summary;
