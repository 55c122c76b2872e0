// cleantext/src/lib.rs
//! # cleantext CLI Application
//!
//! Command-line front end for `cleantext-core`: reads a CSV file, cleans
//! one of its columns and writes the result.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
