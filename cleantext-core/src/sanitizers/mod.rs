//! Rule compilation for the redaction stage.
//!
//! Turns the declarative `RedactionRule`s from a `CleanConfig` into compiled
//! regular expressions, cached process-wide so repeated pipelines built from
//! the same rules share one compiled set.

pub mod compiler;
