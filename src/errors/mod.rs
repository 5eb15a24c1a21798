//! Error types for lexical analysis.
//!
//! Lexical errors are never fatal to a scan. Each one is recorded as an
//! [`errors::Error`] carrying the line it occurred on, and the caller decides
//! what to do with the collected diagnostics.

pub mod errors;
