//! Common utilities for the Wren tokenizer.
//!
//! This crate provides shared infrastructure used by the library and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for diagnostics

pub mod warning;
