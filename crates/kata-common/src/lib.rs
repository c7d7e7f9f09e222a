//! Common utilities for the kata crates.
//!
//! This crate provides shared infrastructure used by the exercise crates:
//! - **Warning System** - coloured, deduplicated diagnostics on stderr

pub mod warning;
