//! Shared test fixtures for SearchBench crates.
//!
//! This crate provides datasets and pure helper functions for testing.
//!
//! - [`datasets`] - Sorted datasets, seeded and hand-built
//! - [`sequences`] - Unsorted and duplicate-bearing sequences
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! searchbench-test = { workspace = true }
//! ```

pub mod datasets;
pub mod sequences;

pub use datasets::{seeded_dataset, stepped_dataset, FIXTURE_SEED};
pub use sequences::{absent_values, unsorted_sequence, with_duplicates};
