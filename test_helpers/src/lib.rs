//! Test helpers shared across crates.
//!
//! This crate provides synthetic argument vectors and guards over the
//! process-wide argument table.

pub mod argv;
pub mod table;
