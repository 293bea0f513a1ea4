//! # mb-core
//!
//! Core types shared by the MoonBoard RS crates.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Parse and validation error types
//! - The `BuildResult` type carrying a best-effort value plus its errors
//! - Pagination bounds and defaults
//! - Configuration types

pub mod error;
pub mod result;
pub mod pagination;
pub mod config;

pub use error::*;
pub use result::*;
pub use pagination::*;
