//! # mb-models
//!
//! Data models for responses returned by the MoonBoard catalog.
//!
//! Field names follow the catalog's PascalCase JSON so responses decode
//! without a mapping layer. Values the catalog leaves loosely typed are kept
//! as raw JSON.

pub mod problem;
pub mod response;

pub use problem::{HoldSetup, Location, MoonBoardConfiguration, Move, Problem, Setter};
pub use response::{problems_as_json, MbResponse};
