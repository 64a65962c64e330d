// src/lib.rs

//! Pantry recipe lookup
//!
//! A compiled-in catalog of recipes, a matching engine that filters by
//! ingredient overlap or exact name, and two presentation surfaces (CLI and
//! web form) over the same engine.
//!
//! # Architecture
//!
//! - Ingredient and recipe names are normalized (trimmed, lower-cased) at
//!   construction; all comparisons are exact on the normalized form
//! - The catalog is an explicitly constructed, immutable value injected into
//!   the engine; duplicate names are preserved and lookup is first-match-wins
//! - Absent results are empty sequences or `None`, never errors

pub mod catalog;
pub mod cli;
pub mod engine;
mod error;
pub mod ingredient;
pub mod query;
pub mod recipe;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "speech")]
pub mod speech;

pub use catalog::Catalog;
pub use engine::MatchEngine;
pub use error::{Error, Result};
pub use ingredient::Ingredient;
pub use query::Query;
pub use recipe::Recipe;
