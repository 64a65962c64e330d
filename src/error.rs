// src/error.rs

//! Library error types
//!
//! Absent results are never errors here: a name lookup that finds nothing is
//! `None`, an ingredient search with no hits is an empty list. Only malformed
//! catalog data and the I/O around it are fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pantry library
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file could not be read
    #[error("failed to read catalog file {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML
    #[error("failed to parse catalog file {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog data is structurally invalid
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Convenience alias for library results
pub type Result<T> = std::result::Result<T, Error>;
