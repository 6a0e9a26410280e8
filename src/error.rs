//! Error types for the fallible edges of the crate.
//!
//! Matching, scoring and ranking never fail. Only decoding external payloads
//! (inventory snapshots, recipe catalogs) and loading configuration can.

use thiserror::Error;

/// Failure to decode an inventory snapshot payload.
///
/// Individual malformed entries never produce this error; they are skipped.
/// Only a document that cannot be read as a list at all is rejected.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The payload is not valid JSON.
    #[error("Inventory JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but its top level is not an array.
    #[error("Inventory payload must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Failure to build a recipe catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog document is not a valid list of recipes.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two recipes share the same identifier.
    #[error("Duplicate recipe id {0} in catalog")]
    DuplicateId(u32),
}

/// Failure to load [`RecommendOptions`](crate::RecommendOptions).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration source could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// The minimum match percentage lies outside `0..=100`.
    #[error("min_match_percentage must be between 0 and 100, got {0}")]
    MinMatchOutOfRange(u8),
}
