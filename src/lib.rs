#![warn(missing_docs)]

//! Recipe recommendations from a pantry inventory.
//!
//! `recipematch` decides which recipe ingredients an inventory snapshot
//! covers, scores each recipe by the percentage of ingredients available, and
//! ranks a recipe catalog by that score. Everything is a pure function of the
//! snapshot and immutable tables, so results are deterministic and safe to
//! compute from any thread.
//!
//! ```
//! use recipematch::{RecommendOptions, Recommender, decode_snapshot};
//!
//! let inventory = decode_snapshot(r#"[
//!     {"name": "Apples", "quantity": 4, "status": "In Stock", "category": "Fruits"},
//!     "banana",
//!     null
//! ]"#).unwrap();
//!
//! let recommender = Recommender::builtin(&RecommendOptions::default());
//! let recommended = recommender.recommend(&inventory);
//!
//! assert_eq!(recommended[0].name, "Apple Pie");
//! assert_eq!(recommended[0].match_percentage, 100);
//! assert_eq!(recommended[1].name, "Fresh Fruit Salad");
//! assert_eq!(recommended[1].match_percentage, 67);
//! assert_eq!(recommended[1].missing_ingredients, vec!["orange"]);
//! ```

/// Ingredient-to-inventory match rules.
pub mod matcher;

/// Synonym table linking generic ingredients to concrete inventory names.
pub mod synonyms;

/// Recipe records and the recipe catalog.
pub mod catalog;

/// Scoring one recipe against an inventory snapshot.
pub mod scorer;

/// Ranking scored recipes into recommendations.
pub mod ranker;

/// Ingredient display glyphs.
pub mod emoji;

/// Inventory snapshot types, decoding and statistics.
pub mod inventory;

/// Configuration options for recommendation.
pub mod options;

/// Error types.
pub mod error;

// Re-export primary public API types and functions at the crate root.
pub use catalog::{Catalog, Recipe};
pub use emoji::{FALLBACK_EMOJI, emoji_for};
pub use error::{CatalogError, ConfigError, InventoryError};
pub use inventory::{
    InventoryItem, InventoryRecord, InventorySummary, StockLevel, categories, decode_snapshot,
    filter_items, quantity_label,
};
pub use matcher::{MatchRule, Matcher, matches};
pub use options::{DEFAULT_MIN_MATCH_PERCENTAGE, RecommendOptions};
pub use ranker::{Recommender, by_descending_match};
pub use scorer::{MatchTier, ScoredRecipe, score};
pub use synonyms::SynonymTable;
