//! Ranking scored recipes into recommendations.
//!
//! Provides the [`Recommender`], which scores a whole catalog against one
//! inventory snapshot and offers the recommended, browse-all, by-category and
//! search views over the result.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::inventory::InventoryItem;
use crate::matcher::Matcher;
use crate::options::RecommendOptions;
use crate::scorer::{PreparedInventory, ScoredRecipe, score_prepared};
use crate::synonyms::SynonymTable;

/// Comparator placing higher match percentages first.
///
/// Equal percentages compare equal, so a stable sort keeps catalog order
/// among ties.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use recipematch::{Catalog, InventoryItem, Matcher, SynonymTable, by_descending_match, score};
///
/// let matcher = Matcher::new(SynonymTable::builtin());
/// let catalog = Catalog::builtin();
/// let inventory = vec![InventoryItem::from("apple")];
/// let fruit = score(catalog.get(1).unwrap(), &inventory, &matcher);
/// let pizza = score(catalog.get(3).unwrap(), &inventory, &matcher);
///
/// // 33% beats 0%.
/// assert_eq!(by_descending_match(&fruit, &pizza), Ordering::Less);
/// ```
pub fn by_descending_match(a: &ScoredRecipe<'_>, b: &ScoredRecipe<'_>) -> Ordering {
    b.match_percentage.cmp(&a.match_percentage)
}

/// Scores a catalog against inventory snapshots.
///
/// Holds only shared references to immutable tables, so one recommender can
/// serve any number of snapshots, from any number of threads.
///
/// # Examples
///
/// ```
/// use recipematch::{InventoryItem, RecommendOptions, Recommender};
///
/// let recommender = Recommender::builtin(&RecommendOptions::default());
/// let inventory: Vec<InventoryItem> = vec!["broccoli".into(), "Carrots".into()];
///
/// let recommended = recommender.recommend(&inventory);
/// assert_eq!(recommended[0].name, "Vegetable Platter");
/// assert_eq!(recommended[0].match_percentage, 100);
/// assert!(recommended.iter().all(|r| r.match_percentage >= 30));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    matcher: Matcher<'a>,
    min_match_percentage: u8,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over `catalog` and `synonyms`.
    pub fn new(catalog: &'a Catalog, synonyms: &'a SynonymTable, options: &RecommendOptions) -> Self {
        Self {
            catalog,
            matcher: Matcher::new(synonyms).fold_diacritics(options.fold_diacritics),
            min_match_percentage: options.min_match_percentage,
        }
    }

    /// A recommender over the built-in catalog and synonym table.
    pub fn builtin(options: &RecommendOptions) -> Recommender<'static> {
        Recommender::new(Catalog::builtin(), SynonymTable::builtin(), options)
    }

    /// The catalog being ranked.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The matcher used for scoring.
    pub fn matcher(&self) -> &Matcher<'a> {
        &self.matcher
    }

    /// The threshold applied by [`Recommender::recommend`].
    pub fn min_match_percentage(&self) -> u8 {
        self.min_match_percentage
    }

    /// Recipes scoring at least the configured minimum, best first.
    pub fn recommend(&self, inventory: &[InventoryItem]) -> Vec<ScoredRecipe<'a>> {
        self.recommend_with_min(inventory, self.min_match_percentage)
    }

    /// Recipes scoring at least `min_match_percentage`, best first.
    ///
    /// Sorting is stable: recipes with equal scores keep their catalog order.
    pub fn recommend_with_min(&self, inventory: &[InventoryItem], min_match_percentage: u8) -> Vec<ScoredRecipe<'a>> {
        let mut ranked: Vec<ScoredRecipe<'a>> = self
            .all_scored(inventory)
            .into_iter()
            .filter(|scored| scored.match_percentage >= min_match_percentage)
            .collect();

        // `sort_by` is stable.
        ranked.sort_by(by_descending_match);

        tracing::debug!(
            recipes = self.catalog.len(),
            kept = ranked.len(),
            min_match_percentage,
            "ranked recipe recommendations"
        );

        ranked
    }

    /// Every recipe with its score, in catalog order.
    pub fn all_scored(&self, inventory: &[InventoryItem]) -> Vec<ScoredRecipe<'a>> {
        let prepared = PreparedInventory::new(inventory, &self.matcher);
        self.catalog
            .iter()
            .map(|recipe| score_prepared(recipe, &prepared, &self.matcher))
            .collect()
    }

    /// Scored recipes whose category equals `category` exactly, in catalog order.
    pub fn by_category(&self, category: &str, inventory: &[InventoryItem]) -> Vec<ScoredRecipe<'a>> {
        let prepared = PreparedInventory::new(inventory, &self.matcher);
        self.catalog
            .iter()
            .filter(|recipe| recipe.category == category)
            .map(|recipe| score_prepared(recipe, &prepared, &self.matcher))
            .collect()
    }

    /// Scored recipes whose name or any ingredient contains `query`,
    /// case-insensitively, in catalog order.
    ///
    /// An empty query matches every recipe.
    pub fn search(&self, query: &str, inventory: &[InventoryItem]) -> Vec<ScoredRecipe<'a>> {
        let query = query.to_lowercase();
        let prepared = PreparedInventory::new(inventory, &self.matcher);
        self.catalog
            .iter()
            .filter(|recipe| {
                recipe.name.to_lowercase().contains(&query)
                    || recipe
                        .ingredients
                        .iter()
                        .any(|ingredient| ingredient.to_lowercase().contains(&query))
            })
            .map(|recipe| score_prepared(recipe, &prepared, &self.matcher))
            .collect()
    }
}
