//! Scoring a single recipe against an inventory snapshot.
//!
//! A recipe's score is the share of its ingredients that some inventory item
//! satisfies, as a rounded percentage, together with the ingredients that no
//! item satisfies.

use std::borrow::Cow;
use std::ops::Deref;

use serde::Serialize;

use crate::catalog::Recipe;
use crate::inventory::InventoryItem;
use crate::matcher::Matcher;

/// A recipe annotated with how well the current inventory covers it.
///
/// Dereferences to the underlying [`Recipe`], so catalog fields are reachable
/// directly (`scored.name`). Serializes as the recipe's fields followed by
/// `matchPercentage` and `missingIngredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe<'a> {
    /// The catalog entry.
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    /// Share of ingredients satisfied, `0..=100`, rounded half up.
    pub match_percentage: u8,
    /// Ingredients no inventory item satisfies, in recipe order.
    pub missing_ingredients: Vec<&'a str>,
}

impl Deref for ScoredRecipe<'_> {
    type Target = Recipe;

    fn deref(&self) -> &Recipe {
        self.recipe
    }
}

impl ScoredRecipe<'_> {
    /// Whether every ingredient is available.
    pub fn is_complete(&self) -> bool {
        !self.recipe.ingredients.is_empty() && self.missing_ingredients.is_empty()
    }

    /// Display tier of this recipe's match percentage.
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.match_percentage)
    }
}

/// How well a recipe is covered, for badge colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// 75% or more.
    Strong,
    /// 50% to 74%.
    Partial,
    /// Below 50%.
    Low,
}

impl MatchTier {
    /// Tier for a match percentage.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipematch::MatchTier;
    ///
    /// assert_eq!(MatchTier::from_percentage(75), MatchTier::Strong);
    /// assert_eq!(MatchTier::from_percentage(74), MatchTier::Partial);
    /// assert_eq!(MatchTier::from_percentage(49), MatchTier::Low);
    /// ```
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            75.. => MatchTier::Strong,
            50.. => MatchTier::Partial,
            _ => MatchTier::Low,
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Strong => "Strong",
            MatchTier::Partial => "Partial",
            MatchTier::Low => "Low",
        }
    }
}

/// Inventory names normalized once per request.
///
/// Scoring a catalog compares every ingredient of every recipe with every
/// inventory name; preparing the names up front keeps that loop free of
/// trimming and lowercasing.
pub(crate) struct PreparedInventory<'i> {
    names: Vec<Cow<'i, str>>,
}

impl<'i> PreparedInventory<'i> {
    /// Normalize the names in `inventory`, skipping items with a blank name.
    pub(crate) fn new(inventory: &'i [InventoryItem], matcher: &Matcher<'_>) -> Self {
        let names: Vec<Cow<'i, str>> = inventory
            .iter()
            .map(|item| matcher.normalize(item.name()))
            .filter(|name| !name.is_empty())
            .collect();

        if names.len() < inventory.len() {
            tracing::debug!(
                skipped = inventory.len() - names.len(),
                "ignoring inventory items without a name"
            );
        }

        Self { names }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn satisfies(&self, ingredient: &str, matcher: &Matcher<'_>) -> bool {
        let ingredient = matcher.normalize(ingredient);
        self.names
            .iter()
            .any(|name| matcher.match_normalized(&ingredient, name).is_some())
    }
}

/// `round(matched / total * 100)` with halves rounded up, in integers.
///
/// An empty recipe scores 0.
///
/// # Examples
///
/// ```
/// use recipematch::scorer::match_percentage;
///
/// assert_eq!(match_percentage(1, 4), 25);
/// assert_eq!(match_percentage(1, 8), 13); // 12.5 rounds up
/// assert_eq!(match_percentage(2, 3), 67);
/// assert_eq!(match_percentage(0, 0), 0);
/// ```
pub fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total);
    // (200m + t) / 2t == floor(100m/t + 1/2)
    ((200 * matched + total) / (2 * total)) as u8
}

pub(crate) fn score_prepared<'a>(
    recipe: &'a Recipe,
    inventory: &PreparedInventory<'_>,
    matcher: &Matcher<'_>,
) -> ScoredRecipe<'a> {
    if inventory.is_empty() {
        return ScoredRecipe {
            recipe,
            match_percentage: 0,
            missing_ingredients: recipe.ingredients.iter().map(String::as_str).collect(),
        };
    }

    let missing_ingredients: Vec<&'a str> = recipe
        .ingredients
        .iter()
        .map(String::as_str)
        .filter(|ingredient| !inventory.satisfies(ingredient, matcher))
        .collect();

    let total = recipe.ingredients.len();
    ScoredRecipe {
        recipe,
        match_percentage: match_percentage(total - missing_ingredients.len(), total),
        missing_ingredients,
    }
}

/// Score one recipe against an inventory snapshot.
///
/// - An empty snapshot (or one whose items all lack names) scores 0 with every
///   ingredient missing, in order.
/// - A recipe without ingredients scores 0 with nothing missing.
/// - Otherwise an ingredient is satisfied when [`Matcher::matches`] holds for
///   at least one item name.
///
/// # Examples
///
/// ```
/// use recipematch::{Catalog, InventoryItem, Matcher, SynonymTable, score};
///
/// let salad = Catalog::builtin().get(10).unwrap();
/// let inventory = vec![InventoryItem::from("tomato"), InventoryItem::from("cheese")];
/// let scored = score(salad, &inventory, &Matcher::new(SynonymTable::builtin()));
///
/// assert_eq!(scored.match_percentage, 25);
/// assert_eq!(scored.missing_ingredients, vec!["mozzarella", "basil", "olive oil"]);
/// ```
pub fn score<'a>(recipe: &'a Recipe, inventory: &[InventoryItem], matcher: &Matcher<'_>) -> ScoredRecipe<'a> {
    score_prepared(recipe, &PreparedInventory::new(inventory, matcher), matcher)
}
