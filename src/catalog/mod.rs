//! Recipe records and the catalog they are recommended from.
//!
//! A [`Catalog`] is an immutable, ordered list of [`Recipe`]s. Order matters:
//! among recipes with equal scores, earlier entries are recommended first.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

mod builtin;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    recipes: builtin::recipes(),
});

/// A catalog entry.
///
/// Only `ingredients` takes part in scoring; the remaining fields are carried
/// through untouched for presentation. A recipe deserialized without an
/// `ingredients` field is a zero-ingredient recipe, which always scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier within the catalog.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Ingredient tokens, in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation time, e.g. "10 min".
    #[serde(default)]
    pub time: String,
    /// Difficulty label, e.g. "Easy".
    #[serde(default)]
    pub difficulty: String,
    /// Calories per serving.
    #[serde(default)]
    pub calories: u32,
    /// Category label, e.g. "Salad". Compared case-sensitively.
    #[serde(default)]
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Preparation steps.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-text remark, e.g. which ingredients must be added by hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An ordered, immutable collection of recipes with unique ids.
///
/// # Examples
///
/// ```
/// use recipematch::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.len(), 17);
/// assert_eq!(catalog.get(10).map(|r| r.name.as_str()), Some("Tomato and Mozzarella Salad"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        if let Some(dup) = recipes.iter().find(|r| !seen.insert(r.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }
        Ok(Self { recipes })
    }

    /// Parse a catalog from a JSON array of recipes.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] when the document is not an array of
    /// recipe objects and [`CatalogError::DuplicateId`] on repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// The catalog shipped with the crate, built once on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate recipes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Look up a recipe by id.
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Distinct recipe categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
