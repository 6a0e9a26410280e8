//! Match rules deciding whether an inventory item satisfies a recipe ingredient.
//!
//! This module implements the four-rule predicate that treats a recipe
//! ingredient token and an inventory name as the same real-world ingredient,
//! from exact equality down to a reverse synonym lookup.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::synonyms::SynonymTable;

/// The rule that decided a match between an ingredient and an inventory name.
///
/// Rules are evaluated in declaration order and the first one that applies
/// wins:
///
/// | Rule             | Description                                                      |
/// |------------------|------------------------------------------------------------------|
/// | `Exact`          | Normalized strings are equal                                     |
/// | `Substring`      | Either normalized string contains the other                      |
/// | `SynonymForward` | Ingredient is a synonym key and a mapped name overlaps inventory |
/// | `SynonymReverse` | Inventory name is a mapped value and ingredient contains its key |
///
/// There is no notion of a better or worse match: the predicate is boolean,
/// and the rule is reported only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// Normalized ingredient and inventory name are identical.
    Exact,
    /// One normalized string contains the other ("tomatoes" / "tomato").
    Substring,
    /// The ingredient is a synonym key whose mapped names overlap the
    /// inventory name ("milk" / "bottle").
    SynonymForward,
    /// The inventory name is a value of a synonym entry whose key appears in
    /// the ingredient ("fresh fruits" / "apple").
    SynonymReverse,
}

/// Prepare a name for comparison: trim, optionally fold diacritics, lowercase.
///
/// Returns [`Cow::Borrowed`] when the trimmed input is already in normal form,
/// so the common all-lowercase ASCII case never allocates.
///
/// # Examples
///
/// ```
/// use recipematch::matcher::normalize_name;
///
/// assert_eq!(normalize_name("  Carrots ", false), "carrots");
/// assert!(matches!(normalize_name("carrot", false), std::borrow::Cow::Borrowed(_)));
///
/// assert_eq!(normalize_name("Jalape\u{00f1}o", true), "jalapeno");
/// assert_eq!(normalize_name("Jalape\u{00f1}o", false), "jalape\u{00f1}o");
/// ```
pub fn normalize_name(s: &str, fold_diacritics: bool) -> Cow<'_, str> {
    let trimmed = s.trim();
    let folded = fold_diacritics_if(trimmed, fold_diacritics);

    if folded.chars().any(char::is_uppercase) {
        Cow::Owned(folded.to_lowercase())
    } else {
        folded
    }
}

/// Strip combining marks after NFD decomposition when `fold` is set.
fn fold_diacritics_if(s: &str, fold: bool) -> Cow<'_, str> {
    // ASCII never carries combining marks.
    if !fold || s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).collect();
    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Whether `needle` occurs in `haystack`. Empty needles never occur.
fn contains(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

/// An ingredient token counts as a word only if it has a letter in it.
/// Quantities such as "2" or "350" never match anything.
fn is_plain_word(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

/// Ingredient matcher bound to a synonym table.
///
/// The matcher is a pure predicate over two strings and the (immutable)
/// table. It is `Copy`, so scorers and rankers hold it by value.
///
/// # Examples
///
/// ```
/// use recipematch::{MatchRule, Matcher, SynonymTable};
///
/// let matcher = Matcher::new(SynonymTable::builtin());
///
/// assert!(matcher.matches("carrot", "Carrots"));
/// assert_eq!(matcher.match_rule("milk", "bottle"), Some(MatchRule::SynonymForward));
/// assert!(!matcher.matches("mozzarella", "cheese"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    synonyms: &'a SynonymTable,
    fold_diacritics: bool,
}

impl<'a> Matcher<'a> {
    /// Create a matcher over `synonyms` that only trims and lowercases names.
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self {
            synonyms,
            fold_diacritics: false,
        }
    }

    /// Also fold diacritics before comparing names.
    pub fn fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    /// Whether this matcher folds diacritics.
    pub fn folds_diacritics(&self) -> bool {
        self.fold_diacritics
    }

    /// The synonym table backing this matcher.
    pub fn synonyms(&self) -> &'a SynonymTable {
        self.synonyms
    }

    /// Normalize a name the way this matcher compares it.
    pub fn normalize<'s>(&self, s: &'s str) -> Cow<'s, str> {
        normalize_name(s, self.fold_diacritics)
    }

    /// Whether `ingredient` is satisfied by an inventory item called
    /// `inventory_name`.
    pub fn matches(&self, ingredient: &str, inventory_name: &str) -> bool {
        self.match_rule(ingredient, inventory_name).is_some()
    }

    /// The rule under which `ingredient` matches `inventory_name`, if any.
    ///
    /// Both inputs are normalized first. Blank inputs and ingredients with no
    /// letters return `None`.
    pub fn match_rule(&self, ingredient: &str, inventory_name: &str) -> Option<MatchRule> {
        let ingredient = self.normalize(ingredient);
        let inventory_name = self.normalize(inventory_name);
        self.match_normalized(&ingredient, &inventory_name)
    }

    /// Rule evaluation on names that have already gone through
    /// [`Matcher::normalize`].
    pub(crate) fn match_normalized(&self, ingredient: &str, inventory_name: &str) -> Option<MatchRule> {
        if ingredient.is_empty() || inventory_name.is_empty() || !is_plain_word(ingredient) {
            return None;
        }

        let rule = self.evaluate(ingredient, inventory_name);
        tracing::trace!(ingredient, inventory_name, ?rule, "ingredient match");
        rule
    }

    fn evaluate(&self, ingredient: &str, inventory_name: &str) -> Option<MatchRule> {
        // Rule 1
        if ingredient == inventory_name {
            return Some(MatchRule::Exact);
        }

        // Rule 2: deliberately loose, "pea" matches "peach".
        if contains(ingredient, inventory_name) || contains(inventory_name, ingredient) {
            return Some(MatchRule::Substring);
        }

        // Rule 3: a key hit decides the outcome on its own.
        if let Some(mapped) = self.synonyms.get(ingredient) {
            let hit = mapped
                .iter()
                .any(|m| contains(inventory_name, m) || contains(m, inventory_name));
            return hit.then_some(MatchRule::SynonymForward);
        }

        // Rule 4: exact membership of the inventory name in an entry's values.
        self.synonyms
            .entries()
            .any(|(key, values)| {
                values.iter().any(|v| v == inventory_name) && contains(ingredient, key)
            })
            .then_some(MatchRule::SynonymReverse)
    }
}

/// Match `ingredient` against `inventory_name` using the built-in synonym table.
///
/// # Examples
///
/// ```
/// use recipematch::matches;
///
/// assert!(matches("tomatoes", "Tomato"));
/// assert!(matches("vegetables", "broccoli"));
/// assert!(!matches("basil", "cheese"));
/// assert!(!matches("2", "2"));
/// ```
pub fn matches(ingredient: &str, inventory_name: &str) -> bool {
    Matcher::new(SynonymTable::builtin()).matches(ingredient, inventory_name)
}
