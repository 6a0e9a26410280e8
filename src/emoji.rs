//! Ingredient display glyphs.
//!
//! Purely presentational: nothing here takes part in scoring.

/// Glyph returned when nothing in the table fits.
pub const FALLBACK_EMOJI: &str = "🔸";

/// Name to glyph table. Order is significant for the substring fallback.
const EMOJI_TABLE: &[(&str, &str)] = &[
    ("tomato", "🍅"),
    ("tomatoes", "🍅"),
    ("mozzarella", "🧀"),
    ("basil", "🌿"),
    ("olive oil", "🫒"),
    ("chicken", "🍗"),
    ("vegetables", "🥦"),
    ("soy sauce", "🥢"),
    ("oil", "🫒"),
    ("avocado", "🥑"),
    ("bread", "🍞"),
    ("salt", "🧂"),
    ("pepper", "🌶️"),
    ("beef", "🥩"),
    ("tortilla", "🌮"),
    ("onion", "🧅"),
    ("onions", "🧅"),
    ("cheese", "🧀"),
    ("cucumber", "🥒"),
    ("cucumbers", "🥒"),
    ("feta", "🧀"),
    ("olive", "🫒"),
    ("olives", "🫒"),
    ("eggs", "🥚"),
    ("egg", "🥚"),
    ("milk", "🥛"),
    ("butter", "🧈"),
    ("apples", "🍎"),
    ("apple", "🍎"),
    ("flour", "🌾"),
    ("sugar", "🍬"),
    ("cinnamon", "🥄"),
    ("carrots", "🥕"),
    ("carrot", "🥕"),
    ("vegetable stock", "🥣"),
    ("cream", "🥛"),
    ("lettuce", "🥬"),
    ("parmesan", "🧀"),
    ("croutons", "🍞"),
    ("caesar dressing", "🥗"),
    ("yogurt", "🍨"),
    ("granola", "🥣"),
    ("berries", "🫐"),
    ("honey", "🍯"),
    ("banana", "🍌"),
    ("bananas", "🍌"),
    ("orange", "🍊"),
    ("oranges", "🍊"),
    ("broccoli", "🥦"),
    ("potato", "🥔"),
    ("potatoes", "🥔"),
    ("rice", "🍚"),
    ("pasta", "🍝"),
    ("fish", "🐟"),
    ("pork", "🥓"),
    ("turkey", "🦃"),
];

/// Display glyph for an ingredient or inventory name.
///
/// Lookup order:
/// 1. blank input gives [`FALLBACK_EMOJI`];
/// 2. an exact, case-insensitive table hit;
/// 3. the first table key, in table order, that contains the name or is
///    contained in it;
/// 4. [`FALLBACK_EMOJI`].
///
/// # Examples
///
/// ```
/// use recipematch::{FALLBACK_EMOJI, emoji_for};
///
/// assert_eq!(emoji_for("Tomato"), "🍅");
/// assert_eq!(emoji_for("cherry tomatoes"), "🍅");
/// assert_eq!(emoji_for("lamb"), FALLBACK_EMOJI);
/// ```
pub fn emoji_for(name: &str) -> &'static str {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return FALLBACK_EMOJI;
    }

    EMOJI_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .or_else(|| {
            EMOJI_TABLE
                .iter()
                .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))
        })
        .map_or(FALLBACK_EMOJI, |(_, glyph)| *glyph)
}
