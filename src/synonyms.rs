//! Synonym table mapping generic ingredient tokens to concrete inventory names.
//!
//! An inventory is usually filled by an object detector, which only knows a
//! fixed vocabulary ("bottle", "cup", "broccoli"). The table lets a recipe
//! asking for "milk" or "vegetables" be satisfied by what the detector saw.

use std::sync::LazyLock;

/// Built-in table, in the order the reverse rule scans it.
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    // Direct detector classes
    ("apple", &["apple"]),
    ("banana", &["banana"]),
    ("orange", &["orange"]),
    ("broccoli", &["broccoli"]),
    ("carrot", &["carrot"]),
    ("pizza", &["pizza"]),
    ("donut", &["donut"]),
    ("cake", &["cake"]),
    ("sandwich", &["sandwich"]),
    ("hot dog", &["hot dog"]),
    // Containers
    ("bottle", &["bottle"]),
    ("cup", &["cup"]),
    ("bowl", &["bowl"]),
    ("wine glass", &["wine glass"]),
    // Generic groups
    ("vegetables", &["broccoli", "carrot"]),
    ("fruits", &["apple", "banana", "orange"]),
    // Things usually seen inside a container
    ("milk", &["bottle", "cup"]),
    ("juice", &["bottle", "cup"]),
    ("yogurt", &["cup", "bowl"]),
    ("soup", &["bowl", "cup"]),
    ("water", &["bottle", "cup"]),
];

static BUILTIN: LazyLock<SynonymTable> = LazyLock::new(|| {
    BUILTIN_ENTRIES
        .iter()
        .fold(SynonymTable::new(), |table, (key, values)| {
            table.with_entry(key, values.iter().copied())
        })
});

/// Ordered mapping from a generic ingredient token to the concrete inventory
/// names it may correspond to.
///
/// Keys and values are stored trimmed and lowercased. Entry order is
/// preserved: it is the order in which the reverse matching rule scans the
/// table.
///
/// # Examples
///
/// ```
/// use recipematch::SynonymTable;
///
/// let table = SynonymTable::new()
///     .with_entry("Milk", ["bottle", "carton"])
///     .with_entry("herbs", ["basil", "parsley"]);
///
/// assert_eq!(table.get("milk"), Some(&["bottle".to_owned(), "carton".to_owned()][..]));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: Vec<(String, Vec<String>)>,
}

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

impl SynonymTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate, built once on first use.
    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN
    }

    /// Builder form of [`SynonymTable::insert`].
    pub fn with_entry<K, I, V>(mut self, key: K, values: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        self.insert(key, values);
        self
    }

    /// Add or replace the entry for `key`.
    ///
    /// Replacing keeps the entry at its original position. Blank values are
    /// dropped; an entry is still recorded when every value is blank.
    pub fn insert<K, I, V>(&mut self, key: K, values: I)
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let key = normalize_token(key.as_ref());
        let values: Vec<String> = values
            .into_iter()
            .map(|v| normalize_token(v.as_ref()))
            .filter(|v| !v.is_empty())
            .collect();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }

    /// Mapped names for an already-normalized key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterate entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
