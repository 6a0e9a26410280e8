//! Inventory snapshot types supplied by the external inventory service.
//!
//! The service hands back either full records or bare names. Both are
//! represented by [`InventoryItem`]; matching only ever looks at the name.
//! This module also holds the stock-level rules and snapshot statistics the
//! dashboard and inventory views are built from.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InventoryError;

/// Category assigned to items that do not carry one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Pseudo-category accepted by [`filter_items`] meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

/// A full inventory record as stored by the inventory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Free-text name; the identifier used for matching.
    pub name: String,
    /// Item count.
    #[serde(default)]
    pub quantity: u32,
    /// Free-text status, e.g. "In Stock", "Low Stock", "Expiring Soon".
    #[serde(default)]
    pub status: String,
    /// Grouping label.
    #[serde(default = "default_category")]
    pub category: String,
}

impl InventoryRecord {
    /// Create a record in the [`DEFAULT_CATEGORY`].
    pub fn new(name: impl Into<String>, quantity: u32, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            status: status.into(),
            category: default_category(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// One entry of an inventory snapshot.
///
/// # Examples
///
/// ```
/// use recipematch::{InventoryItem, InventoryRecord};
///
/// let named = InventoryItem::from("Tomato");
/// assert_eq!(named.name(), "Tomato");
/// assert_eq!(named.quantity(), 1);
///
/// let record = InventoryItem::from(InventoryRecord::new("Eggs", 12, "In Stock").with_category("Dairy"));
/// assert_eq!(record.category(), "Dairy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InventoryItem {
    /// A bare name; implicit quantity 1, no status, default category.
    NameOnly(String),
    /// A full record.
    Record(InventoryRecord),
}

impl InventoryItem {
    /// The item name, as supplied.
    pub fn name(&self) -> &str {
        match self {
            InventoryItem::NameOnly(name) => name,
            InventoryItem::Record(record) => &record.name,
        }
    }

    /// The item count; bare names count as one.
    pub fn quantity(&self) -> u32 {
        match self {
            InventoryItem::NameOnly(_) => 1,
            InventoryItem::Record(record) => record.quantity,
        }
    }

    /// The status text; empty for bare names.
    pub fn status(&self) -> &str {
        match self {
            InventoryItem::NameOnly(_) => "",
            InventoryItem::Record(record) => &record.status,
        }
    }

    /// The category, falling back to [`DEFAULT_CATEGORY`] when blank.
    pub fn category(&self) -> &str {
        match self {
            InventoryItem::Record(record) if !record.category.trim().is_empty() => &record.category,
            _ => DEFAULT_CATEGORY,
        }
    }
}

impl From<&str> for InventoryItem {
    fn from(name: &str) -> Self {
        InventoryItem::NameOnly(name.to_owned())
    }
}

impl From<String> for InventoryItem {
    fn from(name: String) -> Self {
        InventoryItem::NameOnly(name)
    }
}

impl From<InventoryRecord> for InventoryItem {
    fn from(record: InventoryRecord) -> Self {
        InventoryItem::Record(record)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert one JSON entry, or `None` if it has no usable name.
fn decode_entry(value: &Value) -> Option<InventoryItem> {
    match value {
        Value::String(name) if !name.trim().is_empty() => Some(InventoryItem::NameOnly(name.clone())),
        Value::Object(map) => {
            let name = map.get("name")?.as_str().filter(|n| !n.trim().is_empty())?;
            let quantity = map
                .get("quantity")
                .and_then(Value::as_u64)
                .map_or(0, |q| u32::try_from(q).unwrap_or(u32::MAX));
            let status = map.get("status").and_then(Value::as_str).unwrap_or_default();
            let category = map
                .get("category")
                .and_then(Value::as_str)
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(DEFAULT_CATEGORY);

            Some(InventoryItem::Record(
                InventoryRecord::new(name, quantity, status).with_category(category),
            ))
        }
        _ => None,
    }
}

/// Decode an inventory snapshot from the inventory service's JSON payload.
///
/// The payload must be an array. Each element may be a string (a bare name)
/// or an object with at least a non-blank string `name`. Anything else
/// (`null`, numbers, objects without a name) is skipped, as are unknown
/// object fields. Negative or fractional quantities decode as 0.
///
/// # Errors
///
/// Returns [`InventoryError::Json`] for invalid JSON and
/// [`InventoryError::NotAnArray`] when the top level is not an array.
///
/// # Examples
///
/// ```
/// use recipematch::decode_snapshot;
///
/// let items = decode_snapshot(r#"["Tomato", null, {"name": "Eggs", "quantity": 12}, {"quantity": 3}]"#).unwrap();
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].quantity(), 12);
/// ```
pub fn decode_snapshot(json: &str) -> Result<Vec<InventoryItem>, InventoryError> {
    let document: Value = serde_json::from_str(json)?;
    let entries = match document {
        Value::Array(entries) => entries,
        other => return Err(InventoryError::NotAnArray(json_kind(&other))),
    };

    let items: Vec<InventoryItem> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let item = decode_entry(entry);
            if item.is_none() {
                tracing::debug!(index, kind = json_kind(entry), "skipping malformed inventory entry");
            }
            item
        })
        .collect();

    tracing::debug!(
        entries = entries.len(),
        kept = items.len(),
        "decoded inventory snapshot"
    );

    Ok(items)
}

/// How urgently an item needs restocking or using up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    /// Low, expiring, or two or fewer left.
    Critical,
    /// Five or fewer left, or flagged with a warning.
    Warning,
    /// Everything else.
    Healthy,
}

fn is_low_or_expiring(status: &str) -> bool {
    status.contains("low") || status.contains("expir")
}

impl StockLevel {
    /// Classify an item from its status text and quantity.
    ///
    /// Status text is compared case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipematch::{InventoryItem, InventoryRecord, StockLevel};
    ///
    /// let item = InventoryItem::from(InventoryRecord::new("Milk", 9, "Expiring Soon"));
    /// assert_eq!(StockLevel::classify(&item), StockLevel::Critical);
    ///
    /// let item = InventoryItem::from(InventoryRecord::new("Eggs", 12, "In Stock"));
    /// assert_eq!(StockLevel::classify(&item), StockLevel::Healthy);
    /// ```
    pub fn classify(item: &InventoryItem) -> Self {
        let status = item.status().to_lowercase();
        let quantity = item.quantity();

        if is_low_or_expiring(&status) || quantity <= 2 {
            StockLevel::Critical
        } else if quantity <= 5 || status.contains("warning") {
            StockLevel::Warning
        } else {
            StockLevel::Healthy
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Critical => "Critical",
            StockLevel::Warning => "Warning",
            StockLevel::Healthy => "Healthy",
        }
    }
}

/// Aggregate counts over an inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    /// Number of items.
    pub total: usize,
    /// Items per category; items without one count under [`DEFAULT_CATEGORY`].
    pub categories: BTreeMap<String, usize>,
    /// Items that are [`StockLevel::Critical`].
    pub low_stock: usize,
    /// Items that are not low on stock.
    pub in_stock: usize,
    /// Low-stock items whose status mentions expiry.
    pub expiring: usize,
    /// Items whose status says they were found by the detector.
    pub detected: usize,
}

impl InventorySummary {
    /// Count a snapshot.
    ///
    /// `low_stock + in_stock == total` always holds, and `expiring` is a
    /// subset of `low_stock`.
    pub fn from_items(items: &[InventoryItem]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            summary.total += 1;
            *summary
                .categories
                .entry(item.category().to_owned())
                .or_default() += 1;

            let status = item.status().to_lowercase();
            if StockLevel::classify(item) == StockLevel::Critical {
                summary.low_stock += 1;
                if status.contains("expir") {
                    summary.expiring += 1;
                }
            } else {
                summary.in_stock += 1;
            }
            if status.contains("detected") {
                summary.detected += 1;
            }
            summary
        })
    }
}

/// Category choices for an inventory view: [`ALL_CATEGORIES`] followed by each
/// distinct item category in first-seen order. An item filed under
/// [`ALL_CATEGORIES`] itself does not add a second entry.
pub fn categories(items: &[InventoryItem]) -> Vec<&str> {
    let mut seen = HashSet::from([ALL_CATEGORIES]);
    std::iter::once(ALL_CATEGORIES)
        .chain(items.iter().map(InventoryItem::category).filter(|c| seen.insert(*c)))
        .collect()
}

/// Items in `category` (or any, for [`ALL_CATEGORIES`]) whose name contains
/// `query` case-insensitively. A blank query keeps every item.
///
/// # Examples
///
/// ```
/// use recipematch::{InventoryItem, InventoryRecord, filter_items};
///
/// let items = vec![
///     InventoryItem::from(InventoryRecord::new("Milk", 1, "In Stock").with_category("Dairy")),
///     InventoryItem::from(InventoryRecord::new("Carrots", 5, "In Stock").with_category("Vegetables")),
/// ];
/// let dairy = filter_items(&items, "Dairy", "");
/// assert_eq!(dairy.len(), 1);
/// assert_eq!(filter_items(&items, "All", "CARR")[0].name(), "Carrots");
/// ```
pub fn filter_items<'i>(items: &'i [InventoryItem], category: &str, query: &str) -> Vec<&'i InventoryItem> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category() == category)
        .filter(|item| query.is_empty() || item.name().to_lowercase().contains(&query))
        .collect()
}

/// Human-readable quantity with a unit chosen from the item name.
///
/// Bottles, heads and pieces are plural only above one; plain units are
/// plural for anything but one.
///
/// # Examples
///
/// ```
/// use recipematch::{InventoryItem, InventoryRecord, quantity_label};
///
/// let juice = InventoryItem::from(InventoryRecord::new("Orange Juice", 1, "Half Full"));
/// assert_eq!(quantity_label(&juice), "1 bottle");
///
/// let eggs = InventoryItem::from(InventoryRecord::new("Eggs", 12, "In Stock"));
/// assert_eq!(quantity_label(&eggs), "12 units");
/// ```
pub fn quantity_label(item: &InventoryItem) -> String {
    let quantity = item.quantity();
    let name = item.name().to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| name.contains(w));

    let (singular, plural, plural_at_zero) = if mentions(&["milk", "juice", "yogurt"]) {
        ("bottle", "bottles", false)
    } else if mentions(&["lettuce", "cabbage"]) {
        ("head", "heads", false)
    } else if mentions(&["chicken", "beef", "fish"]) {
        ("piece", "pieces", false)
    } else {
        ("unit", "units", true)
    };

    let is_plural = quantity > 1 || (quantity == 0 && plural_at_zero);
    let unit = if is_plural { plural } else { singular };
    format!("{quantity} {unit}")
}
