//! Integration tests for the `recipematch` public API.
//!
//! These tests exercise scoring and ranking end-to-end against the built-in
//! catalog and synonym table, using only items re-exported from the crate
//! root.

use recipematch::{
    Catalog, InventoryItem, InventoryRecord, Matcher, RecommendOptions, Recommender,
    ScoredRecipe, SynonymTable, score,
};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Shared fixtures
// ---------------------------------------------------------------------------

/// Route the crate's `tracing` events to the test writer. Set `RUST_LOG`
/// (e.g. `RUST_LOG=recipematch=trace`) to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A realistic household snapshot: fifteen records across five categories.
fn household() -> Vec<InventoryItem> {
    [
        ("Milk", 1, "In Stock", "Dairy"),
        ("Eggs", 12, "In Stock", "Dairy"),
        ("Apples", 4, "In Stock", "Fruits"),
        ("Lettuce", 1, "In Stock", "Vegetables"),
        ("Orange Juice", 1, "Half Full", "Beverages"),
        ("Carrots", 5, "Warning - Use Soon", "Vegetables"),
        ("Yogurt", 2, "Low Stock", "Dairy"),
        ("Chicken", 1, "Expiring Soon", "Meat"),
        ("Tomato", 6, "In Stock", "Vegetables"),
        ("Cheese", 3, "In Stock", "Dairy"),
        ("Bread", 2, "In Stock", "Bakery"),
        ("Butter", 1, "In Stock", "Dairy"),
        ("Cucumber", 3, "In Stock", "Vegetables"),
        ("Onion", 4, "In Stock", "Vegetables"),
        ("Beef", 2, "Warning - Use Soon", "Meat"),
    ]
    .into_iter()
    .map(|(name, qty, status, category)| {
        InventoryItem::from(InventoryRecord::new(name, qty, status).with_category(category))
    })
    .collect()
}

fn names(items: &[&str]) -> Vec<InventoryItem> {
    items.iter().map(|s| InventoryItem::from(*s)).collect()
}

fn ids(scored: &[ScoredRecipe<'_>]) -> Vec<u32> {
    scored.iter().map(|s| s.id).collect()
}

fn percentages(scored: &[ScoredRecipe<'_>]) -> Vec<u8> {
    scored.iter().map(|s| s.match_percentage).collect()
}

fn builtin() -> Recommender<'static> {
    Recommender::builtin(&RecommendOptions::default())
}

fn matcher() -> Matcher<'static> {
    Matcher::new(SynonymTable::builtin())
}

// ---------------------------------------------------------------------------
// 1. Concrete scenarios
// ---------------------------------------------------------------------------

/// Tomato matches directly; cheese has no link to mozzarella.
#[test]
fn tomato_and_cheese_cover_a_quarter_of_the_caprese() {
    let caprese = Catalog::builtin().get(10).unwrap();
    let scored = score(caprese, &names(&["tomato", "cheese"]), &matcher());
    assert_eq!(scored.match_percentage, 25);
    assert_eq!(scored.missing_ingredients, vec!["mozzarella", "basil", "olive oil"]);
}

#[test]
fn empty_inventory_scores_every_recipe_zero() {
    init_tracing();
    for scored in builtin().all_scored(&[]) {
        assert_eq!(scored.match_percentage, 0, "{}", scored.name);
        let expected: Vec<&str> = scored.ingredients.iter().map(String::as_str).collect();
        assert_eq!(scored.missing_ingredients, expected, "{}", scored.name);
    }
}

/// "Carrots" (capitalized, plural) satisfies "carrot".
#[test]
fn plural_capitalized_inventory_name_matches() {
    let soup = Catalog::builtin().get(9).unwrap();
    let scored = score(soup, &names(&["Carrots"]), &matcher());
    assert_eq!(scored.match_percentage, 100);
    assert!(scored.missing_ingredients.is_empty());
}

#[test]
fn ingredientless_recipe_scores_zero() {
    let catalog = Catalog::from_json(r#"[{"id": 1, "name": "Air"}]"#).unwrap();
    let scored = score(&catalog.recipes()[0], &names(&["anything"]), &matcher());
    assert_eq!(scored.match_percentage, 0);
    assert!(scored.missing_ingredients.is_empty());
}

/// Two recipes on 60% keep their catalog order.
#[test]
fn equal_scores_keep_catalog_order() {
    let catalog = Catalog::from_json(
        r#"[
            {"id": 1, "name": "X", "ingredients": ["a1", "a2", "a3", "zz", "yy"]},
            {"id": 2, "name": "Y", "ingredients": ["a1", "a2", "a3", "ww", "vv"]},
            {"id": 3, "name": "Z", "ingredients": ["a1", "qq", "rr", "ss", "tt"]}
        ]"#,
    )
    .unwrap();
    let synonyms = SynonymTable::new();
    let recommender = Recommender::new(&catalog, &synonyms, &RecommendOptions::default());

    let ranked = recommender.recommend_with_min(&names(&["a1", "a2", "a3"]), 0);
    assert_eq!(ids(&ranked), vec![1, 2, 3]);
    assert_eq!(percentages(&ranked), vec![60, 60, 20]);
}

// ---------------------------------------------------------------------------
// 2. Household snapshot against the built-in catalog
// ---------------------------------------------------------------------------

#[test]
fn household_scores_in_catalog_order() {
    let all = builtin().all_scored(&household());
    assert_eq!(ids(&all), (1..=17).collect::<Vec<u32>>());
    assert_eq!(
        percentages(&all),
        vec![67, 50, 0, 0, 0, 0, 0, 100, 100, 25, 50, 25, 75, 60, 75, 40, 25]
    );
}

#[test]
fn household_recommendations_best_first() {
    init_tracing();
    let ranked = builtin().recommend(&household());
    assert_eq!(ids(&ranked), vec![8, 9, 13, 15, 1, 14, 2, 11, 16]);
    assert_eq!(percentages(&ranked), vec![100, 100, 75, 75, 67, 60, 50, 50, 40]);
}

#[test]
fn household_missing_ingredients() {
    let all = builtin().all_scored(&household());
    let missing = |id: u32| all.iter().find(|s| s.id == id).unwrap().missing_ingredients.clone();

    assert_eq!(missing(1), vec!["banana"]);
    assert_eq!(missing(11), vec!["soy sauce", "oil"]);
    assert_eq!(missing(13), vec!["tortilla"]);
    assert_eq!(missing(15), vec!["salt"]);
    assert!(missing(8).is_empty());
}

#[test]
fn threshold_filter_never_keeps_lower_scores() {
    init_tracing();
    let snapshot = household();
    for min in [0, 30, 50, 75, 100] {
        let ranked = builtin().recommend_with_min(&snapshot, min);
        assert!(
            ranked.iter().all(|r| r.match_percentage >= min),
            "threshold {min} leaked a lower score"
        );
    }
    assert_eq!(ids(&builtin().recommend_with_min(&snapshot, 100)), vec![8, 9]);
}

#[test]
fn synonyms_link_detector_classes() {
    init_tracing();
    // An object detector only sees containers and raw produce.
    let ranked = builtin().recommend(&names(&["bottle", "broccoli", "chicken"]));
    let ids = ids(&ranked);
    // Stir-fry: chicken + vegetables(broccoli) = 50%.
    assert!(ids.contains(&11));
    // Scrambled eggs: milk(bottle) = 25%, below the default threshold.
    assert!(!ids.contains(&15));
    // Vegetable platter: broccoli = 50%.
    assert_eq!(ids.first(), Some(&2));
}

// ---------------------------------------------------------------------------
// 3. Browse views
// ---------------------------------------------------------------------------

#[test]
fn by_category_keeps_order_and_scores() {
    let salads = builtin().by_category("Salad", &household());
    assert_eq!(ids(&salads), vec![1, 10, 14, 16]);
    assert_eq!(percentages(&salads), vec![67, 25, 60, 40]);
}

#[test]
fn search_by_name_or_ingredient() {
    let recommender = builtin();
    assert_eq!(ids(&recommender.search("chicken", &[])), vec![11, 16]);
    assert_eq!(ids(&recommender.search("OIL", &[])), vec![10, 11]);
    assert_eq!(ids(&recommender.search("apple", &[])), vec![1, 8]);
}

// ---------------------------------------------------------------------------
// 4. Properties
// ---------------------------------------------------------------------------

fn snapshots() -> Vec<Vec<InventoryItem>> {
    vec![
        Vec::new(),
        names(&["tomato"]),
        names(&["bottle", "cup", "bowl"]),
        names(&["Apples", "banana", "orange", "pizza", "donut", "cake"]),
        household(),
    ]
}

#[test]
fn percentages_stay_within_bounds() {
    for snapshot in snapshots() {
        for scored in builtin().all_scored(&snapshot) {
            assert!(scored.match_percentage <= 100);
        }
    }
}

#[test]
fn full_score_iff_nothing_missing() {
    for snapshot in snapshots() {
        for scored in builtin().all_scored(&snapshot) {
            assert_eq!(
                scored.match_percentage == 100,
                scored.missing_ingredients.is_empty(),
                "{} against {} items",
                scored.name,
                snapshot.len()
            );
        }
    }
}

#[test]
fn missing_ingredients_follow_recipe_order() {
    for snapshot in snapshots() {
        for scored in builtin().all_scored(&snapshot) {
            let positions: Vec<usize> = scored
                .missing_ingredients
                .iter()
                .map(|m| scored.ingredients.iter().position(|i| i == m).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", scored.name);
        }
    }
}

#[test]
fn scoring_twice_gives_identical_results() {
    let snapshot = household();
    let before = snapshot.clone();
    let first = builtin().recommend(&snapshot);
    let second = builtin().recommend(&snapshot);
    assert_eq!(first, second);
    assert_eq!(snapshot, before);
}

#[test]
fn recommender_is_shareable_across_threads() {
    let recommender = builtin();
    let snapshot = household();
    let expected = ids(&recommender.recommend(&snapshot));
    let snapshot = &snapshot;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || ids(&recommender.recommend(snapshot))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ---------------------------------------------------------------------------
// 5. Output shape
// ---------------------------------------------------------------------------

#[test]
fn scored_recipes_serialize_for_the_view_layer() {
    let ranked = builtin().recommend(&household());
    let json = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(json["id"], 8);
    assert_eq!(json["name"], "Apple Pie");
    assert_eq!(json["matchPercentage"], 100);
    assert_eq!(json["missingIngredients"], serde_json::json!([]));
    assert_eq!(
        json["note"],
        "Requires additional ingredients: flour, sugar, butter, cinnamon"
    );
}
