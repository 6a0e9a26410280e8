use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use recipematch::{
    Catalog, InventoryItem, Matcher, Recipe, RecommendOptions, Recommender, SynonymTable,
    by_descending_match, score,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PANTRY: &[&str] = &[
    "Milk", "Eggs", "Apples", "Lettuce", "Orange Juice", "Carrots", "Yogurt", "Chicken",
    "Tomato", "Cheese", "Bread", "Butter", "Cucumber", "Onion", "Beef", "bottle", "cup",
    "bowl", "broccoli", "banana",
];

/// Generate an inventory of `n` names by cycling the pantry list with a suffix.
fn generate_inventory(n: usize) -> Vec<InventoryItem> {
    (0..n)
        .map(|i| {
            let base = PANTRY[i % PANTRY.len()];
            if i < PANTRY.len() {
                InventoryItem::from(base)
            } else {
                InventoryItem::from(format!("{base} {i}"))
            }
        })
        .collect()
}

/// Generate a catalog of `n` recipes, each with five ingredients drawn from a
/// mix of pantry names, synonym keys and names nothing matches.
fn generate_catalog(n: usize) -> Catalog {
    const INGREDIENTS: &[&str] = &[
        "tomato", "mozzarella", "basil", "olive oil", "milk", "vegetables", "fruits", "salt",
        "almond milk", "chicken", "saffron", "eggs", "juice", "tortilla", "soup",
    ];
    let recipes = (0..n)
        .map(|i| Recipe {
            id: i as u32,
            name: format!("Recipe {i}"),
            ingredients: (0..5)
                .map(|k| INGREDIENTS[(i * 7 + k * 3) % INGREDIENTS.len()].to_owned())
                .collect(),
            time: "20 min".to_owned(),
            difficulty: "Easy".to_owned(),
            calories: 300,
            category: "Main Course".to_owned(),
            image: String::new(),
            instructions: Vec::new(),
            note: None,
        })
        .collect();
    Catalog::new(recipes).expect("generated ids are unique")
}

// ---------------------------------------------------------------------------
// 1. Matcher micro-benchmark
// ---------------------------------------------------------------------------

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");
    let matcher = Matcher::new(SynonymTable::builtin());

    group.bench_function("exact", |b| {
        b.iter(|| matcher.match_rule(black_box("tomato"), black_box("Tomato")));
    });

    group.bench_function("substring", |b| {
        b.iter(|| matcher.match_rule(black_box("carrot"), black_box("Carrots")));
    });

    group.bench_function("synonym_forward", |b| {
        b.iter(|| matcher.match_rule(black_box("milk"), black_box("bottle")));
    });

    // Reverse rule scans the whole table.
    group.bench_function("synonym_reverse", |b| {
        b.iter(|| matcher.match_rule(black_box("almond milk"), black_box("bottle")));
    });

    // No match: falls through every rule.
    group.bench_function("no_match", |b| {
        b.iter(|| matcher.match_rule(black_box("saffron"), black_box("cheese")));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Scoring one recipe against growing inventories
// ---------------------------------------------------------------------------

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let matcher = Matcher::new(SynonymTable::builtin());
    let Some(recipe) = Catalog::builtin().get(10) else {
        return;
    };

    for size in [10, 100, 1_000] {
        let inventory = generate_inventory(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &inventory, |b, inventory| {
            b.iter(|| score(black_box(recipe), black_box(inventory), &matcher));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Recommendation throughput at catalog sizes
// ---------------------------------------------------------------------------

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let inventory = generate_inventory(50);
    let options = RecommendOptions::default();

    group.bench_function("builtin_catalog", |b| {
        let recommender = Recommender::builtin(&options);
        b.iter(|| recommender.recommend(black_box(&inventory)));
    });

    for size in [100, 1_000, 10_000] {
        let catalog = generate_catalog(size);
        let recommender = Recommender::new(&catalog, SynonymTable::builtin(), &options);
        group.bench_with_input(BenchmarkId::from_parameter(size), &inventory, |b, inventory| {
            b.iter(|| recommender.recommend(black_box(inventory)));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 4. Diacritic folding overhead
// ---------------------------------------------------------------------------

fn bench_diacritics(c: &mut Criterion) {
    let mut group = c.benchmark_group("diacritics");
    let catalog = generate_catalog(1_000);
    let inventory: Vec<InventoryItem> = (0..200)
        .map(|i| {
            let name = if i % 2 == 0 {
                format!("jalape\u{00f1}o {i}")
            } else {
                format!("cr\u{00e8}me {i}")
            };
            InventoryItem::from(name)
        })
        .collect();

    for fold in [false, true] {
        let options = RecommendOptions {
            fold_diacritics: fold,
            ..Default::default()
        };
        let recommender = Recommender::new(&catalog, SynonymTable::builtin(), &options);
        let label = if fold { "fold" } else { "keep" };
        group.bench_function(label, |b| {
            b.iter(|| recommender.all_scored(black_box(&inventory)));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 5. Sort overhead
// ---------------------------------------------------------------------------

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    let catalog = generate_catalog(10_000);
    let recommender =
        Recommender::new(&catalog, SynonymTable::builtin(), &RecommendOptions::default());
    let scored = recommender.all_scored(&generate_inventory(50));

    group.bench_function("sort_10k_scored_recipes", |b| {
        b.iter_batched(
            || scored.clone(),
            |mut data| {
                data.sort_by(by_descending_match);
                data
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_matcher,
    bench_score,
    bench_recommend,
    bench_diacritics,
    bench_sort,
);
criterion_main!(benches);
