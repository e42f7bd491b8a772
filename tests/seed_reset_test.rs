// ABOUTME: Integration tests for the seed engine and reset utility
// ABOUTME: Checks fixture counts, idempotence, referential integrity, and rollback on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::create_test_database;
use pierre_recipes::database::TableCounts;
use pierre_recipes::seed::{
    FixtureSeed, IngredientFixture, RecipeFixture, RecipeIngredientFixture, Seed, SeedError,
    SeedSummary,
};
use sqlx::SqliteConnection;

const BASE_COUNTS: TableCounts = TableCounts {
    ingredients: 12,
    recipes: 1,
    recipe_ingredients: 8,
};

async fn ingredient_names(db: &pierre_recipes::database::Database) -> Vec<String> {
    db.ingredients()
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect()
}

#[tokio::test]
async fn test_reset_produces_base_fixture() {
    let db = create_test_database().await.unwrap();
    assert_eq!(db.table_counts().await.unwrap(), BASE_COUNTS);

    let summary = db.reset().reset_to_base_seed().await.unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            ingredients: 12,
            recipes: 1,
            recipe_ingredients: 8,
        }
    );
}

#[tokio::test]
async fn test_reset_is_idempotent() {
    let db = create_test_database().await.unwrap();
    let first = ingredient_names(&db).await;

    db.reset().reset_to_base_seed().await.unwrap();
    db.reset().reset_to_base_seed().await.unwrap();

    assert_eq!(db.table_counts().await.unwrap(), BASE_COUNTS);
    assert_eq!(ingredient_names(&db).await, first);
}

#[tokio::test]
async fn test_reset_discards_added_rows() {
    let db = create_test_database().await.unwrap();
    db.ingredients().create("potato").await.unwrap();
    assert_eq!(db.table_counts().await.unwrap().ingredients, 13);

    db.reset().reset_to_base_seed().await.unwrap();
    assert_eq!(db.table_counts().await.unwrap(), BASE_COUNTS);
    assert!(db.ingredients().find_by_name("potato").await.unwrap().is_none());
}

#[tokio::test]
async fn test_seeded_links_resolve() {
    let db = create_test_database().await.unwrap();
    let recipes = db.recipes().list(None).await.unwrap();
    assert_eq!(recipes.len(), 1);

    let links = db.recipes().links(&recipes[0].id).await.unwrap();
    assert_eq!(links.len(), 8);
    for link in links {
        assert!(db.ingredients().get(&link.ingredient_id).await.unwrap().is_some());
        assert!(db.recipes().get(&link.recipe_id).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_wipe_empties_every_table() {
    let db = create_test_database().await.unwrap();

    let wiped = db.reset().wipe().await.unwrap();
    assert_eq!(wiped.recipe_ingredients, 8);
    assert_eq!(wiped.recipes, 1);
    assert_eq!(wiped.ingredients, 12);
    assert_eq!(wiped.total(), 21);

    assert!(db.table_counts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pantry_seed_replaces_base() {
    let db = create_test_database().await.unwrap();

    db.reset()
        .apply_custom_seed(&FixtureSeed::pantry())
        .await
        .unwrap();

    let counts = db.table_counts().await.unwrap();
    assert_eq!(counts.ingredients, 10);
    assert_eq!(counts.recipes, 0);
    assert_eq!(counts.recipe_ingredients, 0);
    assert!(db.ingredients().find_by_name("Tomato Puree").await.unwrap().is_none());
}

// ============================================================================
// Rollback
// ============================================================================

/// Inserts one row and then fails
struct HalfwaySeed;

#[async_trait]
impl Seed for HalfwaySeed {
    fn name(&self) -> &str {
        "halfway"
    }

    async fn seed(&self, conn: &mut SqliteConnection) -> Result<SeedSummary, SeedError> {
        sqlx::query("INSERT INTO ingredients (id, name) VALUES ('partial', 'Partial')")
            .execute(&mut *conn)
            .await
            .map_err(SeedError::Transaction)?;

        Err(SeedError::UnresolvedIngredient {
            recipe: "Half Recipe".to_owned(),
            key: "missing".to_owned(),
        })
    }
}

#[tokio::test]
async fn test_failing_custom_seed_leaves_store_untouched() {
    let db = create_test_database().await.unwrap();
    let before = ingredient_names(&db).await;

    let result = db.reset().apply_custom_seed(&HalfwaySeed).await;
    assert!(matches!(
        result,
        Err(SeedError::UnresolvedIngredient { ref key, .. }) if key == "missing"
    ));

    assert_eq!(db.table_counts().await.unwrap(), BASE_COUNTS);
    assert_eq!(ingredient_names(&db).await, before);
}

const BROKEN_RECIPES: &[RecipeFixture] = &[RecipeFixture {
    name: "Garlic Bread",
    description: "",
    servings: 2,
    prep_time: 5,
    cook_time: 10,
    instructions: "Bake.",
    ingredients: &[RecipeIngredientFixture {
        ingredient: "bread",
        quantity: 1.0,
        unit: "loaf",
    }],
}];

const GARLIC_ONLY: &[IngredientFixture] = &[IngredientFixture {
    key: "garlic",
    name: "Garlic",
}];

#[tokio::test]
async fn test_unresolved_fixture_key_rolls_back() {
    let db = create_test_database().await.unwrap();
    let seed = FixtureSeed::new("broken", GARLIC_ONLY, BROKEN_RECIPES);

    let error = db.reset().apply_custom_seed(&seed).await.unwrap_err();
    assert!(error.to_string().contains("bread"));
    assert_eq!(db.table_counts().await.unwrap(), BASE_COUNTS);
}

#[tokio::test]
async fn test_duplicate_fixture_key_is_rejected() {
    const DUPLICATES: &[IngredientFixture] = &[
        IngredientFixture { key: "salt", name: "Salt" },
        IngredientFixture { key: "salt", name: "Sea Salt" },
    ];

    let db = create_test_database().await.unwrap();
    let seed = FixtureSeed::new("duplicates", DUPLICATES, &[]);

    let result = db.reset().apply_custom_seed(&seed).await;
    assert!(matches!(result, Err(SeedError::DuplicateKey(ref key)) if key == "salt"));
    assert_eq!(db.table_counts().await.unwrap(), BASE_COUNTS);
}
