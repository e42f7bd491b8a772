// ABOUTME: Recipe queries and insert helpers for recipes and recipe-ingredient links
// ABOUTME: Recipe detail joins each link with its ingredient name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::name_matches;
use crate::errors::AppResult;
use crate::models::{Recipe, RecipeDetail, RecipeIngredient, RecipeIngredientLine};
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use uuid::Uuid;

const RECIPE_COLUMNS: &str =
    "id, name, description, servings, prep_time, cook_time, instructions";

/// Fields of a recipe about to be inserted
#[derive(Debug, Clone, Copy)]
pub struct NewRecipe<'a> {
    /// Recipe name
    pub name: &'a str,
    /// Short description
    pub description: &'a str,
    /// Number of servings
    pub servings: i64,
    /// Preparation time in minutes
    pub prep_time: i64,
    /// Cooking time in minutes
    pub cook_time: i64,
    /// Free-text method
    pub instructions: &'a str,
}

/// Recipe database operations
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List recipes in insertion order, optionally filtered by a
    /// case-insensitive name substring
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await?;

        let recipes = rows.iter().map(row_to_recipe).collect::<AppResult<Vec<_>>>()?;

        Ok(match search {
            Some(term) => recipes
                .into_iter()
                .filter(|recipe| name_matches(&recipe.name, term))
                .collect(),
            None => recipes,
        })
    }

    /// Get a recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!("SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    /// Get a recipe with its ingredient lines
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails
    pub async fn get_detail(&self, id: &str) -> AppResult<Option<RecipeDetail>> {
        let Some(recipe) = self.get(id).await? else {
            return Ok(None);
        };

        let rows = sqlx::query(
            r"
            SELECT ri.ingredient_id, i.name, ri.quantity, ri.unit
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = $1
            ORDER BY ri.rowid
            ",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let ingredients = rows
            .iter()
            .map(|row| -> AppResult<RecipeIngredientLine> {
                Ok(RecipeIngredientLine {
                    ingredient_id: row.try_get("ingredient_id")?,
                    name: row.try_get("name")?,
                    quantity: row.try_get("quantity")?,
                    unit: row.try_get("unit")?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Some(RecipeDetail {
            recipe,
            ingredients,
        }))
    }

    /// All links of one recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn links(&self, recipe_id: &str) -> AppResult<Vec<RecipeIngredient>> {
        let rows = sqlx::query(
            "SELECT recipe_id, ingredient_id, quantity, unit FROM recipe_ingredients WHERE recipe_id = $1 ORDER BY rowid",
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> AppResult<RecipeIngredient> {
                Ok(RecipeIngredient {
                    recipe_id: row.try_get("recipe_id")?,
                    ingredient_id: row.try_get("ingredient_id")?,
                    quantity: row.try_get("quantity")?,
                    unit: row.try_get("unit")?,
                })
            })
            .collect()
    }
}

/// Insert a recipe through any executor
///
/// # Errors
///
/// Returns the underlying sqlx error if the insert fails
pub async fn insert_recipe<'e, E>(executor: E, recipe: &NewRecipe<'_>) -> Result<Recipe, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r"
        INSERT INTO recipes (id, name, description, servings, prep_time, cook_time, instructions)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(&id)
    .bind(recipe.name)
    .bind(recipe.description)
    .bind(recipe.servings)
    .bind(recipe.prep_time)
    .bind(recipe.cook_time)
    .bind(recipe.instructions)
    .execute(executor)
    .await?;

    Ok(Recipe {
        id,
        name: recipe.name.to_owned(),
        description: recipe.description.to_owned(),
        servings: recipe.servings,
        prep_time: recipe.prep_time,
        cook_time: recipe.cook_time,
        instructions: recipe.instructions.to_owned(),
    })
}

/// Link an ingredient to a recipe through any executor
///
/// # Errors
///
/// Returns the underlying sqlx error, including foreign-key violations
pub async fn insert_recipe_ingredient<'e, E>(
    executor: E,
    link: &RecipeIngredient,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, unit) VALUES ($1, $2, $3, $4)",
    )
    .bind(&link.recipe_id)
    .bind(&link.ingredient_id)
    .bind(link.quantity)
    .bind(&link.unit)
    .execute(executor)
    .await?;

    Ok(())
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    Ok(Recipe {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        servings: row.try_get("servings")?,
        prep_time: row.try_get("prep_time")?,
        cook_time: row.try_get("cook_time")?,
        instructions: row.try_get("instructions")?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::database::ingredients::insert_ingredient;
    use crate::database::Database;

    #[tokio::test]
    async fn test_detail_joins_ingredient_names() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let onion = insert_ingredient(db.pool(), "Onion").await.unwrap();
        let recipe = insert_recipe(
            db.pool(),
            &NewRecipe {
                name: "Soup",
                description: "Onion soup",
                servings: 4,
                prep_time: 10,
                cook_time: 45,
                instructions: "Simmer.",
            },
        )
        .await
        .unwrap();
        insert_recipe_ingredient(
            db.pool(),
            &RecipeIngredient {
                recipe_id: recipe.id.clone(),
                ingredient_id: onion.id.clone(),
                quantity: 2.5,
                unit: "Diced".to_owned(),
            },
        )
        .await
        .unwrap();

        let detail = db.recipes().get_detail(&recipe.id).await.unwrap().unwrap();
        assert_eq!(detail.recipe, recipe);
        assert_eq!(detail.ingredients.len(), 1);
        assert_eq!(detail.ingredients[0].name, "Onion");
        assert!((detail.ingredients[0].quantity - 2.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_link_to_missing_ingredient_is_rejected() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let recipe = insert_recipe(
            db.pool(),
            &NewRecipe {
                name: "Toast",
                description: "",
                servings: 1,
                prep_time: 1,
                cook_time: 2,
                instructions: "Toast it.",
            },
        )
        .await
        .unwrap();

        let result = insert_recipe_ingredient(
            db.pool(),
            &RecipeIngredient {
                recipe_id: recipe.id,
                ingredient_id: Uuid::new_v4().to_string(),
                quantity: 1.0,
                unit: "slice".to_owned(),
            },
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_recipe_detail_is_none() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let id = Uuid::new_v4().to_string();
        assert!(db.recipes().get_detail(&id).await.unwrap().is_none());
    }
}
