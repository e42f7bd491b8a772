// ABOUTME: Ingredient queries: list with substring search, lookup, create, rename, delete
// ABOUTME: Returns typed outcomes (Option/bool) so handlers never inspect error codes for 404s
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::name_matches;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::Ingredient;
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

/// Ingredient database operations
pub struct IngredientsManager {
    pool: SqlitePool,
}

impl IngredientsManager {
    /// Create a new ingredients manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List ingredients in insertion order, optionally filtered by name
    ///
    /// The filter is a case-insensitive substring match (see
    /// [`name_matches`]); `%`, `_` and `\` in the search term match literally.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query("SELECT id, name FROM ingredients ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let ingredients = rows
            .iter()
            .map(row_to_ingredient)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(match search {
            Some(term) => ingredients
                .into_iter()
                .filter(|ingredient| name_matches(&ingredient.name, term))
                .collect(),
            None => ingredients,
        })
    }

    /// Get an ingredient by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn get(&self, id: &str) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query("SELECT id, name FROM ingredients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_ingredient).transpose()
    }

    /// Get the first ingredient with exactly this name
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query("SELECT id, name FROM ingredients WHERE name = $1 ORDER BY rowid LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_ingredient).transpose()
    }

    /// Insert a new ingredient with a generated id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create(&self, name: &str) -> AppResult<Ingredient> {
        let ingredient = insert_ingredient(&self.pool, name).await?;
        debug!(id = %ingredient.id, "Created ingredient");
        Ok(ingredient)
    }

    /// Rename an ingredient
    ///
    /// Returns `None` when no ingredient has this id.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn update_name(&self, id: &str, name: &str) -> AppResult<Option<Ingredient>> {
        let result = sqlx::query("UPDATE ingredients SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Ingredient {
            id: id.to_owned(),
            name: name.to_owned(),
        }))
    }

    /// Delete an ingredient
    ///
    /// Returns `false` when no ingredient has this id.
    ///
    /// # Errors
    ///
    /// Returns a `ResourceInUse` error if a recipe still uses the ingredient,
    /// or a database error if the delete fails
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let error = AppError::from(e);
                if error.code == ErrorCode::ResourceInUse {
                    AppError::in_use(format!("Ingredient {id} is used by a recipe"))
                } else {
                    error
                }
            })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Insert an ingredient through any executor (pool, connection, or transaction)
///
/// # Errors
///
/// Returns the underlying sqlx error if the insert fails
pub async fn insert_ingredient<'e, E>(executor: E, name: &str) -> Result<Ingredient, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO ingredients (id, name) VALUES ($1, $2)")
        .bind(&id)
        .bind(name)
        .execute(executor)
        .await?;

    Ok(Ingredient {
        id,
        name: name.to_owned(),
    })
}

fn row_to_ingredient(row: &SqliteRow) -> AppResult<Ingredient> {
    Ok(Ingredient {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::database::Database;

    async fn manager() -> IngredientsManager {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.ingredients()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let ingredients = manager().await;
        let created = ingredients.create("potato").await.unwrap();
        let fetched = ingredients.get(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_literal() {
        let ingredients = manager().await;
        ingredients.create("Garlic").await.unwrap();
        ingredients.create("garlic_salt").await.unwrap();
        ingredients.create("Onion").await.unwrap();

        let found = ingredients.list(Some("GARL")).await.unwrap();
        assert_eq!(found.len(), 2);

        let underscore = ingredients.list(Some("c_s")).await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].name, "garlic_salt");

        assert!(ingredients.list(Some("%")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let ingredients = manager().await;
        ingredients.create("jalapeño").await.unwrap();
        ingredients.create("Crème Fraîche").await.unwrap();

        let upper = ingredients.list(Some("JALAPEÑO")).await.unwrap();
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "jalapeño");

        let mixed = ingredients.list(Some("crÈme")).await.unwrap();
        assert_eq!(mixed.len(), 1);
        assert_eq!(mixed[0].name, "Crème Fraîche");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let ingredients = manager().await;
        for name in ["zucchini", "apple", "miso"] {
            ingredients.create(name).await.unwrap();
        }
        let names: Vec<_> = ingredients
            .list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["zucchini", "apple", "miso"]);
    }

    #[tokio::test]
    async fn test_missing_id_outcomes() {
        let ingredients = manager().await;
        let id = Uuid::new_v4().to_string();
        assert!(ingredients.get(&id).await.unwrap().is_none());
        assert!(ingredients.update_name(&id, "leek").await.unwrap().is_none());
        assert!(!ingredients.delete(&id).await.unwrap());
    }
}
