// ABOUTME: Database handle wrapping the SQLite pool, schema bootstrap, and manager accessors
// ABOUTME: One handle is opened at startup and injected into handlers and the reset utility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! [`Database`] owns the connection pool. Entity access goes through thin
//! managers ([`IngredientsManager`], [`RecipesManager`]) and store resets go
//! through [`DatabaseReset`]; all of them share the same pool.
//!
//! Store outcomes are typed: lookups return `AppResult<Option<T>>` and
//! deletions return `AppResult<bool>`, so a missing row is never an error.

/// Ingredient queries
pub mod ingredients;
/// Recipe and recipe-ingredient queries
pub mod recipes;

pub use ingredients::IngredientsManager;
pub use recipes::{NewRecipe, RecipesManager};

use crate::config::DatabaseUrl;
use crate::constants::{database, tables};
use crate::errors::{AppError, AppResult};
use crate::seed::DatabaseReset;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

/// Case-insensitive substring match used by name searches
///
/// Both sides are folded with the same Unicode lower-casing that
/// `Ingredient::normalize_name` applies on write, and the term matches
/// literally (no wildcards).
#[must_use]
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Row counts of every table, used by diagnostics and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TableCounts {
    /// Rows in `ingredients`
    pub ingredients: i64,
    /// Rows in `recipes`
    pub recipes: i64,
    /// Rows in `recipe_ingredients`
    pub recipe_ingredients: i64,
}

impl TableCounts {
    /// True when all tables are empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ingredients == 0 && self.recipes == 0 && self.recipe_ingredients == 0
    }
}

/// Database handle for recipe storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    url: DatabaseUrl,
}

impl Database {
    /// Open a database and create the schema if needed
    ///
    /// In-memory databases are pinned to a single connection that never
    /// expires; every pooled connection would otherwise see its own empty
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the file cannot be created, or
    /// the schema cannot be applied
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let url = DatabaseUrl::parse_url(database_url)?;
        Self::open(url).await
    }

    /// Open a database from an already parsed URL
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema bootstrap fails
    pub async fn open(url: DatabaseUrl) -> AppResult<Self> {
        let pool = match &url {
            DatabaseUrl::Memory => {
                let options = SqliteConnectOptions::from_str(database::MEMORY_DATABASE_URL)?
                    .foreign_keys(true);
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(options)
                    .await?
            }
            DatabaseUrl::SQLite { path } => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                        .with_source(e)
                    })?;
                }
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .foreign_keys(true);
                SqlitePoolOptions::new()
                    .max_connections(database::MAX_CONNECTIONS)
                    .connect_with(options)
                    .await?
            }
        };

        let db = Self { pool, url };
        db.migrate().await?;
        info!("Database ready: {}", db.url);

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Location this handle was opened with
    #[must_use]
    pub const fn url(&self) -> &DatabaseUrl {
        &self.url
    }

    /// Ingredient queries over the shared pool
    #[must_use]
    pub fn ingredients(&self) -> IngredientsManager {
        IngredientsManager::new(self.pool.clone())
    }

    /// Recipe queries over the shared pool
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }

    /// Wipe and seed operations over the shared pool
    #[must_use]
    pub fn reset(&self) -> DatabaseReset {
        DatabaseReset::new(self.pool.clone())
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                servings INTEGER NOT NULL,
                prep_time INTEGER NOT NULL,
                cook_time INTEGER NOT NULL,
                instructions TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // No ON DELETE CASCADE: wipes must delete children first
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                recipe_id TEXT NOT NULL REFERENCES recipes(id),
                ingredient_id TEXT NOT NULL REFERENCES ingredients(id),
                quantity REAL NOT NULL,
                unit TEXT NOT NULL,
                PRIMARY KEY (recipe_id, ingredient_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_ingredient ON recipe_ingredients(ingredient_id)",
        )
        .execute(&self.pool)
        .await?;

        debug!("Database schema verified");
        Ok(())
    }

    /// Round-trip a trivial query to check the store is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not answer
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Count rows in every table
    ///
    /// # Errors
    ///
    /// Returns an error if a count query fails
    pub async fn table_counts(&self) -> AppResult<TableCounts> {
        Ok(TableCounts {
            ingredients: self.count(tables::INGREDIENTS).await?,
            recipes: self.count(tables::RECIPES).await?,
            recipe_ingredients: self.count(tables::RECIPE_INGREDIENTS).await?,
        })
    }

    async fn count(&self, table: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_folds_unicode_and_is_literal() {
        assert!(name_matches("jalapeño", "JALAPEÑO"));
        assert!(name_matches("Crème Fraîche", "CRÈME"));
        assert!(name_matches("garlic_salt", "c_s"));
        assert!(!name_matches("garlic", "%"));
        assert!(!name_matches("onion", "garlic"));
    }

    #[tokio::test]
    async fn test_memory_database_has_empty_schema() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let counts = db.table_counts().await.unwrap();
        assert!(counts.is_empty());
        assert!(db.url().is_memory());
    }

    #[tokio::test]
    async fn test_migrate_is_repeatable() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let result = sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, unit) VALUES ('r', 'i', 1, 'g')",
        )
        .execute(db.pool())
        .await;
        assert!(result.is_err());
    }
}
