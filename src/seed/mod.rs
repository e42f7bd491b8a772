// ABOUTME: Seed engine abstractions: the Seed trait, seed errors, and run summaries
// ABOUTME: Seeds write through a caller-owned connection so resets commit or roll back as one unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Seed Engine
//!
//! A [`Seed`] writes a known set of rows through a connection supplied by the
//! caller. [`DatabaseReset`] opens a transaction, wipes every table, runs the
//! seed, and commits. Dropping the transaction on any error rolls the store
//! back to its previous content.
//!
//! ```rust,no_run
//! # async fn example(db: &pierre_recipes::database::Database) -> Result<(), pierre_recipes::seed::SeedError> {
//! use pierre_recipes::seed::FixtureSeed;
//!
//! db.reset().reset_to_base_seed().await?;
//! db.reset().apply_custom_seed(&FixtureSeed::pantry()).await?;
//! # Ok(())
//! # }
//! ```

/// Declarative fixture tables and the fixture-driven seed
pub mod fixtures;
/// Wipe and reset operations
pub mod reset;

pub use fixtures::{FixtureSeed, IngredientFixture, RecipeFixture, RecipeIngredientFixture};
pub use reset::{wipe_tables, DatabaseReset};

use crate::errors::{AppError, ErrorCode};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::SqliteConnection;

/// Errors raised while wiping or seeding the store
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Deleting rows from a table failed
    #[error("failed to wipe table '{table}'")]
    Wipe {
        /// Table being wiped
        table: &'static str,
        /// Underlying store error
        #[source]
        source: sqlx::Error,
    },

    /// Inserting a fixture row failed
    #[error("failed to insert {entity} '{name}'")]
    Insert {
        /// Kind of row ("ingredient", "recipe", "recipe ingredient")
        entity: &'static str,
        /// Fixture name of the row
        name: String,
        /// Underlying store error
        #[source]
        source: sqlx::Error,
    },

    /// A recipe link names an ingredient key the fixture does not define
    #[error("recipe '{recipe}' references unknown ingredient key '{key}'")]
    UnresolvedIngredient {
        /// Recipe holding the link
        recipe: String,
        /// Key that could not be resolved
        key: String,
    },

    /// Two fixture ingredients share a key
    #[error("ingredient key '{0}' is defined more than once")]
    DuplicateKey(String),

    /// The connection or transaction could not be opened or committed
    #[error("seed transaction failed")]
    Transaction(#[source] sqlx::Error),
}

impl From<SeedError> for AppError {
    fn from(error: SeedError) -> Self {
        let code = match error {
            SeedError::Wipe { .. } => ErrorCode::WipeFailed,
            _ => ErrorCode::SeedFailed,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// Rows written by one seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Ingredients inserted
    pub ingredients: usize,
    /// Recipes inserted
    pub recipes: usize,
    /// Recipe-ingredient links inserted
    pub recipe_ingredients: usize,
}

/// Rows removed by one wipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WipeSummary {
    /// Links deleted
    pub recipe_ingredients: u64,
    /// Recipes deleted
    pub recipes: u64,
    /// Ingredients deleted
    pub ingredients: u64,
}

impl WipeSummary {
    /// Total rows deleted
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.recipe_ingredients + self.recipes + self.ingredients
    }
}

/// A routine that populates an empty store
///
/// Implementations write only through `conn`; the caller owns the
/// transaction and decides whether it commits.
#[async_trait]
pub trait Seed: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Insert this seed's rows
    async fn seed(&self, conn: &mut SqliteConnection) -> Result<SeedSummary, SeedError>;
}
