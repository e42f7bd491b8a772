// ABOUTME: Reset utility: wipe, reset to the base fixture, or apply a custom seed
// ABOUTME: Each operation runs in a single transaction that rolls back on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FixtureSeed, Seed, SeedError, SeedSummary, WipeSummary};
use crate::constants::tables;
use crate::logging::AppLogger;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

/// Store reset operations over a shared pool
pub struct DatabaseReset {
    pool: SqlitePool,
}

impl DatabaseReset {
    /// Create a reset utility for a pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Delete every row, children before parents
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Wipe`] naming the first table that failed, or
    /// [`SeedError::Transaction`]; the store is unchanged on error
    pub async fn wipe(&self) -> Result<WipeSummary, SeedError> {
        let mut tx = self.pool.begin().await.map_err(SeedError::Transaction)?;
        let summary = wipe_tables(&mut *tx).await?;
        tx.commit().await.map_err(SeedError::Transaction)?;

        info!(rows = summary.total(), "Database wiped");
        Ok(summary)
    }

    /// Wipe and insert the base fixture as one transaction
    ///
    /// # Errors
    ///
    /// Returns the first wipe or seed error; the store is unchanged on error
    pub async fn reset_to_base_seed(&self) -> Result<SeedSummary, SeedError> {
        self.apply_custom_seed(&FixtureSeed::base()).await
    }

    /// Wipe and run `seed` as one transaction
    ///
    /// # Errors
    ///
    /// Returns the first wipe or seed error; the store is unchanged on error
    pub async fn apply_custom_seed<S>(&self, seed: &S) -> Result<SeedSummary, SeedError>
    where
        S: Seed + ?Sized,
    {
        let mut tx = self.pool.begin().await.map_err(SeedError::Transaction)?;
        wipe_tables(&mut *tx).await?;
        let summary = seed.seed(&mut *tx).await?;
        tx.commit().await.map_err(SeedError::Transaction)?;

        info!(
            seed = seed.name(),
            ingredients = summary.ingredients,
            recipes = summary.recipes,
            links = summary.recipe_ingredients,
            "Database reset"
        );
        Ok(summary)
    }
}

/// Delete all rows from every table through `conn`
///
/// # Errors
///
/// Returns [`SeedError::Wipe`] for the first table that could not be cleared
pub async fn wipe_tables(conn: &mut SqliteConnection) -> Result<WipeSummary, SeedError> {
    let mut summary = WipeSummary::default();

    for table in tables::WIPE_ORDER {
        let result = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *conn)
            .await
            .map_err(|source| SeedError::Wipe { table, source })?;

        let rows = result.rows_affected();
        AppLogger::log_database_operation("wipe", table, true, rows);

        match table {
            tables::RECIPE_INGREDIENTS => summary.recipe_ingredients = rows,
            tables::RECIPES => summary.recipes = rows,
            _ => summary.ingredients = rows,
        }
    }

    Ok(summary)
}
