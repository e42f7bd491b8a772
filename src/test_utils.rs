// ABOUTME: Test utilities for creating seeded in-memory databases and server resources
// ABOUTME: Shared by unit tests, integration tests, and benchmarks so every run starts from the base fixture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{DatabaseUrl, ServerConfig};
use crate::database::Database;
use crate::errors::AppResult;
use crate::resources::ServerResources;
use std::sync::Arc;

/// Open an isolated in-memory database reset to the base fixture
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeded
pub async fn create_test_database() -> AppResult<Database> {
    let database = Database::open(DatabaseUrl::Memory).await?;
    database.reset().reset_to_base_seed().await?;
    Ok(database)
}

/// Server resources over a freshly seeded in-memory database
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeded
pub async fn create_test_resources() -> AppResult<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        ServerConfig::for_testing(),
    )))
}
