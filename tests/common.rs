// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, seeded in-memory resources, and fixture lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `pierre_recipes`

use anyhow::Result;
use pierre_recipes::{
    database::Database, resources::ServerResources, server::build_router, test_utils,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests are quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory database reset to the base fixture
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(test_utils::create_test_database().await?)
}

/// Server resources over a freshly seeded database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    Ok(test_utils::create_test_resources().await?)
}

/// Full application router plus the resources behind it
pub async fn setup_test_app() -> (axum::Router, Arc<ServerResources>) {
    let resources = create_test_server_resources().await.unwrap();
    (build_router(Arc::clone(&resources)), resources)
}

/// Id of the first ingredient with this exact name
pub async fn ingredient_id(resources: &ServerResources, name: &str) -> String {
    resources
        .database
        .ingredients()
        .find_by_name(name)
        .await
        .unwrap()
        .unwrap_or_else(|| panic!("fixture ingredient {name} missing"))
        .id
}
