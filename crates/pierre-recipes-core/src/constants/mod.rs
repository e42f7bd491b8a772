// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Table names, route paths, and configuration defaults for the recipes API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Store table names
pub mod tables {
    /// Ingredient rows
    pub const INGREDIENTS: &str = "ingredients";
    /// Recipe rows
    pub const RECIPES: &str = "recipes";
    /// Recipe-ingredient association rows
    pub const RECIPE_INGREDIENTS: &str = "recipe_ingredients";

    /// Deletion order for a full wipe: children before parents
    pub const WIPE_ORDER: [&str; 3] = [RECIPE_INGREDIENTS, RECIPES, INGREDIENTS];
}

/// API endpoints
pub mod endpoints {
    /// Liveness endpoint
    pub const ROOT: &str = "/";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// Ingredient collection
    pub const INGREDIENTS: &str = "/api/ingredients";
    /// Single ingredient
    pub const INGREDIENT_BY_ID: &str = "/api/ingredients/:id";
    /// Recipe collection
    pub const RECIPES: &str = "/api/recipes";
    /// Single recipe
    pub const RECIPE_BY_ID: &str = "/api/recipes/:id";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Database defaults
pub mod database {
    /// Default development database
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Default isolated database for the testing environment
    pub const DEFAULT_TEST_DATABASE_URL: &str = "sqlite:./data/test.db";
    /// In-memory database URL
    pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";
    /// Maximum pooled connections for file-backed databases
    pub const MAX_CONNECTIONS: u32 = 5;
}

/// Service names used in structured logs
pub mod service_names {
    /// Server service name
    pub const PIERRE_RECIPES_SERVER: &str = "pierre-recipes-server";
}
