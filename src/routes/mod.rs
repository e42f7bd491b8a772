// ABOUTME: Route module organization for the recipes HTTP API
// ABOUTME: Each domain module exposes a routes() constructor and thin handlers over the store managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipes API
//!
//! Handlers validate input, call one store manager, and map the typed outcome
//! to a response. Errors are returned as [`crate::errors::AppError`], which
//! renders itself as `{"error": ...}`.

/// Liveness, health, and readiness routes
pub mod health;
/// Ingredient CRUD and search routes
pub mod ingredients;
/// Recipe read routes
pub mod recipes;

pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;

use crate::errors::{AppError, AppResult};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use serde::Deserialize;

/// Query parameters for list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
}

/// Unwrap the list query, turning a malformed query string into a JSON 400
fn search_query(query: Result<Query<SearchQuery>, QueryRejection>) -> AppResult<SearchQuery> {
    query
        .map(|Query(query)| query)
        .map_err(|e| AppError::invalid_input(format!("Invalid query string: {}", e.body_text())))
}

/// Unwrap the `:id` path segment, turning a rejection into a JSON 400
fn path_id(path: Result<Path<String>, PathRejection>) -> AppResult<String> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::invalid_input(format!("Invalid path: {}", e.body_text())))
}
