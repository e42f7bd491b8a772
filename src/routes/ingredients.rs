// ABOUTME: Route handlers for the ingredients REST API
// ABOUTME: List/search, get, create, rename, and delete with strict name validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient routes
//!
//! Create and update bodies are validated before the store is touched: a
//! rejected body never reaches the database.

use super::{path_id, search_query, SearchQuery};
use crate::{
    constants::endpoints,
    errors::{AppError, AppResult},
    models::Ingredient,
    resources::ServerResources,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Ingredient routes
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::INGREDIENTS,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                endpoints::INGREDIENT_BY_ID,
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/ingredients - List or search ingredients
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<SearchQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let query = search_query(query)?;
        let ingredients = resources
            .database
            .ingredients()
            .list(query.search.as_deref())
            .await?;

        Ok((StatusCode::OK, Json(ingredients)).into_response())
    }

    /// Handle GET /api/ingredients/:id - Get one ingredient
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(id)?;
        let ingredient = resources
            .database
            .ingredients()
            .get(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient"))?;

        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    /// Handle POST /api/ingredients - Create an ingredient
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let name = validated_name(body)?;
        let ingredient = resources.database.ingredients().create(&name).await?;

        info!(id = %ingredient.id, name = %ingredient.name, "Ingredient created");
        Ok((StatusCode::CREATED, Json(ingredient)).into_response())
    }

    /// Handle PATCH /api/ingredients/:id - Rename an ingredient
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<String>, PathRejection>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let name = validated_name(body)?;
        let id = path_id(id)?;
        let ingredient = resources
            .database
            .ingredients()
            .update_name(&id, &name)
            .await?
            .ok_or_else(|| AppError::not_found("Ingredient"))?;

        Ok((StatusCode::OK, Json(ingredient)).into_response())
    }

    /// Handle DELETE /api/ingredients/:id - Delete an ingredient
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(id)?;
        let deleted = resources.database.ingredients().delete(&id).await?;

        if !deleted {
            return Err(AppError::not_found("Ingredient"));
        }

        info!(id = %id, "Ingredient deleted");
        Ok((
            StatusCode::OK,
            Json(json!({ "message": "Ingredient deleted successfully" })),
        )
            .into_response())
    }
}

/// Extract a normalized, non-empty `name` from a JSON body
fn validated_name(body: Result<Json<Value>, JsonRejection>) -> AppResult<String> {
    let Json(value) =
        body.map_err(|e| AppError::invalid_input(format!("Invalid JSON body: {}", e.body_text())))?;

    match value.get("name") {
        None | Some(Value::Null) => Err(AppError::missing_field("name")),
        Some(Value::String(raw)) => Ingredient::normalize_name(raw)
            .ok_or_else(|| AppError::invalid_input("'name' must not be empty")),
        Some(_) => Err(AppError::invalid_input("'name' must be a string")),
    }
}
