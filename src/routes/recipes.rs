// ABOUTME: Route handlers for reading recipes
// ABOUTME: Recipes are created by the seed engine only; the API lists them and returns details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{path_id, search_query, SearchQuery};
use crate::{constants::endpoints, errors::AppError, resources::ServerResources};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::RECIPES, get(Self::handle_list))
            .route(endpoints::RECIPE_BY_ID, get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/recipes - List or search recipes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<SearchQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let query = search_query(query)?;
        let recipes = resources
            .database
            .recipes()
            .list(query.search.as_deref())
            .await?;

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /api/recipes/:id - Recipe with its ingredient lines
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        let id = path_id(id)?;
        let detail = resources
            .database
            .recipes()
            .get_detail(&id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe"))?;

        Ok((StatusCode::OK, Json(detail)).into_response())
    }
}
