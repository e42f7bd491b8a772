// ABOUTME: HTTP server assembly: router composition, middleware, bootstrap, and graceful shutdown
// ABOUTME: Unknown routes return a JSON 404 and handler panics become a generic JSON 500
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Server
//!
//! [`RecipeServer::bootstrap`] opens the store, optionally resets it to the
//! base fixture, and returns a server ready to bind. [`build_router`] is
//! exposed separately so tests can drive the full middleware stack without a
//! socket.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::{AppError, AppResult, ErrorResponse, INTERNAL_SERVER_ERROR_MESSAGE};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, IngredientRoutes, RecipeRoutes};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Compose every route group with the shared middleware stack
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    with_middleware(
        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(&resources)))
            .merge(IngredientRoutes::routes(Arc::clone(&resources)))
            .merge(RecipeRoutes::routes(resources)),
    )
}

/// Add the JSON 404 fallback, panic recovery, and request tracing to `routes`
pub fn with_middleware(routes: Router) -> Router {
    routes
        .fallback(handle_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

async fn handle_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found".to_owned(),
        }),
    )
        .into_response()
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!("Request handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
        }),
    )
        .into_response()
}

/// HTTP server for the recipes API
pub struct RecipeServer {
    resources: Arc<ServerResources>,
}

impl RecipeServer {
    /// Open the store and apply the startup seeding policy
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the startup reset fails
    pub async fn bootstrap(config: ServerConfig) -> AppResult<Self> {
        let database = Database::open(config.database.url.clone()).await?;

        if config.seed_on_startup {
            let summary = database.reset().reset_to_base_seed().await?;
            info!(
                "Store reset to base fixture: {} ingredients, {} recipes, {} links",
                summary.ingredients, summary.recipes, summary.recipe_ingredients
            );
        } else if config.environment.is_production() {
            info!("Production environment: startup seeding disabled");
        }

        Ok(Self::new(Arc::new(ServerResources::new(database, config))))
    }

    /// Wrap already constructed resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Shared resources handed to every handler
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Router with all routes and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.resources))
    }

    /// Bind the configured address and serve until a shutdown signal
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> AppResult<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            AppError::internal(format!("Failed to bind {address}: {e}")).with_source(e)
        })?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until a shutdown signal
    ///
    /// # Errors
    ///
    /// Returns an error if the server loop fails
    pub async fn serve(self, listener: TcpListener) -> AppResult<()> {
        let local = listener
            .local_addr()
            .map_or_else(|_| "unknown".to_owned(), |addr| addr.to_string());
        info!("HTTP server listening on http://{local}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")).with_source(e))?;

        info!("HTTP server stopped, closing database");
        self.resources.database.close().await;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
