// ABOUTME: Shared server resources injected into every route handler
// ABOUTME: Holds the database handle and the loaded configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Centralized resource container shared by all handlers
///
/// Created once at startup and passed to routers as `Arc<ServerResources>`
/// axum state. There is no global store handle.
#[derive(Clone)]
pub struct ServerResources {
    /// Store handle
    pub database: Database,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle a database and configuration
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        Self {
            database,
            config: Arc::new(config),
        }
    }
}
