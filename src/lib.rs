// ABOUTME: Main library entry point for the Pierre recipes REST API
// ABOUTME: Exposes the store layer, seed engine, route handlers, and server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Recipes
//!
//! A REST API over ingredients and recipes stored in `SQLite`.
//!
//! ## Architecture
//!
//! - **Database**: [`database::Database`] owns the pool; managers run the queries
//! - **Seed**: declarative fixtures and the transactional reset utility
//! - **Routes**: thin axum handlers over the managers
//! - **Server**: router assembly, middleware, and graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_recipes::config::ServerConfig;
//! use pierre_recipes::errors::AppResult;
//! use pierre_recipes::server::RecipeServer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     RecipeServer::bootstrap(config).await?.run().await
//! }
//! ```

pub use pierre_recipes_core::{constants, errors, models};

/// Environment-based configuration
pub mod config;

/// `SQLite` store handle and entity managers
pub mod database;

/// Structured logging setup
pub mod logging;

/// Shared resources injected into handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Fixture seeding and store reset
pub mod seed;

/// Router assembly and server lifecycle
pub mod server;

/// Test utilities for seeded databases and resources
pub mod test_utils;
