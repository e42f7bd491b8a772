// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and startup seeding policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use super::database::DatabaseConfig;
use crate::constants::ports;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::warn;

/// Environment type selecting storage and startup behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment (default)
    #[default]
    Development,
    /// Production environment; never reseeded
    Production,
    /// Testing environment with isolated storage
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development, // Default fallback (including "development" | "dev")
        }
    }

    /// Read `ENVIRONMENT`, falling back to `NODE_ENV`
    #[must_use]
    pub fn from_env() -> Self {
        env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .map_or_else(|_| Self::default(), |value| Self::from_str_or_default(&value))
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a development environment
    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Reset the store to the base fixture before serving
    pub seed_on_startup: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_env();
        let http_port = parse_port()?;
        let host = env::var("HOST").unwrap_or_else(|_| ports::DEFAULT_HOST.to_owned());
        let database = DatabaseConfig::from_env(&environment)?;
        let seed_on_startup = resolve_seed_on_startup(
            environment,
            env::var("SEED_ON_STARTUP").ok().as_deref(),
        )?;

        Ok(Self {
            http_port,
            host,
            environment,
            database,
            seed_on_startup,
        })
    }

    /// Configuration for tests: in-memory store, ephemeral port, no startup seeding
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_port: 0,
            host: ports::DEFAULT_HOST.to_owned(),
            environment: Environment::Testing,
            database: DatabaseConfig::in_memory(),
            seed_on_startup: false,
        }
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Recipes Server Configuration:\n\
             - HTTP Address: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Seed On Startup: {}",
            self.bind_address(),
            self.environment,
            self.database.url,
            self.seed_on_startup,
        )
    }
}

/// `HTTP_PORT` wins over `PORT`; both fall back to the default port
fn parse_port() -> AppResult<u16> {
    env::var("HTTP_PORT")
        .or_else(|_| env::var("PORT"))
        .map_or(Ok(ports::DEFAULT_HTTP_PORT), |value| {
            value
                .trim()
                .parse()
                .map_err(|e| AppError::config(format!("Invalid HTTP port '{value}': {e}")))
        })
}

/// Decide whether bootstrap resets the store
///
/// Testing seeds by default, development only on request, production never.
fn resolve_seed_on_startup(environment: Environment, raw: Option<&str>) -> AppResult<bool> {
    let requested = raw.map(parse_bool).transpose()?;

    if environment.is_production() {
        if requested == Some(true) {
            warn!("SEED_ON_STARTUP ignored in production environment");
        }
        return Ok(false);
    }

    Ok(requested.unwrap_or_else(|| environment.is_testing()))
}

fn parse_bool(value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "Invalid boolean value '{other}' for SEED_ON_STARTUP"
        ))),
    }
}
