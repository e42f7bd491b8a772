// ABOUTME: Database configuration types for SQLite connections
// ABOUTME: Parses DATABASE_URL / TEST_DATABASE_URL and picks isolated storage in testing mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::Environment;
use crate::constants::database;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `file:<path>`, `sqlite::memory:`, and bare paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names an unsupported backend or an empty path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed.contains("://") && !trimmed.starts_with("sqlite://") {
            return Err(AppError::config(format!(
                "Unsupported database URL '{trimmed}': only SQLite is supported"
            )));
        }

        let path_str = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .or_else(|| trimmed.strip_prefix("file:"))
            .unwrap_or(trimmed);

        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => Err(AppError::config("Database URL has an empty path")),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => database::MEMORY_DATABASE_URL.to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/recipes.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

impl DatabaseConfig {
    /// Load database configuration for the given environment
    ///
    /// The testing environment reads `TEST_DATABASE_URL` so test runs never
    /// touch the development database.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL cannot be parsed
    pub fn from_env(environment: &Environment) -> AppResult<Self> {
        let url = if environment.is_testing() {
            env_var_or("TEST_DATABASE_URL", database::DEFAULT_TEST_DATABASE_URL)
        } else {
            env_var_or("DATABASE_URL", database::DEFAULT_DATABASE_URL)
        };

        Ok(Self {
            url: DatabaseUrl::parse_url(&url)?,
        })
    }

    /// Use an explicit URL when given, otherwise select by environment
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen URL cannot be parsed
    pub fn resolve(explicit: Option<&str>, environment: &Environment) -> AppResult<Self> {
        match explicit {
            Some(url) => Ok(Self {
                url: DatabaseUrl::parse_url(url)?,
            }),
            None => Self::from_env(environment),
        }
    }

    /// Configuration for an isolated in-memory database
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            url: DatabaseUrl::Memory,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
