// ABOUTME: Configuration module for the recipes server
// ABOUTME: Environment-only configuration: server, environment mode, and database settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All settings come from environment variables; there are no config files.

/// Database URL parsing and connection settings
pub mod database;
/// Server configuration and environment mode
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{Environment, ServerConfig};
