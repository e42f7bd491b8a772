// ABOUTME: Core types and constants for the Pierre recipes API
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Recipes Core
//!
//! Foundation crate providing shared types for the recipes API. It changes
//! rarely, so the server crate gets incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: `Ingredient`, `Recipe`, and `RecipeIngredient` records
//! - **constants**: Table names, route paths, and defaults

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (Ingredient, Recipe, RecipeIngredient)
pub mod models;

/// Application constants organized by domain
pub mod constants;
