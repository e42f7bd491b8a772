// ABOUTME: Domain models for the recipes API
// ABOUTME: Ingredient, Recipe, and the RecipeIngredient association with quantity and unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient record
pub mod ingredient;
/// Recipe records and recipe-ingredient associations
pub mod recipe;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeDetail, RecipeIngredient, RecipeIngredientLine};
