// ABOUTME: Recipe model and the recipe-ingredient association entity
// ABOUTME: JSON uses camelCase field names (prepTime, cookTime, ingredientId)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recipe row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier (UUID v4 string)
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Short description
    pub description: String,
    /// Number of servings
    pub servings: i64,
    /// Preparation time in minutes
    pub prep_time: i64,
    /// Cooking time in minutes
    pub cook_time: i64,
    /// Free-text method
    pub instructions: String,
}

/// Association row: this recipe uses this ingredient in this quantity and unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    /// Recipe being described
    pub recipe_id: String,
    /// Ingredient used
    pub ingredient_id: String,
    /// Amount, may be fractional
    pub quantity: f64,
    /// Free-text unit ("g", "tin", "stock cube in 400ml of water")
    pub unit: String,
}

/// One ingredient line of a recipe, joined with the ingredient name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    /// Ingredient identifier
    pub ingredient_id: String,
    /// Ingredient name
    pub name: String,
    /// Amount, may be fractional
    pub quantity: f64,
    /// Free-text unit
    pub unit: String,
}

/// A recipe together with its ingredient lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Recipe fields, flattened into the top-level object
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Ingredient lines in insertion order
    pub ingredients: Vec<RecipeIngredientLine>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_uses_camel_case() {
        let recipe = Recipe {
            id: "r1".to_owned(),
            name: "Beef Chili".to_owned(),
            description: "Chilli con Carne".to_owned(),
            servings: 2,
            prep_time: 20,
            cook_time: 120,
            instructions: "Cook it.".to_owned(),
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["prepTime"], 20);
        assert_eq!(json["cookTime"], 120);
        assert!(json.get("prep_time").is_none());
    }

    #[test]
    fn test_recipe_detail_flattens_recipe_fields() {
        let detail = RecipeDetail {
            recipe: Recipe {
                id: "r1".to_owned(),
                name: "Beef Chili".to_owned(),
                description: String::new(),
                servings: 2,
                prep_time: 20,
                cook_time: 120,
                instructions: String::new(),
            },
            ingredients: vec![RecipeIngredientLine {
                ingredient_id: "i1".to_owned(),
                name: "Red Pepper".to_owned(),
                quantity: 0.5,
                unit: "Diced".to_owned(),
            }],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "Beef Chili");
        assert_eq!(json["ingredients"][0]["ingredientId"], "i1");
        assert_eq!(json["ingredients"][0]["quantity"], 0.5);
    }
}
