// ABOUTME: Declarative fixture tables for the base and pantry seeds
// ABOUTME: Recipe links name ingredients by key; keys resolve to generated ids at seed time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Seed, SeedError, SeedSummary};
use crate::database::ingredients::insert_ingredient;
use crate::database::recipes::{insert_recipe, insert_recipe_ingredient};
use crate::database::NewRecipe;
use crate::models::RecipeIngredient;
use async_trait::async_trait;
use sqlx::SqliteConnection;
use std::collections::HashMap;
use tracing::debug;

/// Ingredient row keyed for lookup by recipe links
#[derive(Debug, Clone, Copy)]
pub struct IngredientFixture {
    /// Stable key referenced by [`RecipeIngredientFixture::ingredient`]
    pub key: &'static str,
    /// Stored name
    pub name: &'static str,
}

/// Quantity of one ingredient used by a fixture recipe
#[derive(Debug, Clone, Copy)]
pub struct RecipeIngredientFixture {
    /// Key of an [`IngredientFixture`] in the same seed
    pub ingredient: &'static str,
    /// Amount
    pub quantity: f64,
    /// Free-text unit
    pub unit: &'static str,
}

/// Recipe row with its ingredient links
#[derive(Debug, Clone, Copy)]
pub struct RecipeFixture {
    /// Recipe name
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Number of servings
    pub servings: i64,
    /// Preparation time in minutes
    pub prep_time: i64,
    /// Cooking time in minutes
    pub cook_time: i64,
    /// Free-text method
    pub instructions: &'static str,
    /// Links, inserted in order
    pub ingredients: &'static [RecipeIngredientFixture],
}

#[rustfmt::skip]
const BASE_INGREDIENTS: &[IngredientFixture] = &[
    IngredientFixture { key: "onion", name: "Onion" },
    IngredientFixture { key: "garlic", name: "Garlic" },
    IngredientFixture { key: "beef_mince", name: "Beef Mince" },
    IngredientFixture { key: "lardons", name: "Lardons" },
    IngredientFixture { key: "sweetcorn", name: "Sweetcorn" },
    IngredientFixture { key: "smoked_paprika", name: "Smoked Paprika" },
    IngredientFixture { key: "cayenne_pepper", name: "Cayenne Pepper" },
    IngredientFixture { key: "cumin", name: "Cumin" },
    IngredientFixture { key: "red_pepper", name: "Red Pepper" },
    IngredientFixture { key: "beef_stock", name: "Beef Stock" },
    IngredientFixture { key: "kidney_beans", name: "Kidney Beans" },
    IngredientFixture { key: "tomato_puree", name: "Tomato Puree" },
];

/// Number of leading base ingredients stocked by the pantry seed
const PANTRY_SIZE: usize = 10;

const BEEF_CHILI_INSTRUCTIONS: &str = "\
1. Put the Beef stock pot in a jug and add the correct amount (see packet - probably 400 ml) of boiling water. Stir until the stock pot is dissolved. You can be doing this while cooking the onions and peppers.
2. Heat some oil in a suitable frying pan (medium heat). Add the onions and pepper and cook for 10 minutes stirring regularly.
3. Add the garlic and cook for 2 minutes
4. Add the bacon/lardons. Stir and cook for 4 minutes or until cooked.
5. Add the chilli con carne mix. Stir in and cook for 2 minutes.
6. Add the mince. Stir regularly. Continue until all the minced is cooked.
7. Add the tomato puree and the beef stock. Stir thoroughly. Bring to the boil and then turn down to a simmer.
8. Allow to simmer for at least 20 minutes.
9. Taste it.
10. You might want to add some salt. If you want it to be sweeter add tomato ketchup.
11. If starting from cold (i.e. the next day) start by reheating the chilli gently. Skip if you are just continuing from above.
12. Drain the sweet corn and add it to the pan. Stir it in.
13. Turn the heat up to high (not the highest) and boil off the remaining liquid. You will need to pay attention and stir regularly to stop it from burning.
14. Stop when you have the consistency you want.";

#[rustfmt::skip]
const BASE_RECIPES: &[RecipeFixture] = &[RecipeFixture {
    name: "Beef Chili",
    description: "Chilli con Carne using Beef mince and bacon lardons",
    servings: 2,
    prep_time: 20,
    cook_time: 120,
    instructions: BEEF_CHILI_INSTRUCTIONS,
    ingredients: &[
        RecipeIngredientFixture { ingredient: "beef_mince", quantity: 500.0, unit: "g" },
        RecipeIngredientFixture { ingredient: "lardons", quantity: 100.0, unit: "g" },
        RecipeIngredientFixture { ingredient: "garlic", quantity: 1.0, unit: "clove - chopped" },
        RecipeIngredientFixture { ingredient: "sweetcorn", quantity: 1.0, unit: "tin" },
        RecipeIngredientFixture { ingredient: "tomato_puree", quantity: 2.0, unit: "tbsp" },
        RecipeIngredientFixture { ingredient: "onion", quantity: 1.0, unit: "Diced" },
        RecipeIngredientFixture { ingredient: "red_pepper", quantity: 0.5, unit: "Diced" },
        RecipeIngredientFixture {
            ingredient: "beef_stock",
            quantity: 1.0,
            unit: "stock cube in 400ml of water",
        },
    ],
}];

/// Seed driven entirely by static fixture tables
#[derive(Debug, Clone, Copy)]
pub struct FixtureSeed {
    name: &'static str,
    ingredients: &'static [IngredientFixture],
    recipes: &'static [RecipeFixture],
}

impl FixtureSeed {
    /// Build a seed from fixture tables
    #[must_use]
    pub const fn new(
        name: &'static str,
        ingredients: &'static [IngredientFixture],
        recipes: &'static [RecipeFixture],
    ) -> Self {
        Self {
            name,
            ingredients,
            recipes,
        }
    }

    /// Twelve ingredients and the Beef Chili recipe with eight links
    #[must_use]
    pub const fn base() -> Self {
        Self::new("base", BASE_INGREDIENTS, BASE_RECIPES)
    }

    /// Ten staple ingredients and no recipes
    #[must_use]
    pub fn pantry() -> Self {
        Self::new("pantry", &BASE_INGREDIENTS[..PANTRY_SIZE], &[])
    }

    /// Ingredient rows this seed inserts
    #[must_use]
    pub const fn ingredients(&self) -> &'static [IngredientFixture] {
        self.ingredients
    }

    /// Recipe rows this seed inserts
    #[must_use]
    pub const fn recipes(&self) -> &'static [RecipeFixture] {
        self.recipes
    }
}

#[async_trait]
impl Seed for FixtureSeed {
    fn name(&self) -> &str {
        self.name
    }

    async fn seed(&self, conn: &mut SqliteConnection) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();
        let mut ids: HashMap<&'static str, String> = HashMap::with_capacity(self.ingredients.len());

        for fixture in self.ingredients {
            if ids.contains_key(fixture.key) {
                return Err(SeedError::DuplicateKey(fixture.key.to_owned()));
            }
            let ingredient = insert_ingredient(&mut *conn, fixture.name)
                .await
                .map_err(|source| SeedError::Insert {
                    entity: "ingredient",
                    name: fixture.name.to_owned(),
                    source,
                })?;
            ids.insert(fixture.key, ingredient.id);
            summary.ingredients += 1;
        }

        for fixture in self.recipes {
            let recipe = insert_recipe(
                &mut *conn,
                &NewRecipe {
                    name: fixture.name,
                    description: fixture.description,
                    servings: fixture.servings,
                    prep_time: fixture.prep_time,
                    cook_time: fixture.cook_time,
                    instructions: fixture.instructions,
                },
            )
            .await
            .map_err(|source| SeedError::Insert {
                entity: "recipe",
                name: fixture.name.to_owned(),
                source,
            })?;
            summary.recipes += 1;

            for link in fixture.ingredients {
                let ingredient_id = ids.get(link.ingredient).ok_or_else(|| {
                    SeedError::UnresolvedIngredient {
                        recipe: fixture.name.to_owned(),
                        key: link.ingredient.to_owned(),
                    }
                })?;

                let row = RecipeIngredient {
                    recipe_id: recipe.id.clone(),
                    ingredient_id: ingredient_id.clone(),
                    quantity: link.quantity,
                    unit: link.unit.to_owned(),
                };
                insert_recipe_ingredient(&mut *conn, &row)
                    .await
                    .map_err(|source| SeedError::Insert {
                        entity: "recipe ingredient",
                        name: format!("{} / {}", fixture.name, link.ingredient),
                        source,
                    })?;
                summary.recipe_ingredients += 1;
            }
        }

        debug!(
            seed = self.name,
            ingredients = summary.ingredients,
            recipes = summary.recipes,
            links = summary.recipe_ingredients,
            "Fixture seed inserted"
        );

        Ok(summary)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_fixture_shape() {
        let base = FixtureSeed::base();
        assert_eq!(base.ingredients().len(), 12);
        assert_eq!(base.recipes().len(), 1);
        assert_eq!(base.recipes()[0].ingredients.len(), 8);
        assert_eq!(BEEF_CHILI_INSTRUCTIONS.lines().count(), 14);
    }

    #[test]
    fn test_base_fixture_keys_resolve() {
        let base = FixtureSeed::base();
        let keys: HashSet<_> = base.ingredients().iter().map(|i| i.key).collect();
        assert_eq!(keys.len(), base.ingredients().len());
        for recipe in base.recipes() {
            for link in recipe.ingredients {
                assert!(keys.contains(link.ingredient), "unknown key {}", link.ingredient);
            }
        }
    }

    #[test]
    fn test_pantry_is_prefix_of_base() {
        let pantry = FixtureSeed::pantry();
        assert_eq!(pantry.ingredients().len(), 10);
        assert!(pantry.recipes().is_empty());
        assert_eq!(pantry.ingredients()[9].name, "Beef Stock");
    }
}
