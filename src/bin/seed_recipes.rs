// ABOUTME: Fixture seeding utility for the recipes database
// ABOUTME: Wipes the store and loads the base or pantry fixture in one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe fixture seeder.
//!
//! Usage:
//! ```bash
//! # Reset to the base fixture (DATABASE_URL, or TEST_DATABASE_URL when ENVIRONMENT=testing)
//! cargo run --bin seed-recipes
//!
//! # Override database URL
//! cargo run --bin seed-recipes -- --database-url sqlite:./data/test.db
//!
//! # Load the pantry fixture instead
//! cargo run --bin seed-recipes -- --fixture pantry
//!
//! # Only delete existing rows
//! cargo run --bin seed-recipes -- --wipe-only -v
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use pierre_recipes::{
    config::{DatabaseConfig, Environment},
    database::Database,
    seed::{FixtureSeed, Seed},
};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fixture {
    /// Twelve ingredients and the Beef Chili recipe
    Base,
    /// Ten ingredients, no recipes
    Pantry,
}

impl Fixture {
    fn seed(self) -> FixtureSeed {
        match self {
            Self::Base => FixtureSeed::base(),
            Self::Pantry => FixtureSeed::pantry(),
        }
    }
}

#[derive(Parser)]
#[command(
    name = "seed-recipes",
    about = "Pierre Recipes Fixture Seeder",
    long_about = "Wipe the recipes database and load a known fixture"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Fixture to load
    #[arg(long, value_enum, default_value = "base")]
    fixture: Fixture,

    /// Delete all rows without seeding
    #[arg(long)]
    wipe_only: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Pierre Recipes Fixture Seeder ===");

    let environment = Environment::from_env();
    if environment.is_production() && args.database_url.is_none() {
        anyhow::bail!(
            "Refusing to reseed in production. Pass --database-url explicitly to target a database."
        );
    }

    let config = DatabaseConfig::resolve(args.database_url.as_deref(), &environment)?;

    info!("Connecting to {} database: {}", environment, config.url);
    let db = Database::open(config.url).await?;
    let reset = db.reset();

    if args.wipe_only {
        let wiped = reset.wipe().await?;
        info!("  ✓ {} recipe ingredients", wiped.recipe_ingredients);
        info!("  ✓ {} recipes", wiped.recipes);
        info!("  ✓ {} ingredients", wiped.ingredients);
        info!("");
        info!("=== Wipe Complete ===");
        db.close().await;
        return Ok(());
    }

    let seed = args.fixture.seed();
    info!("Loading '{}' fixture...", seed.name());
    let summary = reset.apply_custom_seed(&seed).await?;

    for ingredient in seed.ingredients() {
        info!("  ✓ {}", ingredient.name);
    }
    for recipe in seed.recipes() {
        info!("  ✓ {} ({} ingredients)", recipe.name, recipe.ingredients.len());
    }

    info!("");
    info!("=== Seeding Complete ===");
    info!(
        "Created {} ingredients, {} recipes, {} recipe ingredients",
        summary.ingredients, summary.recipes, summary.recipe_ingredients
    );

    db.close().await;
    Ok(())
}
