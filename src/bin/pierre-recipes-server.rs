// ABOUTME: Server binary for the recipes REST API
// ABOUTME: Loads configuration from the environment, applies CLI overrides, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Recipes Server Binary
//!
//! Usage:
//! ```bash
//! # Serve with configuration from the environment
//! cargo run --bin pierre-recipes-server
//!
//! # Override the port and reset the store to the base fixture first
//! cargo run --bin pierre-recipes-server -- --http-port 8080 --seed
//! ```

use anyhow::Result;
use clap::Parser;
use pierre_recipes::{
    config::ServerConfig, constants::endpoints, logging, server::RecipeServer,
};
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "pierre-recipes-server")]
#[command(about = "Pierre Recipes - REST API for ingredients and recipes")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Reset the store to the base fixture before serving (ignored in production)
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.seed && !config.environment.is_production() {
        config.seed_on_startup = true;
    }

    logging::init_from_env()?;

    info!("Starting Pierre Recipes Server");
    info!("{}", config.summary());
    if args.seed && config.environment.is_production() {
        info!("--seed ignored in production environment");
    }

    let server = RecipeServer::bootstrap(config).await?;
    display_available_endpoints(server.resources().config.http_port);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn display_available_endpoints(port: u16) {
    let host = format!("http://localhost:{port}");
    info!("=== Available Endpoints ===");
    for (method, path) in [
        ("GET", endpoints::ROOT),
        ("GET", endpoints::HEALTH_CHECK),
        ("GET", endpoints::READY),
        ("GET", endpoints::INGREDIENTS),
        ("POST", endpoints::INGREDIENTS),
        ("GET", endpoints::INGREDIENT_BY_ID),
        ("PATCH", endpoints::INGREDIENT_BY_ID),
        ("DELETE", endpoints::INGREDIENT_BY_ID),
        ("GET", endpoints::RECIPES),
        ("GET", endpoints::RECIPE_BY_ID),
    ] {
        info!("  {method:<6} {host}{path}");
    }
}
