// src/commands.rs

//! Command handlers for the pantry CLI

use anyhow::Result;
use pantry::catalog::Catalog;
use pantry::engine::MatchEngine;
use pantry::query::parse_ingredients;
use pantry::recipe::Recipe;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Build the engine over the builtin catalog or a TOML file
fn load_engine(catalog_path: Option<&Path>) -> Result<MatchEngine> {
    let catalog = match catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin(),
    };
    info!("Catalog loaded: {} recipes", catalog.len());
    Ok(MatchEngine::new(Arc::new(catalog)))
}

/// Print one recipe: title-cased name, joined ingredients, one step per line
fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.display_name());
    let ingredients = recipe
        .ingredients()
        .iter()
        .map(|ing| ing.name())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Ingredients: {}", ingredients);
    println!("Steps:");
    for step in recipe.steps() {
        println!("  {}", step);
    }
}

/// `pantry suggest <ingredients>`
pub fn suggest(ingredients_raw: &str, catalog_path: Option<PathBuf>) -> Result<()> {
    let available = parse_ingredients(ingredients_raw);
    if available.is_empty() {
        println!("Please enter at least one ingredient.");
        return Ok(());
    }

    let engine = load_engine(catalog_path.as_deref())?;
    let matches = engine.suggest_recipes(&available);
    info!(
        "Ingredient search for {} ingredients: {} matches",
        available.len(),
        matches.len()
    );

    if matches.is_empty() {
        println!("No recipes found for the given ingredients.");
        return Ok(());
    }

    for (i, recipe) in matches.into_iter().enumerate() {
        if i > 0 {
            println!("---");
        }
        print_recipe(recipe);
    }
    Ok(())
}

/// `pantry show <name>`
pub fn show(name: &str, catalog_path: Option<PathBuf>) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        println!("Please enter a recipe name.");
        return Ok(());
    }

    let engine = load_engine(catalog_path.as_deref())?;
    match engine.get_recipe_by_name(name) {
        Some(recipe) => print_recipe(recipe),
        None => println!("No recipe found with the given name."),
    }
    Ok(())
}

/// `pantry list`
pub fn list(catalog_path: Option<PathBuf>) -> Result<()> {
    let engine = load_engine(catalog_path.as_deref())?;
    for recipe in engine.catalog().iter() {
        println!("{}", recipe.display_name());
    }
    Ok(())
}

/// `pantry serve`
#[cfg(feature = "server")]
pub fn serve(
    bind: &str,
    config_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
) -> Result<()> {
    use anyhow::Context;
    use pantry::server::{run_server, PantryConfig, ServerConfig};

    let mut server_config = match config_path {
        Some(path) => PantryConfig::load(&path)?.into_server_config()?,
        None => ServerConfig {
            bind_addr: bind
                .parse()
                .with_context(|| format!("Invalid bind address: {}", bind))?,
            catalog_path: None,
        },
    };

    // A --catalog flag overrides the config file.
    if catalog_path.is_some() {
        server_config.catalog_path = catalog_path;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(server_config))
}

/// `pantry listen`
#[cfg(feature = "speech")]
pub fn listen(
    endpoint: &str,
    audio: PathBuf,
    timeout_secs: u64,
    catalog_path: Option<PathBuf>,
) -> Result<()> {
    use pantry::speech::{RemoteTranscriber, Transcriber};
    use std::time::Duration;

    let transcriber =
        match RemoteTranscriber::new(endpoint, audio, Duration::from_secs(timeout_secs)) {
            Ok(t) => t,
            Err(e) => {
                println!("Speech capture unavailable: {}", e);
                return Ok(());
            }
        };

    println!("Listening...");
    let text = match transcriber.capture_text() {
        Ok(text) => text,
        Err(e) => {
            // Capture failure is user-visible, never fatal; nothing was queried.
            println!("Speech capture failed: {}", e);
            return Ok(());
        }
    };

    println!("Heard: {}", text);
    suggest(&text, catalog_path)
}
