use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use skafferi::{Snapshot, catalog, config::Config, observability::init_observability};
use skafferi_shared::recipe::{Difficulty, RecipeFilter};
use skafferi_shopping::{CategorizationService, ShoppingListEntry, format_amount};

/// skafferi - Weekly shopping lists and pantry matches
#[derive(Parser)]
#[command(name = "skafferi")]
#[command(about = "Shopping lists and recipe matches from a pantry snapshot", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate the planned meals into a shopping list
    ShoppingList {
        /// Snapshot file with recipes, planned meals and pantry
        #[arg(long)]
        snapshot: PathBuf,

        /// Group entries by store section
        #[arg(long)]
        by_category: bool,

        #[arg(long)]
        json: bool,
    },
    /// Rank recipes by how much of them the pantry covers
    Matches {
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// List what is missing from the pantry to cook a recipe
    Missing {
        #[arg(long)]
        snapshot: PathBuf,

        /// Recipe id
        #[arg(long)]
        recipe: String,

        /// Servings to shop for (defaults to planner.default_servings)
        #[arg(long)]
        servings: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Browse the bundled demo recipes
    Catalog {
        /// Text searched in name, description, ingredients and tags
        #[arg(long)]
        search: Option<String>,

        /// Keep recipes in any of these categories
        #[arg(long)]
        category: Vec<String>,

        /// Keep recipes of any of these difficulties (Lätt, Medel, Svår)
        #[arg(long, value_parser = parse_difficulty)]
        difficulty: Vec<Difficulty>,

        /// Maximum total time in minutes
        #[arg(long)]
        max_time: Option<u16>,

        /// Keep recipes carrying any of these tags
        #[arg(long)]
        tag: Vec<String>,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    init_observability(&config.observability)?;

    let result = match cli.command {
        Commands::ShoppingList {
            snapshot,
            by_category,
            json,
        } => shopping_list_command(snapshot, by_category, json),
        Commands::Matches { snapshot, json } => matches_command(snapshot, json),
        Commands::Missing {
            snapshot,
            recipe,
            servings,
            json,
        } => missing_command(&config, snapshot, recipe, servings, json),
        Commands::Catalog {
            search,
            category,
            difficulty,
            max_time,
            tag,
            json,
        } => {
            let filter = RecipeFilter {
                search,
                categories: category,
                difficulties: difficulty,
                max_time,
                tags: tag,
            };
            catalog_command(&filter, json)
        }
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

#[tracing::instrument(skip_all, fields(snapshot = %snapshot.display()))]
fn shopping_list_command(snapshot: PathBuf, by_category: bool, json: bool) -> Result<()> {
    let snapshot = Snapshot::load(&snapshot)?;
    let entries = snapshot.shopping_list()?;

    match (by_category, json) {
        (true, true) => print_json(&CategorizationService::group(&entries)),
        (false, true) => print_json(&entries),
        (true, false) => {
            for group in CategorizationService::group(&entries) {
                println!("{}", group.category);
                for entry in &group.entries {
                    println!("  {}", entry_line(entry));
                }
            }
            Ok(())
        }
        (false, false) => {
            for entry in &entries {
                println!("{}", entry_line(entry));
            }
            Ok(())
        }
    }
}

#[tracing::instrument(skip_all, fields(snapshot = %snapshot.display()))]
fn matches_command(snapshot: PathBuf, json: bool) -> Result<()> {
    let snapshot = Snapshot::load(&snapshot)?;
    let matches = snapshot.matches();

    if json {
        return print_json(&matches);
    }

    for m in &matches {
        if m.is_complete() {
            println!("{:>3}%  {} (allt finns hemma)", m.match_percentage, m.recipe.name);
            continue;
        }

        println!(
            "{:>3}%  {} ({}/{} i skafferiet, {} saknas)",
            m.match_percentage,
            m.recipe.name,
            m.available_ingredients,
            m.total_ingredients,
            m.missing_count
        );
    }

    Ok(())
}

#[tracing::instrument(skip(config, snapshot, json), fields(snapshot = %snapshot.display()))]
fn missing_command(
    config: &Config,
    snapshot: PathBuf,
    recipe: String,
    servings: Option<u32>,
    json: bool,
) -> Result<()> {
    let snapshot = Snapshot::load(&snapshot)?;
    let servings = config.planner.clamp_servings(servings);
    let entries = snapshot.missing(&recipe, servings)?;

    if json {
        return print_json(&entries);
    }

    let name = &snapshot.recipe(&recipe)?.name;
    if entries.is_empty() {
        println!("Allt till {name} finns hemma");
        return Ok(());
    }

    println!("{name}, {servings} portioner:");
    for entry in &entries {
        println!("  {}", entry_line(entry));
    }

    Ok(())
}

#[tracing::instrument]
fn catalog_command(filter: &RecipeFilter, json: bool) -> Result<()> {
    let recipes = catalog::browse(filter)?;

    if json {
        return print_json(&recipes);
    }

    for recipe in &recipes {
        println!(
            "{}  {} ({} portioner, {} min, {})",
            recipe.id, recipe.name, recipe.servings, recipe.total_time, recipe.difficulty
        );
    }

    Ok(())
}

fn entry_line(entry: &ShoppingListEntry) -> String {
    let line = format!("{}: {}", entry.name, format_amount(entry.amount, &entry.unit));

    if entry.has_mixed_units() {
        return format!("{line} (blandade enheter: {})", entry.mixed_units.join(", "));
    }

    line
}

fn parse_difficulty(value: &str) -> std::result::Result<Difficulty, String> {
    value
        .parse()
        .map_err(|_| format!("unknown difficulty '{value}', expected Lätt, Medel or Svår"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
