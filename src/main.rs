use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// smartmeal - ingredient-driven recipe matching
#[derive(Parser)]
#[command(name = "smartmeal")]
#[command(about = "Classifies known recipes by how makeable they are from available ingredients", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Path to the recipe data file (overrides config file)
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify recipes against a set of available ingredients
    Classify {
        /// Available ingredient names
        #[arg(required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// Near-complete threshold in 0.0..=1.0 (overrides config file)
        #[arg(long)]
        threshold: Option<f64>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all known ingredient names
    Ingredients,
    /// List all known recipe names
    Recipes,
    /// Show graph sizes for diagnostics
    Stats,
    /// List recipes reachable from one ingredient
    Reachable {
        /// Ingredient name to start from
        ingredient: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = smartmeal::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    smartmeal::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Classify {
            ingredients,
            threshold,
            json,
        } => cli::classify::run(config, cli.data, ingredients, threshold, json),
        Commands::Ingredients => cli::catalog::ingredients(config, cli.data),
        Commands::Recipes => cli::catalog::recipes(config, cli.data),
        Commands::Stats => cli::catalog::stats(config, cli.data),
        Commands::Reachable { ingredient } => cli::catalog::reachable(config, cli.data, ingredient),
    }
}
