use anyhow::Result;
use recipe_graph::{MatchReport, RecipeMatch};
use smartmeal::config::Config;

/// Classify every known recipe against the given available ingredients and
/// print the report.
///
/// The empty-input check lives here, at the boundary: the engine itself
/// accepts an empty set and would score every recipe as incomplete.
pub fn run(
    config: Config,
    data_override: Option<String>,
    ingredients: Vec<String>,
    threshold: Option<f64>,
    json: bool,
) -> Result<()> {
    let ingredients: Vec<String> = ingredients
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .collect();
    if ingredients.is_empty() {
        anyhow::bail!("at least one non-empty ingredient name is required");
    }

    let threshold = threshold.unwrap_or(config.matching.near_threshold);

    let cache = super::open_cache(&config, data_override);
    let graph = cache.get()?;
    let report = graph.classify(&ingredients, threshold)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &ingredients);
    }

    Ok(())
}

fn print_report(report: &MatchReport, ingredients: &[String]) {
    println!("Available ingredients: {}", ingredients.join(", "));
    println!();
    print_bucket("COMPLETE", &report.complete);
    print_bucket("NEARLY COMPLETE", &report.nearly_complete);
    print_bucket("INCOMPLETE", &report.incomplete);
}

fn print_bucket(title: &str, entries: &[RecipeMatch]) {
    println!("{} ({})", title, entries.len());
    for entry in entries {
        if entry.missing_count == 0 {
            println!("  {} [score {}]", entry.name, entry.score);
        } else {
            println!(
                "  {} [score {}] missing: {}",
                entry.name,
                entry.score,
                entry.missing_ingredients.join(", ")
            );
        }
    }
    println!();
}
