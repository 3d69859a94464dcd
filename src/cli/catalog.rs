use anyhow::Result;
use recipe_graph::VertexKind;
use smartmeal::config::Config;

/// Print the sorted list of known ingredient names.
pub fn ingredients(config: Config, data_override: Option<String>) -> Result<()> {
    let graph = super::open_cache(&config, data_override).get()?;
    for name in graph.ingredient_names() {
        println!("{name}");
    }
    Ok(())
}

/// Print the sorted list of known recipe names.
pub fn recipes(config: Config, data_override: Option<String>) -> Result<()> {
    let graph = super::open_cache(&config, data_override).get()?;
    for name in graph.recipe_names() {
        println!("{name}");
    }
    Ok(())
}

/// Print vertex and edge counts plus the full edge dump.
pub fn stats(config: Config, data_override: Option<String>) -> Result<()> {
    let graph = super::open_cache(&config, data_override).get()?;
    print!("{graph}");
    Ok(())
}

/// Print the recipes reachable from one ingredient.
pub fn reachable(config: Config, data_override: Option<String>, ingredient: String) -> Result<()> {
    let graph = super::open_cache(&config, data_override).get()?;

    let Some(start) = graph.lookup_by_name(&ingredient, VertexKind::Ingredient) else {
        // An unknown ingredient is an expected miss, not a failure.
        tracing::error!("ingredient '{ingredient}' is not in the graph");
        return Ok(());
    };

    for recipe in graph.reachable_recipes(start) {
        println!("{}", recipe.label());
    }
    Ok(())
}
