use crate::edge::Edge;
use crate::graph::RecipeGraph;
use crate::vertex::{normalize_name, Vertex, VertexKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One recipe record as loaded from the external data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Opaque source identifier; the matcher never reads it.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Recipe name; records with an empty name are skipped entirely.
    #[serde(default)]
    pub name: String,
    /// Raw ingredient names; entries empty after trimming are skipped.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Build a fully populated graph from recipe records.
///
/// Two passes over the input:
/// 1. Register vertices in first-seen order, deduplicated by normalized
///    name. A repeated recipe name does not create a second vertex.
/// 2. Add one ingredient → recipe edge per valid ingredient entry. Edges
///    are validated against the vertices registered in pass 1, so no edge
///    can reference a forward declaration; resolution misses are skipped
///    silently, matching the dedup behavior for repeated recipe names.
///
/// Note that a record listing the same ingredient twice produces two edges
/// and inflates that recipe's required-ingredient denominator; the source
/// data owns that choice and the builder does not second-guess it.
pub fn build_graph(records: &[RecipeRecord]) -> RecipeGraph {
    let mut graph = RecipeGraph::new();
    let mut seen_recipes: HashSet<String> = HashSet::new();
    let mut seen_ingredients: HashSet<String> = HashSet::new();

    // Pass 1: vertices.
    for record in records {
        let recipe_name = record.name.trim();
        if recipe_name.is_empty() {
            tracing::debug!(record_id = ?record.id, "skipping record with empty recipe name");
            continue;
        }
        if !seen_recipes.insert(normalize_name(recipe_name)) {
            continue;
        }
        graph.add_vertex(Vertex::new(recipe_name, VertexKind::Recipe));

        for raw in &record.ingredients {
            if raw.trim().is_empty() {
                continue;
            }
            if seen_ingredients.insert(normalize_name(raw)) {
                graph.add_vertex(Vertex::new(raw, VertexKind::Ingredient));
            }
        }
    }

    // Pass 2: edges.
    let mut edges = 0usize;
    for record in records {
        let recipe_name = record.name.trim();
        if recipe_name.is_empty() {
            continue;
        }
        let Some(recipe) = graph.lookup_by_name(recipe_name, VertexKind::Recipe).cloned() else {
            continue;
        };

        for raw in &record.ingredients {
            if raw.trim().is_empty() {
                continue;
            }
            let Some(ingredient) = graph
                .lookup_by_name(raw, VertexKind::Ingredient)
                .cloned()
            else {
                continue;
            };
            match Edge::new(ingredient, recipe.clone()).and_then(|edge| graph.add_edge(edge)) {
                Ok(()) => edges += 1,
                Err(error) => tracing::debug!(%error, "skipping unresolvable edge"),
            }
        }
    }

    tracing::debug!(
        ingredients = graph.ingredient_count(),
        recipes = graph.recipe_count(),
        edges,
        "recipe graph built"
    );
    graph
}
