use crate::edge::Edge;
use crate::error::GraphError;
use crate::vertex::{Vertex, VertexKind};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Bipartite directed graph: ingredients on one side, recipes on the other,
/// edges only ingredient → recipe.
///
/// Vertices are deduplicated by identity; edges are deliberately not
/// deduplicated, so a source record that lists the same ingredient twice
/// produces two adjacency entries (and inflates that recipe's required
/// count). Callers relying on edge counts must be aware of this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeGraph {
    ingredients: HashSet<Vertex>,
    recipes: HashSet<Vertex>,
    forward: HashMap<Vertex, Vec<Vertex>>,
    reverse: HashMap<Vertex, Vec<Vertex>>,
}

impl RecipeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex into the set matching its kind.
    ///
    /// Idempotent: adding an already-registered vertex is a no-op, so the
    /// first-seen display spelling wins. Builders add the same ingredient
    /// once per recipe that uses it and rely on this.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        match vertex.kind() {
            VertexKind::Ingredient => {
                self.ingredients.insert(vertex);
            }
            VertexKind::Recipe => {
                self.recipes.insert(vertex);
            }
        }
    }

    /// Append an edge to both adjacency indexes.
    ///
    /// Fails if either endpoint has not been registered via [`add_vertex`]
    /// first; edges never register vertices implicitly.
    ///
    /// [`add_vertex`]: RecipeGraph::add_vertex
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if !self.ingredients.contains(edge.source()) {
            return Err(GraphError::UnknownIngredient(
                edge.source().label().to_string(),
            ));
        }
        if !self.recipes.contains(edge.target()) {
            return Err(GraphError::UnknownRecipe(edge.target().label().to_string()));
        }

        let (source, target) = edge.into_endpoints();
        self.forward
            .entry(source.clone())
            .or_default()
            .push(target.clone());
        self.reverse.entry(target).or_default().push(source);
        Ok(())
    }

    /// Resolve a previously registered vertex by normalized name and kind.
    pub fn lookup_by_name(&self, name: &str, kind: VertexKind) -> Option<&Vertex> {
        let probe = Vertex::new(name, kind);
        match kind {
            VertexKind::Ingredient => self.ingredients.get(&probe),
            VertexKind::Recipe => self.recipes.get(&probe),
        }
    }

    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.ingredients.contains(vertex) || self.recipes.contains(vertex)
    }

    /// Recipes requiring the given ingredient; empty for unknown vertices.
    pub fn recipes_for(&self, ingredient: &Vertex) -> &[Vertex] {
        self.forward.get(ingredient).map_or(&[], Vec::as_slice)
    }

    /// Ingredients required by the given recipe; empty for unknown vertices.
    pub fn ingredients_for(&self, recipe: &Vertex) -> &[Vertex] {
        self.reverse.get(recipe).map_or(&[], Vec::as_slice)
    }

    /// Breadth-first traversal along forward edges from one vertex.
    ///
    /// Because edges only run ingredient → recipe, starting from an
    /// ingredient visits exactly its directly-adjacent recipes; there is no
    /// recipe → ingredient hop to chain through. A diagnostic utility, not
    /// the recommendation path. Visited tracking keeps duplicate edges from
    /// producing duplicate results.
    pub fn reachable_recipes(&self, start: &Vertex) -> Vec<Vertex> {
        let mut visited: HashSet<&Vertex> = HashSet::new();
        let mut queue: VecDeque<&Vertex> = VecDeque::from([start]);
        let mut reachable = Vec::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            if current.is_recipe() {
                reachable.push(current.clone());
            } else {
                queue.extend(self.recipes_for(current));
            }
        }

        reachable
    }

    /// Sorted distinct ingredient names, in display spelling.
    pub fn ingredient_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .ingredients
            .iter()
            .map(|v| v.label().to_string())
            .collect();
        names.sort();
        names
    }

    /// Sorted distinct recipe names, in display spelling.
    pub fn recipe_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.recipes.iter().map(|v| v.label().to_string()).collect();
        names.sort();
        names
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Total adjacency entries, duplicate edges included.
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    pub(crate) fn recipe_vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.recipes.iter()
    }
}

impl fmt::Display for RecipeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== BIPARTITE DIRECTED GRAPH ===")?;
        writeln!(f, "Ingredients: {}", self.ingredient_count())?;
        writeln!(f, "Recipes: {}", self.recipe_count())?;
        writeln!(f, "Edges: {}", self.edge_count())?;
        writeln!(f)?;
        writeln!(f, "=== EDGES (ingredient --> recipe) ===")?;
        for ingredient in &self.ingredients {
            for recipe in self.recipes_for(ingredient) {
                writeln!(f, "{} --> {}", ingredient.label(), recipe.label())?;
            }
        }
        Ok(())
    }
}
