use crate::error::GraphError;
use crate::graph::RecipeGraph;
use crate::vertex::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default near-complete threshold when the caller does not supply one.
pub const DEFAULT_NEAR_THRESHOLD: f64 = 0.75;

/// How well one recipe matches the available ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub name: String,
    pub total_required: usize,
    pub present_count: usize,
    /// Missing ingredients in display spelling, for user-facing output.
    pub missing_ingredients: Vec<String>,
    pub missing_count: usize,
    /// Fraction of required ingredients present, rounded to 4 decimals.
    pub ratio: f64,
    /// `ratio * 100`, rounded to 2 decimals.
    pub score: f64,
}

/// Classification result: three disjoint buckets, each sorted descending
/// by score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    pub complete: Vec<RecipeMatch>,
    pub nearly_complete: Vec<RecipeMatch>,
    pub incomplete: Vec<RecipeMatch>,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.complete.is_empty() && self.nearly_complete.is_empty() && self.incomplete.is_empty()
    }
}

impl RecipeGraph {
    /// Classify every recipe in the graph against the available ingredients.
    ///
    /// Buckets by the exact present/required ratio:
    /// - `ratio == 1.0` → complete
    /// - `near_threshold <= ratio < 1.0` → nearly complete
    /// - otherwise → incomplete
    ///
    /// Recipes with zero recorded ingredients are excluded from all three
    /// buckets: a 0/0 ratio is undefined, so they cannot be scored.
    ///
    /// An empty `available` slice is accepted and scores every recipe as
    /// incomplete; rejecting empty input is the caller's responsibility at
    /// the boundary.
    ///
    /// # Errors
    /// `GraphError::InvalidThreshold` if `near_threshold` lies outside
    /// `0.0..=1.0`.
    pub fn classify(
        &self,
        available: &[String],
        near_threshold: f64,
    ) -> Result<MatchReport, GraphError> {
        if !(0.0..=1.0).contains(&near_threshold) {
            return Err(GraphError::InvalidThreshold(near_threshold));
        }

        let available: HashSet<String> = available.iter().map(|s| normalize_name(s)).collect();
        tracing::debug!(
            available = available.len(),
            threshold = near_threshold,
            "classifying recipes against available ingredients"
        );

        let mut report = MatchReport::default();

        // Iteration order over the recipe set is arbitrary; buckets are
        // re-sorted below, so it never shows in the output.
        for recipe in self.recipe_vertices() {
            let required = self.ingredients_for(recipe);
            if required.is_empty() {
                tracing::debug!(recipe = recipe.label(), "recipe has no recorded ingredients");
                continue;
            }

            let mut missing_ingredients = Vec::new();
            let mut present_count = 0usize;
            for ingredient in required {
                if available.contains(ingredient.name()) {
                    present_count += 1;
                } else {
                    missing_ingredients.push(ingredient.label().to_string());
                }
            }

            let ratio = present_count as f64 / required.len() as f64;
            let entry = RecipeMatch {
                name: recipe.label().to_string(),
                total_required: required.len(),
                present_count,
                missing_count: missing_ingredients.len(),
                missing_ingredients,
                ratio: round_to(ratio, 4),
                score: round_to(ratio * 100.0, 2),
            };

            if ratio == 1.0 {
                report.complete.push(entry);
            } else if ratio >= near_threshold {
                report.nearly_complete.push(entry);
            } else {
                report.incomplete.push(entry);
            }
        }

        for bucket in [
            &mut report.complete,
            &mut report.nearly_complete,
            &mut report.incomplete,
        ] {
            // Stable sort: equal scores keep their relative order.
            bucket.sort_by(|a, b| b.score.total_cmp(&a.score));
        }

        Ok(report)
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
