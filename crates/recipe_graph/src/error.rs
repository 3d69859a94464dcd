use crate::vertex::VertexKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("edge source must be an ingredient vertex, got a {0} vertex")]
    InvalidEdgeSource(VertexKind),

    #[error("edge target must be a recipe vertex, got a {0} vertex")]
    InvalidEdgeTarget(VertexKind),

    #[error("ingredient '{0}' is not registered in the graph")]
    UnknownIngredient(String),

    #[error("recipe '{0}' is not registered in the graph")]
    UnknownRecipe(String),

    #[error("near-complete threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
}
