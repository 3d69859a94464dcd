//! Bipartite ingredient → recipe graph and matching engine.
//!
//! Given the set of ingredients a user has on hand, classifies every known
//! recipe as complete (fully makeable), nearly complete, or incomplete, and
//! ranks each bucket by score. Construction, classification and the
//! diagnostic accessors are pure; loading data and caching built graphs
//! live in the application crate.

pub mod builder;
pub mod edge;
pub mod error;
pub mod graph;
pub mod matching;
pub mod vertex;

pub use builder::{build_graph, RecipeRecord};
pub use edge::Edge;
pub use error::GraphError;
pub use graph::RecipeGraph;
pub use matching::{MatchReport, RecipeMatch, DEFAULT_NEAR_THRESHOLD};
pub use vertex::{normalize_name, Vertex, VertexKind};
