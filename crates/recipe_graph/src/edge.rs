use crate::error::GraphError;
use crate::vertex::Vertex;
use std::fmt;

/// A directed relation from an ingredient vertex to a recipe vertex,
/// meaning "the recipe requires the ingredient".
///
/// Construction validates endpoint kinds: the graph is strictly bipartite
/// and strictly directed ingredient → recipe. An edge has no identity after
/// insertion; its effect is recorded as two adjacency entries in the graph.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Vertex,
    target: Vertex,
}

impl Edge {
    pub fn new(source: Vertex, target: Vertex) -> Result<Self, GraphError> {
        if !source.is_ingredient() {
            return Err(GraphError::InvalidEdgeSource(source.kind()));
        }
        if !target.is_recipe() {
            return Err(GraphError::InvalidEdgeTarget(target.kind()));
        }
        Ok(Self { source, target })
    }

    pub fn source(&self) -> &Vertex {
        &self.source
    }

    pub fn target(&self) -> &Vertex {
        &self.target
    }

    pub(crate) fn into_endpoints(self) -> (Vertex, Vertex) {
        (self.source, self.target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.source.label(), self.target.label())
    }
}
