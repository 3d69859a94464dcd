use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use strum::{Display, EnumString};

/// Which side of the bipartite graph a vertex belongs to.
///
/// A closed enum rather than a string tag: an invalid kind cannot exist at
/// runtime, so the only remaining kind error is a reversed edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    Ingredient,
    Recipe,
}

/// Normalize a name for identity and matching: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A labeled node in the recipe graph.
///
/// Identity is the pair (normalized name, kind); `label` keeps the trimmed
/// original-case spelling for display and plays no part in equality or
/// hashing. Vertices are created once per unique identity during graph
/// construction and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    name: String,
    label: String,
    kind: VertexKind,
}

impl Vertex {
    pub fn new(name: &str, kind: VertexKind) -> Self {
        Self {
            name: normalize_name(name),
            label: name.trim().to_string(),
            kind,
        }
    }

    /// Normalized name, used as identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display spelling as first seen in the source data.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    pub fn is_ingredient(&self) -> bool {
        self.kind == VertexKind::Ingredient
    }

    pub fn is_recipe(&self) -> bool {
        self.kind == VertexKind::Recipe
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.kind)
    }
}
