use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub type VertexId = i64;
pub type EdgeId = i64;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphData {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub depth: i64,
    #[serde(default)]
    pub edge_ids: Vec<EdgeId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edge {
    #[serde(default)]
    pub id: Option<EdgeId>,
    #[serde(deserialize_with = "endpoint_pair")]
    pub vertex_ids: (VertexId, VertexId),
    #[serde(default)]
    pub color: Option<EdgeColor>,
}

impl Edge {
    pub fn source(&self) -> VertexId {
        self.vertex_ids.0
    }

    pub fn target(&self) -> VertexId {
        self.vertex_ids.1
    }
}

/// Reads `[source, target]`; any other length is a shape error, not a syntax error.
fn endpoint_pair<'de, D>(deserializer: D) -> Result<(VertexId, VertexId), D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<VertexId>::deserialize(deserializer)?;
    match ids.as_slice() {
        &[source, target] => Ok((source, target)),
        _ => Err(D::Error::invalid_length(ids.len(), &"a pair of vertex ids")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeColor {
    Gray,
    Green,
    Blue,
    Yellow,
    Red,
}

impl EdgeColor {
    pub const ALL: [EdgeColor; 5] = [
        EdgeColor::Gray,
        EdgeColor::Green,
        EdgeColor::Blue,
        EdgeColor::Yellow,
        EdgeColor::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeColor::Gray => "gray",
            EdgeColor::Green => "green",
            EdgeColor::Blue => "blue",
            EdgeColor::Yellow => "yellow",
            EdgeColor::Red => "red",
        }
    }
}

impl std::fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
