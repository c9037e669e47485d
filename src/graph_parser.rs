use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph_ast::GraphData;

pub fn load_graph(path: impl AsRef<Path>) -> Result<GraphData> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading graph");
    let input = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let data = parse_graph(&input)?;
    info!(
        path = %path.display(),
        vertices = data.vertices.len(),
        edges = data.edges.len(),
        "loaded graph"
    );
    Ok(data)
}

pub fn parse_graph(input: &str) -> Result<GraphData> {
    let data: GraphData = serde_json::from_str(input).map_err(Error::from_json)?;
    check_unique_vertices(&data)?;
    Ok(data)
}

fn check_unique_vertices(data: &GraphData) -> Result<()> {
    let mut seen = HashSet::with_capacity(data.vertices.len());
    for vertex in &data.vertices {
        if !seen.insert(vertex.id) {
            return Err(Error::Schema(format!("duplicate vertex id {}", vertex.id)));
        }
    }
    Ok(())
}
