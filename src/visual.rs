use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::graph_ast::*;
use crate::options::LayoutOptions;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualGraph {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
    pub options: Option<LayoutOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualNode {
    pub id: VertexId,
    pub label: String,
    pub size: u32,
    pub color: Color,
    pub shape: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub neighbor_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualEdge {
    /// Position in the input edge list, so parallel edges never collide.
    pub id: usize,
    pub from: VertexId,
    pub to: VertexId,
    pub color: Color,
    pub width: f64,
    pub arrows: &'static str,
}

pub fn build_visual(data: &GraphData, config: &RenderConfig) -> Result<VisualGraph> {
    let known: HashSet<VertexId> = data.vertices.iter().map(|v| v.id).collect();
    if !known.contains(&config.root_id) {
        warn!(root_id = config.root_id, "graph has no root vertex");
    }

    let nodes: Vec<VisualNode> = data
        .vertices
        .iter()
        .map(|v| VisualNode {
            id: v.id,
            label: v.depth.to_string(),
            size: config.node_size,
            color: if v.id == config.root_id {
                config.root_color
            } else {
                config.node_color
            },
            shape: "dot",
            title: String::new(),
            neighbor_count: 0,
        })
        .collect();

    let mut edges: Vec<VisualEdge> = Vec::with_capacity(data.edges.len());
    for (index, edge) in data.edges.iter().enumerate() {
        // Diagnostics use the producer's id when it sent one.
        let name = edge.id.unwrap_or(index as EdgeId);
        for endpoint in [edge.source(), edge.target()] {
            if !known.contains(&endpoint) {
                return Err(Error::Reference {
                    edge: name,
                    vertex: endpoint,
                });
            }
        }
        if edge.source() == edge.target() {
            warn!(edge = name, vertex = edge.source(), "self-loop");
        }
        edges.push(VisualEdge {
            id: index,
            from: edge.source(),
            to: edge.target(),
            color: edge_color(edge, name, config)?,
            width: config.edge_width,
            arrows: "to",
        });
    }

    Ok(VisualGraph {
        nodes,
        edges,
        options: None,
    })
}

fn edge_color(edge: &Edge, name: EdgeId, config: &RenderConfig) -> Result<Color> {
    if !config.edge_coloring {
        return Ok(config.edge_color);
    }
    let category = edge
        .color
        .or(config.missing_edge_color)
        .ok_or_else(|| Error::Schema(format!("edge {name} has no color")))?;
    Ok(config.edge_palette.get(category))
}

/// Outgoing neighbors per node. Every node has an entry, even with no edges.
pub fn adjacency(graph: &VisualGraph) -> BTreeMap<VertexId, BTreeSet<VertexId>> {
    let mut adj: BTreeMap<VertexId, BTreeSet<VertexId>> = graph
        .nodes
        .iter()
        .map(|n| (n.id, BTreeSet::new()))
        .collect();
    for edge in &graph.edges {
        adj.entry(edge.from).or_default().insert(edge.to);
    }
    adj
}

pub fn annotate_neighbors(graph: &mut VisualGraph) {
    let adj = adjacency(graph);
    let empty = BTreeSet::new();
    for node in &mut graph.nodes {
        let neighbors = adj.get(&node.id).unwrap_or(&empty);
        node.title = format!("Node {} neighbors:<br>{}", node.id, format_neighbors(neighbors));
        node.neighbor_count = neighbors.len();
    }
    debug!(nodes = graph.nodes.len(), "annotated neighbors");
}

// Always brace-delimited, so an empty neighbor set renders as `{}`.
fn format_neighbors(neighbors: &BTreeSet<VertexId>) -> String {
    let items: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
    format!("{{{}}}", items.join(", "))
}
