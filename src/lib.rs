pub mod color;
pub mod config;
pub mod error;
pub mod graph_ast;
pub mod graph_parser;
pub mod html_renderer;
pub mod length;
pub mod options;
pub mod visual;

use std::path::{Path, PathBuf};

pub use config::{RenderConfig, Variant};
pub use error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub nodes: usize,
    pub edges: usize,
    pub output: PathBuf,
}

/// Renders a graph document held in memory to an HTML page.
pub fn render_str(input: &str, config: &RenderConfig) -> Result<String> {
    let data = graph_parser::parse_graph(input)?;
    let graph = prepare(&data, config)?;
    html_renderer::render(&graph, &config.page)
}

/// Loads `input`, renders it and writes the page to `output`. Nothing is written
/// unless every step before the write succeeds.
pub fn render_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<RenderSummary> {
    let output = output.as_ref();
    let data = graph_parser::load_graph(input)?;
    let graph = prepare(&data, config)?;
    html_renderer::write_html(&graph, &config.page, output)?;
    Ok(RenderSummary {
        nodes: graph.nodes.len(),
        edges: graph.edges.len(),
        output: output.to_path_buf(),
    })
}

fn prepare(data: &graph_ast::GraphData, config: &RenderConfig) -> Result<visual::VisualGraph> {
    let mut graph = visual::build_visual(data, config)?;
    visual::annotate_neighbors(&mut graph);
    options::apply_layout_options(&mut graph, &config.layout);
    Ok(graph)
}
