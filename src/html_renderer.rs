use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::length::Length;
use crate::visual::VisualGraph;

const TEMPLATE: &str = include_str!("../templates/graph.html");

pub const DEFAULT_SCRIPT_URL: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageOptions {
    pub title: String,
    pub height: Length,
    pub width: Length,
    pub background: Color,
    pub script_url: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "graph".to_string(),
            height: Length::percent(100.0),
            width: Length::percent(100.0),
            background: Color::hex(0xff, 0xff, 0xff),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
        }
    }
}

pub fn render(graph: &VisualGraph, page: &PageOptions) -> Result<String> {
    let nodes = script_json(&graph.nodes)?;
    let edges = script_json(&graph.edges)?;
    let options = match &graph.options {
        Some(options) => script_json(options)?,
        None => "{}".to_string(),
    };
    let background = page.background.to_string();
    let width = page.width.to_string();
    let height = page.height.to_string();

    Ok(fill_template(
        TEMPLATE,
        &[
            ("title", &escape_html(&page.title)),
            ("script_url", &escape_html(&page.script_url)),
            ("width", &width),
            ("height", &height),
            ("background", &background),
            ("nodes", &nodes),
            ("edges", &edges),
            ("options", &options),
        ],
    ))
}

/// Renders the page in memory, then swaps it into place so a failed run never
/// leaves a truncated file at `path`.
pub fn write_html(graph: &VisualGraph, page: &PageOptions, path: &Path) -> Result<()> {
    let html = render(graph, page)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| Error::io(&dir, e))?;
    debug!(tmp = %tmp.path().display(), bytes = html.len(), "writing page");
    tmp.write_all(html.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

    info!(path = %path.display(), nodes = graph.nodes.len(), edges = graph.edges.len(), "wrote page");
    Ok(())
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(Error::Render)?;
    Ok(json.replace('<', "\\u003c").replace('>', "\\u003e"))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Single pass over `{{key}}` placeholders; substituted text is never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, end + 2))
        });
        match value {
            Some((v, consumed)) => {
                out.push_str(v);
                rest = &after[consumed..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
