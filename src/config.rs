use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::graph_ast::{EdgeColor, VertexId};
use crate::html_renderer::PageOptions;
use crate::options::LayoutOptions;

/// Base preset a configuration starts from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One fixed color for every edge.
    Plain,
    /// Edges colored by their `color` category.
    #[default]
    Styled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub variant: Variant,
    pub root_id: VertexId,
    pub node_size: u32,
    pub node_color: Color,
    pub root_color: Color,
    /// When false every edge uses `edge_color` and edge categories are ignored.
    pub edge_coloring: bool,
    pub edge_color: Color,
    pub edge_width: f64,
    pub edge_palette: EdgePalette,
    /// Category used for edges that carry no `color`. `None` rejects such edges.
    pub missing_edge_color: Option<EdgeColor>,
    pub layout: LayoutOptions,
    pub page: PageOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgePalette {
    pub gray: Color,
    pub green: Color,
    pub blue: Color,
    pub yellow: Color,
    pub red: Color,
}

impl EdgePalette {
    pub fn get(&self, color: EdgeColor) -> Color {
        match color {
            EdgeColor::Gray => self.gray,
            EdgeColor::Green => self.green,
            EdgeColor::Blue => self.blue,
            EdgeColor::Yellow => self.yellow,
            EdgeColor::Red => self.red,
        }
    }
}

impl Default for EdgePalette {
    fn default() -> Self {
        Self {
            gray: Color::hex(0x80, 0x80, 0x80),
            green: Color::hex(0x2e, 0x8b, 0x57),
            blue: Color::hex(0x1e, 0x90, 0xff),
            yellow: Color::hex(0xe6, 0xb8, 0x00),
            red: Color::hex(0xdd, 0x4b, 0x39),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::preset(Variant::default())
    }
}

impl RenderConfig {
    pub fn preset(variant: Variant) -> Self {
        let mut layout = LayoutOptions::default();
        let edge_coloring = match variant {
            Variant::Plain => false,
            Variant::Styled => {
                layout.physics.barnes_hut.gravitational_constant = -3000.0;
                layout.physics.barnes_hut.spring_length = 50.0;
                layout.physics.min_velocity = 0.75;
                true
            }
        };
        Self {
            variant,
            root_id: 0,
            node_size: 20,
            node_color: Color::hex(0x97, 0xc2, 0xfc),
            root_color: Color::hex(0xdd, 0x4b, 0x39),
            edge_coloring,
            edge_color: Color::hex(0, 0, 0),
            edge_width: 1.0,
            edge_palette: EdgePalette::default(),
            missing_edge_color: None,
            layout,
            page: PageOptions::default(),
        }
    }

    /// Reads a JSON config and layers it over the preset it names (or `variant`).
    pub fn load(path: impl AsRef<Path>, variant: Variant) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&input, variant).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    pub fn from_json(input: &str, variant: Variant) -> Result<Self> {
        let incoming: Value =
            serde_json::from_str(input).map_err(|e| Error::Config(e.to_string()))?;
        let Value::Object(ref overrides) = incoming else {
            return Err(Error::Config("expected a JSON object".to_string()));
        };
        let variant = match overrides.get("variant") {
            Some(v) => Variant::deserialize(v).map_err(|e| Error::Config(e.to_string()))?,
            None => variant,
        };
        debug!(?variant, keys = overrides.len(), "merging config over preset");

        let mut merged =
            serde_json::to_value(Self::preset(variant)).map_err(|e| Error::Config(e.to_string()))?;
        deep_merge(&mut merged, &incoming);
        serde_json::from_value(merged).map_err(|e| Error::Config(e.to_string()))
    }
}

fn deep_merge(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => merge_maps(base_map, in_map),
        (slot, value) => *slot = value.clone(),
    }
}

fn merge_maps(base: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        match base.get_mut(key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}
