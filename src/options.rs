//! Global vis-network options. Field names serialize to the option names
//! vis-network expects, so a config file's `layout` section reads like the
//! options object handed to `new vis.Network(..)`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::visual::VisualGraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutOptions {
    pub nodes: NodeOptions,
    pub physics: PhysicsOptions,
    pub interaction: InteractionOptions,
    pub configure: ConfigureOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodeOptions {
    pub color: NodeColorOptions,
    pub font: FontOptions,
    pub shape_properties: ShapeProperties,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NodeColorOptions {
    pub border: Color,
    pub highlight: HighlightColor,
    pub hover: HoverColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HighlightColor {
    pub border: Color,
    pub background: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HoverColor {
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FontOptions {
    pub color: Color,
    pub size: u32,
    pub background: Color,
    pub stroke_width: u32,
    pub stroke_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShapeProperties {
    pub border_radius: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhysicsOptions {
    pub enabled: bool,
    pub barnes_hut: BarnesHut,
    /// Layout counts as stable once every node moves slower than this.
    pub min_velocity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BarnesHut {
    pub gravitational_constant: f64,
    pub spring_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InteractionOptions {
    pub hover: bool,
}

/// vis-network's configurator panel; `filter` picks which option groups it exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigureOptions {
    pub enabled: bool,
    pub filter: Vec<String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            nodes: NodeOptions {
                color: NodeColorOptions {
                    border: Color::Rgba(0, 0, 0, 1.0),
                    highlight: HighlightColor {
                        border: Color::Rgba(0, 0, 0, 1.0),
                        background: Color::Rgba(255, 199, 143, 1.0),
                    },
                    hover: HoverColor {
                        border: Color::Rgba(233, 96, 64, 1.0),
                    },
                },
                font: FontOptions {
                    color: Color::Rgba(0, 0, 0, 1.0),
                    size: 15,
                    background: Color::Rgba(0, 0, 0, 0.0),
                    stroke_width: 7,
                    stroke_color: Color::Rgba(255, 220, 136, 1.0),
                },
                shape_properties: ShapeProperties { border_radius: 5 },
                size: 30,
            },
            physics: PhysicsOptions {
                enabled: true,
                barnes_hut: BarnesHut {
                    gravitational_constant: -2000.0,
                    spring_length: 10.0,
                },
                min_velocity: 1.39,
            },
            interaction: InteractionOptions { hover: true },
            configure: ConfigureOptions {
                enabled: false,
                filter: vec!["physics".to_string()],
            },
        }
    }
}

pub fn apply_layout_options(graph: &mut VisualGraph, options: &LayoutOptions) {
    debug!(
        gravitational_constant = options.physics.barnes_hut.gravitational_constant,
        spring_length = options.physics.barnes_hut.spring_length,
        min_velocity = options.physics.min_velocity,
        "applying layout options"
    );
    graph.options = Some(options.clone());
}
