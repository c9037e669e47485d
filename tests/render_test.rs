use std::collections::BTreeSet;

use graphview::{Error, RenderConfig, Variant};
use pretty_assertions::assert_eq;
use serde_json::Value;

const BLUE_PAIR: &str =
    r#"{"vertices":[{"id":0,"depth":0},{"id":1,"depth":1}],"edges":[{"vertex_ids":[0,1],"color":"blue"}]}"#;

const KNIGHT: &str = r#"{
"vertices": [
{"id": 0, "edge_ids": [0, 1, 2], "depth": 0},
{"id": 1, "edge_ids": [0, 3], "depth": 1},
{"id": 2, "edge_ids": [1, 4], "depth": 1},
{"id": 3, "edge_ids": [2], "depth": 1},
{"id": 4, "edge_ids": [3, 4, 5], "depth": 2}
 ],
"edges": [
{"id": 0, "vertex_ids": [0, 1], "color": "gray"},
{"id": 1, "vertex_ids": [0, 2], "color": "gray"},
{"id": 2, "vertex_ids": [0, 3], "color": "gray"},
{"id": 3, "vertex_ids": [1, 4], "color": "green"},
{"id": 4, "vertex_ids": [2, 4], "color": "yellow"},
{"id": 5, "vertex_ids": [4, 4], "color": "red"}
]
}
"#;

fn dataset(html: &str, name: &str) -> Vec<Value> {
    let prefix = format!("var {name} = new vis.DataSet(");
    let line = html
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no {name} dataset in page"));
    let json = &line[prefix.len()..line.len() - ");".len()];
    match serde_json::from_str(json).unwrap() {
        Value::Array(items) => items,
        other => panic!("dataset is not an array: {other}"),
    }
}

fn options(html: &str) -> Value {
    let line = html
        .lines()
        .map(str::trim)
        .find(|l| l.starts_with("var options = "))
        .unwrap();
    serde_json::from_str(&line["var options = ".len()..line.len() - 1]).unwrap()
}

// =============================================================================
// Membership
// =============================================================================

#[test]
fn page_node_ids_match_vertex_ids() {
    let html = graphview::render_str(KNIGHT, &RenderConfig::default()).unwrap();
    let ids: BTreeSet<i64> = dataset(&html, "nodes")
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (0..=4).collect::<BTreeSet<_>>());
}

#[test]
fn page_edges_match_input_with_direction() {
    let html = graphview::render_str(KNIGHT, &RenderConfig::default()).unwrap();
    let pairs: Vec<(i64, i64)> = dataset(&html, "edges")
        .iter()
        .map(|e| (e["from"].as_i64().unwrap(), e["to"].as_i64().unwrap()))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (4, 4)]);
    assert!(dataset(&html, "edges").iter().all(|e| e["arrows"] == "to"));
}

#[test]
fn page_labels_are_depths() {
    let html = graphview::render_str(KNIGHT, &RenderConfig::default()).unwrap();
    let labels: Vec<String> = dataset(&html, "nodes")
        .iter()
        .map(|n| n["label"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["0", "1", "1", "1", "2"]);
}

// =============================================================================
// Styling
// =============================================================================

#[test]
fn page_root_color_only_on_vertex_zero() {
    let config = RenderConfig::default();
    let html = graphview::render_str(KNIGHT, &config).unwrap();
    for node in dataset(&html, "nodes") {
        let expected = if node["id"] == 0 {
            config.root_color.to_string()
        } else {
            config.node_color.to_string()
        };
        assert_eq!(node["color"].as_str().unwrap(), expected, "node {}", node["id"]);
    }
}

#[test]
fn page_edge_color_is_function_of_category() {
    let config = RenderConfig::preset(Variant::Styled);
    let html = graphview::render_str(KNIGHT, &config).unwrap();
    let colors: Vec<String> = dataset(&html, "edges")
        .iter()
        .map(|e| e["color"].as_str().unwrap().to_string())
        .collect();
    let gray = config.edge_palette.gray.to_string();
    assert_eq!(
        colors,
        vec![
            gray.clone(),
            gray.clone(),
            gray,
            config.edge_palette.green.to_string(),
            config.edge_palette.yellow.to_string(),
            config.edge_palette.red.to_string(),
        ]
    );
}

#[test]
fn page_plain_variant_single_edge_color() {
    let html = graphview::render_str(KNIGHT, &RenderConfig::preset(Variant::Plain)).unwrap();
    assert!(dataset(&html, "edges").iter().all(|e| e["color"] == "#000000"));
    let physics = &options(&html)["physics"];
    assert_eq!(physics["barnesHut"]["gravitationalConstant"], -2000.0);
    assert_eq!(physics["barnesHut"]["springLength"], 10.0);
    assert_eq!(physics["minVelocity"], 1.39);
}

#[test]
fn page_configurator_can_be_enabled() {
    let config = RenderConfig::from_json(
        r#"{"layout": {"configure": {"enabled": true}}}"#,
        Variant::Styled,
    )
    .unwrap();
    let html = graphview::render_str(BLUE_PAIR, &config).unwrap();
    let configure = &options(&html)["configure"];
    assert_eq!(configure["enabled"], true);
    assert_eq!(configure["filter"], serde_json::json!(["physics"]));
}

// =============================================================================
// Neighbors
// =============================================================================

#[test]
fn page_blue_pair_example() {
    let config = RenderConfig::default();
    let html = graphview::render_str(BLUE_PAIR, &config).unwrap();

    let nodes = dataset(&html, "nodes");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["id"], 0);
    assert_eq!(nodes[1]["id"], 1);

    let edges = dataset(&html, "edges");
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["from"], 0);
    assert_eq!(edges[0]["to"], 1);
    assert_eq!(edges[0]["color"].as_str().unwrap(), config.edge_palette.blue.to_string());

    assert_eq!(nodes[0]["title"], "Node 0 neighbors:<br>{1}");
    assert_eq!(nodes[0]["neighbor_count"], 1);
    assert_eq!(nodes[1]["title"], "Node 1 neighbors:<br>{}");
    assert_eq!(nodes[1]["neighbor_count"], 0);
}

#[test]
fn page_self_loop_counts_as_neighbor() {
    let html = graphview::render_str(KNIGHT, &RenderConfig::default()).unwrap();
    let nodes = dataset(&html, "nodes");
    assert_eq!(nodes[4]["title"], "Node 4 neighbors:<br>{4}");
    assert_eq!(nodes[0]["title"], "Node 0 neighbors:<br>{1, 2, 3}");
    assert_eq!(nodes[0]["neighbor_count"], 3);
}

// =============================================================================
// Determinism and failure
// =============================================================================

#[test]
fn page_rerender_is_byte_identical() {
    let config = RenderConfig::default();
    let first = graphview::render_str(KNIGHT, &config).unwrap();
    let second = graphview::render_str(KNIGHT, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn page_unknown_vertex_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    let output = dir.path().join("vis").join("graph.html");
    std::fs::write(
        &input,
        r#"{"vertices":[{"id":0,"depth":0}],"edges":[{"vertex_ids":[0,42],"color":"gray"}]}"#,
    )
    .unwrap();

    let err = graphview::render_file(&input, &output, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Reference { vertex: 42, .. }), "got: {err}");
    assert!(!output.exists(), "no page on failure");
    assert!(!output.parent().unwrap().exists(), "output dir untouched on failure");
}

#[test]
fn page_failure_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.json");
    let output = dir.path().join("graph.html");
    std::fs::write(&output, "previous").unwrap();
    std::fs::write(&input, "{\"vertices\": [").unwrap();

    let err = graphview::render_file(&input, &output, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got: {err}");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn page_missing_color_fallback_is_configurable() {
    let input = r#"{"vertices":[{"id":0,"depth":0},{"id":1,"depth":1}],"edges":[{"vertex_ids":[0,1]}]}"#;

    let err = graphview::render_str(input, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Schema(_)), "got: {err}");

    let config =
        RenderConfig::from_json(r#"{"missing_edge_color": "gray"}"#, Variant::Styled).unwrap();
    let html = graphview::render_str(input, &config).unwrap();
    assert_eq!(
        dataset(&html, "edges")[0]["color"].as_str().unwrap(),
        config.edge_palette.gray.to_string()
    );

    let plain = graphview::render_str(input, &RenderConfig::preset(Variant::Plain)).unwrap();
    assert_eq!(dataset(&plain, "edges").len(), 1);
}
