// src/render/html.rs

//! Self-contained vis-network page.
//!
//! Nodes are placed at fixed coordinates from [`crate::dag::layout`] and
//! physics is disabled, so the page shows exactly the leveled layout.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::LayoutSection;
use crate::dag::{ConferenceGraph, PlacedNode};
use crate::errors::{ConfdagError, Result};
use crate::fs::FileSystem;
use crate::render::palette::Palette;

const VIS_NETWORK_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<script type="text/javascript" src="__VIS_JS__"></script>
<style type="text/css">
  html, body { margin: 0; height: 100%; }
  #mynetwork { width: 100%; height: 100%; border: 1px solid lightgray; }
</style>
</head>
<body>
<div id="mynetwork"></div>
<script type="text/javascript">
  var nodes = new vis.DataSet(__NODES__);
  var edges = new vis.DataSet(__EDGES__);
  var container = document.getElementById("mynetwork");
  var options = __OPTIONS__;
  var network = new vis.Network(container, { nodes: nodes, edges: edges }, options);
</script>
</body>
</html>
"#;

/// Styling knobs for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub font_size: u32,
    pub node_size: u32,
    /// Border width used to mark the next conference; `1` disables it.
    pub next_border_width: u32,
}

impl RenderOptions {
    pub fn from_layout(layout: &LayoutSection) -> Self {
        Self {
            font_size: layout.font_size,
            node_size: layout.node_size,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Submission opportunities".to_string(),
            font_size: 32,
            node_size: 30,
            next_border_width: 4,
        }
    }
}

#[derive(Debug, Serialize)]
struct VisNode<'a> {
    id: &'a str,
    label: &'a str,
    title: &'a str,
    x: i64,
    y: i64,
    level: usize,
    color: &'a str,
    #[serde(rename = "borderWidth")]
    border_width: u32,
}

#[derive(Debug, Serialize)]
struct VisEdge<'a> {
    from: &'a str,
    to: &'a str,
}

/// Render the page for a laid-out graph.
///
/// Every node's area must be in `palette`; the first unknown area aborts
/// with [`ConfdagError::UnknownArea`].
pub fn render_html(
    graph: &ConferenceGraph,
    placed: &[PlacedNode],
    palette: &Palette,
    options: &RenderOptions,
) -> Result<String> {
    let mut nodes = Vec::with_capacity(placed.len());
    for p in placed {
        let node = graph.node(p.index);
        let name = node.conference.name();
        nodes.push(VisNode {
            id: name,
            label: name,
            title: &node.info,
            x: p.x,
            y: p.y,
            level: p.level,
            color: palette.color_for(&node.conference)?,
            border_width: if graph.is_next(p.index) {
                options.next_border_width
            } else {
                1
            },
        });
    }

    let edges: Vec<VisEdge<'_>> = graph
        .edges()
        .into_iter()
        .map(|(from, to)| VisEdge { from, to })
        .collect();

    let vis_options = json!({
        "nodes": {
            "font": { "size": options.font_size, "bold": true },
            "size": options.node_size
        },
        "physics": { "enabled": false },
        "layout": { "hierarchical": false },
        "edges": {
            "width": 0.1,
            "arrows": { "to": { "enabled": true, "scaleFactor": 1.2 } },
            "selectionWidth": 10
        },
        "interaction": {
            "selectConnectedEdges": true,
            "multiselect": true,
            "hover": true,
            "hoverConnectedEdges": true
        }
    });

    let page = PAGE_TEMPLATE
        .replace("__TITLE__", &escape_html(&options.title))
        .replace("__VIS_JS__", VIS_NETWORK_JS)
        .replace("__NODES__", &script_json(&nodes)?)
        .replace("__EDGES__", &script_json(&edges)?)
        .replace("__OPTIONS__", &script_json(&vis_options)?);

    debug!(nodes = nodes.len(), edges = edges.len(), "rendered page");
    Ok(page)
}

/// Write the rendered page.
pub fn write_html(fs: &dyn FileSystem, path: &Path, html: &str) -> Result<()> {
    fs.write(path, html.as_bytes())?;
    info!(path = ?path, "wrote visualization");
    Ok(())
}

/// JSON safe to inline inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)
        .map_err(|e| ConfdagError::Render(format!("serializing graph data: {e}")))?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
