//! Snapshot types for the frontend renderer.
//!
//! These structs are serialized to JSON and handed to the canvas renderer,
//! which paints them without touching any geometry.

use serde::Serialize;

use crate::geometry::{BoundingBox, Size};
use crate::graph::{Edge, Node};

/// A node ready for the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub index: usize,
    pub name: String,
    pub color: String,
    pub centre_x: f64,
    pub centre_y: f64,
    pub radius: f64,
    pub bounds: BoundingBox,
    /// Neighbour indices, ascending. Link weights are inert and omitted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<usize>,
}

impl NodeOutput {
    pub fn from_node(node: &Node) -> NodeOutput {
        let mut links: Vec<usize> = node.links.keys().copied().collect();
        links.sort_unstable();
        NodeOutput {
            index: node.index,
            name: node.name.clone(),
            color: node.color.clone(),
            centre_x: node.centre_x,
            centre_y: node.centre_y,
            radius: node.radius,
            bounds: node.bounding_box,
            links,
        }
    }
}

/// An edge between two nodes.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub from_node: usize,
    pub to_node: usize,
}

impl EdgeOutput {
    pub fn from_edge(edge: &Edge) -> EdgeOutput {
        EdgeOutput {
            from_node: edge.from_node,
            to_node: edge.to_node,
        }
    }
}

/// Error information surfaced to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// The combined per-frame snapshot sent to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct GraphOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    pub canvas: Size,
    /// Indices still in motion; painted above the static layer.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub moving: Vec<usize>,
    pub settled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}
